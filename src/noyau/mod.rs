//! Noyau — évaluateur d’expressions
//!
//! Organisation interne :
//! - erreur.rs     : EvaluationError (taxonomie fermée)
//! - jetons.rs     : tokenisation (+ positions)
//! - trig.rs       : mode d’angle + sin/cos/tan
//! - operations.rs : opérateurs, fonctions, factorielle, pourcentage
//! - eval.rs       : shunting-yard (deux piles) + point d’entrée
//!
//! Fonction pure : pas d’état global, pas de journalisation, pas d’affichage.

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operations;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{evaluate, evaluate_tokens};
pub use jetons::{format_tokens, tokenize};
pub use trig::AngleMode;
