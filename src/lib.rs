//! Calculatrice scientifique
//!
//! - `noyau`    : évaluateur d’expressions (fonction pure texte + mode d’angle -> f64)
//! - `app`      : état de la calculatrice + vue egui
//! - `reglages` : valeurs par défaut de l’application

pub mod app;
pub mod noyau;
pub mod reglages;

pub use noyau::{evaluate, AngleMode, EvaluationError};
