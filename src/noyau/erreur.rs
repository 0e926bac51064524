// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// Une évaluation échoue avec UNE erreur typée, jamais un résultat partiel.
// Les positions sont des index de caractères (0 = premier caractère de l’entrée).

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvaluationError {
    /// Parenthèses déséquilibrées, opérande manquant, reste sur les piles, entrée vide.
    #[error("erreur de syntaxe: {reason}{}", fmt_position(.position))]
    Syntax {
        reason: String,
        position: Option<usize>,
    },

    /// Argument hors du domaine réel de l’opération.
    #[error("hors domaine: {operation}({value})")]
    Domain { operation: String, value: f64 },

    #[error("division par zéro (position {position})")]
    DivisionByZero { position: usize },

    /// Résultat (final ou intermédiaire) infini.
    #[error("résultat non fini")]
    NonFiniteResult,

    #[error("jeton inconnu '{fragment}' (position {position})")]
    UnknownToken { fragment: String, position: usize },
}

impl EvaluationError {
    pub(crate) fn syntax(reason: impl Into<String>, position: Option<usize>) -> Self {
        Self::Syntax {
            reason: reason.into(),
            position,
        }
    }

    pub(crate) fn domain(operation: impl Into<String>, value: f64) -> Self {
        Self::Domain {
            operation: operation.into(),
            value,
        }
    }

    /// Titre court pour l’affichage (notification côté UI).
    pub fn titre(&self) -> &'static str {
        match self {
            Self::Syntax { .. } => "Expression invalide",
            Self::Domain { .. } => "Hors domaine",
            Self::DivisionByZero { .. } => "Division par zéro",
            Self::NonFiniteResult => "Calcul invalide",
            Self::UnknownToken { .. } => "Symbole inconnu",
        }
    }
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(" (position {p})"),
        None => String::new(),
    }
}
