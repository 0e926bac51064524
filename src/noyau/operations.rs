// src/noyau/operations.rs
//
// Sémantique des opérateurs et fonctions (f64)
// --------------------------------------------
// Chaque application renvoie une valeur FINIE ou une erreur :
// - NaN  => Domain (argument fini hors domaine réel, ex: (-8)^(1/3))
// - ±inf, ou NaN venu d’un argument infini => NonFiniteResult (ex: 10^400)

use num_traits::ToPrimitive;

use super::erreur::EvaluationError;
use super::jetons::{Fonction, Operateur};
use super::trig::{trig, AngleMode, TrigFn};

/// Au-delà, n! dépasse f64::MAX.
const FACTORIELLE_MAX: u64 = 170;

/// Opérateur binaire : `a op b` (b = opérande dépilé en premier).
pub fn applique_binaire(
    op: Operateur,
    a: f64,
    b: f64,
    pos: usize,
) -> Result<f64, EvaluationError> {
    // un opérande infini ne vient que d’un dépassement déjà survenu
    if !a.is_finite() || !b.is_finite() {
        return Err(EvaluationError::NonFiniteResult);
    }
    let v = match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            if b == 0.0 {
                return Err(EvaluationError::DivisionByZero { position: pos });
            }
            a / b
        }
        Operateur::Puissance => a.powf(b),
    };
    fini(v, op.symbole(), a)
}

pub fn applique_fonction(f: Fonction, x: f64, mode: AngleMode) -> Result<f64, EvaluationError> {
    let v = match f {
        Fonction::Sin => trig(TrigFn::Sin, x, mode),
        Fonction::Cos => trig(TrigFn::Cos, x, mode),
        Fonction::Tan => trig(TrigFn::Tan, x, mode),
        Fonction::Log | Fonction::Ln if x <= 0.0 => {
            return Err(EvaluationError::domain(f.nom(), x));
        }
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        Fonction::Sqrt if x < 0.0 => return Err(EvaluationError::domain(f.nom(), x)),
        Fonction::Sqrt => x.sqrt(),
        Fonction::Negate => -x,
    };
    fini(v, f.nom(), x)
}

/// n! par multiplication itérative (0! = 1).
pub fn factorielle(n: f64) -> Result<f64, EvaluationError> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(EvaluationError::domain("factorielle", n));
    }
    if n > FACTORIELLE_MAX as f64 {
        return Err(EvaluationError::NonFiniteResult);
    }
    let n = n
        .to_u64()
        .ok_or_else(|| EvaluationError::domain("factorielle", n))?;

    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= k as f64;
    }
    Ok(acc)
}

pub fn pourcentage(n: f64) -> f64 {
    n / 100.0
}

fn fini(v: f64, operation: &str, argument: f64) -> Result<f64, EvaluationError> {
    if v.is_nan() && argument.is_finite() {
        Err(EvaluationError::domain(operation, argument))
    } else if !v.is_finite() {
        Err(EvaluationError::NonFiniteResult)
    } else {
        Ok(v)
    }
}
