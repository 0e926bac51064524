//! Noyau — évaluation (shunting-yard direct)
//!
//! texte -> jetons -> deux piles (valeurs, opérateurs) -> f64
//!
//! Pas d’AST ni de RPN intermédiaire : chaque opérateur est appliqué dès qu’il
//! sort de la pile. Les deux piles sont locales à l’appel (aucun état partagé).

use super::erreur::EvaluationError;
use super::jetons::{tokenize, Fonction, Jeton, Operateur, Tok};
use super::operations::{applique_binaire, applique_fonction, factorielle, pourcentage};
use super::trig::AngleMode;

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Entree {
    ParenG,
    Binaire(Operateur),
    Negation,
    Fonction(Fonction),
}

#[derive(Clone, Copy, Debug)]
struct EntreePile {
    entree: Entree,
    pos: usize,
}

/// Précédence ; None pour '(' et les fonctions (jamais dépilées par comparaison).
fn precedence(e: Entree) -> Option<u8> {
    match e {
        Entree::Binaire(Operateur::Plus | Operateur::Moins) => Some(1),
        Entree::Binaire(Operateur::Fois | Operateur::Divise) => Some(2),
        Entree::Binaire(Operateur::Puissance) => Some(3),
        Entree::Negation => Some(4),
        Entree::ParenG | Entree::Fonction(_) => None,
    }
}

/// API publique : évalue une expression dans le mode d’angle donné.
///
/// Atomique : un nombre fini, ou une erreur typée.
pub fn evaluate(expression: &str, mode: AngleMode) -> Result<f64, EvaluationError> {
    let jetons = tokenize(expression)?;
    evaluate_tokens(&jetons, mode)
}

/// Shunting-yard sur une suite de jetons déjà produite par `tokenize`.
pub fn evaluate_tokens(jetons: &[Jeton], mode: AngleMode) -> Result<f64, EvaluationError> {
    let mut valeurs: Vec<f64> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<EntreePile> = Vec::with_capacity(jetons.len());

    for (i, jeton) in jetons.iter().enumerate() {
        let pos = jeton.pos;

        match jeton.tok {
            Tok::Number(v) => valeurs.push(v),

            Tok::LeftParen => ops.push(EntreePile {
                entree: Entree::ParenG,
                pos,
            }),

            Tok::Function(f) => {
                // une fonction sans '(' donnerait un résultat faux en silence
                if !matches!(jetons.get(i + 1).map(|j| j.tok), Some(Tok::LeftParen)) {
                    return Err(EvaluationError::syntax(
                        format!("'(' attendue après {}", f.nom()),
                        Some(pos),
                    ));
                }
                ops.push(EntreePile {
                    entree: Entree::Fonction(f),
                    pos,
                });
            }

            Tok::RightParen => {
                // dépile jusqu’à '('
                loop {
                    let top = ops.pop().ok_or_else(|| {
                        EvaluationError::syntax("parenthèse fermante sans ouvrante", Some(pos))
                    })?;
                    if matches!(top.entree, Entree::ParenG) {
                        break;
                    }
                    applique(top, &mut valeurs, mode)?;
                }

                // fonction collée à la parenthèse : appliquée au résultat du bloc
                if let Some(top) = ops.last().copied() {
                    if matches!(top.entree, Entree::Fonction(_)) {
                        ops.pop();
                        applique(top, &mut valeurs, mode)?;
                    }
                }
            }

            Tok::Factorial => {
                let n = depile(&mut valeurs, pos)?;
                valeurs.push(factorielle(n)?);
            }

            Tok::Percent => {
                let n = depile(&mut valeurs, pos)?;
                valeurs.push(pourcentage(n));
            }

            Tok::Operator(op) => {
                let unaire = op == Operateur::Moins && suit_position_unaire(jetons, i);

                if unaire {
                    // opérateur préfixe : rien à réduire avant lui ("--3" = 3)
                    ops.push(EntreePile {
                        entree: Entree::Negation,
                        pos,
                    });
                    continue;
                }

                let entree = Entree::Binaire(op);
                let p_tok = precedence(entree);

                while let Some(top) = ops.last().copied() {
                    let doit_pop = match (precedence(top.entree), p_tok) {
                        (Some(p_top), Some(p)) => p_top >= p,
                        _ => false,
                    };
                    if !doit_pop {
                        break;
                    }
                    ops.pop();
                    applique(top, &mut valeurs, mode)?;
                }

                ops.push(EntreePile { entree, pos });
            }
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top.entree, Entree::ParenG) {
            return Err(EvaluationError::syntax("parenthèse non fermée", Some(top.pos)));
        }
        applique(top, &mut valeurs, mode)?;
    }

    match valeurs.as_slice() {
        [v] if v.is_finite() => Ok(*v),
        [_] => Err(EvaluationError::NonFiniteResult),
        [] => Err(EvaluationError::syntax("expression vide", None)),
        _ => Err(EvaluationError::syntax(
            "opérateur manquant entre deux valeurs",
            None,
        )),
    }
}

/// '-' est unaire en tête, ou juste après ( + - * / ^.
fn suit_position_unaire(jetons: &[Jeton], i: usize) -> bool {
    match i.checked_sub(1).map(|k| jetons[k].tok) {
        None => true,
        Some(Tok::LeftParen) | Some(Tok::Operator(_)) => true,
        Some(_) => false,
    }
}

fn depile(valeurs: &mut Vec<f64>, pos: usize) -> Result<f64, EvaluationError> {
    valeurs
        .pop()
        .ok_or_else(|| EvaluationError::syntax("opérande manquant", Some(pos)))
}

/// Applique une entrée dépilée (binaire : 2 opérandes, sinon 1) et empile le résultat.
fn applique(
    top: EntreePile,
    valeurs: &mut Vec<f64>,
    mode: AngleMode,
) -> Result<(), EvaluationError> {
    let v = match top.entree {
        Entree::Binaire(op) => {
            let b = depile(valeurs, top.pos)?;
            let a = depile(valeurs, top.pos)?;
            applique_binaire(op, a, b, top.pos)?
        }
        Entree::Negation => {
            let x = depile(valeurs, top.pos)?;
            applique_fonction(Fonction::Negate, x, mode)?
        }
        Entree::Fonction(f) => {
            let x = depile(valeurs, top.pos)?;
            applique_fonction(f, x, mode)?
        }
        Entree::ParenG => {
            return Err(EvaluationError::syntax("parenthèse non fermée", Some(top.pos)));
        }
    };
    valeurs.push(v);
    Ok(())
}
