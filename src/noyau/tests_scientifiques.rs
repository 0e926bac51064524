//! Tests scientifiques : propriétés attendues de l’évaluateur.
//!
//! - arithmétique avec précédence
//! - négation unaire + fonctions + parenthèses
//! - factorielle / pourcentage
//! - sensibilité au mode d’angle
//! - ré-évaluation du texte d’un résultat (idempotence)
//! - entrées malformées : erreur typée, jamais de panique

use super::{evaluate, AngleMode, EvaluationError};

const TOL: f64 = 1e-9;

fn eval_ok(expr: &str, mode: AngleMode) -> f64 {
    evaluate(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_approx(expr: &str, mode: AngleMode, attendu: f64) {
    let v = eval_ok(expr, mode);
    assert!(
        (v - attendu).abs() < TOL,
        "expr={expr:?} mode={mode}: {v} != {attendu}"
    );
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_precedence_standard() {
    let d = AngleMode::Degrees;
    assert_eq!(eval_ok("2 + 3 * 4", d), 14.0);
    assert_eq!(eval_ok("(2 + 3) * 4", d), 20.0);
    assert_eq!(eval_ok("1 + 2 * 3 - 4 / 2", d), 5.0);
    assert_eq!(eval_ok("((1 + 2) * (3 + 4))", d), 21.0);
    assert_approx("0.1 + 0.2", d, 0.3);
}

#[test]
fn sci_division_par_zero_jamais_infinie() {
    assert!(matches!(
        evaluate("5 / 0", AngleMode::Degrees),
        Err(EvaluationError::DivisionByZero { .. })
    ));
    assert!(matches!(
        evaluate("0 / 0", AngleMode::Radians),
        Err(EvaluationError::DivisionByZero { .. })
    ));
}

#[test]
fn sci_non_fini() {
    assert_eq!(
        evaluate("10 ^ 400", AngleMode::Degrees),
        Err(EvaluationError::NonFiniteResult)
    );
    assert_eq!(
        evaluate("171!", AngleMode::Degrees),
        Err(EvaluationError::NonFiniteResult)
    );
}

/* ------------------------ Négation + fonctions ------------------------ */

#[test]
fn sci_negation_fonctions_parentheses() {
    assert_eq!(eval_ok("-(3 + 4)", AngleMode::Degrees), -7.0);
    assert_approx("sin(-30)", AngleMode::Degrees, -0.5);
    assert_approx("-sin(30)", AngleMode::Degrees, -0.5);
    assert_approx("negate(sqrt(16)) + 1", AngleMode::Degrees, -3.0);
}

#[test]
fn sci_logarithmes_et_constantes() {
    let d = AngleMode::Degrees;
    assert_approx("log(100)", d, 2.0);
    assert_approx("ln(e)", d, 1.0);
    assert_approx("2 * pi", d, std::f64::consts::TAU);
    assert_approx("e ^ 2", d, std::f64::consts::E.powi(2));
}

#[test]
fn sci_domaines() {
    for expr in ["sqrt(-1)", "log(0)", "ln(-5)", "(-8) ^ (1/3)"] {
        assert!(
            matches!(
                evaluate(expr, AngleMode::Radians),
                Err(EvaluationError::Domain { .. })
            ),
            "expr={expr:?}"
        );
    }
}

/* ------------------------ Factorielle / pourcentage ------------------------ */

#[test]
fn sci_factorielle() {
    let d = AngleMode::Degrees;
    assert_eq!(eval_ok("5!", d), 120.0);
    assert_eq!(eval_ok("0!", d), 1.0);
    assert_eq!(eval_ok("(2 + 1)!", d), 6.0);
    for expr in ["(-1)!", "2.5!"] {
        assert!(
            matches!(evaluate(expr, d), Err(EvaluationError::Domain { .. })),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_pourcentage_local_a_l_operande() {
    let d = AngleMode::Degrees;
    assert_eq!(eval_ok("50%", d), 0.5);
    // 10% vaut 0.1 avant le +
    assert_approx("200 + 10%", d, 200.1);
}

/* ------------------------ Mode d’angle ------------------------ */

#[test]
fn sci_mode_angle() {
    assert_eq!(eval_ok("cos(0)", AngleMode::Degrees), 1.0);
    assert_eq!(eval_ok("cos(0)", AngleMode::Radians), 1.0);
    assert_approx("sin(90)", AngleMode::Degrees, 1.0);
    assert_approx("sin(90)", AngleMode::Radians, 0.893_996_663_6);
    assert_approx("tan(45)", AngleMode::Degrees, 1.0);
    assert_approx("cos(pi)", AngleMode::Radians, -1.0);
    // le mode ne touche pas log/sqrt
    assert_eq!(
        eval_ok("sqrt(4)", AngleMode::Degrees),
        eval_ok("sqrt(4)", AngleMode::Radians)
    );
}

/* ------------------------ Idempotence ------------------------ */

#[test]
fn sci_reevaluation_du_texte_resultat() {
    let exprs = [
        "2 + 3 * 4",
        "1 / 3",
        "-(3 + 4)",
        "sqrt(2)",
        "sin(30)",
        "2 ^ 0.5 * pi",
        "170!",
        "1 / 7 / 1000000",
    ];
    for expr in exprs {
        let v = eval_ok(expr, AngleMode::Degrees);
        let texte = format!("{v}");
        let w = eval_ok(&texte, AngleMode::Degrees);
        assert_eq!(v, w, "expr={expr:?} texte={texte:?}");
    }
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn sci_malformees_syntaxe() {
    for expr in ["2 + + ", "((", "", ")(", "3 +", "sin()", "sin 30", "1 2"] {
        assert!(
            matches!(
                evaluate(expr, AngleMode::Degrees),
                Err(EvaluationError::Syntax { .. })
            ),
            "expr={expr:?}"
        );
    }
}

#[test]
fn sci_jetons_inconnus() {
    for expr in ["foo(2)", "2 # 3", "2 & 3", "x + 1", "."] {
        assert!(
            matches!(
                evaluate(expr, AngleMode::Degrees),
                Err(EvaluationError::UnknownToken { .. })
            ),
            "expr={expr:?}"
        );
    }
}
