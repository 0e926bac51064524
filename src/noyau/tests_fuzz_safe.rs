//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : Ok(v) => v fini ; sinon une erreur typée, jamais de panique

use std::time::{Duration, Instant};

use super::{evaluate, AngleMode, EvaluationError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(12);
    if rng.coin() {
        format!("{a}")
    } else {
        format!("{a}.{}", rng.pick(100))
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "pi".to_string(),
        4 => "e".to_string(),
        _ => format!("{}!", rng.pick(8)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a} + {})", gen_expr(rng, depth - 1)),
        2 => format!("{a} - {}", gen_expr(rng, depth - 1)),
        3 => format!("{a} * {}", gen_expr(rng, depth - 1)),
        4 => format!("({a}) / ({})", gen_expr(rng, depth - 1)),
        5 => format!("({a}) ^ {}", rng.pick(4)),
        6 => format!("-({a})"),
        7 => format!("sin({a})"),
        8 => format!("cos({a})"),
        9 => format!("sqrt({a})"),
        10 => format!("ln({a})"),
        _ => format!("({a})%"),
    }
}

/// Abîme une expression valide (suppression / insertion d’un caractère).
fn abime(rng: &mut Rng, expr: &str) -> String {
    let mut chars: Vec<char> = expr.chars().collect();
    if chars.is_empty() {
        return String::new();
    }
    let i = rng.pick(chars.len() as u32) as usize;
    if rng.coin() {
        chars.remove(i);
    } else {
        let c = ['(', ')', '+', '*', '!', '%', '-', '^'][rng.pick(8) as usize];
        chars.insert(i, c);
    }
    chars.into_iter().collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_resultats_finis_ou_erreurs_typees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.coin() {
            AngleMode::Degrees
        } else {
            AngleMode::Radians
        };

        match evaluate(&expr, mode) {
            Ok(v) => {
                assert!(v.is_finite(), "expr={expr:?} v={v}");
                // déterminisme
                assert_eq!(evaluate(&expr, mode), Ok(v));
                seen_ok += 1;
            }
            Err(e) => {
                // expressions bien formées : jamais d’erreur de syntaxe ni de jeton
                assert!(
                    !matches!(
                        e,
                        EvaluationError::Syntax { .. } | EvaluationError::UnknownToken { .. }
                    ),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_entrees_abimees_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..300 {
        budget(t0, max);

        let propre = gen_expr(&mut rng, 3);
        let expr = abime(&mut rng, &propre);
        if let Ok(v) = evaluate(&expr, AngleMode::Degrees) {
            assert!(v.is_finite(), "expr={expr:?} v={v}");
        }
    }
}

#[test]
fn fuzz_safe_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 4000].join(" + ");
    let v = evaluate(&expr, AngleMode::Degrees).unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    assert_eq!(v, 2000.0);
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    // les piles sont des Vec : pas de récursion, pas de débordement de pile
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(evaluate(&expr, AngleMode::Radians), Ok(1.0));

    let expr = format!("{}4{}", "sqrt(".repeat(50), ")".repeat(50));
    let v = evaluate(&expr, AngleMode::Radians).unwrap();
    assert!((v - 1.0).abs() < 1e-9);
}
