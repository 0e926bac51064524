// src/noyau/jetons.rs

use std::f64::consts::{E, PI};
use std::fmt;

use super::erreur::EvaluationError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^
}

impl Operateur {
    pub fn symbole(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Moins => "-",
            Self::Fois => "*",
            Self::Divise => "/",
            Self::Puissance => "^",
        }
    }
}

/// Fonctions unaires reconnues.
/// `Negate` n’a pas de touche : l’action “+/-” de l’UI l’insère sous la forme `negate(...)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
    Negate,
}

impl Fonction {
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        let f = match nom {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "log" => Self::Log,
            "ln" => Self::Ln,
            "sqrt" => Self::Sqrt,
            "negate" => Self::Negate,
            _ => return None,
        };
        Some(f)
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Negate => "negate",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Number(f64),
    Operator(Operateur),
    Function(Fonction),
    LeftParen,
    RightParen,
    Factorial, // !
    Percent,   // %
}

/// Un jeton + sa position (index de caractère dans l’entrée).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jeton {
    pub tok: Tok,
    pub pos: usize,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Number(v) => write!(f, "{v}"),
            Tok::Operator(op) => f.write_str(op.symbole()),
            Tok::Function(fun) => f.write_str(fun.nom()),
            Tok::LeftParen => f.write_str("("),
            Tok::RightParen => f.write_str(")"),
            Tok::Factorial => f.write_str("!"),
            Tok::Percent => f.write_str("%"),
        }
    }
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 1.2e-7)
/// - opérateurs + - * / ^ (et × ÷ − en alias)
/// - parenthèses ( )
/// - postfixes ! (factorielle) et % (pourcentage)
/// - constantes pi / π et e (jetons à part entière, jamais de substitution de texte)
/// - fonctions sin cos tan log ln sqrt negate (insensible à la casse), √ = sqrt
///
/// Tout le reste est refusé (UnknownToken) : pas de caractère ignoré en silence.
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, EvaluationError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];
        let pos = i;

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LeftParen),
            ')' => Some(Tok::RightParen),
            '!' => Some(Tok::Factorial),
            '%' => Some(Tok::Percent),
            '+' => Some(Tok::Operator(Operateur::Plus)),
            '-' | '−' => Some(Tok::Operator(Operateur::Moins)),
            '*' | '×' => Some(Tok::Operator(Operateur::Fois)),
            '/' | '÷' => Some(Tok::Operator(Operateur::Divise)),
            '^' => Some(Tok::Operator(Operateur::Puissance)),
            'π' => Some(Tok::Number(PI)),
            '√' => Some(Tok::Function(Fonction::Sqrt)),
            _ => None,
        };
        if let Some(tok) = simple {
            out.push(Jeton { tok, pos });
            i += 1;
            continue;
        }

        // Mots : constantes ou fonctions
        if c.is_ascii_alphabetic() {
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[pos..i].iter().collect();
            let w = mot.to_ascii_lowercase();

            let tok = match w.as_str() {
                "pi" => Tok::Number(PI),
                "e" => Tok::Number(E),
                _ => match Fonction::depuis_nom(&w) {
                    Some(f) => Tok::Function(f),
                    None => {
                        return Err(EvaluationError::UnknownToken {
                            fragment: mot,
                            position: pos,
                        })
                    }
                },
            };
            out.push(Jeton { tok, pos });
            continue;
        }

        // Nombre : \d+(\.\d*)? | \.\d+ , exposant optionnel
        if c.is_ascii_digit() || (c == '.' && chiffre_a(&chars, i + 1)) {
            i = fin_nombre(&chars, i);
            let txt: String = chars[pos..i].iter().collect();
            let v = txt
                .parse::<f64>()
                .map_err(|_| EvaluationError::UnknownToken {
                    fragment: txt.clone(),
                    position: pos,
                })?;
            // "1e400" : dépassement dès la lecture
            if !v.is_finite() {
                return Err(EvaluationError::NonFiniteResult);
            }
            out.push(Jeton {
                tok: Tok::Number(v),
                pos,
            });
            continue;
        }

        return Err(EvaluationError::UnknownToken {
            fragment: c.to_string(),
            position: pos,
        });
    }

    Ok(out)
}

fn chiffre_a(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.is_ascii_digit())
}

/// Index juste après le littéral numérique commençant en `i`.
fn fin_nombre(chars: &[char], mut i: usize) -> usize {
    while chiffre_a(chars, i) {
        i += 1;
    }
    if chars.get(i) == Some(&'.') {
        i += 1;
        while chiffre_a(chars, i) {
            i += 1;
        }
    }

    // Exposant seulement s’il est complet : "2e5", "1.5e-3". Sinon "2e" = 2 puis la constante e.
    if matches!(chars.get(i), Some('e') | Some('E')) {
        let mut j = i + 1;
        if matches!(chars.get(j), Some('+') | Some('-')) {
            j += 1;
        }
        if chiffre_a(chars, j) {
            while chiffre_a(chars, j) {
                j += 1;
            }
            // "2e5x" : la suite reste un mot à part
            return j;
        }
    }

    i
}

/// Format utilitaire (debug) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Jeton]) -> String {
    tokens
        .iter()
        .map(|j| j.tok.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
