// src/noyau/trig.rs
//
// Trig selon le mode d’angle
// --------------------------
// - Degrees : l’argument est converti en radians avant sin/cos/tan
// - Radians : appliqué tel quel
// Le mode ne touche QUE sin/cos/tan (log, ln, sqrt... l’ignorent).

use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleMode {
    #[default]
    Degrees,
    Radians,
}

impl AngleMode {
    pub fn bascule(self) -> Self {
        match self {
            Self::Degrees => Self::Radians,
            Self::Radians => Self::Degrees,
        }
    }

    fn en_radians(self, x: f64) -> f64 {
        match self {
            Self::Degrees => x.to_radians(),
            Self::Radians => x,
        }
    }
}

impl fmt::Display for AngleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        })
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TrigFn {
    Sin,
    Cos,
    Tan,
}

pub fn trig(f: TrigFn, x: f64, mode: AngleMode) -> f64 {
    let r = mode.en_radians(x);
    match f {
        TrigFn::Sin => r.sin(),
        TrigFn::Cos => r.cos(),
        TrigFn::Tan => r.tan(),
    }
}
