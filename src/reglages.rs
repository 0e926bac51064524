//! src/reglages.rs
//!
//! Réglages de l’application (valeurs par défaut centralisées).
//!
//! Le noyau n’en dépend pas : il reçoit le mode d’angle à chaque appel.

use crate::noyau::AngleMode;

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice scientifique";

/// Au-delà de cette longueur, un résultat s’affiche en notation exponentielle.
const LONGUEUR_MAX_DEFAUT: usize = 15;

/// Chiffres après la virgule en notation exponentielle.
const CHIFFRES_EXPO_DEFAUT: usize = 9;

/// Garde-fou : f64 n’a pas plus de 17 chiffres significatifs.
const CHIFFRES_EXPO_MAX: usize = 16;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub mode_initial: AngleMode,
    pub scientifique_initial: bool,
    pub longueur_max_affichage: usize,
    pub chiffres_exponentiel: usize,
    pub taille_fenetre: [f32; 2],
    pub taille_min_fenetre: [f32; 2],
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            mode_initial: AngleMode::Degrees,
            scientifique_initial: false,
            longueur_max_affichage: LONGUEUR_MAX_DEFAUT,
            chiffres_exponentiel: CHIFFRES_EXPO_DEFAUT,
            taille_fenetre: [420.0, 680.0],
            taille_min_fenetre: [340.0, 560.0],
        }
    }
}

impl Reglages {
    /// Borne les valeurs (anti-abus) : longueur >= 1, chiffres <= 16.
    pub fn bornes(mut self) -> Self {
        self.longueur_max_affichage = self.longueur_max_affichage.max(1);
        self.chiffres_exponentiel = self.chiffres_exponentiel.min(CHIFFRES_EXPO_MAX);
        self
    }
}
