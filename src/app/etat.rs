//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (affichage, historique, mémoire, modes,
//! notification) et offrir les actions des touches sans aucune logique d’affichage.
//!
//! Contrats :
//! - L’évaluation est déléguée au noyau (tokenize + evaluate_tokens), une fois par action "=".
//! - Actions déterministes ; seule `calculate` journalise.
//! - Une erreur d’évaluation ne modifie pas l’affichage : elle produit une notification.

use tracing::{debug, info, warn};

use crate::app::format::format_resultat;
use crate::noyau::{evaluate_tokens, format_tokens, tokenize, AngleMode};
use crate::reglages::Reglages;

/// Touches d’opérateur : après un résultat, elles continuent le calcul au lieu de le remplacer.
pub const OPERATEURS: [&str; 5] = [" + ", " - ", " * ", " / ", " ^ "];

/// Préfixes de fonction effacés d’un bloc par la touche DEL.
const PREFIXES_FONCTION: [&str; 6] = ["sqrt(", "sin(", "cos(", "tan(", "log(", "ln("];

/// Message ponctuel (“toast”) affiché par la vue puis fermé.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub titre: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- affichage ---
    pub entree: String,     // expression en cours, ou texte du dernier résultat
    pub historique: String, // "<expression> ="
    pub est_resultat: bool, // l’affichage contient un résultat

    // --- mémoire (M+, M-, MR, MC) ---
    pub memoire: f64,

    // --- modes ---
    pub mode: AngleMode,
    pub scientifique: bool,

    // --- erreurs ---
    pub notification: Option<Notification>,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let reglages = reglages.bornes();
        Self {
            entree: String::new(),
            historique: String::new(),
            est_resultat: false,
            memoire: 0.0,
            mode: reglages.mode_initial,
            scientifique: reglages.scientifique_initial,
            notification: None,
            reglages,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    /// AC : efface l’affichage et l’historique (pas la mémoire, pas les modes).
    pub fn clear(&mut self) {
        self.entree.clear();
        self.historique.clear();
        self.est_resultat = false;
    }

    /// Ajoute un morceau d’expression ("7", " + ", "sin(", "pi"...).
    ///
    /// Après un résultat : un opérateur continue le calcul, tout le reste repart de zéro.
    pub fn input(&mut self, morceau: &str) {
        if self.est_resultat {
            if !OPERATEURS.contains(&morceau) {
                self.entree.clear();
            }
            self.est_resultat = false;
        }
        self.entree.push_str(morceau);
    }

    /// DEL : efface le dernier “symbole”.
    /// - après un résultat : tout (comme AC)
    /// - " op " : les 3 caractères d’un coup
    /// - "sin(" & co : la fonction entière
    /// - sinon : un caractère
    pub fn backspace(&mut self) {
        if self.est_resultat {
            self.clear();
            return;
        }

        if self.entree.ends_with(' ') {
            for _ in 0..3 {
                self.entree.pop();
            }
            return;
        }

        if self.entree.ends_with('(') {
            if let Some(pat) = PREFIXES_FONCTION
                .iter()
                .find(|p| self.entree.ends_with(*p))
            {
                let garde = self.entree.len() - pat.len();
                self.entree.truncate(garde);
                return;
            }
        }

        self.entree.pop();
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : évalue l’affichage via le noyau.
    /// Sans effet si l’affichage est vide ou contient déjà un résultat.
    pub fn calculate(&mut self) {
        if self.entree.trim().is_empty() || self.est_resultat {
            return;
        }

        let resultat = tokenize(&self.entree).and_then(|jetons| {
            debug!(jetons = %format_tokens(&jetons), mode = %self.mode, "évaluation");
            evaluate_tokens(&jetons, self.mode)
        });

        match resultat {
            Ok(v) => {
                debug!(expression = %self.entree, resultat = v, "résultat");
                self.historique = format!("{} =", self.entree);
                self.entree = self.format(v);
                self.est_resultat = true;
            }
            Err(e) => {
                warn!(expression = %self.entree, mode = %self.mode, erreur = %e, "évaluation refusée");
                self.notification = Some(Notification {
                    titre: e.titre().to_string(),
                    description: e.to_string(),
                });
            }
        }
    }

    /// "+/-" : change le signe du résultat, ou enveloppe l’expression dans `negate(...)`.
    pub fn toggle_sign(&mut self) {
        if self.est_resultat {
            if let Some(v) = self.valeur_affichee() {
                self.entree = self.format(-v);
            }
            return;
        }
        self.entree = format!("negate({})", self.entree);
    }

    /* ------------------------ Modes ------------------------ */

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.bascule();
        info!(mode = %self.mode, "mode d’angle");
    }

    pub fn toggle_scientifique(&mut self) {
        self.scientifique = !self.scientifique;
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memoire_clear(&mut self) {
        self.memoire = 0.0;
    }

    /// MR : insère la valeur mémorisée (remplace un résultat affiché).
    pub fn memoire_rappel(&mut self) {
        let texte = self.format(self.memoire);
        self.input(&texte);
        self.est_resultat = false;
    }

    /// M+ : n’ajoute que la valeur d’un résultat (0 pendant la saisie).
    pub fn memoire_ajout(&mut self) {
        self.memoire += self.valeur_pour_memoire();
    }

    pub fn memoire_soustraction(&mut self) {
        self.memoire -= self.valeur_pour_memoire();
    }

    /* ------------------------ Notification ------------------------ */

    pub fn fermer_notification(&mut self) {
        self.notification = None;
    }

    /* ------------------------ Outils ------------------------ */

    fn format(&self, v: f64) -> String {
        format_resultat(
            v,
            self.reglages.longueur_max_affichage,
            self.reglages.chiffres_exponentiel,
        )
    }

    fn valeur_affichee(&self) -> Option<f64> {
        self.entree.trim().parse::<f64>().ok()
    }

    fn valeur_pour_memoire(&self) -> f64 {
        if self.est_resultat {
            self.valeur_affichee().unwrap_or(0.0)
        } else {
            0.0
        }
    }
}
