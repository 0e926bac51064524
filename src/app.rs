// src/app.rs
//
// Module App (racine)
// -------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + format.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)

pub mod etat;
pub mod format;
pub mod vue;

// Ré-export pratique : `use calculatrice_sci::app::AppCalc;`
pub use etat::{AppCalc, Notification};

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ESC = AC (la vue gère Enter/Backspace avec le reste du clavier)
        let esc = ctx.input(|i| i.key_pressed(egui::Key::Escape));
        if esc {
            self.clear();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
