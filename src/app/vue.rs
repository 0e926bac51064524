// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : mode (deg/rad, en scientifique), historique, valeur (police réduite si trop longue)
// - Pavé standard 4 colonnes + DEL / 00
// - Pavé scientifique (fonctions, mémoire, deg/rad) si le mode scientifique est actif
// - Clavier : chiffres/opérateurs tapés, Enter évalue, Backspace efface
// - Erreur : notification fermable (le “toast”)

use eframe::egui;

use super::etat::AppCalc;

/// Taille de police de l’écran, et plancher quand la valeur déborde.
const POLICE_ECRAN: f32 = 56.0;
const POLICE_ECRAN_MIN: f32 = 22.0;

const TOUCHE: [f32; 2] = [72.0, 52.0];
const TOUCHE_SCI: [f32; 2] = [56.0, 40.0];

/// Touches scientifiques : (libellé, texte inséré).
const FONCTIONS_SCI: [(&str, &str); 13] = [
    ("(", "("),
    (")", ")"),
    ("x!", "!"),
    ("x²", " ^ 2"),
    ("xʸ", " ^ "),
    ("√", "sqrt("),
    ("ln", "ln("),
    ("log", "log("),
    ("sin", "sin("),
    ("cos", "cos("),
    ("tan", "tan("),
    ("e", "e"),
    ("π", "pi"),
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.clavier(ui);

        self.ui_ecran(ui);
        ui.add_space(10.0);

        if self.scientifique {
            self.ui_scientifique(ui);
            ui.add_space(10.0);
        }

        self.ui_pave(ui);
        self.ui_notification(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(12))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.horizontal(|ui| {
                    if self.scientifique {
                        ui.monospace(self.mode.to_string().to_uppercase());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.weak(&self.historique);
                    });
                });

                let valeur = if self.entree.is_empty() {
                    "0"
                } else {
                    self.entree.as_str()
                };
                let taille = taille_police(ui, valeur, ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(valeur).size(taille).strong())
                            .wrap(),
                    );
                });
            });
    }

    fn ui_scientifique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_scientifique")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (i, (label, morceau)) in FONCTIONS_SCI.iter().enumerate() {
                    if touche(ui, label, TOUCHE_SCI) {
                        self.input(morceau);
                    }
                    if i % 5 == 4 {
                        ui.end_row();
                    }
                }
                ui.end_row();

                if touche(ui, "M+", TOUCHE_SCI) {
                    self.memoire_ajout();
                }
                if touche(ui, "M-", TOUCHE_SCI) {
                    self.memoire_soustraction();
                }
                if touche(ui, "MR", TOUCHE_SCI) {
                    self.memoire_rappel();
                }
                if touche(ui, "MC", TOUCHE_SCI) {
                    self.memoire_clear();
                }
                if touche(ui, &self.mode.to_string(), TOUCHE_SCI) {
                    self.toggle_mode();
                }
                ui.end_row();
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_standard")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                if touche(ui, "AC", TOUCHE) {
                    self.clear();
                }
                if touche(ui, "+/-", TOUCHE) {
                    self.toggle_sign();
                }
                self.touche_insert(ui, "%", "%");
                self.touche_insert(ui, "÷", " / ");
                ui.end_row();

                for rangee in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for c in rangee {
                        self.touche_insert(ui, c, c);
                    }
                    match rangee[0] {
                        "7" => self.touche_insert(ui, "×", " * "),
                        "4" => self.touche_insert(ui, "−", " - "),
                        _ => self.touche_insert(ui, "+", " + "),
                    }
                    ui.end_row();
                }

                if touche(ui, "SCI", TOUCHE) {
                    self.toggle_scientifique();
                }
                self.touche_insert(ui, "0", "0");
                self.touche_insert(ui, ".", ".");
                if touche(ui, "=", TOUCHE) {
                    self.calculate();
                }
                ui.end_row();

                if touche(ui, "DEL", TOUCHE) {
                    self.backspace();
                }
                self.touche_insert(ui, "00", "00");
                ui.end_row();
            });
    }

    fn ui_notification(&mut self, ui: &mut egui::Ui) {
        let Some(n) = self.notification.clone() else {
            return;
        };

        let mut ouverte = true;
        egui::Window::new(n.titre)
            .id(egui::Id::new("notification_calcul"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -16.0])
            .open(&mut ouverte)
            .show(ui.ctx(), |ui| {
                ui.colored_label(ui.visuals().error_fg_color, &n.description);
            });

        if !ouverte {
            self.fermer_notification();
        }
    }

    fn touche_insert(&mut self, ui: &mut egui::Ui, label: &str, morceau: &str) {
        if touche(ui, label, TOUCHE) {
            self.input(morceau);
        }
    }

    /// Saisie au clavier : texte tapé + Enter / Backspace.
    fn clavier(&mut self, ui: &mut egui::Ui) {
        let (textes, enter, backspace) = ui.input(|i| {
            let textes: Vec<String> = i
                .events
                .iter()
                .filter_map(|e| match e {
                    egui::Event::Text(t) => Some(t.clone()),
                    _ => None,
                })
                .collect();
            (
                textes,
                i.key_pressed(egui::Key::Enter),
                i.key_pressed(egui::Key::Backspace),
            )
        });

        for t in textes {
            for c in t.chars() {
                match c {
                    '=' => self.calculate(),
                    '+' => self.input(" + "),
                    '-' => self.input(" - "),
                    '*' => self.input(" * "),
                    '/' => self.input(" / "),
                    '^' => self.input(" ^ "),
                    c if c.is_ascii_alphanumeric() || "().!%".contains(c) => {
                        self.input(c.encode_utf8(&mut [0; 4]))
                    }
                    _ => {}
                }
            }
        }

        if enter {
            self.calculate();
        }
        if backspace {
            self.backspace();
        }
    }
}

fn touche(ui: &mut egui::Ui, label: &str, taille: [f32; 2]) -> bool {
    ui.add_sized(taille, egui::Button::new(egui::RichText::new(label).size(18.0)))
        .clicked()
}

/// Réduit la police si la valeur déborde de la largeur disponible (plancher POLICE_ECRAN_MIN).
fn taille_police(ui: &egui::Ui, texte: &str, largeur: f32) -> f32 {
    let galley = ui.painter().layout_no_wrap(
        texte.to_string(),
        egui::FontId::proportional(POLICE_ECRAN),
        egui::Color32::PLACEHOLDER,
    );
    let largeur_texte = galley.size().x;
    let marge = largeur - 24.0;

    if largeur_texte > marge && largeur_texte > 0.0 {
        (POLICE_ECRAN * marge / largeur_texte).max(POLICE_ECRAN_MIN)
    } else {
        POLICE_ECRAN
    }
}
