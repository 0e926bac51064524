// src/app/format.rs
//
// Résultat -> texte affiché
// -------------------------
// - rendu décimal le plus court qui relit la même valeur ("0.5", "-7", "120")
// - trop long (> longueur_max) : notation exponentielle, `chiffres` après la virgule
//   ex: 0.1 + 0.2 -> "3.000000000e-1"
//
// Le texte produit reste une entrée valide pour le noyau (exposant "e-1" compris).

pub fn format_resultat(v: f64, longueur_max: usize, chiffres: usize) -> String {
    // -0 s’affiche "0"
    let v = if v == 0.0 { 0.0 } else { v };

    let simple = format!("{v}");
    if simple.chars().count() > longueur_max {
        format!("{v:.chiffres$e}")
    } else {
        simple
    }
}
