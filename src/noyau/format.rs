// src/noyau/format.rs

use super::expr::Expr;

/// Forme compacte sur une ligne, entièrement parenthésée : `((4 * 5) - 6)`.
pub fn format_expr(e: &Expr) -> String {
    e.to_string()
}

/// Lignes maximales de l’arbre dans la démarche (l’indentation croît avec la profondeur).
pub const ARBRE_LIGNES_MAX: usize = 200;

/// Arbre indenté (une ligne par noeud), pour la démarche.
///
/// ```text
/// -
///   *
///     4
///     5
///   6
/// ```
///
/// Au plus `ARBRE_LIGNES_MAX` lignes, suivies d’un compte des noeuds non affichés.
pub fn format_arbre(e: &Expr) -> String {
    let mut lignes: Vec<String> = Vec::new();
    let mut caches: usize = 0;
    let mut pile: Vec<(&Expr, usize)> = vec![(e, 0)];

    while let Some((e, niveau)) = pile.pop() {
        if let Expr::Binary(a, _, b) = e {
            pile.push((b, niveau + 1));
            pile.push((a, niveau + 1));
        }

        if lignes.len() == ARBRE_LIGNES_MAX {
            caches += 1;
            continue;
        }

        let indent = "  ".repeat(niveau);
        match e {
            Expr::Leaf(n) => lignes.push(format!("{indent}{n}")),
            Expr::Binary(_, op, _) => lignes.push(format!("{indent}{op}")),
        }
    }

    if caches > 0 {
        lignes.push(format!("… ({caches} noeuds non affichés)"));
    }
    lignes.join("\n")
}
