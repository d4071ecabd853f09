// src/noyau/reduction.rs
//
// Réduction de l’arbre (bas -> haut), sans récursion.
// - + - * : arithmétique entière exacte (BigInt : pas de débordement)
// - /     : division entière tronquée vers zéro (-7 / 2 => -3), comme i64
// - diviseur nul : erreur typée, jamais de panique

use num_bigint::BigInt;
use num_traits::Zero;

use super::erreur::NoyauErreur;
use super::expr::{Expr, Op};

enum Tache<'a> {
    Reduire(&'a Expr),
    Appliquer(Op),
}

/// Évalue un arbre déjà construit.
///
/// Pile de tâches explicite : la profondeur de l’arbre ne touche pas la pile d’appels.
pub fn evaluate(expr: &Expr) -> Result<BigInt, NoyauErreur> {
    let mut taches = vec![Tache::Reduire(expr)];
    let mut valeurs: Vec<BigInt> = Vec::new();

    while let Some(t) = taches.pop() {
        match t {
            Tache::Reduire(Expr::Leaf(n)) => valeurs.push(n.clone()),
            Tache::Reduire(Expr::Binary(a, op, b)) => {
                // gauche réduite d’abord, puis droite, puis l’opérateur
                taches.push(Tache::Appliquer(*op));
                taches.push(Tache::Reduire(b));
                taches.push(Tache::Reduire(a));
            }
            Tache::Appliquer(op) => {
                let (Some(b), Some(a)) = (valeurs.pop(), valeurs.pop()) else {
                    unreachable!("deux valeurs précèdent toujours leur opérateur");
                };
                valeurs.push(appliquer(a, op, b)?);
            }
        }
    }

    match valeurs.pop() {
        Some(v) if valeurs.is_empty() => Ok(v),
        _ => unreachable!("un arbre se réduit en une seule valeur"),
    }
}

fn appliquer(a: BigInt, op: Op, b: BigInt) -> Result<BigInt, NoyauErreur> {
    Ok(match op {
        Op::Add => a + b,
        Op::Sub => a - b,
        Op::Mul => a * b,
        Op::Div => {
            if b.is_zero() {
                return Err(NoyauErreur::DivisionByZero);
            }
            a / b
        }
    })
}
