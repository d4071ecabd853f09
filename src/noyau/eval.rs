//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> passes de repli (* / + -) -> Expr -> réduction -> entier
//!
//! Aucun état partagé : chaque appel reconstruit jetons et arbre.

use num_bigint::BigInt;
use tracing::debug;

use super::analyse::parse;
use super::erreur::NoyauErreur;
use super::expr::Expr;
use super::format::{format_arbre, format_expr};
use super::jetons::{format_tokens, tokenize, Tok};
use super::reduction::evaluate;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub expression: String,
    pub arbre: String,
    pub note: String,
}

/// API publique : texte -> entier.
pub fn calculate(expr_str: &str) -> Result<BigInt, NoyauErreur> {
    pipeline(expr_str).map(|(_jetons, _expr, resultat)| resultat)
}

/// Comme [`calculate`], avec la démarche (jetons, arbre) pour l’affichage.
pub fn calculate_traced(expr_str: &str) -> Result<(BigInt, DemarcheNoyau), NoyauErreur> {
    let (jetons, expr, resultat) = pipeline(expr_str)?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        expression: format_expr(&expr),
        arbre: format_arbre(&expr),
        note: "Pipeline: jetons → passes (* puis / puis + puis -) → arbre → réduction.".into(),
    };

    Ok((resultat, d))
}

/// jetons -> arbre -> entier, sans aucun rendu texte.
fn pipeline(expr_str: &str) -> Result<(Vec<Tok>, Expr, BigInt), NoyauErreur> {
    // 1) Jetons (jamais d’erreur)
    let jetons = tokenize(expr_str);
    debug!(nb = jetons.len(), "jetons");

    // 2) Arbre
    let expr = parse(&jetons)?;
    debug!(profondeur = expr.profondeur(), "arbre");

    // 3) Réduction
    let resultat = evaluate(&expr)?;
    debug!(%resultat, "réduction");

    Ok((jetons, expr, resultat))
}
