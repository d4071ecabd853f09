//! Noyau entier
//!
//! Organisation interne :
//! - jetons.rs    : tokenisation (jamais d’erreur)
//! - expr.rs      : AST (Leaf / Binary) + opérateurs
//! - analyse.rs   : passes de repli * / + - (+ groupes parenthésés)
//! - reduction.rs : évaluation récursive (BigInt)
//! - format.rs    : affichages pour la démarche
//! - erreur.rs    : erreurs typées
//! - eval.rs      : pipeline complet

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod reduction;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::NoyauErreur;
pub use eval::{calculate, calculate_traced, DemarcheNoyau};
pub use reduction::evaluate;
