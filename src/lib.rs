//! Calculatrice entière — noyau réutilisable (sans UI).
//!
//! `calculate("( 4 + 5 ) * ( ( 6 + 1 ) + 1 )") == Ok(72)`

pub mod noyau;

pub use noyau::{calculate, calculate_traced, evaluate, DemarcheNoyau, NoyauErreur};
