//! Erreurs du noyau.
//!
//! La lecture (jetons) ne peut pas échouer : tout caractère inconnu est ignoré.
//! Le parse et la réduction remontent ces erreurs au lieu de produire un arbre faux.

use thiserror::Error;

use super::expr::Op;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoyauErreur {
    #[error("Entrée vide")]
    EmptyInput,

    #[error("parenthèses déséquilibrées")]
    UnbalancedParentheses,

    #[error("opérande manquant autour de '{operateur}'")]
    EmptyOperand { operateur: char },

    #[error("opérateur manquant entre deux opérandes")]
    MissingOperator,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("nombre invalide: {0:?}")]
    MalformedNumber(String),
}

impl NoyauErreur {
    pub(crate) fn operande_manquant(op: Op) -> Self {
        NoyauErreur::EmptyOperand {
            operateur: op.symbole(),
        }
    }

    /// Parenthèse vide `()` : aucun opérateur à blâmer.
    pub(crate) fn groupe_vide() -> Self {
        NoyauErreur::EmptyOperand { operateur: '(' }
    }
}
