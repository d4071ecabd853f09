//! Tests scientifiques (campagne) : invariants du pipeline complet.
//!
//! - associativité à gauche dans une même passe
//! - ordre global des passes (* / + -) même à niveau égal
//! - parenthèses redondantes neutres
//! - division tronquée vers zéro, grands entiers exacts
//! - erreurs typées au lieu d’arbres faux

use num_bigint::BigInt;

use super::analyse::parse;
use super::expr::{Expr, Op};
use super::jetons::tokenize;
use super::{calculate, evaluate, NoyauErreur};

fn calc_ok(expr: &str) -> BigInt {
    calculate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_calc(expr: &str, attendu: i64) {
    assert_eq!(calc_ok(expr), BigInt::from(attendu), "expr={expr:?}");
}

fn assert_meme_arbre(a: &str, b: &str) {
    let ea = parse(&tokenize(a)).unwrap_or_else(|e| panic!("expr={a:?} err={e}"));
    let eb = parse(&tokenize(b)).unwrap_or_else(|e| panic!("expr={b:?} err={e}"));
    assert_eq!(ea, eb, "{a:?} vs {b:?}");
}

/* ------------------------ Associativité / passes ------------------------ */

#[test]
fn sci_gauche_dans_une_passe() {
    assert_calc("10-3-2", 5);
    assert_calc("100/10/5", 2);
    assert_meme_arbre("1-2-3-4", "((1-2)-3)-4");
    assert_meme_arbre("2*3*4*5", "((2*3)*4)*5");
}

#[test]
fn sci_ordre_des_passes() {
    // * avant / : 12 / (2 * 3)
    assert_meme_arbre("12/2*3", "12/(2*3)");
    assert_calc("12/2*3", 2);
    // + avant - : 10 - (4 + 3)
    assert_meme_arbre("10-4+3", "10-(4+3)");
    assert_calc("10-4+3", 3);
    // mélange des deux niveaux
    assert_meme_arbre("1+2*3-4/2", "(1+(2*3))-(4/2)");
    assert_calc("1+2*3-4/2", 5);
}

#[test]
fn sci_parentheses_neutres() {
    assert_meme_arbre("((((1+3))))", "1+3");
    assert_meme_arbre("(1)+((2))", "1+2");
    let e = parse(&tokenize("((((1+3))))")).unwrap();
    assert_eq!(e, Expr::binaire(1.into(), Op::Add, 3.into()));
}

#[test]
fn sci_espaces_et_bruit_ignores() {
    assert_calc(" ( 4 + 5 ) * ( ( 6 + 1 ) + 1 ) ", 72);
    assert_calc("4 et + 5 !", 9);
    assert_calc("1\t*\n2", 2);
}

/* ------------------------ Arithmétique ------------------------ */

#[test]
fn sci_division_tronquee() {
    assert_calc("7/2", 3);
    assert_calc("(0-7)/2", -3);
    assert_calc("(0-7)/(0-2)", 3);
    assert_calc("1/3", 0);
}

#[test]
fn sci_grands_entiers() {
    let s = "99999999999999999999*99999999999999999999";
    let attendu: BigInt = "9999999999999999999800000000000000000001".parse().unwrap();
    assert_eq!(calc_ok(s), attendu);
}

#[test]
fn sci_evaluate_direct() {
    let ast = Expr::binaire(
        Expr::feuille("104").unwrap(),
        Op::Div,
        Expr::feuille("4").unwrap(),
    );
    assert_eq!(evaluate(&ast), Ok(BigInt::from(26)));
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert_eq!(calculate("   "), Err(NoyauErreur::EmptyInput));
    assert_eq!(calculate("()"), Err(NoyauErreur::EmptyOperand { operateur: '(' }));
    assert_eq!(calculate(")("), Err(NoyauErreur::UnbalancedParentheses));
    assert_eq!(calculate("5/(3-3)"), Err(NoyauErreur::DivisionByZero));
    assert_eq!(calculate("-5"), Err(NoyauErreur::EmptyOperand { operateur: '-' }));
}
