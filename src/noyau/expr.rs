// src/noyau/expr.rs
//
// AST entier (sans flottants).
// - Leaf   : entier exact (BigInt, pas de débordement)
// - Binary : (gauche, opérateur, droite), chaque noeud possède ses deux fils
//
// Pas de noeud “parenthèse” : les parenthèses redondantes ne laissent aucune trace.

use num_bigint::BigInt;
use num_traits::Zero;

use std::fmt;

use super::erreur::NoyauErreur;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Ordre fixe des passes de repli : `*` puis `/` puis `+` puis `-`.
    pub const ORDRE_PASSES: [Op; 4] = [Op::Mul, Op::Div, Op::Add, Op::Sub];

    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn depuis_symbole(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Add),
            '-' => Some(Op::Sub),
            '*' => Some(Op::Mul),
            '/' => Some(Op::Div),
            _ => None,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug)]
pub enum Expr {
    Leaf(BigInt),
    Binary(Box<Expr>, Op, Box<Expr>),
}

// Une chaîne `a + b + c + …` donne un arbre aussi profond que le nombre de termes :
// tous les parcours ci-dessous utilisent une pile explicite, jamais la pile d’appels.

impl Expr {
    /// Feuille depuis une suite de chiffres ASCII (base 10, sans signe).
    pub fn feuille(chiffres: &str) -> Result<Expr, NoyauErreur> {
        if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NoyauErreur::MalformedNumber(chiffres.to_string()));
        }
        BigInt::parse_bytes(chiffres.as_bytes(), 10)
            .map(Expr::Leaf)
            .ok_or_else(|| NoyauErreur::MalformedNumber(chiffres.to_string()))
    }

    pub fn binaire(gauche: Expr, op: Op, droite: Expr) -> Expr {
        Expr::Binary(Box::new(gauche), op, Box::new(droite))
    }

    /// Profondeur de l’arbre (une feuille vaut 1).
    pub fn profondeur(&self) -> usize {
        let mut max = 0;
        let mut pile: Vec<(&Expr, usize)> = vec![(self, 1)];

        while let Some((e, niveau)) = pile.pop() {
            max = max.max(niveau);
            if let Expr::Binary(a, _, b) = e {
                pile.push((a, niveau + 1));
                pile.push((b, niveau + 1));
            }
        }

        max
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Expr::Leaf(BigInt::from(n))
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        let mut pile: Vec<(&Expr, &Expr)> = vec![(self, other)];

        while let Some(paire) = pile.pop() {
            match paire {
                (Expr::Leaf(x), Expr::Leaf(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Expr::Binary(a1, op1, b1), Expr::Binary(a2, op2, b2)) => {
                    if op1 != op2 {
                        return false;
                    }
                    pile.push((a1, a2));
                    pile.push((b1, b2));
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Expr {}

/// Démontage itératif : le `Drop` par défaut de `Box<Expr>` descendrait récursivement.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pile: Vec<Expr> = Vec::new();

        if let Expr::Binary(a, _, b) = self {
            pile.push(detacher(a));
            pile.push(detacher(b));
        }

        while let Some(mut e) = pile.pop() {
            if let Expr::Binary(a, _, b) = &mut e {
                pile.push(detacher(a));
                pile.push(detacher(b));
            }
            // `e` n’a plus que des feuilles : son drop est immédiat
        }
    }
}

/// Remplace le fils par une feuille nulle (sans allocation) et rend l’ancien fils.
fn detacher(fils: &mut Expr) -> Expr {
    std::mem::replace(fils, Expr::Leaf(BigInt::zero()))
}

/// Affichage entièrement parenthésé : `((4 * 5) - 6)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Morceau<'a> {
            Noeud(&'a Expr),
            Operateur(Op),
            Fermer,
        }

        let mut pile = vec![Morceau::Noeud(self)];

        while let Some(m) = pile.pop() {
            match m {
                Morceau::Noeud(Expr::Leaf(n)) => write!(f, "{n}")?,
                Morceau::Noeud(Expr::Binary(a, op, b)) => {
                    f.write_str("(")?;
                    pile.push(Morceau::Fermer);
                    pile.push(Morceau::Noeud(b));
                    pile.push(Morceau::Operateur(*op));
                    pile.push(Morceau::Noeud(a));
                }
                Morceau::Operateur(op) => write!(f, " {op} ")?,
                Morceau::Fermer => f.write_str(")")?,
            }
        }

        Ok(())
    }
}
