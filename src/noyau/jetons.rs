// src/noyau/jetons.rs

use std::fmt;

use super::expr::Op;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Suite non vide de chiffres ASCII, gardée telle quelle (la conversion se fait au parse)
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl Tok {
    /// Raccourci pour les fixtures : `Tok::num("42")`.
    #[cfg(test)]
    pub(crate) fn num(chiffres: &str) -> Tok {
        Tok::Num(chiffres.to_string())
    }

    fn depuis_symbole(c: char) -> Option<Tok> {
        match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => Op::depuis_symbole(c).map(Tok::Op),
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => write!(f, "("),
            Tok::RPar => write!(f, ")"),
        }
    }
}

/// Tokenize une chaîne en jetons.
///
/// - suites de chiffres ASCII -> Num
/// - opérateurs + - * /
/// - parenthèses ( )
/// - tout le reste (espaces compris) est ignoré : jamais d’erreur ici
///
/// Pas d’état entre deux appels : l’accumulateur est local.
pub fn tokenize(s: &str) -> Vec<Tok> {
    let mut out = Vec::new();
    let mut chiffres = String::new();

    // espace sentinelle : force la sortie d’un nombre en fin de chaîne
    for c in s.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            chiffres.push(c);
            continue;
        }

        if !chiffres.is_empty() {
            out.push(Tok::Num(std::mem::take(&mut chiffres)));
        }

        if let Some(t) = Tok::depuis_symbole(c) {
            out.push(t);
        }
    }

    out
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jetons depuis des mots séparés par des espaces (fixtures de tests).
#[cfg(test)]
pub(crate) fn jetons(mots: &str) -> Vec<Tok> {
    mots.split_whitespace()
        .map(|w| match w {
            "(" => Tok::LPar,
            ")" => Tok::RPar,
            "+" => Tok::Op(Op::Add),
            "-" => Tok::Op(Op::Sub),
            "*" => Tok::Op(Op::Mul),
            "/" => Tok::Op(Op::Div),
            n => Tok::num(n),
        })
        .collect()
}
