//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée pour les expressions aléatoires, très grande pour les chaînes
//! - budget temps global
//! - seule erreur attendue sur des expressions bien formées : division par zéro
//! - invariant clé : une expression entièrement parenthésée donne la même valeur
//!   que son évaluation directe pendant la génération

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_traits::Zero;

use super::{calculate, NoyauErreur};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Espaces / caractères ignorés, pour vérifier qu’ils ne changent rien.
fn gen_bruit(rng: &mut Rng) -> &'static str {
    match rng.pick(6) {
        0 => " ",
        1 => "  ",
        2 => "\t",
        3 => "x",
        _ => "",
    }
}

/// Retourne (texte, valeur attendue) ; valeur None si une division par zéro apparaît.
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Option<BigInt>) {
    if depth == 0 || rng.pick(4) == 0 {
        let v = rng.pick(1000);
        return (format!("{v}"), Some(BigInt::from(v)));
    }

    let (ta, va) = gen_expr(rng, depth - 1);
    let (tb, vb) = gen_expr(rng, depth - 1);
    let (sym, v) = match rng.pick(4) {
        0 => ('+', va.zip(vb).map(|(a, b)| a + b)),
        1 => ('-', va.zip(vb).map(|(a, b)| a - b)),
        2 => ('*', va.zip(vb).map(|(a, b)| a * b)),
        _ => (
            '/',
            va.zip(vb)
                .and_then(|(a, b)| if b.is_zero() { None } else { Some(a / b) }),
        ),
    };

    let b1 = gen_bruit(rng);
    let b2 = gen_bruit(rng);
    let texte = if rng.coin() {
        format!("({ta}{b1}{sym}{b2}{tb})")
    } else {
        // parenthèses doublées : ne doivent rien changer
        format!("(({ta}{b1}{sym}{b2}{tb}))")
    };
    (texte, v)
}

/// Soupe de symboles (souvent mal formée).
fn gen_soupe(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: [&str; 10] = ["1", "23", "0", "+", "-", "*", "/", "(", ")", " "];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_expressions_parenthesees_coherentes() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(0x5EED_CA1C);

    for _ in 0..2_000 {
        budget(start, max);

        let (texte, attendu) = gen_expr(&mut rng, 5);
        let obtenu = calculate(&texte);

        match attendu {
            Some(v) => assert_eq!(obtenu, Ok(v), "expr={texte:?}"),
            None => assert_eq!(obtenu, Err(NoyauErreur::DivisionByZero), "expr={texte:?}"),
        }
    }
}

#[test]
fn fuzz_soupe_ne_panique_pas_et_reste_deterministe() {
    let start = Instant::now();
    let max = Duration::from_secs(10);
    let mut rng = Rng::new(42);

    for i in 0..3_000 {
        budget(start, max);

        let len = 1 + (i % 24);
        let s = gen_soupe(&mut rng, len);

        let a = calculate(&s);
        let b = calculate(&s);
        assert_eq!(a, b, "non déterministe: expr={s:?}");
    }
}

#[test]
fn fuzz_imbrication_profonde_bornee() {
    // parenthèses : pile de groupes, pas de récursion
    for depth in [1usize, 10, 500, 100_000] {
        let s = format!("{}7{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(calculate(&s), Ok(BigInt::from(7)), "depth={depth}");
    }
}

#[test]
fn fuzz_longues_chaines_repliees_a_gauche() {
    // chaque repli à gauche ajoute un niveau : arbre aussi profond que la chaîne
    let start = Instant::now();
    let max = Duration::from_secs(20);
    let mut rng = Rng::new(7);

    assert_eq!(
        calculate(&format!("1{}", "+1".repeat(50_000))),
        Ok(BigInt::from(50_001))
    );

    for _ in 0..4 {
        budget(start, max);

        let termes = 10_000 + rng.pick(20_000) as usize;
        let mut texte = String::from("0");
        let mut attendu = BigInt::zero();
        for _ in 0..termes {
            let v = rng.pick(10);
            // que des `+` ou que des `-` : repli purement à gauche
            texte.push_str(&format!("+{v}"));
            attendu += v;
        }
        assert_eq!(calculate(&texte), Ok(attendu.clone()), "termes={termes}");

        let moins = texte.replace('+', "-");
        assert_eq!(calculate(&moins), Ok(-attendu), "termes={termes}");
    }
}
