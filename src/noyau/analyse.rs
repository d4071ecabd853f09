// src/noyau/analyse.rs
//
// Jetons -> Expr par passes de repli
// Objectif:
// - Regrouper les parenthèses en sous-arbres (pile de groupes, curseur explicite)
// - Puis replier les opérateurs en quatre passes, dans l’ordre fixe * / + -
//
// Règles:
// - Une passe ne replie QUE son opérateur : gauche = dernier élément produit,
//   droite = élément suivant (nombre ou groupe déjà analysé).
// - Le résultat d’un repli redevient la “gauche” du repli suivant : a - b - c => (a - b) - c
// - Dans un même niveau (* et /, + et -), l’ordre est celui des passes, pas la lecture :
//   4 / 2 * 3 => 4 / (2 * 3). C’est voulu, ne pas remplacer par une montée de précédence classique.
// - Parenthèses redondantes : aucun noeud ajouté.

use tracing::trace;

use super::erreur::NoyauErreur;
use super::expr::{Expr, Op};
use super::jetons::Tok;

/// Élément d’une passe : opérateur pas encore replié, ou arbre déjà construit.
#[derive(Debug)]
enum Element {
    Operateur(Op),
    Arbre(Expr),
}

/// Construit une Expr à partir des jetons.
///
/// Les jetons ne sont pas consommés : un curseur avance sur la tranche,
/// donc deux appels sur la même entrée donnent le même arbre.
/// Les groupes ouverts vivent sur une pile explicite : l’imbrication n’est pas bornée
/// par la pile d’appels.
pub fn parse(tokens: &[Tok]) -> Result<Expr, NoyauErreur> {
    if tokens.is_empty() {
        return Err(NoyauErreur::EmptyInput);
    }

    // `courant` : groupe en cours ; `ouverts` : groupes englobants, mis de côté à chaque `(`
    let mut courant: Vec<Element> = Vec::new();
    let mut ouverts: Vec<Vec<Element>> = Vec::new();

    for (curseur, tok) in tokens.iter().enumerate() {
        match tok {
            Tok::Num(chiffres) => courant.push(Element::Arbre(Expr::feuille(chiffres)?)),
            Tok::Op(op) => courant.push(Element::Operateur(*op)),
            Tok::LPar => ouverts.push(std::mem::take(&mut courant)),
            Tok::RPar => {
                let Some(englobant) = ouverts.pop() else {
                    trace!(curseur, "`)` sans `(`");
                    return Err(NoyauErreur::UnbalancedParentheses);
                };
                let sous = replier(std::mem::replace(&mut courant, englobant))?;
                courant.push(Element::Arbre(sous));
            }
        }
    }

    if !ouverts.is_empty() {
        return Err(NoyauErreur::UnbalancedParentheses);
    }
    replier(courant)
}

fn replier(mut elements: Vec<Element>) -> Result<Expr, NoyauErreur> {
    for op in Op::ORDRE_PASSES {
        elements = passe(elements, op)?;
    }

    // toutes les passes faites : il ne reste que des arbres
    let mut reste = elements.into_iter();
    match (reste.next(), reste.next()) {
        (Some(Element::Arbre(e)), None) => Ok(e),
        (None, _) => Err(NoyauErreur::groupe_vide()),
        _ => Err(NoyauErreur::MissingOperator),
    }
}

/// Une passe : replie chaque occurrence de `op`, de gauche à droite.
fn passe(elements: Vec<Element>, op: Op) -> Result<Vec<Element>, NoyauErreur> {
    let mut sortie: Vec<Element> = Vec::with_capacity(elements.len());
    let mut entree = elements.into_iter();

    while let Some(el) = entree.next() {
        match el {
            Element::Operateur(o) if o == op => {
                let gauche = match sortie.pop() {
                    Some(Element::Arbre(e)) => e,
                    _ => return Err(NoyauErreur::operande_manquant(op)),
                };
                let droite = match entree.next() {
                    Some(Element::Arbre(e)) => e,
                    _ => return Err(NoyauErreur::operande_manquant(op)),
                };

                trace!(operateur = %op, rang = sortie.len(), "repli");
                sortie.push(Element::Arbre(Expr::binaire(gauche, op, droite)));
            }
            autre => sortie.push(autre),
        }
    }

    Ok(sortie)
}
