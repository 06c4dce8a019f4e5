//! Noyau : évaluation (pipeline réel)
//!
//! texte -> jetons -> Equation -> passes du solveur -> EXACT -> lecture décimale
//!
//! La démarche garde les étapes pour l’affichage, hors de l’AST.

use tracing::{instrument, trace};

use super::erreur::Resultat;
use super::expr::{Equation, Expr};
use super::jetons::{format_tokens, tokenize};
use super::lecture::lecture_decimale;
use super::parseur::parse;
use super::reglages::Reglages;
use super::solveur::Solveur;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub avant: String,
    pub etapes: Vec<String>,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct Evaluation {
    /// Forme résolue, ex. "x = (-6/5)".
    pub exact: String,
    /// Valeur décimale tronquée du membre droit.
    pub lecture: Option<String>,
    pub demarche: DemarcheNoyau,
    pub solution: Equation,
}

/// API publique : résout une équation texte et retourne
/// - EXACT (forme `inconnue = valeur`)
/// - lecture décimale (tronquée à `reglages.digits`)
/// - démarche (jetons, équation lue, étapes)
#[instrument(level = "debug", skip(reglages))]
pub fn eval_equation(texte: &str, reglages: &Reglages) -> Resultat<Evaluation> {
    let reglages = reglages.borne();

    // 1) Jetons
    let jetons = tokenize(texte)?;
    trace!(n = jetons.len(), "jetons");

    // 2) Equation
    let equation = parse(&jetons)?;
    let avant = equation.to_string();

    // 3) Passes
    let resolution = Solveur::new(&reglages).resoudre_pas_a_pas(equation)?;

    // 4) EXACT + lecture
    let solution = resolution.solution;
    let exact = solution.to_string();
    let lecture = match &solution.right {
        Expr::Literal(valeur) => Some(lecture_decimale(valeur, reglages.digits)),
        _ => None,
    };

    // 5) Démarche
    let demarche = DemarcheNoyau {
        jetons: format_tokens(&jetons),
        avant,
        etapes: resolution
            .etapes
            .iter()
            .map(|e| format!("{} : {}", e.nature, e.equation))
            .collect(),
        note: "Pipeline: jetons → équation → (réduction → migration)* → forme résolue → lecture.".into(),
    };

    Ok(Evaluation {
        exact,
        lecture,
        demarche,
        solution,
    })
}
