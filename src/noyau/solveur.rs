// src/noyau/solveur.rs
//
// Réécriture de l’arbre jusqu’à la forme `inconnue = littéral`.
//
// Une passe :
//   1) solve_expr sur chaque membre (calcul exact, distributivité, regroupement)
//   2) forme terminale ?  ax = b  ou  b = ax   =>   x = b / a
//   3) sinon migration : variables à gauche, littéraux à droite (signe inversé
//      quand un terme change de membre), puis passe suivante.
//
// Après une migration, les membres sont des sommes de variables et de
// littéraux : la passe suivante les replie en `ax = b`. Deux passes suffisent
// donc pour une équation linéaire ; le plafond `passes_max` ne sert que de
// garde-fou.

use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Zero};
use tracing::{debug, instrument};

use super::erreur::{Erreur, Resultat};
use super::expr::{diviser, Equation, Expr, Op, Variable};
use super::reglages::Reglages;

/* ------------------------ Trace ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NatureEtape {
    Reduction,
    Migration,
    Solution,
}

impl fmt::Display for NatureEtape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NatureEtape::Reduction => "réduction",
            NatureEtape::Migration => "migration",
            NatureEtape::Solution => "solution",
        };
        write!(f, "{s}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Etape {
    pub nature: NatureEtape,
    pub equation: Equation,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub solution: Equation,
    pub etapes: Vec<Etape>,
}

/* ------------------------ Solveur ------------------------ */

#[derive(Clone, Copy, Debug)]
pub struct Solveur {
    passes_max: usize,
}

impl Default for Solveur {
    fn default() -> Self {
        Solveur::new(&Reglages::default())
    }
}

impl Solveur {
    pub fn new(reglages: &Reglages) -> Self {
        Solveur {
            passes_max: reglages.borne().passes_max,
        }
    }

    pub fn resoudre(&self, eq: Equation) -> Resultat<Equation> {
        self.resoudre_pas_a_pas(eq).map(|r| r.solution)
    }

    /// Résout en gardant chaque équation intermédiaire.
    ///
    /// Refus explicites (avant toute réécriture) :
    /// - aucune inconnue => `NoUnknown`
    /// - plusieurs noms d’inconnue => `MultipleUnknowns`
    #[instrument(level = "debug", skip_all, fields(equation = %eq))]
    pub fn resoudre_pas_a_pas(&self, eq: Equation) -> Resultat<Resolution> {
        verifier_inconnue(&eq)?;

        let mut etapes = Vec::new();
        let mut courante = eq;

        for passe in 1..=self.passes_max {
            let reduite = Equation::new(solve_expr(courante.left)?, solve_expr(courante.right)?);
            debug!(passe, equation = %reduite, "réduction");
            etapes.push(Etape {
                nature: NatureEtape::Reduction,
                equation: reduite.clone(),
            });

            if let Some(solution) = forme_terminale(&reduite)? {
                debug!(passe, solution = %solution, "forme résolue");
                etapes.push(Etape {
                    nature: NatureEtape::Solution,
                    equation: solution.clone(),
                });
                return Ok(Resolution { solution, etapes });
            }

            let migree = migrer_termes(&reduite)?;
            if migree == reduite {
                return Err(Erreur::NoProgress(passe));
            }
            debug!(passe, equation = %migree, "migration");
            etapes.push(Etape {
                nature: NatureEtape::Migration,
                equation: migree.clone(),
            });
            courante = migree;
        }

        Err(Erreur::NoProgress(self.passes_max))
    }
}

/// Résolution avec les réglages par défaut.
pub fn solve(eq: Equation) -> Resultat<Equation> {
    Solveur::default().resoudre(eq)
}

fn verifier_inconnue(eq: &Equation) -> Resultat<()> {
    let mut noms = eq.noms_variables().into_iter();
    match (noms.next(), noms.next()) {
        (None, _) => Err(Erreur::NoUnknown),
        (Some(_), None) => Ok(()),
        (Some(a), Some(b)) => Err(Erreur::MultipleUnknowns(a, b)),
    }
}

/// `ax = b` ou `b = ax`  =>  `x = b / a` (a nul => `DivisionByZero`).
fn forme_terminale(eq: &Equation) -> Resultat<Option<Equation>> {
    match (&eq.left, &eq.right) {
        (Expr::Variable(v), Expr::Literal(b)) | (Expr::Literal(b), Expr::Variable(v)) => {
            let valeur = diviser(b, &v.coef)?;
            Ok(Some(Equation::new(
                Expr::Variable(Variable::unitaire(v.nom)),
                Expr::Literal(valeur),
            )))
        }
        _ => Ok(None),
    }
}

/* ------------------------ Réduction d’un membre ------------------------ */

/// Réduit une expression, des feuilles vers la racine.
///
/// Règles, dans l’ordre, sur les enfants déjà réduits :
/// - k * (composée) ou (composée) * k : distributivité, puis re-réduction
/// - (composée) / k : distributivité de 1/k
/// - littéral op littéral : calcul exact
/// - ax + bx : (a+b)x, sous '+' seulement (ax - bx reste tel quel)
/// - k * ax, ax * k : (ka)x ; ax / k : (a/k)x
/// - sinon le noeud est gardé avec ses enfants réduits
pub fn solve_expr(expr: Expr) -> Resultat<Expr> {
    let (op, left, right) = match expr {
        Expr::Literal(_) | Expr::Variable(_) => return Ok(expr),
        Expr::BinaryOp { op, left, right } => (op, *left, *right),
    };

    let a = solve_expr(left)?;
    let b = solve_expr(right)?;

    match (op, a, b) {
        (Op::Mul, Expr::Literal(k), composee @ Expr::BinaryOp { .. })
        | (Op::Mul, composee @ Expr::BinaryOp { .. }, Expr::Literal(k)) => {
            solve_expr(distribuer(composee, &k))
        }

        (Op::Div, composee @ Expr::BinaryOp { .. }, Expr::Literal(k)) => {
            let inverse = diviser(&BigRational::one(), &k)?;
            solve_expr(distribuer(composee, &inverse))
        }

        (op, Expr::Literal(x), Expr::Literal(y)) => Ok(Expr::Literal(op.applique(&x, &y)?)),

        // le nom de gauche est gardé (un seul nom possible après la vérification)
        (Op::Add, Expr::Variable(u), Expr::Variable(v)) => {
            Ok(Expr::Variable(Variable::new(u.nom, u.coef + v.coef)))
        }

        (Op::Mul, Expr::Literal(k), Expr::Variable(v))
        | (Op::Mul, Expr::Variable(v), Expr::Literal(k)) => Ok(Expr::Variable(v.fois(&k))),

        (Op::Div, Expr::Variable(v), Expr::Literal(k)) => Ok(Expr::Variable(v.divise(&k)?)),

        (op, a, b) => Ok(Expr::binaire(op, a, b)),
    }
}

/// Pousse le multiplicateur `k` dans une expression :
/// - feuille        : k * feuille
/// - a + b, a - b   : (k*a) op (k*b)
/// - a * b, a / b   : (k*a) op b
fn distribuer(noeud: Expr, k: &BigRational) -> Expr {
    let facteur = || Expr::Literal(k.clone());

    match noeud {
        Expr::Literal(_) | Expr::Variable(_) => Expr::binaire(Op::Mul, facteur(), noeud),
        Expr::BinaryOp {
            op: op @ (Op::Add | Op::Sub),
            left,
            right,
        } => Expr::binaire(op, distribuer(*left, k), distribuer(*right, k)),
        Expr::BinaryOp {
            op: op @ (Op::Mul | Op::Div),
            left,
            right,
        } => Expr::binaire(op, Expr::binaire(Op::Mul, facteur(), *left), *right),
    }
}

/* ------------------------ Migration des termes ------------------------ */

/// Aplatit les `+`/`-` depuis la racine en termes signés.
/// L’opérande droit d’un '-' apporte ses termes négatifs.
fn collecter_termes(expr: &Expr, positif: bool, out: &mut Vec<Expr>) -> Resultat<()> {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) => {
            let terme = expr.clone();
            out.push(if positif { terme } else { terme.negate() });
            Ok(())
        }
        Expr::BinaryOp {
            op: Op::Add,
            left,
            right,
        } => {
            collecter_termes(left, positif, out)?;
            collecter_termes(right, positif, out)
        }
        Expr::BinaryOp {
            op: Op::Sub,
            left,
            right,
        } => {
            collecter_termes(left, positif, out)?;
            collecter_termes(right, !positif, out)
        }
        non_lineaire => Err(Erreur::NonLinearTerm(non_lineaire.to_string())),
    }
}

fn somme(termes: Vec<Expr>) -> Option<Expr> {
    termes.into_iter().reduce(|acc, t| acc + t)
}

/// Variables à gauche, littéraux à droite ; un terme qui change de membre
/// change de signe. Les deux listes sont construites d’abord, la nouvelle
/// équation une seule fois ensuite.
fn migrer_termes(eq: &Equation) -> Resultat<Equation> {
    let mut termes_gauche = Vec::new();
    let mut termes_droite = Vec::new();
    collecter_termes(&eq.left, true, &mut termes_gauche)?;
    collecter_termes(&eq.right, true, &mut termes_droite)?;

    let mut variables = Vec::new();
    let mut litteraux = Vec::new();

    for terme in termes_gauche {
        match terme {
            Expr::Variable(_) => variables.push(terme),
            _ => litteraux.push(terme.negate()),
        }
    }
    for terme in termes_droite {
        match terme {
            Expr::Variable(_) => variables.push(terme.negate()),
            _ => litteraux.push(terme),
        }
    }

    let gauche = somme(variables).ok_or(Erreur::NoUnknown)?;
    let droite = somme(litteraux).unwrap_or_else(|| Expr::Literal(BigRational::zero()));

    Ok(Equation::new(gauche, droite))
}
