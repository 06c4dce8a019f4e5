// src/noyau/format.rs
//
// Rendu texte infixe (inverse du parseur) :
// - Literal  : "n" ou "n/d", entre parenthèses si négatif : "(-9)", "(-6/5)" ;
//              "n/d" se lit comme une division : "x / (1/2)"
// - Variable : coef||nom, coef omis s’il vaut 1 : "x", "3k", "-1w", "1/2b"
// - BinaryOp : "a op b", parenthèses minimales
// - Equation : "gauche = droite"

use std::fmt;

use num_rational::BigRational;
use num_traits::{One, Signed};

use super::expr::{Equation, Expr, Op, Variable};

/* ------------------------ Helpers rationnels ------------------------ */

pub fn format_rat(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/// Précédence d’un enfant tel qu’il s’écrit ; `None` si rien à protéger.
fn precedence_ecrite(enfant: &Expr) -> Option<u8> {
    match enfant {
        Expr::BinaryOp { op, .. } => Some(op.precedence()),
        // négatif : déjà entre parenthèses
        Expr::Literal(r) if !r.denom().is_one() && !r.is_negative() => {
            Some(Op::Div.precedence())
        }
        _ => None,
    }
}

/// Un enfant prend des parenthèses si :
/// - sa précédence est strictement plus faible que celle du parent ;
/// - ou précédence égale, parent non commutatif (- ou /), enfant à droite.
fn besoin_parentheses(parent: Op, enfant: &Expr, a_gauche: bool) -> bool {
    let Some(p_enfant) = precedence_ecrite(enfant) else {
        return false;
    };

    let p_parent = parent.precedence();

    p_enfant < p_parent || (p_enfant == p_parent && !parent.est_commutatif() && !a_gauche)
}

fn ecrire_operande(
    f: &mut fmt::Formatter<'_>,
    parent: Op,
    enfant: &Expr,
    a_gauche: bool,
) -> fmt::Result {
    if besoin_parentheses(parent, enfant, a_gauche) {
        write!(f, "({enfant})")
    } else {
        write!(f, "{enfant}")
    }
}

/* ------------------------ Display ------------------------ */

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coef.is_one() {
            write!(f, "{}", self.nom)
        } else {
            write!(f, "{}{}", format_rat(&self.coef), self.nom)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(r) if r.is_negative() => write!(f, "({})", format_rat(r)),
            Expr::Literal(r) => write!(f, "{}", format_rat(r)),
            Expr::Variable(v) => write!(f, "{v}"),
            Expr::BinaryOp { op, left, right } => {
                ecrire_operande(f, *op, left, true)?;
                write!(f, " {op} ")?;
                ecrire_operande(f, *op, right, false)
            }
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.left, self.right)
    }
}
