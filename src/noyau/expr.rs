// src/noyau/expr.rs
//
// AST exact (sans flottants).
// - Literal  : rationnel exact
// - Variable : une lettre + coefficient rationnel (par défaut x, 1)
// - BinaryOp : + - * / non évalué
// - Equation : la racine (gauche = droite)
//
// Arbre strict : chaque noeud possède ses enfants (Box), jamais partagés.
// L’égalité est structurelle (derive), utilisée par le solveur et les tests.
// Le rendu texte vit dans format.rs.

use std::collections::BTreeSet;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::erreur::{Erreur, Resultat};

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Add | Op::Sub => 1,
            Op::Mul | Op::Div => 2,
        }
    }

    /// '-' et '/' : l’ordre des opérandes compte.
    pub fn est_commutatif(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    /// Évaluation exacte sur deux rationnels.
    pub fn applique(self, a: &BigRational, b: &BigRational) -> Resultat<BigRational> {
        match self {
            Op::Add => Ok(a + b),
            Op::Sub => Ok(a - b),
            Op::Mul => Ok(a * b),
            Op::Div => diviser(a, b),
        }
    }
}

/// Division exacte ; un diviseur nul est une erreur, jamais une panique.
pub fn diviser(a: &BigRational, b: &BigRational) -> Resultat<BigRational> {
    if b.is_zero() {
        return Err(Erreur::DivisionByZero);
    }
    Ok(a / b)
}

/// Raccourci : entier -> rationnel.
pub fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

/// Raccourci : n/d -> rationnel (d != 0, réservé aux constantes connues).
pub fn frac(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/* ------------------------ Variable ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub nom: char,
    pub coef: BigRational,
}

impl Default for Variable {
    fn default() -> Self {
        Variable {
            nom: 'x',
            coef: BigRational::one(),
        }
    }
}

impl Variable {
    pub fn new(nom: char, coef: BigRational) -> Self {
        Variable { nom, coef }
    }

    /// Même inconnue, coefficient 1.
    pub fn unitaire(nom: char) -> Self {
        Variable::new(nom, BigRational::one())
    }

    pub fn fois(self, k: &BigRational) -> Self {
        Variable::new(self.nom, self.coef * k)
    }

    pub fn divise(self, k: &BigRational) -> Resultat<Self> {
        Ok(Variable::new(self.nom, diviser(&self.coef, k)?))
    }
}

/* ------------------------ Expressions ------------------------ */

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Literal(BigRational),
    Variable(Variable),
    BinaryOp {
        op: Op,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn literal(n: i64) -> Expr {
        Expr::Literal(rat(n))
    }

    pub fn fraction(n: i64, d: i64) -> Expr {
        Expr::Literal(frac(n, d))
    }

    pub fn var(nom: char) -> Expr {
        Expr::Variable(Variable::unitaire(nom))
    }

    pub fn var_coef(nom: char, coef: BigRational) -> Expr {
        Expr::Variable(Variable::new(nom, coef))
    }

    pub fn binaire(op: Op, left: Expr, right: Expr) -> Expr {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Moins unaire :
    /// - Literal  => valeur opposée
    /// - Variable => coefficient opposé
    /// - sinon    => (-1) * noeud (on ne “pénètre” pas une expression composée)
    pub fn negate(self) -> Expr {
        match self {
            Expr::Literal(v) => Expr::Literal(-v),
            Expr::Variable(v) => Expr::Variable(Variable::new(v.nom, -v.coef)),
            composee => Expr::binaire(Op::Mul, Expr::literal(-1), composee),
        }
    }

    /// Collecte les noms d’inconnues présents (ordre alphabétique).
    pub fn noms_variables(&self, out: &mut BTreeSet<char>) {
        match self {
            Expr::Variable(v) => {
                out.insert(v.nom);
            }
            Expr::Literal(_) => {}
            Expr::BinaryOp { left, right, .. } => {
                left.noms_variables(out);
                right.noms_variables(out);
            }
        }
    }
}

// Surcharges : rendent la construction d’arbres lisible (tests, solveur).

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::binaire(Op::Add, self, rhs)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::binaire(Op::Sub, self, rhs)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::binaire(Op::Mul, self, rhs)
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::binaire(Op::Div, self, rhs)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        self.negate()
    }
}

/* ------------------------ Racine ------------------------ */

/// L’équation elle-même : `left = right`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub left: Expr,
    pub right: Expr,
}

impl Equation {
    pub fn new(left: Expr, right: Expr) -> Self {
        Equation { left, right }
    }

    pub fn noms_variables(&self) -> BTreeSet<char> {
        let mut noms = BTreeSet::new();
        self.left.noms_variables(&mut noms);
        self.right.noms_variables(&mut noms);
        noms
    }
}
