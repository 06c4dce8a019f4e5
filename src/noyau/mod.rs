//! Noyau exact Q-pur : équations linéaires à une inconnue
//!
//! Organisation interne :
//! - erreur.rs    : Erreur + Resultat
//! - jetons.rs    : tokenisation (un jeton par caractère)
//! - expr.rs      : AST exact (Literal / Variable / BinaryOp) + Equation
//! - format.rs    : rendu infixe, parenthèses minimales
//! - lecture.rs   : littéraux décimaux exacts + lecture décimale tronquée
//! - parseur.rs   : descente récursive
//! - solveur.rs   : réduction, migration des termes, forme résolue
//! - reglages.rs  : passes max + digits (bornés)
//! - eval.rs      : pipeline complet

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod lecture;
pub mod parseur;
pub mod reglages;
pub mod solveur;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{Erreur, Resultat};
pub use eval::{eval_equation, DemarcheNoyau, Evaluation};
pub use reglages::Reglages;
