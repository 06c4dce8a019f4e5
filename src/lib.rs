//! Solveur exact d’équations linéaires à une inconnue.
//!
//! ```
//! use equation_qpur::{parse, solve, tokenize};
//!
//! let eq = parse(&tokenize("3 * (2 + r) = 15").unwrap()).unwrap();
//! assert_eq!(solve(eq).unwrap().to_string(), "r = 3");
//! ```

pub mod noyau;

pub use noyau::erreur::{Erreur, Resultat};
pub use noyau::eval::{eval_equation, Evaluation};
pub use noyau::expr::{Equation, Expr, Op, Variable};
pub use noyau::jetons::{tokenize, Token, TokenType};
pub use noyau::parseur::parse;
pub use noyau::reglages::Reglages;
pub use noyau::solveur::{solve, solve_expr, Solveur};
