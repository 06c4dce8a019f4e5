//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe) + proptest pour les propriétés
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (division par zéro, terme non linéaire, pas d’inconnue)
//! - invariant clé : toute solution rendue vérifie l’équation de départ

use std::time::{Duration, Instant};

use num_rational::BigRational;
use proptest::prelude::*;

use super::erreur::Erreur;
use super::eval_equation;
use super::expr::{frac, rat, Equation, Expr, Op, Variable};
use super::jetons::{tokenize, Token, TokenType};
use super::parseur::{parse, parse_membre};
use super::reglages::Reglages;
use super::solveur::{solve, solve_expr};

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
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &Erreur) -> bool {
    // Liste blanche : le domaine est volontairement limité (linéaire, une inconnue).
    matches!(
        e,
        Erreur::DivisionByZero | Erreur::NonLinearTerm(_) | Erreur::NoUnknown
    )
}

/// Valeur exacte d’un membre pour une valeur donnée de l’inconnue.
fn valeur(expr: &Expr, x: &BigRational) -> Option<BigRational> {
    match expr {
        Expr::Literal(v) => Some(v.clone()),
        Expr::Variable(v) => Some(&v.coef * x),
        Expr::BinaryOp { op, left, right } => {
            let a = valeur(left, x)?;
            let b = valeur(right, x)?;
            op.applique(&a, &b).ok()
        }
    }
}

/// Substitue la solution dans l’équation de départ : les deux membres doivent coïncider.
fn check_solution(texte: &str, x: &BigRational) {
    let eq = parse(&tokenize(texte).unwrap()).unwrap();
    let g = valeur(&eq.left, x);
    let d = valeur(&eq.right, x);
    assert!(g.is_some(), "membre gauche non évaluable: {texte:?}");
    assert_eq!(g, d, "solution fausse: texte={texte:?} x={x}");
}

/* ------------------------ Génération d’équations (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    let k = rng.pick(10);
    match rng.pick(4) {
        0 => "x".to_string(),
        1 => format!("{k}x"),
        2 => format!("(-{k})"),
        _ => format!("{k}"),
    }
}

fn gen_membre(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let sous = |rng: &mut Rng| gen_membre(rng, depth - 1);
    match rng.pick(7) {
        0 | 1 => gen_atom(rng),
        2 => format!("({}+{})", sous(rng), sous(rng)),
        3 => format!("({}-{})", sous(rng), sous(rng)),
        4 => format!("({}*{})", sous(rng), sous(rng)),
        5 => format!("({}/{})", sous(rng), sous(rng)),
        _ => format!("-({})", sous(rng)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests déterministes ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_verification() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // Même seed => mêmes équations => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);
    let reglages = Reglages::default();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let texte = format!("{} = {}", gen_membre(&mut rng, 3), gen_membre(&mut rng, 3));

        match eval_equation(&texte, &reglages) {
            Ok(ev) => {
                let Expr::Literal(x) = &ev.solution.right else {
                    panic!("forme non résolue: {}", ev.exact);
                };
                assert_eq!(ev.solution.left, Expr::Variable(Variable::unitaire('x')));
                assert!(ev.lecture.is_some());
                check_solution(&texte, x);

                // déterminisme
                let bis = eval_equation(&texte, &reglages).map(|e| e.exact);
                assert_eq!(bis, Ok(ev.exact));
                seen_ok += 1;
            }
            Err(e) => {
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: texte={texte:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let gauche = somme_balancee("x", 800);
    budget(t0, max);

    let ev = eval_equation(&format!("{gauche} = 400"), &Reglages::default())
        .unwrap_or_else(|e| panic!("err: {e}"));
    budget(t0, max);

    // 800x = 400
    assert_eq!(ev.exact, "x = 1/2");
}

/* ------------------------ Propriétés (proptest) ------------------------ */

fn jeton_non_egal() -> impl Strategy<Value = Token> {
    prop::sample::select(vec![
        Token::new(TokenType::Plus, '+'),
        Token::new(TokenType::Minus, '-'),
        Token::new(TokenType::Multiply, '*'),
        Token::new(TokenType::Divide, '/'),
        Token::new(TokenType::LParen, '('),
        Token::new(TokenType::RParen, ')'),
        Token::new(TokenType::Digit, '7'),
        Token::new(TokenType::Dot, '.'),
        Token::new(TokenType::Letter, 'x'),
    ])
}

fn op() -> impl Strategy<Value = Op> {
    prop::sample::select(vec![Op::Add, Op::Sub, Op::Mul, Op::Div])
}

/// Arbres de littéraux (entiers et fractions), profondeur bornée.
fn arbre_litteral() -> impl Strategy<Value = Expr> {
    let feuille = prop_oneof![
        (-20i64..20).prop_map(Expr::literal),
        (-20i64..20, 2i64..9).prop_map(|(n, d)| Expr::Literal(frac(n, d))),
    ];
    feuille.prop_recursive(4, 32, 2, |inner| {
        (op(), inner.clone(), inner).prop_map(|(op, l, r)| Expr::binaire(op, l, r))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn blancs_seuls_refuses(s in "[ \t\r\n]*") {
        prop_assert_eq!(tokenize(&s), Err(Erreur::EmptyInput));
    }

    #[test]
    fn egal_unique_exige(
        jetons in prop::collection::vec(jeton_non_egal(), 1..12),
        n_egal in prop::sample::select(vec![0usize, 2, 3]),
        positions in prop::collection::vec(any::<usize>(), 3),
    ) {
        let mut jetons = jetons;
        for p in positions.into_iter().take(n_egal) {
            let i = p % (jetons.len() + 1);
            jetons.insert(i, Token::new(TokenType::Equal, '='));
        }
        prop_assert_eq!(parse(&jetons), Err(Erreur::MalformedEquation));
    }

    #[test]
    fn forme_resolue_stable(n in -50i64..50, d in 1i64..20) {
        let eq = Equation::new(Expr::var('x'), Expr::Literal(frac(n, d)));
        prop_assert_eq!(solve(eq.clone()), Ok(eq));
    }

    #[test]
    fn rendu_puis_relecture_meme_valeur(t in arbre_litteral()) {
        let texte = t.to_string();
        let relu = parse_membre(&tokenize(&texte).unwrap()).unwrap();
        prop_assert_eq!(solve_expr(relu), solve_expr(t), "texte={}", texte);
    }

    #[test]
    fn affine_deux_membres(
        a in 1i64..30,
        c in 1i64..30,
        b in -30i64..30,
        d in -30i64..30,
        n in prop::sample::select(vec!['x', 'y', 'k', 'é']),
    ) {
        prop_assume!(a != c);
        let texte = format!("{a}{n} + {b} = {c}{n} + {d}");
        let eq = parse(&tokenize(&texte).unwrap()).unwrap();
        let attendu = Equation::new(
            Expr::Variable(Variable::unitaire(n)),
            Expr::Literal(rat(d - b) / rat(a - c)),
        );
        prop_assert_eq!(solve(eq), Ok(attendu), "texte={}", texte);
    }
}
