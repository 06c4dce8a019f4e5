// src/noyau/parseur.rs
//
// Descente récursive : suite de jetons -> Equation.
//
// ```text
// equation   := expression EQUAL expression
// expression := term { (PLUS|MINUS) term }
// term       := factor { (MULTIPLY|DIVIDE) factor }
// factor     := [PLUS|MINUS] ( atom | LPAREN expression RPAREN )
// atom       := number [LETTER] | LETTER
// number     := DOT digit{digit} | digit{digit} [DOT digit{digit}]
// ```
//
// Chaque membre est analysé séparément et doit être consommé en entier.
// La profondeur (parenthèses + opérateurs chaînés) est plafonnée à IMBRICATION_MAX.

use num_rational::BigRational;
use tracing::debug;

use super::erreur::{Erreur, Resultat};
use super::expr::{Equation, Expr, Op};
use super::jetons::{Token, TokenType};
use super::lecture::rationnel_decimal;
use super::reglages::IMBRICATION_MAX;

/// Analyse une équation complète.
///
/// - liste vide => `EmptyInput`
/// - zéro ou plusieurs '=' => `MalformedEquation`
pub fn parse(tokens: &[Token]) -> Resultat<Equation> {
    if tokens.is_empty() {
        return Err(Erreur::EmptyInput);
    }

    let egaux: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| t.kind == TokenType::Equal)
        .map(|(i, _)| i)
        .collect();

    let &[i] = egaux.as_slice() else {
        return Err(Erreur::MalformedEquation);
    };

    let left = parse_membre(&tokens[..i])?;
    let right = parse_membre(&tokens[i + 1..])?;

    let eq = Equation::new(left, right);
    debug!(equation = %eq, "analyse");
    Ok(eq)
}

/// Analyse un membre (sans '='). Tout jeton restant est une erreur.
pub fn parse_membre(tokens: &[Token]) -> Resultat<Expr> {
    let mut p = Parseur::new(tokens);
    let expr = p.expression()?;

    match p.peek() {
        None => Ok(expr),
        Some(reste) => Err(Erreur::UnexpectedToken(reste.clone())),
    }
}

#[derive(Debug, Clone)]
struct Parseur<'a> {
    tokens: &'a [Token],
    pos: usize,
    profondeur: usize,
}

impl<'a> Parseur<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Parseur {
            tokens,
            pos: 0,
            profondeur: 0,
        }
    }

    fn descendre(&mut self) -> Resultat<()> {
        self.profondeur += 1;
        if self.profondeur > IMBRICATION_MAX {
            return Err(Erreur::TooDeep(IMBRICATION_MAX));
        }
        Ok(())
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<TokenType> {
        self.peek().map(|t| t.kind)
    }

    /// Consomme le jeton courant s’il est l’un des opérateurs `attendus`.
    fn operateur(&mut self, attendus: &[Op]) -> Option<Op> {
        let op = match self.peek_kind()? {
            TokenType::Plus => Op::Add,
            TokenType::Minus => Op::Sub,
            TokenType::Multiply => Op::Mul,
            TokenType::Divide => Op::Div,
            _ => return None,
        };

        if attendus.contains(&op) {
            self.pos += 1;
            Some(op)
        } else {
            None
        }
    }

    // Chaque opérateur chaîné ajoute un niveau à gauche : compté jusqu’à la fin de la chaîne.
    fn expression(&mut self) -> Resultat<Expr> {
        let base = self.profondeur;
        let mut noeud = self.term()?;
        while let Some(op) = self.operateur(&[Op::Add, Op::Sub]) {
            self.descendre()?;
            let droite = self.term()?;
            noeud = Expr::binaire(op, noeud, droite);
        }
        self.profondeur = base;
        Ok(noeud)
    }

    fn term(&mut self) -> Resultat<Expr> {
        let base = self.profondeur;
        let mut noeud = self.factor()?;
        while let Some(op) = self.operateur(&[Op::Mul, Op::Div]) {
            self.descendre()?;
            let droite = self.factor()?;
            noeud = Expr::binaire(op, noeud, droite);
        }
        self.profondeur = base;
        Ok(noeud)
    }

    fn factor(&mut self) -> Resultat<Expr> {
        // '+' unaire : sans effet ; '-' unaire : Expr::negate
        let negatif = self.operateur(&[Op::Add, Op::Sub]) == Some(Op::Sub);

        let jeton = self.peek().ok_or(Erreur::UnexpectedEnd)?;
        let noeud = match jeton.kind {
            TokenType::Digit | TokenType::Dot | TokenType::Letter => self.atome()?,
            TokenType::LParen => {
                self.pos += 1;
                self.descendre()?;
                let inner = self.expression()?;
                if self.peek_kind() != Some(TokenType::RParen) {
                    return Err(Erreur::UnmatchedParenthesis);
                }
                self.pos += 1;
                self.profondeur -= 1;
                inner
            }
            _ => return Err(Erreur::UnexpectedToken(jeton.clone())),
        };

        Ok(if negatif { noeud.negate() } else { noeud })
    }

    /// nombre seul => Literal ; nombre + lettre => Variable(coef) ; lettre => Variable(1)
    fn atome(&mut self) -> Resultat<Expr> {
        if self.peek_kind() == Some(TokenType::Letter) {
            return Ok(Expr::var(self.nom_variable()?));
        }

        let valeur = self.nombre()?;
        if self.peek_kind() == Some(TokenType::Letter) {
            let nom = self.nom_variable()?;
            return Ok(Expr::var_coef(nom, valeur));
        }
        Ok(Expr::Literal(valeur))
    }

    fn prendre_tant_que(&mut self, kind: TokenType) -> String {
        let mut out = String::new();
        while let Some(t) = self.peek().filter(|t| t.kind == kind) {
            out.push(t.lexeme);
            self.pos += 1;
        }
        out
    }

    fn nombre(&mut self) -> Resultat<BigRational> {
        let mut texte = self.prendre_tant_que(TokenType::Digit);
        if self.peek_kind() == Some(TokenType::Dot) {
            self.pos += 1;
            texte.push('.');
            texte.push_str(&self.prendre_tant_que(TokenType::Digit));
        }
        rationnel_decimal(&texte)
    }

    /// Une suite de lettres est lue en entier, puis refusée si elle dépasse une lettre.
    fn nom_variable(&mut self) -> Resultat<char> {
        let lettres = self.prendre_tant_que(TokenType::Letter);
        let mut it = lettres.chars();
        match (it.next(), it.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Erreur::InvalidVariableName(lettres)),
        }
    }
}
