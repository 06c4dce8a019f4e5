// src/noyau/jetons.rs
//
// Tokenisation : un caractère = un jeton.
// Les nombres (suite de Digit/Dot) et les noms (suite de Letter) sont
// assemblés plus tard, par le parseur.

use std::fmt;

use tracing::trace;

use super::erreur::{Erreur, Resultat};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenType {
    Equal,
    Plus,
    Minus,
    Multiply,
    Divide,
    LParen,
    RParen,
    Digit,
    Dot,
    Letter,
}

/// Jeton : genre + le caractère d’origine.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub lexeme: char,
}

impl Token {
    pub fn new(kind: TokenType, lexeme: char) -> Self {
        Token { kind, lexeme }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} '{}'", self.kind, self.lexeme)
    }
}

/// Classe un caractère isolé (déjà débarrassé des espaces).
fn classer(c: char) -> Option<TokenType> {
    let kind = match c {
        '=' => TokenType::Equal,
        '+' => TokenType::Plus,
        '-' => TokenType::Minus,
        '*' => TokenType::Multiply,
        '/' => TokenType::Divide,
        '(' => TokenType::LParen,
        ')' => TokenType::RParen,
        '.' => TokenType::Dot,
        // chiffres ASCII seulement : ils finissent dans un BigInt
        c if c.is_ascii_digit() => TokenType::Digit,
        // lettres : ASCII ou Unicode (x, é, λ…)
        c if c.is_alphabetic() => TokenType::Letter,
        _ => return None,
    };
    Some(kind)
}

/// Tokenize une équation.
///
/// - supprime TOUS les espaces (y compris internes, tabulations, retours ligne)
/// - un jeton par caractère restant
/// - entrée vide après nettoyage => `EmptyInput`
/// - caractère hors alphabet => `InvalidCharacter(c)`
pub fn tokenize(texte: &str) -> Resultat<Vec<Token>> {
    let mut out = Vec::with_capacity(texte.len());

    for c in texte.chars().filter(|c| !c.is_whitespace()) {
        match classer(c) {
            Some(kind) => out.push(Token::new(kind, c)),
            None => return Err(Erreur::InvalidCharacter(c)),
        }
    }

    if out.is_empty() {
        return Err(Erreur::EmptyInput);
    }

    trace!(jetons = out.len(), "tokenisation");
    Ok(out)
}

/// Format utilitaire (démarche) : les lexèmes séparés par un espace.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 2);
    for (i, t) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(t.lexeme);
    }
    out
}
