// src/noyau/erreur.rs
//
// Erreurs du noyau (jetons -> parse -> solveur).
// Une seule famille : le pipeline est “fail-fast”, aucune étape ne rattrape
// l’erreur d’une autre, et le message est affiché tel quel à l’utilisateur.

use thiserror::Error;

use super::jetons::Token;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Erreur {
    /* ------------------------ Jetons ------------------------ */
    /// Rien après suppression des espaces (ou liste de jetons vide).
    #[error("entrée vide")]
    EmptyInput,

    #[error("caractère invalide : '{0}'")]
    InvalidCharacter(char),

    /* ------------------------ Syntaxe ------------------------ */
    /// Zéro ou plusieurs '=' (même message dans les deux cas).
    #[error("l’équation doit avoir exactement un signe '='")]
    MalformedEquation,

    #[error("jeton inattendu : {0}")]
    UnexpectedToken(Token),

    /// Un opérande était attendu mais le membre est épuisé (ex: "2 + = x").
    #[error("fin de membre inattendue : opérande attendu")]
    UnexpectedEnd,

    #[error("')' attendue")]
    UnmatchedParenthesis,

    #[error("une variable doit tenir en exactement une lettre : \"{0}\"")]
    InvalidVariableName(String),

    #[error("nombre invalide : \"{0}\"")]
    InvalidNumberLiteral(String),

    /// Parenthèses ou opérateurs chaînés au-delà du plafond d’imbrication.
    #[error("expression trop imbriquée (plus de {0} niveaux)")]
    TooDeep(usize),

    /* ------------------------ Calcul / résolution ------------------------ */
    #[error("division par zéro")]
    DivisionByZero,

    #[error("aucune inconnue dans l’équation")]
    NoUnknown,

    #[error("plusieurs inconnues : '{0}' et '{1}' (une seule est permise)")]
    MultipleUnknowns(char, char),

    #[error("terme non linéaire : {0}")]
    NonLinearTerm(String),

    #[error("pas de forme résolue après {0} passe(s)")]
    NoProgress(usize),
}

pub type Resultat<T> = std::result::Result<T, Erreur>;
