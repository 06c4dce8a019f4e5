// src/noyau/reglages.rs
//
// Réglages du noyau (solveur + lecture décimale), avec bornes dures.

/// Passes du solveur par défaut. Une équation linéaire bien formée se résout
/// en deux passes (réduction + migration, puis forme terminale).
pub const PASSES_DEFAUT: usize = 16;

/// Garde-fou : plafond des passes.
pub const PASSES_MAX: usize = 1024;

/// Précision de la lecture décimale par défaut.
pub const DIGITS_DEFAUT: usize = 20;

/// Garde-fou : on borne la précision (anti-abus / anti-gel).
pub const DIGITS_MAX: usize = 200;

/// Garde-fou : niveaux d’imbrication d’un membre (parenthèses + opérateurs chaînés).
pub const IMBRICATION_MAX: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reglages {
    pub passes_max: usize,
    pub digits: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Reglages {
            passes_max: PASSES_DEFAUT,
            digits: DIGITS_DEFAUT,
        }
    }
}

impl Reglages {
    /// Ramène chaque champ dans ses bornes (au moins une passe).
    pub fn borne(self) -> Self {
        Reglages {
            passes_max: self.passes_max.clamp(1, PASSES_MAX),
            digits: self.digits.min(DIGITS_MAX),
        }
    }
}
