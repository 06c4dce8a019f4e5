// src/noyau/lecture.rs
//
// Lecture décimale exacte, dans les deux sens :
// - texte "5.25" / ".5" / "12"  -> rationnel exact (jamais de f64)
// - rationnel -> texte décimal tronqué à `digits` chiffres (affichage)

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::{Erreur, Resultat};

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/* ------------------------ Texte -> rationnel ------------------------ */

/// Convertit un littéral décimal en rationnel exact.
///
/// Formes acceptées : `DIGITS`, `DIGITS.DIGITS`, `.DIGITS`.
/// Refusées : `""`, `"."`, `"5."` (un point exige des chiffres derrière).
pub fn rationnel_decimal(texte: &str) -> Resultat<BigRational> {
    let invalide = || Erreur::InvalidNumberLiteral(texte.to_string());

    let (entier, fraction) = match texte.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (texte, None),
    };

    let tout_chiffres = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !tout_chiffres(entier) {
        return Err(invalide());
    }

    let mut valeur = if entier.is_empty() {
        BigInt::zero()
    } else {
        BigInt::parse_bytes(entier.as_bytes(), 10).ok_or_else(invalide)?
    };

    let mut echelle = 0usize;
    match fraction {
        // "" ou "."
        None if entier.is_empty() => return Err(invalide()),
        None => {}
        Some(f) => {
            if f.is_empty() || !tout_chiffres(f) {
                return Err(invalide());
            }
            let chiffres = BigInt::parse_bytes(f.as_bytes(), 10).ok_or_else(invalide)?;
            echelle = f.len();
            valeur = valeur * pow10(echelle) + chiffres;
        }
    }

    // BigRational::new réduit : 525/100 -> 21/4
    Ok(BigRational::new(valeur, pow10(echelle)))
}

/* ------------------------ Rationnel -> texte décimal ------------------------ */

/// Convertit un entier “scalé” (×10^digits) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// r -> entier “scalé” = trunc(r * 10^digits)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = pow10(digits);
    (r.numer() * scale) / r.denom()
}

/// Lecture décimale tronquée (vers zéro) d’un rationnel.
pub fn lecture_decimale(r: &BigRational, digits: usize) -> String {
    scaled_to_decimal(rational_scaled(r, digits), digits)
}
