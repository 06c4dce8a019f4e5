// src/app.rs
//
// Solveur Q-pur : module App (racine)
// -----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppSolveur (pour main.rs: use app::AppSolveur;)
// - Fournir la boucle de session (lignes sur stdin, rendu sur stdout)
//
// Commandes de session (une par ligne) :
//   :digits N   précision de la lecture décimale
//   :demarche   affiche / masque la démarche
//   :clr        efface résultats + erreur + démarche
//   :ac         remise à zéro totale
//   :q          quitte
// Toute autre ligne non vide est une équation.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use app::AppSolveur;`
pub use etat::AppSolveur;

use std::io::{self, BufRead, Write};

use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Resoudre(String),
    Digits(usize),
    Demarche,
    ClearResultats,
    ResetTotal,
    Quitter,
    Vide,
    Inconnue(String),
}

impl Commande {
    pub fn lire(ligne: &str) -> Commande {
        let ligne = ligne.trim();
        if ligne.is_empty() {
            return Commande::Vide;
        }
        let Some(cmd) = ligne.strip_prefix(':') else {
            return Commande::Resoudre(ligne.to_string());
        };

        let mut mots = cmd.split_whitespace();
        match (mots.next(), mots.next(), mots.next()) {
            (Some("digits"), Some(n), None) => match n.parse() {
                Ok(n) => Commande::Digits(n),
                Err(_) => Commande::Inconnue(ligne.to_string()),
            },
            (Some("demarche"), None, _) => Commande::Demarche,
            (Some("clr"), None, _) => Commande::ClearResultats,
            (Some("ac"), None, _) => Commande::ResetTotal,
            (Some("q"), None, _) => Commande::Quitter,
            _ => Commande::Inconnue(ligne.to_string()),
        }
    }
}

impl AppSolveur {
    /// Applique une commande ; renvoie le texte à afficher (vide si rien).
    /// `None` : fin de session.
    pub fn executer(&mut self, commande: Commande) -> Option<String> {
        debug!(?commande, "commande");
        let sortie = match commande {
            Commande::Resoudre(texte) => {
                self.entree = texte;
                self.resoudre();
                self.rendu()
            }
            Commande::Digits(n) => {
                self.set_digits(n);
                format!("digits = {}\n", self.reglages.digits)
            }
            Commande::Demarche => {
                self.basculer_demarche();
                let etat = if self.afficher_demarche { "affichée" } else { "masquée" };
                format!("démarche {etat}\n")
            }
            Commande::ClearResultats => {
                self.clear_resultats();
                String::new()
            }
            Commande::ResetTotal => {
                self.reset_total();
                String::new()
            }
            Commande::Quitter => return None,
            Commande::Vide => String::new(),
            Commande::Inconnue(ligne) => format!("commande inconnue : {ligne}\n"),
        };
        Some(sortie)
    }
}

/// Session interactive : une ligne lue, une réponse écrite.
pub fn session<R: BufRead, W: Write>(
    app: &mut AppSolveur,
    entree: R,
    mut sortie: W,
) -> io::Result<()> {
    for ligne in entree.lines() {
        let ligne = ligne?;
        let Some(texte) = app.executer(Commande::lire(&ligne)) else {
            break;
        };
        sortie.write_all(texte.as_bytes())?;
        sortie.flush()?;
    }
    Ok(())
}
