//! src/app/etat.rs
//!
//! État de session (sans rendu).
//!
//! Rôle : contenir l’état du solveur interactif (entrée, résultats, erreur, réglages, démarche)
//! et offrir des opérations simples (CLR/AC/digits) sans logique d’affichage.
//!
//! Contrats :
//! - Une seule porte vers le noyau : `resoudre()`.
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : bornes sur digits et passes (via Reglages::borne).

use equation_qpur::noyau::reglages::{Reglages, DIGITS_MAX};
use equation_qpur::noyau::{eval_equation, DemarcheNoyau};

#[derive(Clone, Debug)]
pub struct AppSolveur {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub exact: String,       // forme résolue, ex. "x = (-6/5)"
    pub lecture: String,     // lecture décimale tronquée
    pub erreur: String,      // message d’erreur (si lecture/résolution échoue)
    pub lecture_dispo: bool, // false si erreur / vide

    // --- démarche ---
    pub demarche: DemarcheNoyau,
    pub afficher_demarche: bool,

    // --- paramètres ---
    pub reglages: Reglages,
}

impl Default for AppSolveur {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppSolveur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            entree: String::new(),
            exact: String::new(),
            lecture: String::new(),
            erreur: String::new(),
            lecture_dispo: false, // au démarrage : rien à lire
            demarche: DemarcheNoyau::default(),
            afficher_demarche: false,
            reglages: reglages.borne(),
        }
    }

    /* ------------------------ Actions (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + réglages par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.reglages = Reglages::default();
        self.afficher_demarche = false;
    }

    /// CLR : effacer résultats + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.exact.clear();
        self.lecture.clear();
        self.erreur.clear();
        self.lecture_dispo = false;
        self.demarche = DemarcheNoyau::default();
    }

    /// Place une erreur.
    ///
    /// On CONSERVE `exact` (dernier résultat) ; lecture et démarche sont coupées.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.lecture.clear();
        self.lecture_dispo = false;
        self.demarche = DemarcheNoyau::default();
    }

    /// Dépose un résultat complet (EXACT + lecture optionnelle + démarche).
    pub fn set_resultats(
        &mut self,
        exact: impl Into<String>,
        lecture: Option<String>,
        demarche: DemarcheNoyau,
    ) {
        self.erreur.clear();
        self.exact = exact.into();
        self.demarche = demarche;

        if let Some(v) = lecture {
            self.lecture_dispo = true;
            self.lecture = v;
        } else {
            self.lecture_dispo = false;
            self.lecture.clear();
        }
    }

    pub fn set_digits(&mut self, digits: usize) {
        self.reglages.digits = digits.min(DIGITS_MAX);
    }

    pub fn basculer_demarche(&mut self) {
        self.afficher_demarche = !self.afficher_demarche;
    }

    /// Résout `entree` via le noyau et dépose résultat ou erreur.
    pub fn resoudre(&mut self) {
        match eval_equation(&self.entree, &self.reglages) {
            Ok(ev) => self.set_resultats(ev.exact, ev.lecture, ev.demarche),
            Err(e) => self.set_erreur(e.to_string()),
        }
    }

    pub fn a_erreur(&self) -> bool {
        !self.erreur.is_empty()
    }
}
