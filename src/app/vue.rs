// src/app/vue.rs
//
// Vue texte (terminal)
// --------------------
// - Même AppSolveur (etat.rs) pour le mode ligne de commande et la session
// - Sections : EXACT, Lecture, Démarche (repliable via `afficher_demarche`)
// - Une erreur s’affiche seule, message du noyau tel quel

use super::etat::AppSolveur;

impl AppSolveur {
    /// Rendu complet de l’état courant.
    pub fn rendu(&self) -> String {
        if self.a_erreur() {
            return format!("Erreur : {}\n", self.erreur);
        }

        let mut out = self.rendu_resultats();
        if self.afficher_demarche {
            out.push_str(&self.rendu_demarche());
        }
        out
    }

    fn rendu_resultats(&self) -> String {
        let lecture = if self.lecture_dispo {
            self.lecture.as_str()
        } else {
            "indisponible"
        };
        format!("EXACT :   {}\nLecture : {lecture}\n", self.exact)
    }

    fn rendu_demarche(&self) -> String {
        let d = &self.demarche;
        let mut out = String::from("Démarche\n");
        out.push_str(&champ("Jetons", &d.jetons));
        out.push_str(&champ("Avant", &d.avant));
        out.push_str("  Étapes :\n");
        for (i, etape) in d.etapes.iter().enumerate() {
            out.push_str(&format!("    {}. {etape}\n", i + 1));
        }
        out.push_str(&champ("Note", &d.note));
        out
    }
}

fn champ(titre: &str, contenu: &str) -> String {
    format!("  {titre} : {contenu}\n")
}
