// src/main.rs
//
// Solveur Q-pur : point d’entrée (terminal)
// -----------------------------------------
// - `equation-qpur "<équation>"` : résout une fois, code 1 si erreur
// - `equation-qpur`              : session sur stdin (voir app.rs pour les commandes)
// - Journal (tracing) sur stderr, filtré par RUST_LOG

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use equation_qpur::noyau::reglages::{Reglages, DIGITS_DEFAUT, PASSES_DEFAUT};

mod app;

use app::AppSolveur;

/// Solveur exact d’équations linéaires à une inconnue.
#[derive(Parser, Debug)]
#[command(name = "equation-qpur", version, about)]
struct Cli {
    /// Équation à résoudre, ex. "3 * (2 + r) = 15". Sans argument : session interactive.
    equation: Option<String>,

    /// Chiffres de la lecture décimale (tronquée).
    #[arg(long, default_value_t = DIGITS_DEFAUT)]
    digits: usize,

    /// Plafond des passes du solveur.
    #[arg(long, default_value_t = PASSES_DEFAUT)]
    passes_max: usize,

    /// Affiche la démarche (jetons, étapes).
    #[arg(long)]
    demarche: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let reglages = Reglages {
        passes_max: cli.passes_max,
        digits: cli.digits,
    };
    let mut app = AppSolveur::new(reglages);
    app.afficher_demarche = cli.demarche;

    match cli.equation {
        Some(texte) => {
            app.entree = texte;
            app.resoudre();
            if app.a_erreur() {
                eprint!("{}", app.rendu());
                ExitCode::FAILURE
            } else {
                print!("{}", app.rendu());
                ExitCode::SUCCESS
            }
        }
        None => match app::session(&mut app, io::stdin().lock(), io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                error!(%e, "session interrompue");
                ExitCode::FAILURE
            }
        },
    }
}
