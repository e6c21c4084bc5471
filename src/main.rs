//! Tic-Tac-Toe GUI
//!
//! A graphical interface for playing against the perfect-play AI.

use clap::Parser;
use tictactoe::ui::{GameMode, TicTacToeApp};
use tictactoe::{Mark, ScoringMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tictactoe", about = "Play Tic-Tac-Toe against a minimax AI")]
struct Args {
    /// Play as O and let the AI open
    #[arg(long)]
    play_o: bool,

    /// Prefer faster wins and slower losses
    #[arg(long)]
    depth_adjusted: bool,
}

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mode = GameMode::PvE {
        human_mark: if args.play_o { Mark::O } else { Mark::X },
    };
    let scoring = if args.depth_adjusted {
        ScoringMode::DepthAdjusted
    } else {
        ScoringMode::Flat
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 520.0])
            .with_min_inner_size([560.0, 400.0])
            .with_title("Tic-Tac-Toe with Minimax AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, mode, scoring)))),
    )
}
