//! Three-player Othello
//!
//! Plays in the terminal by default, or opens the egui board with `--gui`.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use trithello::config::GameConfig;
use trithello::ui::TrithelloApp;
use trithello::{console, GameError};

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stderr keeps log lines out of the board on stdout
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run_gui(config: &GameConfig) -> Result<(), GameError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Trithello - Three-player Othello"),
        ..Default::default()
    };

    let app_config = config.clone();
    eframe::run_native(
        "Trithello",
        options,
        Box::new(move |cc| Ok(Box::new(TrithelloApp::new(cc, &app_config)))),
    )
    .map_err(|err| GameError::Gui(err.to_string()))
}

fn main() -> ExitCode {
    let config = GameConfig::parse();
    init_tracing(&config.log_level);

    if let Err(err) = config.validate() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }
    info!(players = ?config.players, depth = config.depth, gui = config.gui, "starting");

    let result = if config.gui {
        run_gui(&config)
    } else {
        console::run(&config).map(|_| ())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(GameError::InputClosed) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "game aborted");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
