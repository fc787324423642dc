mod app;
mod config;
mod data;
mod export;
mod pipeline;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};

use config::{Config, CONFIG_FILE};
use data::locator::ConsoleSelector;
use pipeline::{Outcome, Pipeline};
use ui::WindowPresenter;

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Run aborted: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::load(Path::new(CONFIG_FILE))?;
    log::debug!("{config:?}");

    let presenter = WindowPresenter {
        width: config.window_width,
        height: config.window_height,
    };
    let mut pipeline = Pipeline::new(&config, ConsoleSelector::stdio(), presenter);

    let outcome = pipeline
        .run()
        .with_context(|| format!("processing logs in {}", config.input_dir.display()))?;
    log::debug!("Pipeline finished in {:?}", pipeline.stage());

    match outcome {
        Outcome::Done { input, rows } => {
            log::info!("Finished {} ({rows} rows)", input.display());
        }
        Outcome::NoSelection => println!("No file selected. Exiting."),
    }
    Ok(())
}
