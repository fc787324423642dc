use std::path::PathBuf;

use thiserror::Error;

use crate::config::Config;
use crate::data::locator::{self, LocateError, Selector};
use crate::data::parser::{self, ParseError};
use crate::export::{self, ExportError};
use crate::ui::{PresentError, Presenter};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Present(#[from] PresentError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Selecting,
    Parsing,
    Exporting,
    Presenting,
    Done,
    Aborted,
}

/// How a run that did not fail ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Workbook written and chart shown.
    Done { input: PathBuf, rows: usize },
    /// Nothing was chosen; no output produced.
    NoSelection,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// One locate → parse → export → present run. Any failure ends the run.
pub struct Pipeline<'a, S, P> {
    config: &'a Config,
    selector: S,
    presenter: P,
    stage: Stage,
}

impl<'a, S: Selector, P: Presenter> Pipeline<'a, S, P> {
    pub fn new(config: &'a Config, selector: S, presenter: P) -> Self {
        Self {
            config,
            selector,
            presenter,
            stage: Stage::Selecting,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn run(&mut self) -> Result<Outcome, PipelineError> {
        let result = self.run_stages();
        if result.is_err() {
            self.enter(Stage::Aborted);
        }
        result
    }

    fn run_stages(&mut self) -> Result<Outcome, PipelineError> {
        let cfg = self.config;

        let candidates = locator::list_candidates(&cfg.input_dir, &cfg.file_prefix, &cfg.file_suffix);
        let chosen = self
            .selector
            .select(&candidates)?
            .and_then(|idx| candidates.get(idx));
        let Some(name) = chosen else {
            self.enter(Stage::Aborted);
            return Ok(Outcome::NoSelection);
        };
        let input = cfg.input_dir.join(name);

        self.enter(Stage::Parsing);
        let table = parser::parse_file(&input)?;
        log::info!("Parsed {} rows from {}", table.len(), input.display());

        self.enter(Stage::Exporting);
        export::export(&table, &cfg.output_file, &cfg.sheet_name)?;
        println!("Data saved to {}", cfg.output_file.display());

        self.enter(Stage::Presenting);
        self.presenter.present(&table, name)?;

        self.enter(Stage::Done);
        Ok(Outcome::Done {
            input,
            rows: table.len(),
        })
    }

    fn enter(&mut self, next: Stage) {
        log::debug!("{:?} -> {next:?}", self.stage);
        self.stage = next;
    }
}
