pub mod plot;

use eframe::egui;
use thiserror::Error;

use crate::app::TimesApp;
use crate::data::model::MeasurementTable;

/// Carries the backend's message; `eframe::Error` itself is not `Send`.
#[derive(Debug, Error)]
#[error("chart window failed: {0}")]
pub struct PresentError(pub String);

/// Shows a measurement table to the user. Returns once the user is done.
pub trait Presenter {
    fn present(&mut self, table: &MeasurementTable, label: &str) -> Result<(), PresentError>;
}

/// Native window; [`Presenter::present`] blocks until it is closed.
pub struct WindowPresenter {
    pub width: f32,
    pub height: f32,
}

impl Presenter for WindowPresenter {
    fn present(&mut self, table: &MeasurementTable, label: &str) -> Result<(), PresentError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([self.width, self.height])
                .with_min_inner_size([400.0, 300.0]),
            ..Default::default()
        };

        let title = plot::title(label);
        let app = TimesApp::new(table.clone(), title.clone());
        log::info!("Showing chart for {label} ({} points per series)", table.len());

        eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
            .map_err(|e| PresentError(e.to_string()))
    }
}
