use eframe::egui;

use crate::data::model::MeasurementTable;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TimesApp {
    table: MeasurementTable,
    title: String,
}

impl TimesApp {
    pub fn new(table: MeasurementTable, title: String) -> Self {
        Self { table, title }
    }
}

impl eframe::App for TimesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.title));
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::timing_plot(ui, &self.table);
        });
    }
}
