use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::MeasurementTable;
use crate::export::HEADERS;

pub const T1_COLOR: Color32 = Color32::BLUE;
pub const T2_COLOR: Color32 = Color32::RED;

// ---------------------------------------------------------------------------
// Series extraction
// ---------------------------------------------------------------------------

/// `(k, T1)` and `(k, T2)` points in table order.
pub fn series(table: &MeasurementTable) -> (Vec<[f64; 2]>, Vec<[f64; 2]>) {
    table
        .rows()
        .map(|m| ([m.k as f64, m.t1], [m.k as f64, m.t2]))
        .unzip()
}

/// Chart title for a log named `label`.
pub fn title(label: &str) -> String {
    format!("Comparison of T1 and T2 over k ({label})")
}

// ---------------------------------------------------------------------------
// Timing plot (central panel)
// ---------------------------------------------------------------------------

/// Render both timing series as lines with point markers.
pub fn timing_plot(ui: &mut Ui, table: &MeasurementTable) {
    let (t1, t2) = series(table);

    Plot::new("timing_plot")
        .legend(Legend::default())
        .x_axis_label(HEADERS[0])
        .y_axis_label("Time (s)")
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (name, points, color) in [(HEADERS[1], t1, T1_COLOR), (HEADERS[2], t2, T2_COLOR)] {
                // Same name on both items so the legend toggles them together.
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(name)
                        .color(color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(name)
                        .color(color)
                        .shape(MarkerShape::Circle)
                        .radius(3.0),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Measurement;

    #[test]
    fn one_point_per_row_in_each_series() {
        let table: MeasurementTable = [(1, 0.001, 0.0005), (2, 0.002, 0.0007), (3, 0.004, 0.0012)]
            .into_iter()
            .map(|(k, t1, t2)| Measurement { k, t1, t2 })
            .collect();

        let (t1, t2) = series(&table);
        assert_eq!(t1, vec![[1.0, 0.001], [2.0, 0.002], [3.0, 0.004]]);
        assert_eq!(t2, vec![[1.0, 0.0005], [2.0, 0.0007], [3.0, 0.0012]]);
    }

    #[test]
    fn empty_table_gives_empty_series() {
        let (t1, t2) = series(&MeasurementTable::default());
        assert!(t1.is_empty() && t2.is_empty());
    }

    #[test]
    fn title_names_the_log() {
        assert_eq!(
            title("experiment_1.txt"),
            "Comparison of T1 and T2 over k (experiment_1.txt)"
        );
    }
}
