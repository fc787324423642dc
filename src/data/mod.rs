/// Data layer: discovery, parsing and the in-memory table.
///
/// Architecture:
/// ```text
///  <input_dir>/experiment_*.txt
///        │
///        ▼
///   ┌──────────┐
///   │ locator  │  list candidates → user picks one
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  parser  │  header skipped, 3-token lines → rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ MeasurementTable │  parallel k / T1 / T2 columns
///   └──────────────────┘
/// ```

pub mod locator;
pub mod model;
pub mod parser;
