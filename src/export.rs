use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::data::model::MeasurementTable;

/// First row of the sheet.
pub const HEADERS: [&str; 3] = ["k", "T1 (Trivial Algorithm)", "T2 (KMP Algorithm)"];

#[derive(Debug, Error)]
#[error("writing workbook {}", .path.display())]
pub struct ExportError {
    pub path: PathBuf,
    #[source]
    pub source: XlsxError,
}

// ---------------------------------------------------------------------------
// Workbook writer
// ---------------------------------------------------------------------------

/// Write `table` to a single-sheet workbook at `path`, replacing any
/// existing file.
pub fn export(table: &MeasurementTable, path: &Path, sheet_name: &str) -> Result<(), ExportError> {
    let err = |source: XlsxError| ExportError {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    write_sheet(&mut workbook, table, sheet_name).map_err(err)?;
    workbook.save(path).map_err(err)?;

    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(())
}

fn write_sheet(
    workbook: &mut Workbook,
    table: &MeasurementTable,
    sheet_name: &str,
) -> Result<(), XlsxError> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(sheet_name)?;

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (i, m) in table.rows().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, m.k as f64)?;
        sheet.write_number(row, 1, m.t1)?;
        sheet.write_number(row, 2, m.t2)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::model::Measurement;
    use calamine::{open_workbook, Data, Reader, Xlsx};

    fn sample() -> MeasurementTable {
        [(1, 0.001, 0.0005), (2, 0.002, 0.0007), (3, 0.004, 0.0012)]
            .into_iter()
            .map(|(k, t1, t2)| Measurement { k, t1, t2 })
            .collect()
    }

    /// Sheet contents as strings, header included.
    pub(crate) fn read_back(path: &Path, sheet: &str) -> Vec<Vec<String>> {
        let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
        let range = workbook.worksheet_range(sheet).unwrap();
        range
            .rows()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Data::String(s) => s.clone(),
                        Data::Float(f) => f.to_string(),
                        Data::Int(i) => i.to_string(),
                        other => panic!("unexpected cell {other:?}"),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn writes_header_and_rows_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algorithm_times.xlsx");
        export(&sample(), &path, "Algorithm Times").unwrap();

        let rows = read_back(&path, "Algorithm Times");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], HEADERS);
        assert_eq!(rows[1], ["1", "0.001", "0.0005"]);
        assert_eq!(rows[3], ["3", "0.004", "0.0012"]);
    }

    #[test]
    fn empty_table_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        export(&MeasurementTable::default(), &path, "Algorithm Times").unwrap();
        assert_eq!(read_back(&path, "Algorithm Times"), vec![HEADERS.to_vec()]);
    }

    #[test]
    fn repeated_export_overwrites_with_same_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("algorithm_times.xlsx");
        std::fs::write(&path, b"stale").unwrap();

        export(&sample(), &path, "Algorithm Times").unwrap();
        let first = read_back(&path, "Algorithm Times");
        export(&sample(), &path, "Algorithm Times").unwrap();
        let second = read_back(&path, "Algorithm Times");

        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("out.xlsx");
        let err = export(&sample(), &path, "Algorithm Times").unwrap_err();
        assert_eq!(err.path, path);
        assert!(!path.exists());
    }
}
