//! Leest één numerieke kolom uit een CSV-bestand met headerregel.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{VisualizerError, VisualizerResult};

/// Standaard kolomnaam met de meetwaarden.
pub const DEFAULT_COLUMN: &str = "value";

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Leest kolom `column` uit het CSV-bestand op `path`.
///
/// Rijen waarvan de cel niet als getal te lezen is, worden overgeslagen.
pub fn read_column(path: impl AsRef<Path>, column: &str) -> VisualizerResult<Vec<f64>> {
    let path = path.as_ref();
    log::debug!("CSV-kolom `{column}` lezen uit {}", path.display());
    let file = File::open(path).map_err(|err| VisualizerError::file(path, err))?;
    read_column_from_reader(BufReader::new(file), column)
}

/// Zoals [`read_column`], maar op CSV-tekst die al in het geheugen staat.
pub fn read_column_from_str(text: &str, column: &str) -> VisualizerResult<Vec<f64>> {
    read_column_from_reader(text.as_bytes(), column)
}

/// Zoals [`read_column`], maar op een willekeurige reader.
pub fn read_column_from_reader<R: Read>(reader: R, column: &str) -> VisualizerResult<Vec<f64>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = column_index(reader.headers()?, column).ok_or_else(|| VisualizerError::Schema {
        column: column.to_owned(),
    })?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(index).and_then(parse_cell) {
            values.push(value);
        }
    }

    Ok(values)
}

/// Bij dubbele kolomnamen wint de laatste, net als bij een dict-gebaseerde
/// rijweergave.
fn column_index(headers: &StringRecord, column: &str) -> Option<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|&(idx, name)| {
            let name = if idx == 0 {
                name.trim_start_matches(BYTE_ORDER_MARK)
            } else {
                name
            };
            name == column
        })
        .map(|(idx, _)| idx)
        .last()
}

fn parse_cell(cell: &str) -> Option<f64> {
    cell.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_COLUMN, read_column, read_column_from_str};
    use crate::error::VisualizerError;

    #[test]
    fn skips_rows_that_do_not_parse() {
        let csv = "value\n1\nx\n3\n";
        let values = read_column_from_str(csv, DEFAULT_COLUMN).expect("valid csv");
        assert_eq!(values, vec![1.0, 3.0]);
    }

    #[test]
    fn missing_column_is_a_schema_error() {
        let csv = "id,temperature\n1,20.5\n";
        let err = read_column_from_str(csv, DEFAULT_COLUMN).unwrap_err();
        match err {
            VisualizerError::Schema { column } => assert_eq!(column, "value"),
            other => panic!("verwacht Schema, kreeg {other:?}"),
        }
    }

    #[test]
    fn empty_input_has_no_header_fields() {
        let err = read_column_from_str("", DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, VisualizerError::Schema { .. }));
    }

    #[test]
    fn header_only_gives_empty_sequence() {
        let values = read_column_from_str("id,value\n", DEFAULT_COLUMN).expect("header only");
        assert!(values.is_empty());
    }

    #[test]
    fn ignores_other_columns_and_short_rows() {
        let csv = "id,value,label\n1,2.5,a\n2\n3,-4,c,extra\n4,\" 7 \",d\n";
        let values = read_column_from_str(csv, DEFAULT_COLUMN).expect("valid csv");
        assert_eq!(values, vec![2.5, -4.0, 7.0]);
    }

    #[test]
    fn non_finite_cells_are_skipped() {
        let csv = "value\nnan\ninf\n-inf\n1e3\n";
        let values = read_column_from_str(csv, DEFAULT_COLUMN).expect("valid csv");
        assert_eq!(values, vec![1000.0]);
    }

    #[test]
    fn duplicate_header_uses_last_occurrence() {
        let csv = "value,value\n1,10\n2,20\n";
        let values = read_column_from_str(csv, DEFAULT_COLUMN).expect("valid csv");
        assert_eq!(values, vec![10.0, 20.0]);
    }

    #[test]
    fn byte_order_mark_does_not_hide_first_column() {
        let csv = "\u{feff}value,id\n5,1\n";
        let values = read_column_from_str(csv, DEFAULT_COLUMN).expect("valid csv");
        assert_eq!(values, vec![5.0]);
    }

    #[test]
    fn custom_column_name() {
        let csv = "stress,value\n100,1\n200,2\n";
        let values = read_column_from_str(csv, "stress").expect("valid csv");
        assert_eq!(values, vec![100.0, 200.0]);
    }

    #[test]
    fn missing_file_is_a_file_error() {
        let err = read_column("/definitely/not/here.csv", DEFAULT_COLUMN).unwrap_err();
        assert!(matches!(err, VisualizerError::File { .. }));
    }
}
