use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{SpikeDataset, SpikeRecord};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spike recording from a whitespace-delimited text file
/// (`.gdf` as written by NEST-style simulators).
///
/// Layout: one spike event per line, column 0 = raw time, column 1 =
/// neuron id. Any further columns are ignored. Blank lines are skipped.
pub fn load_file(path: &Path) -> Result<SpikeDataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading spike file {}", path.display()))?;
    let dataset =
        parse_gdf(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// A malformed line in a spike file. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected at least 2 columns, found {found}")]
    MissingColumns { line: usize, found: usize },
    #[error("line {line}, column {column}: '{token}' is not a number")]
    InvalidNumber {
        line: usize,
        column: usize,
        token: String,
    },
}

/// Parse the body of a spike file into a [`SpikeDataset`], preserving
/// file order.
pub fn parse_gdf(text: &str) -> Result<SpikeDataset, ParseError> {
    let mut records = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        if fields.len() < 2 {
            return Err(ParseError::MissingColumns {
                line: line_no,
                found: fields.len(),
            });
        }

        let time_raw = parse_field(fields[0], line_no, 0)?;
        let neuron_id = parse_field(fields[1], line_no, 1)?;
        records.push(SpikeRecord { time_raw, neuron_id });
    }

    Ok(SpikeDataset::from_records(records))
}

fn parse_field(token: &str, line: usize, column: usize) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
        line,
        column,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whitespace_table() {
        let ds = parse_gdf("10.0\t5\n20.0  35\n30.0 10\n").unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.records[1].time_raw, 20.0);
        assert_eq!(ds.records[1].neuron_id, 35.0);
    }

    #[test]
    fn ignores_extra_columns_and_blank_lines() {
        let ds = parse_gdf("1.0 2 99 98\n\n  \n3.0 4\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].neuron_id, 2.0);
        assert_eq!(ds.records[1].time_raw, 3.0);
    }

    #[test]
    fn rejects_short_line() {
        let err = parse_gdf("1.0 2\n42.5\n").unwrap_err();
        assert_eq!(err, ParseError::MissingColumns { line: 2, found: 1 });
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_gdf("1.0 spam\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidNumber {
                line: 1,
                column: 1,
                token: "spam".to_string()
            }
        );
    }

    #[test]
    fn empty_input_yields_empty_dataset() {
        assert!(parse_gdf("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_file(Path::new("/nonexistent/spikes.gdf")).unwrap_err();
        assert!(err.to_string().contains("reading spike file"));
    }
}
