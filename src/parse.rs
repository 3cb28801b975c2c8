use csv::ReaderBuilder;
use ndarray::{Array1, Array2};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{PerceptronError, Result};

/// Loads a headed CSV file into a feature matrix and a label vector.
///
/// The column named `label_column` becomes `y`; every other column, in file
/// order, becomes a feature.
pub fn load_csv(
    file_path: impl AsRef<Path>,
    label_column: &str,
) -> Result<(Array2<f64>, Array1<f64>)> {
    let file = File::open(file_path)?;

    read_csv(BufReader::new(file), label_column)
}

pub fn read_csv<T: Read>(reader: T, label_column: &str) -> Result<(Array2<f64>, Array1<f64>)> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = reader.headers()?.clone();
    let label_index = headers
        .iter()
        .position(|header| header.trim() == label_column)
        .ok_or_else(|| PerceptronError::Parse {
            line: 1,
            message: format!("missing label column {label_column:?}"),
        })?;
    let feature_count = headers.len() - 1;

    let mut values = Vec::new();
    let mut labels = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);

        for (index, field) in record.iter().enumerate() {
            let value = parse_field(field, line)?;

            if index == label_index {
                labels.push(value);
            } else {
                values.push(value);
            }
        }
    }

    let rows = labels.len();
    let features = Array2::from_shape_vec((rows, feature_count), values).map_err(|error| {
        PerceptronError::ShapeMismatch {
            expected: format!("{rows} rows of {feature_count} features"),
            got: error.to_string(),
        }
    })?;

    Ok((features, Array1::from(labels)))
}

fn parse_field(field: &str, line: u64) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|error| PerceptronError::Parse {
            line,
            message: format!("{field:?}: {error}"),
        })
}
