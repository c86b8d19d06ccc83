//! Data
//!
//! The binary data set a tree is grown on and scored against: attribute names,
//! an example-by-attribute matrix of 0/1 values and a parallel vector of 0/1
//! class labels.
use crate::errors::GainRatioError;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Row major binary data set.
///
/// Every constructor checks that the labels are parallel to the rows and that
/// each row holds one value per attribute, so the rest of the crate can index
/// without checking.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    attribute_names: Vec<String>,
    values: Vec<Vec<u8>>,
    labels: Vec<u8>,
}

impl Dataset {
    /// Create a data set from already parsed parts.
    ///
    /// * `attribute_names` - One name per attribute column.
    /// * `values` - One row per example, one 0/1 value per attribute.
    /// * `labels` - One 0/1 class label per example.
    pub fn new(attribute_names: Vec<String>, values: Vec<Vec<u8>>, labels: Vec<u8>) -> Result<Self, GainRatioError> {
        if values.len() != labels.len() {
            return Err(GainRatioError::LengthMismatch {
                values: values.len(),
                labels: labels.len(),
            });
        }
        for (row, r) in values.iter().enumerate() {
            if r.len() != attribute_names.len() {
                return Err(GainRatioError::RowWidth {
                    row,
                    expected: attribute_names.len(),
                    found: r.len(),
                });
            }
            if let Some((column, v)) = r.iter().enumerate().find(|(_, v)| **v > 1) {
                return Err(GainRatioError::NonBinary {
                    row,
                    column,
                    value: i64::from(*v),
                });
            }
        }
        if let Some((row, v)) = labels.iter().enumerate().find(|(_, v)| **v > 1) {
            return Err(GainRatioError::NonBinary {
                row,
                column: attribute_names.len(),
                value: i64::from(*v),
            });
        }
        Ok(Dataset {
            attribute_names,
            values,
            labels,
        })
    }

    /// Parse a comma delimited data set.
    ///
    /// The header names the attributes, except for its last column which
    /// is the class. Every data row must be integer valued, 0 or 1, with the
    /// label in the last column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GainRatioError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(GainRatioError::MissingHeader);
        }
        let width = headers.len();
        let attribute_names: Vec<String> = headers.iter().take(width - 1).map(String::from).collect();

        let mut values = Vec::new();
        let mut labels = Vec::new();
        for (row, result) in csv_reader.records().enumerate() {
            let record = result?;
            if record.len() != width {
                return Err(GainRatioError::RowLength {
                    row,
                    expected: width,
                    found: record.len(),
                });
            }
            let mut parsed = record
                .iter()
                .enumerate()
                .map(|(column, field)| parse_binary(row, column, field))
                .collect::<Result<Vec<u8>, GainRatioError>>()?;
            // The header is non-empty, so neither is the row.
            if let Some(label) = parsed.pop() {
                labels.push(label);
            }
            values.push(parsed);
        }

        debug!(
            "loaded data set with {} examples and {} attributes",
            values.len(),
            attribute_names.len()
        );

        Ok(Dataset {
            attribute_names,
            values,
            labels,
        })
    }

    /// Load a data set from a csv file, see [`Dataset::from_reader`].
    ///
    /// * `path` - Path of the csv file.
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, GainRatioError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| GainRatioError::UnableToRead(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn n_attributes(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn n_examples(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value of `attribute` for the example in row `example`.
    #[inline]
    pub fn value(&self, example: usize, attribute: usize) -> u8 {
        self.values[example][attribute]
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.values
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    /// Row index of every example, in file order.
    pub fn examples(&self) -> Vec<usize> {
        (0..self.n_examples()).collect()
    }

    /// Column index of every attribute, in file order.
    pub fn attributes(&self) -> Vec<usize> {
        (0..self.n_attributes()).collect()
    }
}

fn parse_binary(row: usize, column: usize, field: &str) -> Result<u8, GainRatioError> {
    let value = field.parse::<i64>().map_err(|_| GainRatioError::NonInteger {
        row,
        column,
        value: field.to_string(),
    })?;
    match value {
        0 => Ok(0),
        1 => Ok(1),
        _ => Err(GainRatioError::NonBinary { row, column, value }),
    }
}
