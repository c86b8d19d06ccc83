//! Errors
//!
//! Custom error types used throughout the `gainratio` crate.
use thiserror::Error;

/// Errors that can occur while loading data, growing, pruning or exporting a tree.
#[derive(Debug, Error)]
pub enum GainRatioError {
    /// The input had no header row.
    #[error("The data set has no header row.")]
    MissingHeader,
    /// A data row does not have one field per header column.
    #[error("Row {row} has {found} fields, but the header has {expected}.")]
    RowLength { row: usize, expected: usize, found: usize },
    /// A field could not be parsed as an integer.
    #[error("Row {row}, column {column}: the value {value:?} is not an integer.")]
    NonInteger { row: usize, column: usize, value: String },
    /// An integer field outside of {0, 1}.
    #[error("Row {row}, column {column}: the value {value} is not binary, expected 0 or 1.")]
    NonBinary { row: usize, column: usize, value: i64 },
    /// The value matrix and the label vector are not parallel.
    #[error("The data set has {values} rows of values but {labels} labels.")]
    LengthMismatch { values: usize, labels: usize },
    /// A row of the value matrix is not as wide as the attribute names.
    #[error("Row {row} has {found} values, but there are {expected} attributes.")]
    RowWidth { row: usize, expected: usize, found: usize },
    /// A data set was scored against a tree grown on a different number of attributes.
    #[error("The tree was grown on {expected} attributes, but the data set has {found}.")]
    AttributeMismatch { expected: usize, found: usize },
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// The csv reader failed.
    #[error("Unable to parse the data set: {0}")]
    Csv(#[from] csv::Error),
    /// Unable to read a file.
    #[error("Unable to read from file: {0}")]
    UnableToRead(String),
    /// Unable to write a file.
    #[error("Unable to write to file: {0}")]
    UnableToWrite(String),
}
