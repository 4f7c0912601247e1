//! Loading and shaping samples from external sources.
//!
//! The engine itself accepts only an in-memory [`Sample`](crate::Sample);
//! this module is the input-boundary collaborator that produces one from a
//! local delimited file, plus the caller-side recoding helpers that map raw
//! columns into the shape a test expects (e.g. a numeric survival flag into
//! "died"/"survived" labels). Remote acquisition is out of scope.
//!
//! # Example
//!
//! ```ignore
//! use nullsim::data::load_numeric_column;
//! use std::path::Path;
//!
//! let sample = load_numeric_column(Path::new("cholesterol.csv"), "chol")?;
//! ```

mod csv;
mod recode;

pub use csv::{load_categorical_column, load_numeric_column};
pub use recode::{recode_flags, recode_with};

use std::fmt;

/// Errors that can occur while loading a sample from a file.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading the file.
    Io(std::io::Error),

    /// Malformed line or header.
    Parse {
        /// Line number where the error occurred (1-indexed).
        line: usize,
        /// Description of the parse error.
        message: String,
    },

    /// The requested column does not exist in the header.
    MissingColumn {
        /// The column name that was requested.
        name: String,
        /// The column names actually present.
        found: Vec<String>,
    },

    /// A cell could not be parsed as a number.
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The invalid cell contents.
        value: String,
    },

    /// The file yielded no observations for the column.
    EmptyColumn {
        /// The column name that was requested.
        name: String,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            DataError::MissingColumn { name, found } => {
                write!(
                    f,
                    "Missing column '{}'. Found columns: {:?}",
                    name, found
                )
            }
            DataError::InvalidValue { line, value } => {
                write!(f, "Invalid numeric value at line {}: '{}'", line, value)
            }
            DataError::EmptyColumn { name } => {
                write!(f, "Column '{}' contains no observations", name)
            }
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}
