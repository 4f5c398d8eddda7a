//! Errors raised while validating input

use serde_json::Error as SerdeError;
use std::error::Error as StdError;
use std::fmt;

/// Reasons a series (or a pair of series) can't be turned into a model
#[derive(Debug)]
pub enum Error {
    /// No dataset was provided
    MissingInput,
    /// The input is not an ordered collection
    NotASequence,
    /// Fewer than two data points
    InsufficientPoints {
        /// Number of points provided
        len: usize,
    },
    /// The element at `index` can't be read as a finite real number
    NonNumericValue {
        /// Position of the element
        index: usize,
        /// The element, as JSON
        value: String,
    },
    /// The `X` and `Y` series have different lengths
    LengthMismatch {
        /// Length of the `X` series
        x: usize,
        /// Length of the `Y` series
        y: usize,
    },
    /// The input text is not valid JSON
    Json(SerdeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingInput => f.write_str("It is necessary to provide the dataset"),
            Error::NotASequence => f.write_str("The dataset is not an array"),
            Error::InsufficientPoints { len } => write!(
                f,
                "A linear model needs at least 2 data points, got {}",
                len
            ),
            Error::NonNumericValue { index, value } => write!(
                f,
                "Value {} at index {} can't be converted to a number",
                value, index
            ),
            Error::LengthMismatch { x, y } => write!(
                f,
                "The datasets have different lengths (x: {}, y: {})",
                x, y
            ),
            Error::Json(inner) => write!(f, "Failed to parse the dataset: {}", inner),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Json(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<SerdeError> for Error {
    fn from(e: SerdeError) -> Self {
        Error::Json(e)
    }
}

/// Result of building a series or a model
pub type Result<T> = ::std::result::Result<T, Error>;
