use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SortError {
    /// The input could not be read as a sequence.
    InvalidArgument(String),

    /// Two elements had no defined order (for example a `NaN` next to a number).
    IncomparableElements { left: String, right: String },
}

impl SortError {
    pub(crate) fn incomparable<T: Debug>(left: &T, right: &T) -> Self {
        Self::IncomparableElements {
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        }
    }
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::IncomparableElements { left, right } => {
                write!(f, "sequence contains non-comparable elements: {left} and {right}")
            }
        }
    }
}

impl Error for SortError {}
