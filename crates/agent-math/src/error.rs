use std::error::Error;
use std::fmt;

/// Failures raised while normalizing a distribution.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    ZeroTotal,
    NonFiniteTotal,
    /// `index` is the position in a weight list; `None` for maps, whose
    /// iteration order is unspecified.
    OutOfRange { index: Option<usize> },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DistributionError::ZeroTotal => {
                write!(f, "Cannot normalize a distribution whose weights sum to zero")
            }
            DistributionError::NonFiniteTotal => {
                write!(f, "Distribution weights sum to a non-finite value")
            }
            DistributionError::OutOfRange { index: Some(index) } => write!(
                f,
                "Normalized probability at position {} is outside [0, 1]",
                index
            ),
            DistributionError::OutOfRange { index: None } => {
                write!(f, "Normalized probability is outside [0, 1]")
            }
        }
    }
}

impl Error for DistributionError {}

/// Failures raised while looking up or turning a heading.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadingError {
    NotCanonical(i32, i32),
    UnknownHeading,
    EmptyHeadings,
}

impl fmt::Display for HeadingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HeadingError::NotCanonical(dx, dy) => {
                write!(f, "({}, {}) is not one of the four canonical headings", dx, dy)
            }
            HeadingError::UnknownHeading => write!(f, "Heading is not in the heading list"),
            HeadingError::EmptyHeadings => write!(f, "Heading list is empty"),
        }
    }
}

impl Error for HeadingError {}
