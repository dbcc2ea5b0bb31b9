use std::error::Error;
use std::fmt;

/// Extent of a vector or matrix, used to describe the operands of a failed
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Vector(usize),
    Matrix(usize, usize),
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Shape::Vector(dim) => write!(f, "{}", dim),
            Shape::Matrix(rows, cols) => write!(f, "({}, {})", rows, cols),
        }
    }
}

/// Error type for vector and matrix operations
#[derive(Debug, Clone, PartialEq)]
pub enum LinAlgError {
    /// A requested size has a zero component, or its element count overflows `usize`.
    InvalidDimension(Shape),
    IndexOutOfBounds { index: Shape, bounds: Shape },
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    /// `token` is the first interior token that is not a number; `None` means
    /// the literal is missing its opening or closing bracket.
    MalformedLiteral {
        literal: String,
        token: Option<String>,
    },
}

impl fmt::Display for LinAlgError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinAlgError::InvalidDimension(shape) => {
                write!(
                    f,
                    "Invalid dimension {}: sizes must be greater than 0 and their product must fit in usize",
                    shape
                )
            }
            LinAlgError::IndexOutOfBounds { index, bounds } => {
                write!(f, "Index {} is out of bounds for shape {}", index, bounds)
            }
            LinAlgError::DimensionMismatch { op, lhs, rhs } => write!(
                f,
                "Cannot {} operands of incompatible dimensions {} and {}",
                op, lhs, rhs
            ),
            LinAlgError::MalformedLiteral {
                literal,
                token: None,
            } => write!(
                f,
                "Malformed vector literal: missing [ or ] in {:?}",
                literal
            ),
            LinAlgError::MalformedLiteral {
                literal,
                token: Some(token),
            } => write!(
                f,
                "Malformed vector literal: could not parse {:?} in {:?}",
                token, literal
            ),
        }
    }
}

impl Error for LinAlgError {}

pub type Result<T> = std::result::Result<T, LinAlgError>;
