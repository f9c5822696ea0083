//! Error types for variable conversion and validation.

use std::path::PathBuf;
use thiserror::Error;

/// A variable's value does not match the grammar of the requested conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Value is not `true` or `false`.
    #[error("variable {name}: '{value}' is not a valid boolean")]
    MalformedBool { name: String, value: String },

    /// Value is not a base-10 integer.
    #[error("variable {name}: '{value}' is not a valid integer")]
    MalformedInt { name: String, value: String },

    /// Value looks like `<min>-<max>` but one of the fields is not an integer.
    #[error("variable {name}: '{value}' is not a valid range, expected <min>-<max>")]
    MalformedRange { name: String, value: String },

    /// Range bounds are in the wrong order.
    #[error("variable {name}: range {min}-{max} has min greater than max")]
    InvertedRange { name: String, min: i64, max: i64 },

    /// Plain bound leaves nothing to pick from in `[0, bound)`.
    #[error("variable {name}: bound {bound} must be greater than zero")]
    EmptyBound { name: String, bound: i64 },
}

/// A chained precondition on a variable or its referent failed.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Value is empty, whitespace-only, or absent.
    #[error("{message}")]
    NoData { name: String, message: String },

    #[error("file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("file {} is empty", .0.display())]
    FileEmpty(PathBuf),

    #[error("directory {} not found", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("directory {} is empty", .0.display())]
    DirectoryEmpty(PathBuf),

    /// The path exists but could not be inspected.
    #[error("failed to inspect {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidationError {
    /// Default message for a variable that holds no data.
    pub fn no_data(name: &str) -> Self {
        Self::NoData { name: name.to_string(), message: format!("variable {name} has no data") }
    }
}

/// Errors raised while expanding spintax markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    /// A `{` without a matching `}` or vice versa.
    #[error("unbalanced brace at byte {position}")]
    Unbalanced { position: usize },
}

/// Any failure an accessor operation can produce.
///
/// Hosts that do not need to tell the taxonomies apart can use this with `?`.
#[derive(Debug, Error)]
pub enum VarError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Spin(#[from] SpinError),
}
