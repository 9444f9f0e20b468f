//! Error types for building and parsing prerequisite expressions.

use thiserror::Error;

use crate::builder::NodePath;

/// Errors that can occur while building or parsing a prerequisite tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The record's `type` tag is not one of the known node kinds.
    #[error("unknown expression type '{tag}' at {path}")]
    UnknownType {
        /// Location of the offending node.
        path: NodePath,
        /// The unrecognized tag.
        tag: String,
    },

    /// A field required by the record's tag is absent.
    #[error("missing field '{field}' at {path}")]
    MissingField {
        /// Location of the offending node.
        path: NodePath,
        /// Name of the missing field.
        field: &'static str,
    },

    /// An `or` record did not carry exactly two sub-queries.
    #[error("'or' at {path} must have exactly 2 queries, found {found}")]
    OrArity {
        /// Location of the offending node.
        path: NodePath,
        /// Number of sub-queries actually present.
        found: usize,
    },

    /// The record is not shaped like an expression record at all.
    #[error("malformed expression record at {path}: {message}")]
    MalformedRecord {
        /// Location of the offending node.
        path: NodePath,
        /// Description of the problem.
        message: String,
    },

    /// Parse error in prerequisite text.
    #[error("parse error at position {position}: {message}")]
    Parse {
        /// Byte offset in the input where the error occurred.
        position: usize,
        /// Description of the error.
        message: String,
    },
}

impl QueryError {
    /// Returns the node path for construction errors, `None` for text parse errors.
    pub fn path(&self) -> Option<&NodePath> {
        match self {
            QueryError::UnknownType { path, .. }
            | QueryError::MissingField { path, .. }
            | QueryError::OrArity { path, .. }
            | QueryError::MalformedRecord { path, .. } => Some(path),
            QueryError::Parse { .. } => None,
        }
    }
}

/// Result type for prerequisite expression operations.
pub type QueryResult<T> = std::result::Result<T, QueryError>;
