//! Error types for prerequisite matching.

use thiserror::Error;

/// Errors that can occur while loading or querying a course catalog.
#[derive(Error, Debug)]
pub enum MatcherError {
    /// A prerequisite tree could not be built or parsed.
    #[error("prerequisite error: {0}")]
    Query(#[from] prereq_query::QueryError),

    /// The catalog JSON could not be read.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested course is not in the catalog.
    #[error("course not found: {0}")]
    CourseNotFound(String),
}

/// Result type for matcher operations.
pub type MatcherResult<T> = std::result::Result<T, MatcherError>;
