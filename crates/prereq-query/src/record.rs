//! Raw, untyped records as delivered by the course data source.
//!
//! The wire shape is:
//!
//! ```text
//! { "name": "...", "title": "...", "prereq_query": <record> }
//!
//! <record> ::= { "type": "group",       "queries": [<record>, ...] }
//!            | { "type": "or",          "queries": [<record>, <record>] }
//!            | { "type": "course",      "name": "..." }
//!            | { "type": "recommended", "course": <record> }
//!            | { "type": "coreq",       "course": <record> }
//!            | { "type": "not",         "course": <record> }
//! ```
//!
//! Every field of [`QueryRecord`] is optional at the serde level. Shape
//! checks happen in [`build`](crate::build) so that a bad node can be
//! reported with its location.

use serde::{Deserialize, Serialize};

use crate::ast::NodeKind;

/// One node of a prerequisite expression, exactly as found on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Node tag (`group`, `or`, `course`, `recommended`, `coreq`, `not`).
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Children of `group` and `or` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<QueryRecord>>,

    /// Course identifier of `course` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Wrapped node of `recommended`, `coreq` and `not` nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Box<QueryRecord>>,
}

impl QueryRecord {
    /// A `group` record.
    pub fn group(queries: Vec<QueryRecord>) -> Self {
        Self {
            kind: Some(NodeKind::Group.tag().to_string()),
            queries: Some(queries),
            ..Self::default()
        }
    }

    /// An `or` record.
    pub fn or(left: QueryRecord, right: QueryRecord) -> Self {
        Self {
            kind: Some(NodeKind::Or.tag().to_string()),
            queries: Some(vec![left, right]),
            ..Self::default()
        }
    }

    /// A `course` record.
    pub fn course(name: impl Into<String>) -> Self {
        Self {
            kind: Some(NodeKind::Course.tag().to_string()),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A wrapper record (`recommended`, `coreq` or `not`) around `course`.
    pub fn wrapper(kind: NodeKind, course: QueryRecord) -> Self {
        Self {
            kind: Some(kind.tag().to_string()),
            course: Some(Box::new(course)),
            ..Self::default()
        }
    }
}

/// One course as delivered by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Course identifier, e.g. `I&C SCI 33`.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Raw prerequisite expression.
    pub prereq_query: QueryRecord,
}
