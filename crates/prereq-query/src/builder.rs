//! Tree builder: validates raw records and turns them into [`QueryNode`] trees.
//!
//! Building fails fast on the first malformed node. The error carries the
//! node's [`NodePath`] so callers can point at the broken part of a course's
//! data.

use std::fmt;

use serde::Deserialize;

use crate::ast::{NodeKind, QueryNode};
use crate::error::{QueryError, QueryResult};
use crate::record::QueryRecord;

/// Location of a node inside a record, rendered like `$.queries[1].course`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Field(&'static str),
    Index(&'static str, usize),
}

impl NodePath {
    /// The root of a record.
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to a named child field.
    pub fn field(&self, name: &'static str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Field(name));
        Self { segments }
    }

    /// Path to the `index`-th element of a list field.
    pub fn index(&self, name: &'static str, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(PathSegment::Index(name, index));
        Self { segments }
    }

    /// Number of steps from the root.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns true for the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) => write!(f, ".{}", name)?,
                PathSegment::Index(name, index) => write!(f, ".{}[{}]", name, index)?,
            }
        }
        Ok(())
    }
}

/// Builds a prerequisite tree from a raw record.
///
/// # Examples
///
/// ```rust
/// use prereq_query::{build, QueryNode, QueryRecord};
///
/// let record = QueryRecord::or(QueryRecord::course("MATH 2A"), QueryRecord::course("MATH 3A"));
/// let tree = build(&record).unwrap();
/// assert_eq!(tree, QueryNode::or(QueryNode::course("MATH 2A"), QueryNode::course("MATH 3A")));
/// ```
pub fn build(record: &QueryRecord) -> QueryResult<QueryNode> {
    build_at(record, &NodePath::root())
}

/// Builds a prerequisite tree from untyped JSON.
///
/// JSON that does not have the shape of an expression record at all (for
/// example a string, or a `queries` field that is not a list) is reported as
/// [`QueryError::MalformedRecord`] at the root.
pub fn build_json(value: &serde_json::Value) -> QueryResult<QueryNode> {
    let record = QueryRecord::deserialize(value).map_err(|e| QueryError::MalformedRecord {
        path: NodePath::root(),
        message: e.to_string(),
    })?;
    build(&record)
}

fn build_at(record: &QueryRecord, path: &NodePath) -> QueryResult<QueryNode> {
    let tag = required(record.kind.as_deref(), path, "type")?;
    let kind = NodeKind::from_tag(tag).ok_or_else(|| QueryError::UnknownType {
        path: path.clone(),
        tag: tag.to_string(),
    })?;

    match kind {
        NodeKind::Group => {
            let queries = required(record.queries.as_deref(), path, "queries")?;
            let children = queries
                .iter()
                .enumerate()
                .map(|(i, q)| build_at(q, &path.index("queries", i)))
                .collect::<QueryResult<Vec<_>>>()?;
            Ok(QueryNode::Group(children))
        }
        NodeKind::Or => {
            let queries = required(record.queries.as_deref(), path, "queries")?;
            match queries {
                [left, right] => Ok(QueryNode::or(
                    build_at(left, &path.index("queries", 0))?,
                    build_at(right, &path.index("queries", 1))?,
                )),
                other => Err(QueryError::OrArity {
                    path: path.clone(),
                    found: other.len(),
                }),
            }
        }
        NodeKind::Course => {
            let name = required(record.name.as_deref(), path, "name")?;
            Ok(QueryNode::course(name))
        }
        NodeKind::Recommended => Ok(QueryNode::recommended(wrapped(record, path)?)),
        NodeKind::Coreq => Ok(QueryNode::coreq(wrapped(record, path)?)),
        NodeKind::Not => Ok(QueryNode::not(wrapped(record, path)?)),
    }
}

fn wrapped(record: &QueryRecord, path: &NodePath) -> QueryResult<QueryNode> {
    let course = required(record.course.as_deref(), path, "course")?;
    build_at(course, &path.field("course"))
}

fn required<'a, T: ?Sized>(
    value: Option<&'a T>,
    path: &NodePath,
    field: &'static str,
) -> QueryResult<&'a T> {
    value.ok_or_else(|| QueryError::MissingField {
        path: path.clone(),
        field,
    })
}
