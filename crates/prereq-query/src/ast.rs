//! Typed prerequisite expression tree.

use std::borrow::Cow;
use std::fmt;

use crate::builder::build;
use crate::error::QueryResult;
use crate::record::{CourseRecord, QueryRecord};

/// The six node kinds and their wire tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `group`: all children required.
    Group,
    /// `or`: either of two children.
    Or,
    /// `course`: a single course reference.
    Course,
    /// `recommended`: advisory annotation.
    Recommended,
    /// `coreq`: co-requisite annotation.
    Coreq,
    /// `not`: excluded course.
    Not,
}

impl NodeKind {
    /// All kinds, in wire-format order.
    pub const ALL: [NodeKind; 6] = [
        NodeKind::Group,
        NodeKind::Or,
        NodeKind::Course,
        NodeKind::Recommended,
        NodeKind::Coreq,
        NodeKind::Not,
    ];

    /// The wire tag for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Group => "group",
            NodeKind::Or => "or",
            NodeKind::Course => "course",
            NodeKind::Recommended => "recommended",
            NodeKind::Coreq => "coreq",
            NodeKind::Not => "not",
        }
    }

    /// Looks up a kind by its wire tag. Tags are case-sensitive.
    pub fn from_tag(tag: &str) -> Option<NodeKind> {
        NodeKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One node of a prerequisite expression tree.
///
/// Trees are built once (see [`build`](crate::build) and
/// [`parse_prerequisites`](crate::parse_prerequisites)) and never mutated.
///
/// # Examples
///
/// ```rust
/// use prereq_query::QueryNode;
///
/// let tree = QueryNode::group(vec![
///     QueryNode::course("I&C SCI 46"),
///     QueryNode::or(QueryNode::course("MATH 2A"), QueryNode::course("MATH 3A")),
/// ]);
/// assert_eq!(tree.to_string(), "[ |I&C SCI 46| AND |MATH 2A| OR |MATH 3A| ]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Conjunction; an empty group is vacuously satisfied.
    Group(Vec<QueryNode>),

    /// Disjunction of exactly two nodes.
    Or {
        /// Left alternative.
        left: Box<QueryNode>,
        /// Right alternative.
        right: Box<QueryNode>,
    },

    /// Reference to a course by identifier.
    Course {
        /// Course identifier as written in the catalog, e.g. `COMPSCI 161`.
        name: String,
    },

    /// Recommended preparation. Never blocks eligibility.
    Recommended(Box<QueryNode>),

    /// Co-requisite. Never blocks eligibility.
    Coreq(Box<QueryNode>),

    /// Satisfied only when the wrapped node is not.
    Not(Box<QueryNode>),
}

impl QueryNode {
    /// Creates a group node.
    pub fn group(queries: Vec<QueryNode>) -> Self {
        QueryNode::Group(queries)
    }

    /// Creates an or node.
    pub fn or(left: QueryNode, right: QueryNode) -> Self {
        QueryNode::Or {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a course reference.
    pub fn course(name: impl Into<String>) -> Self {
        QueryNode::Course { name: name.into() }
    }

    /// Wraps a node as recommended.
    pub fn recommended(course: QueryNode) -> Self {
        QueryNode::Recommended(Box::new(course))
    }

    /// Wraps a node as a co-requisite.
    pub fn coreq(course: QueryNode) -> Self {
        QueryNode::Coreq(Box::new(course))
    }

    /// Wraps a node as excluded.
    pub fn not(course: QueryNode) -> Self {
        QueryNode::Not(Box::new(course))
    }

    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            QueryNode::Group(_) => NodeKind::Group,
            QueryNode::Or { .. } => NodeKind::Or,
            QueryNode::Course { .. } => NodeKind::Course,
            QueryNode::Recommended(_) => NodeKind::Recommended,
            QueryNode::Coreq(_) => NodeKind::Coreq,
            QueryNode::Not(_) => NodeKind::Not,
        }
    }

    /// Returns true for recommended and co-requisite wrappers.
    pub fn is_advisory(&self) -> bool {
        matches!(self, QueryNode::Recommended(_) | QueryNode::Coreq(_))
    }

    /// Short label used where a wrapper names its child: the course name
    /// for a course reference, the single-line form otherwise.
    pub fn label(&self) -> Cow<'_, str> {
        match self {
            QueryNode::Course { name } => Cow::Borrowed(name.as_str()),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Converts the tree back into its wire record.
    pub fn to_record(&self) -> QueryRecord {
        match self {
            QueryNode::Group(queries) => {
                QueryRecord::group(queries.iter().map(QueryNode::to_record).collect())
            }
            QueryNode::Or { left, right } => QueryRecord::or(left.to_record(), right.to_record()),
            QueryNode::Course { name } => QueryRecord::course(name.clone()),
            QueryNode::Recommended(course) | QueryNode::Coreq(course) | QueryNode::Not(course) => {
                QueryRecord::wrapper(self.kind(), course.to_record())
            }
        }
    }

    /// Collapses single-child groups at the root into their only child.
    ///
    /// Only the chain starting at the root is collapsed; nested groups keep
    /// their shape.
    pub fn minify(self) -> QueryNode {
        match self {
            QueryNode::Group(mut queries) if queries.len() == 1 => match queries.pop() {
                Some(only) => only.minify(),
                None => QueryNode::Group(queries),
            },
            other => other,
        }
    }

    /// Every course identifier referenced in the tree, in render order.
    pub fn course_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_names(&mut names);
        names
    }

    fn collect_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            QueryNode::Group(queries) => queries.iter().for_each(|q| q.collect_names(names)),
            QueryNode::Or { left, right } => {
                left.collect_names(names);
                right.collect_names(names);
            }
            QueryNode::Course { name } => names.push(name.as_str()),
            QueryNode::Recommended(course) | QueryNode::Coreq(course) | QueryNode::Not(course) => {
                course.collect_names(names)
            }
        }
    }

    /// Group nesting depth. A bare course has depth 0, `Group[]` has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            QueryNode::Group(queries) => 1 + queries.iter().map(QueryNode::depth).max().unwrap_or(0),
            QueryNode::Or { left, right } => left.depth().max(right.depth()),
            QueryNode::Course { .. } => 0,
            QueryNode::Recommended(course) | QueryNode::Coreq(course) | QueryNode::Not(course) => {
                course.depth()
            }
        }
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryNode::Group(queries) => {
                write!(f, "[ ")?;
                for (i, q) in queries.iter().enumerate() {
                    if i > 0 {
                        write!(f, " AND ")?;
                    }
                    write!(f, "{}", q)?;
                }
                write!(f, " ]")
            }
            QueryNode::Or { left, right } => write!(f, "{} OR {}", left, right),
            QueryNode::Course { name } => write!(f, "|{}|", name),
            QueryNode::Recommended(course) => write!(f, "|RECOMMENDED: {}|", course.label()),
            QueryNode::Coreq(course) => write!(f, "|COREQ: {}|", course.label()),
            QueryNode::Not(course) => write!(f, "|NOT: {}|", course.label()),
        }
    }
}

/// A catalog course together with its prerequisite tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    name: String,
    title: String,
    prereq: QueryNode,
    record: QueryRecord,
}

impl Course {
    /// Creates a course from an already-built tree.
    pub fn new(name: impl Into<String>, title: impl Into<String>, prereq: QueryNode) -> Self {
        let record = prereq.to_record();
        Self {
            name: name.into(),
            title: title.into(),
            prereq,
            record,
        }
    }

    /// Builds a course from its wire record.
    pub fn from_record(record: CourseRecord) -> QueryResult<Self> {
        let prereq = build(&record.prereq_query)?;
        Ok(Self {
            name: record.name,
            title: record.title,
            prereq,
            record: record.prereq_query,
        })
    }

    /// Course identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Prerequisite tree.
    pub fn prereq(&self) -> &QueryNode {
        &self.prereq
    }

    /// The prerequisite record this course was built from.
    pub fn record(&self) -> &QueryRecord {
        &self.record
    }

    /// Converts the course back into its wire record.
    pub fn to_record(&self) -> CourseRecord {
        CourseRecord {
            name: self.name.clone(),
            title: self.title.clone(),
            prereq_query: self.record.clone(),
        }
    }
}
