//! Renders prerequisite trees as text.
//!
//! Two styles are available: the compact single-line form used in logs and
//! diagnostics, and the indented multi-line form shown to students. The
//! indented form relies on literal newlines and leading spaces, so callers
//! embedding it in markup must put it in a preformatted context.

use crate::ast::QueryNode;

const INDENT_STEP: &str = "  ";

/// Output style for rendered trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Single line: `[ |A| AND |B| OR |C| ]`
    Compact,

    /// Multi-line with parenthesized, indented groups (default).
    #[default]
    Indented,
}

/// Tree formatter.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    _private: (),
}

impl Formatter {
    /// Create a new formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format a tree in the specified style.
    pub fn format(&self, node: &QueryNode, format: Format) -> String {
        Self::format_node(node, format)
    }

    /// Format a tree (static method).
    pub fn format_node(node: &QueryNode, format: Format) -> String {
        match format {
            Format::Compact => node.to_string(),
            Format::Indented => render(node, ""),
        }
    }
}

/// Renders a tree in the indented style, every line prefixed by `indent`.
///
/// - A group is a `(` line, its children one indent step deeper joined by
///   `AND` lines, and a `)` line.
/// - An or is a single line; its sides are rendered without indentation.
/// - A course is `|name|`.
/// - Recommended, co-requisite and excluded courses are
///   `|RECOMMENDED: name|`, `|COREQ: name|` and `|NOT: name|`, naming only
///   the wrapped course.
///
/// # Examples
///
/// ```rust
/// use prereq_query::{render, QueryNode};
///
/// let tree = QueryNode::group(vec![
///     QueryNode::course("CS 161"),
///     QueryNode::or(QueryNode::course("MATH 2A"), QueryNode::course("MATH 3A")),
/// ]);
/// assert_eq!(
///     render(&tree, ""),
///     "(\n  |CS 161|\nAND\n  |MATH 2A| OR |MATH 3A|\n)"
/// );
/// ```
pub fn render(node: &QueryNode, indent: &str) -> String {
    match node {
        QueryNode::Group(queries) => {
            let inner_indent = format!("{}{}", indent, INDENT_STEP);
            let inner = queries
                .iter()
                .map(|q| render(q, &inner_indent))
                .collect::<Vec<_>>()
                .join(&format!("\n{}AND\n", indent));
            format!("{indent}(\n{inner}\n{indent})")
        }
        QueryNode::Or { left, right } => {
            format!("{}{} OR {}", indent, render(left, ""), render(right, ""))
        }
        QueryNode::Course { name } => format!("{}|{}|", indent, name),
        QueryNode::Recommended(course) => {
            format!("{}|RECOMMENDED: {}|", indent, course.label())
        }
        QueryNode::Coreq(course) => format!("{}|COREQ: {}|", indent, course.label()),
        QueryNode::Not(course) => format!("{}|NOT: {}|", indent, course.label()),
    }
}

// =============================================================================
// Tests
// =============================================================================
