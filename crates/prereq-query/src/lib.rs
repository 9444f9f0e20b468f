//! # prereq-query
//!
//! Course prerequisite expressions: a small boolean tree of course
//! references combined with AND groups and OR pairs, plus recommended,
//! co-requisite and excluded-course annotations.
//!
//! This crate provides:
//! - **Tree types**: [`QueryNode`] and [`Course`]
//! - **Tree builder**: validate raw [`QueryRecord`]s from the course data source
//! - **Renderer**: indented, human-readable text for each tree
//! - **Text parser**: build trees from registrar prerequisite text
//!
//! Evaluation against a student's completed courses lives in the
//! `prereq-matcher` crate.
//!
//! ## Usage
//!
//! ```rust
//! use prereq_query::{build_json, render, parse_prerequisites};
//!
//! let record = serde_json::json!({
//!     "type": "group",
//!     "queries": [
//!         { "type": "course", "name": "I&C SCI 46" },
//!         { "type": "recommended", "course": { "type": "course", "name": "STATS 67" } }
//!     ]
//! });
//! let tree = build_json(&record).unwrap();
//! assert_eq!(render(&tree, ""), "(\n  |I&C SCI 46|\nAND\n  |RECOMMENDED: STATS 67|\n)");
//!
//! let parsed = parse_prerequisites("I&C SCI 46 AND STATS 67 recommended").unwrap();
//! assert_eq!(parsed, tree);
//! ```
//!
//! ## Node kinds
//!
//! | Tag | Variant | Satisfied when |
//! |-----|---------|----------------|
//! | `group` | [`QueryNode::Group`] | every child is (an empty group always is) |
//! | `or` | [`QueryNode::Or`] | either child is |
//! | `course` | [`QueryNode::Course`] | the course was completed |
//! | `recommended` | [`QueryNode::Recommended`] | always |
//! | `coreq` | [`QueryNode::Coreq`] | always |
//! | `not` | [`QueryNode::Not`] | the child is not |

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod ast;
mod builder;
mod error;
mod formatter;
mod parser;
mod record;

pub use ast::{Course, NodeKind, QueryNode};
pub use builder::{build, build_json, NodePath};
pub use error::{QueryError, QueryResult};
pub use formatter::{render, Format, Formatter};
pub use parser::parse_prerequisites;
pub use record::{CourseRecord, QueryRecord};
