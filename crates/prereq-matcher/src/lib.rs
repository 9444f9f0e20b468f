//! # prereq-matcher
//!
//! Decides which courses a student can take, given the courses they have
//! completed.
//!
//! This crate evaluates the prerequisite trees from [`prereq_query`] against
//! a set of completed courses and filters whole catalogs.
//!
//! ## Quick Start
//!
//! ```rust
//! use prereq_matcher::{matches, CompletedCourses, MatcherConfig};
//! use prereq_query::parse_prerequisites;
//!
//! let tree = parse_prerequisites("I&C SCI 46 AND MATH 2A OR MATH 3A AND STATS 67 recommended")?;
//!
//! let completed = CompletedCourses::parse("ics 46, math 3a", &MatcherConfig::default());
//! assert!(matches(&tree, &completed));
//!
//! let completed = CompletedCourses::parse("ics 46", &MatcherConfig::default());
//! assert!(!matches(&tree, &completed));
//! # Ok::<(), prereq_query::QueryError>(())
//! ```
//!
//! ## Catalogs
//!
//! ```ignore
//! use prereq_matcher::{Catalog, MatcherConfig};
//!
//! let (catalog, report) = Catalog::from_json(&std::fs::read_to_string("courses.json")?)?;
//! for failure in &report.failures {
//!     eprintln!("skipped {}: {}", failure.course, failure.error);
//! }
//!
//! let result = catalog.eligible_text("ics 31, ics 32, math 2a");
//! println!("{} courses available", result.count());
//! ```
//!
//! ## Matching rules
//!
//! | Node | Satisfied when |
//! |------|----------------|
//! | Group | every child is (empty: always) |
//! | Or | either side is |
//! | Course | its lower-cased name is completed |
//! | Recommended | always |
//! | Coreq | always |
//! | Not | the child is not |
//!
//! ## Feature Flags
//!
//! - `parallel` - Enables parallel catalog filtering using rayon

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod catalog;
mod completed;
mod config;
mod error;
mod matcher;
mod result;
mod traits;

// Public re-exports
pub use catalog::{Catalog, CourseCheck, CourseLoadFailure, CourseRow, LoadReport};
pub use completed::{normalize_course_name, CompletedCourses};
pub use config::{Alias, MatcherConfig, MatcherConfigBuilder};
pub use error::{MatcherError, MatcherResult};
pub use matcher::{explain, matches, Blocker, Satisfiable};
pub use result::{FilterResult, FilterStats};
pub use traits::CourseSet;

// Re-export commonly used types from dependencies for convenience
pub use prereq_query::{Course, QueryNode};
