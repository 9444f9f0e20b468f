//! Traits for prerequisite matching.
//!
//! [`CourseSet`] abstracts over however a caller stores the courses a
//! student has completed. The matcher only ever asks one question: was this
//! course, lower-cased, completed?
//!
//! # Example: a custom set
//!
//! ```rust
//! use prereq_matcher::{matches, CourseSet};
//! use prereq_query::QueryNode;
//!
//! /// Treats every lower-division course as completed.
//! struct LowerDivision;
//!
//! impl CourseSet for LowerDivision {
//!     fn has_completed(&self, course: &str) -> bool {
//!         course
//!             .rsplit(' ')
//!             .next()
//!             .and_then(|n| n.trim_end_matches(char::is_alphabetic).parse::<u32>().ok())
//!             .is_some_and(|n| n < 100)
//!     }
//! }
//!
//! let tree = QueryNode::course("MATH 2A");
//! assert!(matches(&tree, &LowerDivision));
//! ```

use std::collections::{BTreeSet, HashSet};

/// A set of completed courses.
///
/// Implementations receive course identifiers already lower-cased by the
/// matcher; they are responsible for normalizing their own contents.
pub trait CourseSet {
    /// Returns true if `course` (lower-case) was completed.
    fn has_completed(&self, course: &str) -> bool;
}

impl<T: CourseSet + ?Sized> CourseSet for &T {
    fn has_completed(&self, course: &str) -> bool {
        (**self).has_completed(course)
    }
}

impl CourseSet for HashSet<String> {
    fn has_completed(&self, course: &str) -> bool {
        self.contains(course)
    }
}

impl CourseSet for BTreeSet<String> {
    fn has_completed(&self, course: &str) -> bool {
        self.contains(course)
    }
}

impl CourseSet for [String] {
    fn has_completed(&self, course: &str) -> bool {
        self.iter().any(|c| c == course)
    }
}

impl CourseSet for Vec<String> {
    fn has_completed(&self, course: &str) -> bool {
        self.as_slice().has_completed(course)
    }
}

impl CourseSet for [&str] {
    fn has_completed(&self, course: &str) -> bool {
        self.iter().any(|c| *c == course)
    }
}
