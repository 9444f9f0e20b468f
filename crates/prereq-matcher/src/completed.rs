//! Normalized sets of completed courses.

use std::collections::HashSet;

use crate::config::MatcherConfig;
use crate::traits::CourseSet;

/// Normalizes one course identifier: trimmed, lower-cased, single-spaced.
pub fn normalize_course_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// The courses a student has completed, normalized for matching.
///
/// # Example
///
/// ```rust
/// use prereq_matcher::{CompletedCourses, MatcherConfig};
///
/// let completed = CompletedCourses::parse("ICS 31, Math 2A ,", &MatcherConfig::default());
/// assert_eq!(completed.len(), 2);
/// assert!(completed.contains("I&C SCI 31"));
/// assert!(completed.contains("math 2a"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletedCourses {
    courses: HashSet<String>,
}

impl CompletedCourses {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses free-form input: comma-separated, trimmed, lower-cased, with
    /// the configured aliases applied. Empty entries are skipped, so blank
    /// or malformed input yields an empty set.
    pub fn parse(input: &str, config: &MatcherConfig) -> Self {
        input
            .split(',')
            .map(normalize_course_name)
            .filter(|entry| !entry.is_empty())
            .map(|entry| {
                config
                    .aliases
                    .iter()
                    .find_map(|alias| alias.apply(&entry))
                    .unwrap_or(entry)
            })
            .collect()
    }

    /// Creates a set from course names, normalizing each.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .map(|name| normalize_course_name(name.as_ref()))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Adds a course, normalizing it.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = normalize_course_name(name);
        !name.is_empty() && self.courses.insert(name)
    }

    /// Checks whether a course was completed. Comparison is case-insensitive.
    pub fn contains(&self, name: &str) -> bool {
        self.courses.contains(&normalize_course_name(name))
    }

    /// Number of completed courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if no course was completed.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Iterates over the normalized course names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(String::as_str)
    }

    /// Normalized course names, sorted.
    pub fn to_sorted_vec(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<String> for CompletedCourses {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            courses: iter.into_iter().collect(),
        }
    }
}

impl CourseSet for CompletedCourses {
    fn has_completed(&self, course: &str) -> bool {
        self.courses.contains(course)
    }
}
