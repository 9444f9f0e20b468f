//! Result types for catalog filtering.

use std::time::Duration;

use prereq_query::Course;

/// Courses left after filtering a catalog, in catalog order.
///
/// # Example
///
/// ```ignore
/// let result = catalog.eligible(&completed);
///
/// println!("{} of {} courses are open to you", result.count(), result.stats.evaluated);
///
/// for course in result.iter() {
///     println!("{}  {}", course.name(), course.title());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FilterResult<'a> {
    /// Matching courses.
    pub courses: Vec<&'a Course>,
    /// Filtering statistics.
    pub stats: FilterStats,
}

impl<'a> FilterResult<'a> {
    /// Creates a new FilterResult.
    pub fn new(courses: Vec<&'a Course>, stats: FilterStats) -> Self {
        Self { courses, stats }
    }

    /// Number of matching courses.
    pub fn count(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Checks whether a course (by case-insensitive name) is in the result.
    pub fn contains(&self, name: &str) -> bool {
        self.courses.iter().any(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Iterates over matching courses.
    pub fn iter(&self) -> impl Iterator<Item = &'a Course> + '_ {
        self.courses.iter().copied()
    }

    /// Names of matching courses, in catalog order.
    pub fn names(&self) -> Vec<&'a str> {
        self.courses.iter().map(|c| c.name()).collect()
    }
}

impl<'a> IntoIterator for FilterResult<'a> {
    type Item = &'a Course;
    type IntoIter = std::vec::IntoIter<&'a Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.courses.into_iter()
    }
}

/// Statistics from one filtering pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Total filtering duration.
    pub duration: Duration,
    /// Number of prerequisite trees evaluated.
    pub evaluated: usize,
    /// Number of courses kept.
    pub matched: usize,
}

impl FilterStats {
    /// Creates new filter stats.
    pub fn new(duration: Duration, evaluated: usize, matched: usize) -> Self {
        Self {
            duration,
            evaluated,
            matched,
        }
    }
}
