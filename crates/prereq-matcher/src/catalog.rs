//! Course catalog: loading, display rows and eligibility filtering.

use std::time::Instant;

use prereq_query::{render, Course, CourseRecord, NodePath, QueryError};
use serde::{Deserialize, Serialize};

use crate::completed::CompletedCourses;
use crate::config::MatcherConfig;
use crate::error::{MatcherError, MatcherResult};
use crate::matcher::{explain, matches, Blocker};
use crate::result::{FilterResult, FilterStats};

/// A course that could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseLoadFailure {
    /// Course identifier, or `#<index>` when the record has no usable name.
    pub course: String,
    /// What was wrong with it.
    pub error: QueryError,
}

/// Outcome of loading a catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Number of courses loaded.
    pub loaded: usize,
    /// Courses skipped because their data was malformed.
    pub failures: Vec<CourseLoadFailure>,
}

impl LoadReport {
    /// Returns true if every course loaded.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// One display row: name, title and rendered prerequisites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseRow {
    /// Course identifier.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Prerequisites in the indented style, for a preformatted cell.
    pub prerequisites: String,
}

/// Eligibility of a single course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseCheck<'a> {
    /// The course checked.
    pub course: &'a Course,
    /// Whether the prerequisites are satisfied.
    pub satisfied: bool,
    /// Whether the student already completed the course itself.
    pub already_completed: bool,
    /// What blocks the prerequisites, empty when satisfied.
    pub blockers: Vec<Blocker>,
}

/// An in-memory course catalog.
///
/// Courses are immutable once loaded; reloading means building a new
/// catalog.
///
/// # Example
///
/// ```rust
/// use prereq_matcher::{Catalog, CompletedCourses};
///
/// let json = r#"[
///     { "name": "I&C SCI 32", "title": "PRG SOFTWARE LIB",
///       "prereq_query": { "type": "course", "name": "I&C SCI 31" } },
///     { "name": "I&C SCI 33", "title": "INTERMEDIATE PRG",
///       "prereq_query": { "type": "course", "name": "I&C SCI 32" } }
/// ]"#;
/// let (catalog, report) = Catalog::from_json(json).unwrap();
/// assert!(report.is_clean());
///
/// let result = catalog.eligible_text("ics 31");
/// assert_eq!(result.names(), vec!["I&C SCI 32"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Course>,
    config: MatcherConfig,
}

impl Catalog {
    /// Creates a catalog with default configuration.
    pub fn new(courses: Vec<Course>) -> Self {
        Self::with_config(courses, MatcherConfig::default())
    }

    /// Creates a catalog with custom configuration.
    pub fn with_config(courses: Vec<Course>, config: MatcherConfig) -> Self {
        Self { courses, config }
    }

    /// Builds a catalog from course records.
    ///
    /// A course whose prerequisite record is malformed is skipped and
    /// reported; the rest still load.
    pub fn from_records(records: Vec<CourseRecord>) -> (Self, LoadReport) {
        let mut report = LoadReport::default();
        let mut courses = Vec::with_capacity(records.len());

        for record in records {
            let name = record.name.clone();
            match Course::from_record(record) {
                Ok(course) => courses.push(course),
                Err(error) => report.failures.push(skipped(name, error)),
            }
        }

        report.loaded = courses.len();
        tracing::debug!(
            loaded = report.loaded,
            skipped = report.failures.len(),
            "catalog loaded"
        );
        (Self::new(courses), report)
    }

    /// Builds a catalog from a JSON array of course records.
    ///
    /// Only a document that is not a JSON array is an error. Individual
    /// entries that are not course records are skipped and reported like
    /// malformed prerequisites.
    pub fn from_json(json: &str) -> MatcherResult<(Self, LoadReport)> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let mut records = Vec::with_capacity(values.len());
        let mut shape_failures = Vec::new();

        for (index, value) in values.iter().enumerate() {
            match CourseRecord::deserialize(value) {
                Ok(record) => records.push(record),
                Err(e) => {
                    let name = value
                        .get("name")
                        .and_then(serde_json::Value::as_str)
                        .map(str::to_string)
                        .unwrap_or_else(|| format!("#{}", index));
                    let error = QueryError::MalformedRecord {
                        path: NodePath::root(),
                        message: e.to_string(),
                    };
                    shape_failures.push(skipped(name, error));
                }
            }
        }

        let (catalog, mut report) = Self::from_records(records);
        shape_failures.append(&mut report.failures);
        report.failures = shape_failures;
        Ok((catalog, report))
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: MatcherConfig) {
        self.config = config;
    }

    /// Returns the configuration.
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// All courses, in load order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true if the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Finds a course by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&Course> {
        let wanted = crate::completed::normalize_course_name(name);
        self.courses
            .iter()
            .find(|c| crate::completed::normalize_course_name(c.name()) == wanted)
    }

    /// Display rows for every course.
    pub fn rows(&self) -> Vec<CourseRow> {
        self.courses.iter().map(row).collect()
    }

    /// Parses free-form completed-course text and filters the catalog.
    pub fn eligible_text(&self, input: &str) -> FilterResult<'_> {
        let completed = CompletedCourses::parse(input, &self.config);
        self.eligible(&completed)
    }

    /// Courses whose prerequisites `completed` satisfies.
    ///
    /// With an empty set and `show_all_when_empty`, every course is returned
    /// without evaluation. Courses already in `completed` are dropped when
    /// `exclude_completed` is set.
    pub fn eligible(&self, completed: &CompletedCourses) -> FilterResult<'_> {
        let start = Instant::now();

        if completed.is_empty() && self.config.show_all_when_empty {
            let courses: Vec<&Course> = self.courses.iter().collect();
            let matched = courses.len();
            return FilterResult::new(courses, FilterStats::new(start.elapsed(), 0, matched));
        }

        let exclude_completed = self.config.exclude_completed;
        let keep = |course: &&Course| {
            !(exclude_completed && completed.contains(course.name()))
                && matches(course.prereq(), completed)
        };
        let courses = self.filter(keep);

        let stats = FilterStats::new(start.elapsed(), self.courses.len(), courses.len());
        tracing::debug!(
            evaluated = stats.evaluated,
            matched = stats.matched,
            duration = ?stats.duration,
            "catalog filtered"
        );
        FilterResult::new(courses, stats)
    }

    /// Checks one course by name.
    pub fn check(&self, name: &str, completed: &CompletedCourses) -> MatcherResult<CourseCheck<'_>> {
        let course = self
            .get(name)
            .ok_or_else(|| MatcherError::CourseNotFound(name.to_string()))?;
        Ok(CourseCheck {
            course,
            satisfied: matches(course.prereq(), completed),
            already_completed: completed.contains(course.name()),
            blockers: explain(course.prereq(), completed),
        })
    }

    #[cfg(feature = "parallel")]
    fn filter<F>(&self, keep: F) -> Vec<&Course>
    where
        F: Fn(&&Course) -> bool + Sync + Send,
    {
        use rayon::prelude::*;

        if self.config.parallel {
            self.courses.par_iter().filter(keep).collect()
        } else {
            self.courses.iter().filter(keep).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn filter<F>(&self, keep: F) -> Vec<&Course>
    where
        F: Fn(&&Course) -> bool,
    {
        if self.config.parallel {
            tracing::debug!("parallel evaluation requested without the `parallel` feature");
        }
        self.courses.iter().filter(keep).collect()
    }
}

fn row(course: &Course) -> CourseRow {
    CourseRow {
        name: course.name().to_string(),
        title: course.title().to_string(),
        prerequisites: render(course.prereq(), ""),
    }
}

fn skipped(course: String, error: QueryError) -> CourseLoadFailure {
    tracing::warn!(course = %course, error = %error, "skipping course with malformed prerequisites");
    CourseLoadFailure { course, error }
}
