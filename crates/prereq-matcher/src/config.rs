//! Configuration types for matching and catalog filtering.

/// Configuration for normalizing completed-course input and filtering a catalog.
///
/// The default reproduces the course browser's behavior: `ics` is an alias
/// for `i&c sci`, courses the student already took are hidden, and a blank
/// completed-course list shows the whole catalog.
///
/// # Example
///
/// ```rust
/// use prereq_matcher::MatcherConfig;
///
/// let config = MatcherConfig::builder()
///     .with_alias("cs", "compsci")
///     .with_exclude_completed(false)
///     .with_parallel(true)
///     .build();
/// assert_eq!(config.aliases.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Leading-word rewrites applied to each completed-course entry, in order.
    pub aliases: Vec<Alias>,
    /// Hide courses the student has already completed.
    pub exclude_completed: bool,
    /// Return every course when the completed-course set is empty.
    pub show_all_when_empty: bool,
    /// Evaluate courses in parallel (requires the `parallel` feature).
    pub parallel: bool,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            aliases: vec![Alias::new("ics", "i&c sci")],
            exclude_completed: true,
            show_all_when_empty: true,
            parallel: false,
        }
    }
}

impl MatcherConfig {
    /// Creates a new builder starting from the default configuration.
    pub fn builder() -> MatcherConfigBuilder {
        MatcherConfigBuilder::default()
    }
}

/// A department abbreviation and the catalog spelling it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    /// Lower-case abbreviation, e.g. `ics`.
    pub from: String,
    /// Lower-case replacement, e.g. `i&c sci`.
    pub to: String,
}

impl Alias {
    /// Creates an alias. Both sides are lower-cased.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into().to_lowercase(),
            to: to.into().to_lowercase(),
        }
    }

    /// Rewrites `entry` when it starts with the abbreviation as a whole word.
    pub fn apply(&self, entry: &str) -> Option<String> {
        let rest = entry.strip_prefix(self.from.as_str())?;
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            Some(format!("{}{}", self.to, rest))
        } else {
            None
        }
    }
}

/// Builder for MatcherConfig.
#[derive(Debug, Clone, Default)]
pub struct MatcherConfigBuilder {
    config: MatcherConfig,
}

impl MatcherConfigBuilder {
    /// Adds an alias rewrite.
    pub fn with_alias(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.config.aliases.push(Alias::new(from, to));
        self
    }

    /// Removes all alias rewrites, including the default one.
    pub fn without_aliases(mut self) -> Self {
        self.config.aliases.clear();
        self
    }

    /// Hides or shows courses the student already completed.
    pub fn with_exclude_completed(mut self, exclude: bool) -> Self {
        self.config.exclude_completed = exclude;
        self
    }

    /// Sets whether an empty completed-course set returns every course.
    pub fn with_show_all_when_empty(mut self, show_all: bool) -> Self {
        self.config.show_all_when_empty = show_all;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Builds the MatcherConfig.
    pub fn build(self) -> MatcherConfig {
        self.config
    }
}
