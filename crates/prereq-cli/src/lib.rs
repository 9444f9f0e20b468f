//! Command-line front end for browsing a course catalog by prerequisites.
//!
//! The catalog is a JSON array of course records, as produced by the
//! course data source:
//!
//! ```text
//! [ { "name": "I&C SCI 32", "title": "PRG SOFTWARE LIB",
//!     "prereq_query": { "type": "course", "name": "I&C SCI 31" } } ]
//! ```

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::ArgAction;
use prereq_matcher::{Alias, Blocker, Catalog, CompletedCourses, MatcherConfig};
use prereq_query::parse_prerequisites;
use tracing::level_filters::LevelFilter;

/// Parse an alias of the form `abbrev=replacement`.
fn parse_alias(s: &str) -> Result<Alias, String> {
    let (from, to) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ABBREV=REPLACEMENT, got '{s}'"))?;
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err(format!("alias '{s}' has an empty side"));
    }
    Ok(Alias::new(from.trim(), to.trim()))
}

#[derive(Debug, clap::Parser)]
#[command(name = "prereq", version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    /// Runs the selected command, writing to stdout.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.command.run(&mut out)
    }

    /// Logs go to stderr so command output stays pipeable. `RUST_LOG`
    /// overrides the `-v` level.
    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::builder()
            .with_default_directive(log_level(verbosity).into())
            .from_env_lossy();

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

fn log_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Show every course with its rendered prerequisites
    List(List),

    /// Show the courses a student can take next
    Eligible(Eligible),

    /// Explain whether a student can take one course
    Check(Check),

    /// Convert catalog prerequisite text into a JSON record
    Parse(Parse),
}

impl Command {
    /// Runs the command, writing its report to `out`.
    pub fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(out),
            Self::Eligible(command) => command.run(out),
            Self::Check(command) => command.run(out),
            Self::Parse(command) => command.run(out),
        }
    }
}

/// Options shared by commands that take a completed-course list.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletedArgs {
    /// Completed courses, comma-separated (e.g. "ics 31, math 2a")
    #[arg(short, long, default_value = "")]
    completed: String,

    /// Extra department aliases (e.g. cs=compsci)
    #[arg(long = "alias", value_name = "ABBREV=NAME", value_parser = parse_alias)]
    aliases: Vec<Alias>,

    /// Disable the built-in `ics` alias
    #[arg(long)]
    no_default_aliases: bool,
}

impl CompletedArgs {
    fn config_builder(&self) -> prereq_matcher::MatcherConfigBuilder {
        let mut builder = MatcherConfig::builder();
        if self.no_default_aliases {
            builder = builder.without_aliases();
        }
        for alias in &self.aliases {
            builder = builder.with_alias(alias.from.clone(), alias.to.clone());
        }
        builder
    }
}

/// Command arguments for `prereq list`.
#[derive(Debug, clap::Parser)]
pub struct List {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Print rows as JSON
    #[arg(long)]
    json: bool,
}

impl List {
    fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let catalog = load_catalog(&self.catalog)?;
        let rows = catalog.rows();

        if self.json {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
            return Ok(());
        }

        for row in rows {
            writeln!(out, "{}  {}", row.name, row.title)?;
            for line in row.prerequisites.lines() {
                writeln!(out, "    {}", line)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

/// Command arguments for `prereq eligible`.
#[derive(Debug, clap::Parser)]
pub struct Eligible {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    #[command(flatten)]
    completed: CompletedArgs,

    /// Also list courses already completed
    #[arg(long)]
    include_completed: bool,

    /// Evaluate courses on all cores
    #[arg(long)]
    parallel: bool,
}

impl Eligible {
    fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let mut catalog = load_catalog(&self.catalog)?;
        let config = self
            .completed
            .config_builder()
            .with_exclude_completed(!self.include_completed)
            .with_parallel(self.parallel)
            .build();
        catalog.set_config(config);

        let result = catalog.eligible_text(&self.completed.completed);
        tracing::info!(
            matched = result.stats.matched,
            evaluated = result.stats.evaluated,
            "eligibility computed"
        );
        for course in result.iter() {
            writeln!(out, "{}  {}", course.name(), course.title())?;
        }
        Ok(())
    }
}

/// Command arguments for `prereq check`.
#[derive(Debug, clap::Parser)]
pub struct Check {
    /// Path to the catalog JSON file
    catalog: PathBuf,

    /// Course to check (case-insensitive)
    course: String,

    #[command(flatten)]
    completed: CompletedArgs,
}

impl Check {
    fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let mut catalog = load_catalog(&self.catalog)?;
        catalog.set_config(self.completed.config_builder().build());

        let completed = CompletedCourses::parse(&self.completed.completed, catalog.config());
        let check = catalog.check(&self.course, &completed)?;

        let verdict = if check.satisfied { "eligible" } else { "not eligible" };
        writeln!(out, "{}: {}", check.course.name(), verdict)?;
        if check.already_completed {
            writeln!(out, "  already completed")?;
        }
        for blocker in &check.blockers {
            match blocker {
                Blocker::Missing(name) => writeln!(out, "  missing: {}", name)?,
                Blocker::Excluded(name) => writeln!(out, "  excluded by: {}", name)?,
            }
        }
        Ok(())
    }
}

/// Command arguments for `prereq parse`.
#[derive(Debug, clap::Parser)]
pub struct Parse {
    /// Prerequisite text, e.g. "I&C SCI 31 AND ( MATH 2A OR MATH 5A )"
    text: String,
}

impl Parse {
    fn run(self, out: &mut impl Write) -> anyhow::Result<()> {
        let tree = parse_prerequisites(&self.text)
            .with_context(|| format!("failed to parse '{}'", self.text))?;
        serde_json::to_writer_pretty(&mut *out, &tree.to_record())?;
        writeln!(out)?;
        Ok(())
    }
}

/// Reads and loads a catalog file. Malformed courses are skipped with a warning.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let (catalog, report) = Catalog::from_json(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    tracing::info!(
        loaded = report.loaded,
        skipped = report.failures.len(),
        "loaded catalog from {}",
        path.display()
    );
    Ok(catalog)
}
