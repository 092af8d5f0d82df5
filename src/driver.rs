//! Input classification, timed runs and reporting for the `ssp` binary.
//!
//! The driver turns a command-line argument into one or more instances, runs the
//! search on each and renders a [`Report`]. In directory mode every matching file is
//! handled on its own: a failure is handed to the caller and the next file is processed.

use crate::cs::combinatorial::subset_sum::{Instance, SearchConfig, SolutionSet};
use crate::cs::error::{Error, Result};
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Where instances come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Generate a random instance of this size
    Size(i64),
    /// Load a single problem file
    File(PathBuf),
    /// Load every matching problem file in a directory
    Directory(PathBuf),
}

impl Source {
    /// Classifies a command-line argument: an integer is a size, otherwise it must
    /// name an existing file or directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedInput`] for anything else.
    pub fn classify(arg: &str) -> Result<Self> {
        if let Ok(size) = arg.trim().parse::<i64>() {
            return Ok(Source::Size(size));
        }
        let path = Path::new(arg);
        if path.is_file() {
            Ok(Source::File(path.to_path_buf()))
        } else if path.is_dir() {
            Ok(Source::Directory(path.to_path_buf()))
        } else if path.exists() {
            Err(Error::UnsupportedInput(format!(
                "argument is not a file or directory: {arg}"
            )))
        } else {
            Err(Error::UnsupportedInput(format!(
                "argument is not an integer or a valid file/directory: {arg}"
            )))
        }
    }
}

/// Outcome of one timed search.
#[derive(Debug, Clone)]
pub struct Report {
    instance: Instance,
    solutions: SolutionSet,
    elapsed: Duration,
    display_limit: usize,
}

impl Report {
    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn solutions(&self) -> &SolutionSet {
        &self.solutions
    }

    /// Wall-clock time spent in the search.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.instance)?;
        writeln!(f, "{}", self.instance.show_integers())?;
        writeln!(f, "{}", self.instance.show_target())?;
        writeln!(f)?;
        writeln!(f, "Running bp ... done!")?;
        if self.solutions.len() < self.display_limit {
            writeln!(f, "{}", self.solutions)?;
        } else {
            write!(f, "bp found {} solutions", self.solutions.len())?;
            if self.solutions.is_truncated() {
                write!(f, " (cap reached)")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "elapsed time {}", self.elapsed.as_millis())
    }
}

/// Runs the search on `instance` and times it.
pub fn run_instance(instance: Instance, config: &SearchConfig) -> Report {
    let start = Instant::now();
    let solutions = instance.enumerate_with(config);
    let elapsed = start.elapsed();
    info!(
        "{}: {} solutions in {} ms",
        instance,
        solutions.len(),
        elapsed.as_millis()
    );
    Report {
        instance,
        solutions,
        elapsed,
        display_limit: config.display_limit,
    }
}

/// Loads and runs a single problem file.
pub fn run_file(path: &Path, config: &SearchConfig) -> Result<Report> {
    let instance = Instance::from_file(path)?;
    Ok(run_instance(instance, config))
}

/// Runs every file in `dir` whose extension is `extension`, in file-name order.
///
/// Each file's outcome is passed to `on_file` as soon as it is available, so reports
/// are not all held at once. A failing file does not stop the others. Returns the
/// number of files processed.
///
/// # Errors
///
/// Only failures to list `dir` itself are returned.
pub fn process_directory<F>(
    dir: &Path,
    extension: &str,
    config: &SearchConfig,
    mut on_file: F,
) -> Result<usize>
where
    F: FnMut(&Path, Result<Report>),
{
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path);
        }
    }
    files.sort();
    debug!(
        "processing {} .{extension} files in {}",
        files.len(),
        dir.display()
    );

    for path in &files {
        on_file(path, run_file(path, config));
    }
    Ok(files.len())
}
