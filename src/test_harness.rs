//! Lispy Test Harness
//!
//! Discovers YAML test suites, runs every case through the execution pipeline
//! and reports PASS/FAIL per case.
//!
//! # Test Format
//!
//! ```yaml
//! - name: "test name"
//!   input: "head {1 2 3}"
//!   expected: "{1}"                  # rendered result, for success tests
//!   expect_error: "error substring"  # host error (e.g. a parse failure)
//!   skip: false                      # optional, defaults to false
//!   only: false                      # optional, defaults to false
//! ```
//!
//! Language errors are values, so a case like `/ 1 0` uses `expected` with
//! the rendered message rather than `expect_error`.
//!
//! ```rust,no_run
//! use lispy::test_harness::{run_all_tests, TestConfig};
//!
//! let config = TestConfig::default();
//! let (passed, failed, skipped) = run_all_tests(None, &config);
//! if failed > 0 {
//!     std::process::exit(1);
//! }
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use walkdir::WalkDir;

use crate::engine::ExecutionPipeline;
use crate::errors::{print_error, LispyError};
use crate::value::render;

// =============================================================================
// CORE TYPES
// =============================================================================

/// Represents the result of executing a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestResult {
    Pass {
        file: String,
        name: String,
    },
    Fail {
        file: String,
        name: String,
        error: String,
    },
    Skipped {
        file: String,
        name: String,
        reason: String,
    },
}

/// A single YAML test case.
#[derive(Debug, Deserialize, Clone)]
pub struct TestCase {
    pub name: String,
    pub input: String,
    pub expected: Option<String>,
    pub expect_error: Option<String>,
    #[serde(default)]
    pub skip: bool,
    #[serde(default)]
    pub only: bool,
}

/// Configuration for test execution and reporting.
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub test_root: String,
    pub use_colors: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            test_root: "tests/suites".to_string(),
            use_colors: StandardStream::stdout(ColorChoice::Auto).supports_color(),
        }
    }
}

impl TestConfig {
    fn color_choice(&self) -> ColorChoice {
        if self.use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

// =============================================================================
// TEST DISCOVERY AND LOADING
// =============================================================================

/// Discovers all YAML files recursively under `root`, in path order.
pub fn discover_yaml_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_type().is_file()
                && e.path()
                    .extension()
                    .map(|ext| ext == "yaml" || ext == "yml")
                    .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Load and parse test cases from a YAML file.
pub fn load_test_cases(path: &Path) -> Result<Vec<TestCase>, LispyError> {
    let content = ExecutionPipeline::read_file(path)?;
    serde_yaml::from_str::<Vec<TestCase>>(&content)
        .map_err(|e| LispyError::suite(format!("{}: {e}", path.display())))
}

/// Why a case should not run, if it should not.
pub fn skip_reason(case: &TestCase, has_only: bool, filter: Option<&str>) -> Option<String> {
    if has_only && !case.only {
        return Some("Not marked 'only' in 'only' mode".to_string());
    }
    if case.skip {
        return Some("Marked 'skip'".to_string());
    }
    if let Some(f) = filter {
        if !case.name.to_lowercase().contains(&f.to_lowercase()) {
            return Some(format!("Filtered out by substring: {f}"));
        }
    }
    None
}

// =============================================================================
// TEST EXECUTION
// =============================================================================

/// Runs one case and compares its outcome with the expectation.
pub fn run_test_case(case: &TestCase, file: &str) -> TestResult {
    let pipeline = ExecutionPipeline::new(case.name.as_str());
    let outcome = pipeline.evaluate_source(&case.input);

    let failure = match (outcome, case.expect_error.as_deref()) {
        (Ok(value), Some(expected)) => Some(format!(
            "Expected error '{expected}' but evaluation succeeded with result: {}",
            render(&value)
        )),
        (Ok(value), None) => {
            let actual = render(&value);
            match case.expected.as_deref() {
                Some(expected) if expected.trim() == actual => None,
                Some(expected) => Some(format_output_mismatch(expected, &actual)),
                None => Some("Case has neither 'expected' nor 'expect_error'".to_string()),
            }
        }
        (Err(e), Some(expected)) if e.to_string().contains(expected) => None,
        (Err(e), _) => Some(format!("Unexpected error: {e}")),
    };

    let file = file.to_string();
    let name = case.name.clone();
    match failure {
        None => TestResult::Pass { file, name },
        Some(error) => TestResult::Fail { file, name, error },
    }
}

fn format_output_mismatch(expected: &str, actual: &str) -> String {
    format!(
        "Output did not match expected\n  Expected: {}\n  Actual:   {}",
        expected.trim(),
        actual.trim()
    )
}

// =============================================================================
// REPORTING
// =============================================================================

fn report(stdout: &mut StandardStream, result: &TestResult) {
    let (label, color, file, name, detail) = match result {
        TestResult::Pass { file, name } => ("PASS", Color::Green, file, name, None),
        TestResult::Fail { file, name, error } => ("FAIL", Color::Red, file, name, Some(error)),
        TestResult::Skipped { file, name, reason } => {
            ("SKIP", Color::Yellow, file, name, Some(reason))
        }
    };

    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
    let _ = write!(stdout, "{label}");
    let _ = stdout.reset();
    let _ = writeln!(stdout, ": {file}: {name}");
    if let (TestResult::Fail { .. }, Some(detail)) = (result, detail) {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)));
        let _ = writeln!(stdout, "  {detail}");
        let _ = stdout.reset();
    }
}

/// Discovers, runs and reports every suite under `config.test_root`.
///
/// Returns `(passed, failed, skipped)`. A suite file that cannot be loaded is
/// reported and counted as one failure.
pub fn run_all_tests(filter: Option<&str>, config: &TestConfig) -> (usize, usize, usize) {
    let mut stdout = StandardStream::stdout(config.color_choice());
    let (mut passed, mut failed, mut skipped) = (0, 0, 0);

    let mut cases = Vec::new();
    for path in discover_yaml_files(&config.test_root) {
        match load_test_cases(&path) {
            Ok(loaded) => {
                debug!("{}: {} case(s)", path.display(), loaded.len());
                let file = path.display().to_string();
                cases.extend(loaded.into_iter().map(|case| (file.clone(), case)));
            }
            Err(e) => {
                print_error(e);
                failed += 1;
            }
        }
    }

    let has_only = cases.iter().any(|(_, case)| case.only);
    for (file, case) in &cases {
        let result = match skip_reason(case, has_only, filter) {
            Some(reason) => TestResult::Skipped {
                file: file.clone(),
                name: case.name.clone(),
                reason,
            },
            None => run_test_case(case, file),
        };
        match result {
            TestResult::Pass { .. } => passed += 1,
            TestResult::Fail { .. } => failed += 1,
            TestResult::Skipped { .. } => skipped += 1,
        }
        report(&mut stdout, &result);
    }

    let _ = writeln!(
        stdout,
        "\nTest Summary: {passed} passed, {failed} failed, {skipped} skipped"
    );
    (passed, failed, skipped)
}
