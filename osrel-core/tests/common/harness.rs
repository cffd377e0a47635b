//! Test harness for running fixture cases, with stochastic variations

use std::collections::BTreeMap;

use osrel_core::{unquote, OsRelease, ReadError};

use crate::common::{FileCase, Gen, UnquoteCase};

/// Result of running a test
#[derive(Debug)]
pub struct TestResult {
    pub passed: bool,
    pub input: String,
    pub expected: String,
    pub actual: String,
    pub seed: u64,
}

impl TestResult {
    /// Print detailed failure info
    pub fn print_failure(&self, case_id: &str) {
        eprintln!("\n=== FAILED: {} ===", case_id);
        eprintln!("Seed: {} (set OSREL_TEST_SEED={} to reproduce)", self.seed, self.seed);
        eprintln!("\nInput:\n{}", self.input);
        eprintln!("\nExpected: {}", self.expected);
        eprintln!("Actual:   {}", self.actual);
    }
}

fn expected_outcome<T: std::fmt::Debug>(value: &Option<T>, error: &Option<String>) -> String {
    match (value, error) {
        (Some(value), None) => format!("Ok({:?})", value),
        (None, Some(error)) => format!("Err({})", error),
        _ => panic!("fixture must set exactly one of the success value or `error`"),
    }
}

/// Run a single unquote case
pub fn run_unquote_case(case: &UnquoteCase) -> TestResult {
    let expected = expected_outcome(&case.value, &case.error);
    let actual = match unquote(&case.raw) {
        Ok(value) => format!("Ok({:?})", &*value),
        Err(err) => format!("Err({:?})", err),
    };
    TestResult {
        passed: actual == expected,
        input: case.raw.clone(),
        expected,
        actual,
        seed: 0,
    }
}

fn read_outcome(input: &str) -> String {
    match input.parse::<OsRelease>() {
        Ok(osrel) => {
            let vars: BTreeMap<String, String> = osrel.into_iter().collect();
            format!("Ok({:?})", vars)
        }
        Err(ReadError::Value { source, .. }) => format!("Err({:?})", source),
        Err(other) => format!("Err({})", other),
    }
}

/// Run a file case as written
pub fn run_file_case(case: &FileCase) -> TestResult {
    let expected = expected_outcome(&case.vars, &case.error);
    let actual = read_outcome(&case.content);
    TestResult {
        passed: actual == expected,
        input: case.content.clone(),
        expected,
        actual,
        seed: 0,
    }
}

/// Run a file case with blank and comment lines injected between its lines
/// and random line endings. The outcome must not change.
pub fn run_file_with_variations(case: &FileCase, gen: &mut Gen) -> TestResult {
    let mut input = String::new();
    for line in case.content.lines() {
        for filler in gen.filler() {
            input.push_str(&filler);
            input.push_str(gen.newline());
        }
        input.push_str(line);
        input.push_str(gen.newline());
    }
    for filler in gen.filler() {
        input.push_str(&filler);
        input.push_str(gen.newline());
    }

    let expected = expected_outcome(&case.vars, &case.error);
    let actual = read_outcome(&input);
    TestResult {
        passed: actual == expected,
        input,
        expected,
        actual,
        seed: gen.seed,
    }
}
