//! Fixture loading from YAML files

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A single value unquoting case
#[derive(Debug, Clone, Deserialize)]
pub struct UnquoteCase {
    pub id: String,
    pub desc: String,
    pub raw: String,
    /// Decoded value, for cases that must succeed
    #[serde(default)]
    pub value: Option<String>,
    /// `UnquoteError` variant name, for cases that must fail
    #[serde(default)]
    pub error: Option<String>,
}

/// A whole os-release file case
#[derive(Debug, Clone, Deserialize)]
pub struct FileCase {
    pub id: String,
    pub desc: String,
    pub content: String,
    /// Expected variables, for files that must read cleanly
    #[serde(default)]
    pub vars: Option<BTreeMap<String, String>>,
    /// `UnquoteError` variant name behind a rejected file
    #[serde(default)]
    pub error: Option<String>,
}

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn load<T: for<'de> Deserialize<'de>>(name: &str) -> Vec<T> {
    let path = fixtures_dir().join(format!("{}.yaml", name));
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load value cases from `tests/fixtures/<name>.yaml`
pub fn load_unquote_cases(name: &str) -> Vec<UnquoteCase> {
    load(name)
}

/// Load file cases from `tests/fixtures/<name>.yaml`
pub fn load_file_cases(name: &str) -> Vec<FileCase> {
    load(name)
}
