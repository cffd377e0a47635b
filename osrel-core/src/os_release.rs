//! os-release files: reading, aggregation and discovery.
//!
//! # Example
//!
//! ```
//! use osrel_core::OsRelease;
//!
//! let osrel: OsRelease = "# demo\nID=debian\nPRETTY_NAME=\"Debian GNU/Linux 12\"\n"
//!     .parse()
//!     .unwrap();
//! assert_eq!(osrel.id(), Some("debian"));
//! assert_eq!(osrel.pretty_name(), Some("Debian GNU/Linux 12"));
//! ```
//!
//! # Malformed values
//!
//! By default a single malformed value rejects the whole file and no
//! variables are returned. [`InvalidValue::Skip`] drops just the offending
//! assignment instead.

use std::collections::hash_map::{self, HashMap};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, trace, warn};

use crate::assignment::{assignment, Assignment};
use crate::error::{LoadError, ReadError};
use crate::unquote::unquote;

/// Primary location, relative to the filesystem root.
pub const ETC_OS_RELEASE: &str = "etc/os-release";

/// Fallback location, relative to the filesystem root.
pub const USR_LIB_OS_RELEASE: &str = "usr/lib/os-release";

/// What to do with a line whose value fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidValue {
    /// Fail the whole read; no variables are returned.
    #[default]
    Abort,
    /// Log and drop the line, keep reading.
    Skip,
}

/// Options for reading os-release data.
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    pub invalid_value: InvalidValue,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the malformed value policy.
    pub fn invalid_value(mut self, policy: InvalidValue) -> Self {
        self.invalid_value = policy;
        self
    }
}

/// Decoded os-release variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OsRelease {
    vars: HashMap<String, String>,
}

impl OsRelease {
    /// Read `/etc/os-release`, falling back to `/usr/lib/os-release`.
    ///
    /// Returns `Ok(None)` if neither file exists.
    pub fn load() -> Result<Option<Self>, LoadError> {
        Self::load_from_root("/")
    }

    /// Like [`OsRelease::load`], but below `root` instead of `/`.
    pub fn load_from_root(root: impl AsRef<Path>) -> Result<Option<Self>, LoadError> {
        Self::load_from_root_with(root, &ReadOptions::default())
    }

    pub fn load_from_root_with(
        root: impl AsRef<Path>,
        options: &ReadOptions,
    ) -> Result<Option<Self>, LoadError> {
        let root = root.as_ref();
        for candidate in [ETC_OS_RELEASE, USR_LIB_OS_RELEASE] {
            if let Some(osrel) = Self::from_path_with(root.join(candidate), options)? {
                return Ok(Some(osrel));
            }
        }
        Ok(None)
    }

    /// Read variables from the file at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist, and an empty set for a
    /// file with nothing but blank lines and comments.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Option<Self>, LoadError> {
        Self::from_path_with(path, &ReadOptions::default())
    }

    pub fn from_path_with(
        path: impl AsRef<Path>,
        options: &ReadOptions,
    ) -> Result<Option<Self>, LoadError> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no os-release file");
                return Ok(None);
            }
            Err(source) => {
                return Err(LoadError::Open {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let osrel = Self::from_reader_with(BufReader::new(file), options).map_err(|source| {
            LoadError::Read {
                path: path.to_path_buf(),
                source,
            }
        })?;
        debug!(path = %path.display(), variables = osrel.len(), "read os-release");
        Ok(Some(osrel))
    }

    /// Read variable assignments from `reader` until EOF.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ReadError> {
        Self::from_reader_with(reader, &ReadOptions::default())
    }

    /// Read variable assignments from `reader` until EOF.
    ///
    /// Later assignments to a variable replace earlier ones. A failing reader
    /// is always an error, regardless of `options`.
    pub fn from_reader_with<R: BufRead>(
        mut reader: R,
        options: &ReadOptions,
    ) -> Result<Self, ReadError> {
        let mut vars = HashMap::new();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            // Blank and comment lines are never decoded, whatever their encoding.
            if matches!(bytes.first(), None | Some(b'#')) {
                trace!(line = line_no, "blank or comment line");
                continue;
            }

            let line = match std::str::from_utf8(bytes) {
                Ok(line) => line,
                Err(_) if options.invalid_value == InvalidValue::Skip => {
                    warn!(line = line_no, "skipping line that is not valid UTF-8");
                    continue;
                }
                Err(_) => return Err(ReadError::Utf8 { line: line_no }),
            };

            let Some(Assignment { variable, raw }) = assignment(line) else {
                trace!(line = line_no, "not an assignment");
                continue;
            };
            let value = match unquote(raw) {
                Ok(value) => value.into_owned(),
                Err(source) => match options.invalid_value {
                    InvalidValue::Abort => {
                        return Err(ReadError::Value {
                            line: line_no,
                            variable: variable.to_owned(),
                            source,
                        })
                    }
                    InvalidValue::Skip => {
                        warn!(line = line_no, variable, error = %source, "skipping malformed value");
                        continue;
                    }
                },
            };
            if vars.insert(variable.to_owned(), value).is_some() {
                debug!(line = line_no, variable, "variable reassigned");
            }
        }
        Ok(Self { vars })
    }

    /// The decoded value of `variable`.
    pub fn get(&self, variable: &str) -> Option<&str> {
        self.vars.get(variable).map(String::as_str)
    }

    pub fn contains_key(&self, variable: &str) -> bool {
        self.vars.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over `(variable, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.vars
    }

    /// `ID`
    pub fn id(&self) -> Option<&str> {
        self.get("ID")
    }

    /// `ID_LIKE`, split on whitespace. Empty if unset.
    pub fn id_like(&self) -> impl Iterator<Item = &str> {
        self.get("ID_LIKE").unwrap_or_default().split_ascii_whitespace()
    }

    /// `NAME`
    pub fn name(&self) -> Option<&str> {
        self.get("NAME")
    }

    /// `PRETTY_NAME`
    pub fn pretty_name(&self) -> Option<&str> {
        self.get("PRETTY_NAME")
    }

    /// `VERSION_ID`
    pub fn version_id(&self) -> Option<&str> {
        self.get("VERSION_ID")
    }
}

impl FromStr for OsRelease {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}

impl Index<&str> for OsRelease {
    type Output = str;

    /// Panics if `variable` is not set.
    fn index(&self, variable: &str) -> &str {
        &self.vars[variable]
    }
}

impl IntoIterator for OsRelease {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.into_iter()
    }
}
