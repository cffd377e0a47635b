//! Line splitting: `VARIABLE=raw value`.
//!
//! Lines are taken literally. Only a line starting with `#` is a comment
//! (leading whitespace makes it something else), and the variable name is
//! not trimmed or otherwise checked.

use memchr::memchr;

/// A `VARIABLE=VALUE` line, split at the first `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    /// Everything before the first `=`
    pub variable: &'a str,
    /// Everything after the first `=`, still quoted and escaped
    pub raw: &'a str,
}

impl<'a> Assignment<'a> {
    /// Split `line` into an assignment.
    ///
    /// Returns `None` for empty lines, comment lines, lines without `=` and
    /// lines with nothing before the `=`.
    pub fn parse(line: &'a str) -> Option<Self> {
        match line.as_bytes().first() {
            None | Some(b'#') | Some(b'=') => return None,
            Some(_) => {}
        }
        let eq = memchr(b'=', line.as_bytes())?;
        Some(Self {
            variable: &line[..eq],
            raw: &line[eq + 1..],
        })
    }
}

/// Shorthand for [`Assignment::parse`].
#[inline]
pub fn assignment(line: &str) -> Option<Assignment<'_>> {
    Assignment::parse(line)
}
