//! Single-character unescaping for quoted assignment values.
//!
//! os-release borrows its quoting from the shell but keeps only a tiny
//! escape set: a backslash may precede `\`, `"`, `'`, `$` or a backtick,
//! and nothing else. The set is the same inside single and double quotes.
//!
//! [`unescape_char`] decodes one logical character from the head of a
//! string and hands back the unconsumed tail, so it can be called in a loop
//! to drain a value. [`Unescaper`] wraps that loop as an iterator.

use phf::phf_set;

use crate::error::UnquoteError;

/// The escape marker.
pub const ESCAPE: char = '\\';

/// Characters that may follow [`ESCAPE`].
pub static ESCAPABLE: phf::Set<char> = phf_set! {
    '\\', '"', '\'', '$', '`',
};

/// One decoded character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unescaped {
    /// The decoded character
    pub ch: char,
    /// True if `ch` came from a multibyte UTF-8 sequence
    pub wide: bool,
}

impl Unescaped {
    #[inline]
    fn narrow(ch: char) -> Self {
        Self { ch, wide: false }
    }

    #[inline]
    fn wide(ch: char) -> Self {
        Self { ch, wide: true }
    }
}

/// Decode the first character of `s`, unescaping if necessary.
///
/// Returns the decoded character together with the rest of `s`, or
/// `Ok(None)` if `s` is empty. Non-ASCII characters are passed through as
/// whole code points. Escapes are only recognized for the characters in
/// [`ESCAPABLE`]; any other character after a backslash is an
/// [`UnquoteError::InvalidEscape`], and a backslash with nothing after it is
/// an [`UnquoteError::SingleBackslash`].
pub fn unescape_char(s: &str) -> Result<Option<(Unescaped, &str)>, UnquoteError> {
    let mut chars = s.chars();
    let Some(c) = chars.next() else {
        return Ok(None);
    };
    if !c.is_ascii() {
        return Ok(Some((Unescaped::wide(c), chars.as_str())));
    }
    if c != ESCAPE {
        return Ok(Some((Unescaped::narrow(c), chars.as_str())));
    }
    match chars.next() {
        None => Err(UnquoteError::SingleBackslash),
        Some(escaped) if ESCAPABLE.contains(&escaped) => {
            Ok(Some((Unescaped::narrow(escaped), chars.as_str())))
        }
        Some(_) => Err(UnquoteError::InvalidEscape),
    }
}

/// Iterator draining a string one decoded character at a time.
///
/// Yields `Err` at most once; iteration ends after the first error.
#[derive(Debug, Clone)]
pub struct Unescaper<'a> {
    rest: &'a str,
    failed: bool,
}

impl<'a> Unescaper<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { rest: input, failed: false }
    }

    /// The part of the input not decoded yet.
    #[inline]
    pub fn remainder(&self) -> &'a str {
        self.rest
    }
}

impl Iterator for Unescaper<'_> {
    type Item = Result<Unescaped, UnquoteError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match unescape_char(self.rest) {
            Ok(Some((unescaped, tail))) => {
                self.rest = tail;
                Some(Ok(unescaped))
            }
            Ok(None) => None,
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}
