//! Assignment value unquoting.
//!
//! The first character of a raw value decides how it is read:
//! - `"` or `'` opens a quoted value that must be closed by the same quote,
//!   with escapes decoded by [`crate::unescape`]
//! - anything else is an unquoted value, returned as-is (backslashes
//!   included, no unescaping whatsoever)
//!
//! Values that need no work are returned borrowed.

use std::borrow::Cow;

use memchr::memchr;

use crate::error::UnquoteError;
use crate::unescape::Unescaper;

/// Unquote and unescape a raw assignment value.
///
/// ```
/// use osrel_core::unquote;
///
/// assert_eq!(unquote(r#""A\$BC""#).unwrap(), "A$BC");
/// assert_eq!(unquote(r"A\$BC").unwrap(), r"A\$BC");
/// assert!(unquote(r#""abc'"#).is_err());
/// ```
pub fn unquote(raw: &str) -> Result<Cow<'_, str>, UnquoteError> {
    let quote = match raw.as_bytes().first() {
        None => return Ok(Cow::Borrowed("")),
        Some(&q @ (b'"' | b'\'')) => q,
        Some(_) => return Ok(Cow::Borrowed(raw)),
    };
    let body = &raw[1..];

    // No escapes: only the closing quote needs checking.
    if memchr(b'\\', body.as_bytes()).is_none() {
        return match body.as_bytes().last() {
            Some(&last) if last == quote => Ok(Cow::Borrowed(&body[..body.len() - 1])),
            _ => Err(UnquoteError::MissingFinalQuote),
        };
    }

    let quote = quote as char;
    let mut out = String::with_capacity(body.len());
    let mut chars = Unescaper::new(body);
    while !chars.remainder().starts_with(quote) {
        match chars.next() {
            Some(unescaped) => out.push(unescaped?.ch),
            None => break,
        }
    }

    // Anything left besides the closing quote means the value ended early
    // (or continued past an unescaped quote).
    let rest = chars.remainder();
    if rest.len() != 1 || !rest.starts_with(quote) {
        return Err(UnquoteError::MissingTerminatingQuote);
    }
    Ok(Cow::Owned(out))
}
