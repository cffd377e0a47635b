//! osrel Core
//!
//! Reader for freedesktop.org's os-release file format: `KEY=VALUE` lines
//! whose values may be single- or double-quoted and use a small set of
//! shell-style backslash escapes.
//!
//! # Architecture
//!
//! - **unescape.rs** - One-character escape decoder
//! - **unquote.rs** - Value unquoting on top of the escape decoder
//! - **assignment.rs** - `VARIABLE=value` line splitting
//! - **os_release.rs** - File reading, aggregation and discovery
//! - **error.rs** - Error types

pub mod assignment;
pub mod error;
pub mod os_release;
pub mod unescape;
pub mod unquote;

pub use assignment::{assignment, Assignment};
pub use error::{LoadError, ReadError, UnquoteError};
pub use os_release::{InvalidValue, OsRelease, ReadOptions, ETC_OS_RELEASE, USR_LIB_OS_RELEASE};
pub use unescape::{unescape_char, Unescaped, Unescaper};
pub use unquote::unquote;
