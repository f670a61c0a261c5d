//! Reverse UTF-8 text by code point.
//!
//! Bytes are validated before anything else happens. Well-formed input is
//! decoded into Unicode scalar values, reversed and re-encoded; ill-formed
//! input is handed back untouched together with a [`ReverseError`].
//!
//! ```rust
//! use runeflip::reverse;
//!
//! assert_eq!(reverse("日本語").unwrap(), "語本日");
//!
//! let truncated = b"ab\xe6\x97";
//! let err = reverse(truncated).unwrap_err();
//! assert_eq!(err.input(), truncated);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod error;
mod options;
pub mod report;
mod reverse;

#[cfg(test)]
mod tests;

pub use error::ReverseError;
pub use options::{InvalidInputMode, ReverseOptions};
pub use reverse::{Reverser, reverse, reverse_or_echo, reverse_str};
