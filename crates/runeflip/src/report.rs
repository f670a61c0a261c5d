//! Console rendering of a reversal round trip.
//!
//! ```rust
//! use runeflip::report::RoundTrip;
//!
//! let text = RoundTrip::new("ab").to_string();
//! assert_eq!(
//!     text,
//!     "original: \"ab\"\nreversed: \"ba\", err: <nil>\nreversed again: \"ab\", err: <nil>\n"
//! );
//! ```

use core::fmt;

use bstr::BStr;

use crate::{ReverseError, reverse_or_echo};

/// Reverses an input twice and renders one line per step.
///
/// Text is shown quoted and escaped; bytes that are not valid UTF-8 are
/// shown as `\xNN` escapes.
#[derive(Debug, Clone, Copy)]
pub struct RoundTrip<'a> {
    input: &'a [u8],
}

impl<'a> RoundTrip<'a> {
    /// Prepare a round trip over `input`.
    #[must_use]
    pub fn new<B: AsRef<[u8]> + ?Sized>(input: &'a B) -> Self {
        Self {
            input: input.as_ref(),
        }
    }
}

impl fmt::Display for RoundTrip<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (once, once_err) = reverse_or_echo(self.input);
        let (twice, twice_err) = reverse_or_echo(&*once);

        writeln!(f, "original: {:?}", BStr::new(self.input))?;
        writeln!(
            f,
            "reversed: {:?}, err: {}",
            BStr::new(&*once),
            Outcome(once_err.as_ref())
        )?;
        writeln!(
            f,
            "reversed again: {:?}, err: {}",
            BStr::new(&*twice),
            Outcome(twice_err.as_ref())
        )
    }
}

struct Outcome<'e, 'a>(Option<&'e ReverseError<'a>>);

impl fmt::Display for Outcome<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(err) => fmt::Display::fmt(err, f),
            None => f.write_str("<nil>"),
        }
    }
}
