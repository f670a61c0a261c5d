use alloc::{borrow::Cow, string::String, vec::Vec};

use bstr::ByteSlice;

use crate::{
    error::ReverseError,
    options::{InvalidInputMode, ReverseOptions},
};

/// Reverse `input` by code point.
///
/// The bytes are validated first. Ill-formed UTF-8 is never partially
/// processed: the returned error holds the original input unchanged.
///
/// # Errors
///
/// Returns [`ReverseError`] if `input` is not well-formed UTF-8.
///
/// # Examples
///
/// ```rust
/// assert_eq!(runeflip::reverse("ab").unwrap(), "ba");
/// assert_eq!(runeflip::reverse(b"").unwrap(), "");
/// ```
pub fn reverse<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<String, ReverseError<'_>> {
    Reverser::default().reverse(input)
}

/// Reverse text that is already known to be UTF-8.
#[must_use]
pub fn reverse_str(input: &str) -> String {
    reencode(input.len(), &mut input.chars().collect::<Vec<_>>())
}

/// Reverse `input`, returning the value and the error side by side.
///
/// On success the first element is the reversed text and the second is
/// `None`. On failure the first element borrows `input` unchanged.
///
/// ```rust
/// use std::borrow::Cow;
///
/// let (text, err) = runeflip::reverse_or_echo(b"\xff");
/// assert_eq!(text, Cow::Borrowed(b"\xff".as_slice()));
/// assert!(err.is_some());
/// ```
#[must_use]
pub fn reverse_or_echo<B: AsRef<[u8]> + ?Sized>(
    input: &B,
) -> (Cow<'_, [u8]>, Option<ReverseError<'_>>) {
    match reverse(input) {
        Ok(reversed) => (Cow::Owned(reversed.into_bytes()), None),
        Err(err) => (Cow::Borrowed(err.input()), Some(err)),
    }
}

/// A configured reverser.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverser {
    options: ReverseOptions,
}

impl Reverser {
    /// Create a reverser with the given options.
    #[must_use]
    pub fn new(options: ReverseOptions) -> Self {
        Self { options }
    }

    /// The options this reverser was built with.
    #[must_use]
    pub fn options(&self) -> ReverseOptions {
        self.options
    }

    /// Reverse `input` by code point, handling ill-formed input according
    /// to [`ReverseOptions::invalid_input`].
    ///
    /// # Errors
    ///
    /// Returns [`ReverseError`] if `input` is not well-formed UTF-8 and the
    /// mode is [`InvalidInputMode::Reject`].
    pub fn reverse<'a, B: AsRef<[u8]> + ?Sized>(
        &self,
        input: &'a B,
    ) -> Result<String, ReverseError<'a>> {
        let bytes = input.as_ref();
        match bytes.to_str() {
            Ok(text) => Ok(reverse_str(text)),
            Err(cause) => match self.options.invalid_input {
                InvalidInputMode::Reject => {
                    let err = ReverseError::new(bytes, &cause);
                    tracing::debug!(
                        valid_up_to = err.valid_up_to(),
                        error_len = ?err.error_len(),
                        "rejecting ill-formed input"
                    );
                    Err(err)
                }
                InvalidInputMode::Replace => {
                    let mut code_points: Vec<char> = bytes.chars().collect();
                    Ok(reencode(bytes.len(), &mut code_points))
                }
            },
        }
    }
}

fn reencode(len_hint: usize, code_points: &mut [char]) -> String {
    swap_ends(code_points);
    let mut out = String::with_capacity(len_hint);
    out.extend(code_points.iter());
    out
}

/// Two-pointer reversal: `n / 2` swaps for `n` elements.
fn swap_ends(code_points: &mut [char]) {
    let Some(mut j) = code_points.len().checked_sub(1) else {
        return;
    };
    let mut i = 0;
    while i < j {
        code_points.swap(i, j);
        i += 1;
        j -= 1;
    }
}
