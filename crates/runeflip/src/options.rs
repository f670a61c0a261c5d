/// Configuration for a [`Reverser`](crate::Reverser).
///
/// # Examples
///
/// ```rust
/// use runeflip::{InvalidInputMode, ReverseOptions, Reverser};
///
/// let reverser = Reverser::new(ReverseOptions {
///     invalid_input: InvalidInputMode::Replace,
/// });
/// assert_eq!(reverser.reverse(b"a\xffb").unwrap(), "b\u{FFFD}a");
/// ```
///
/// # Default
///
/// Invalid input is rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseOptions {
    /// What to do with input that is not well-formed UTF-8.
    ///
    /// # Default
    ///
    /// [`InvalidInputMode::Reject`]
    pub invalid_input: InvalidInputMode,
}

/// Handling of ill-formed UTF-8 input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "snake_case"))]
pub enum InvalidInputMode {
    /// Return a [`ReverseError`](crate::ReverseError) carrying the unmodified
    /// input. Nothing is reversed.
    #[default]
    Reject,
    /// Substitute U+FFFD for each maximal ill-formed subsequence, the same
    /// way [`String::from_utf8_lossy`](alloc::string::String::from_utf8_lossy)
    /// does, and reverse the result. Never fails.
    Replace,
}
