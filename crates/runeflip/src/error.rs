use thiserror::Error;

/// The input was not well-formed UTF-8.
///
/// This is the only way a reversal can fail. The error keeps a borrow of the
/// rejected input so the caller gets the original bytes back unchanged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("input is not valid UTF-8: invalid sequence at byte {valid_up_to}")]
pub struct ReverseError<'a> {
    input: &'a [u8],
    valid_up_to: usize,
    error_len: Option<usize>,
}

impl<'a> ReverseError<'a> {
    pub(crate) fn new(input: &'a [u8], cause: &bstr::Utf8Error) -> Self {
        Self {
            input,
            valid_up_to: cause.valid_up_to(),
            error_len: cause.error_len(),
        }
    }

    /// The rejected input, exactly as it was passed in.
    #[must_use]
    pub fn input(&self) -> &'a [u8] {
        self.input
    }

    /// Consume the error, returning the rejected input.
    #[must_use]
    pub fn into_input(self) -> &'a [u8] {
        self.input
    }

    /// Length of the longest valid UTF-8 prefix of the input.
    #[must_use]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }

    /// Length of the invalid sequence at [`valid_up_to`](Self::valid_up_to),
    /// or `None` if the input ends in the middle of a multi-byte sequence.
    #[must_use]
    pub fn error_len(&self) -> Option<usize> {
        self.error_len
    }
}
