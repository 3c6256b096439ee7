//! Error types for cursor construction and the whole-sequence helper.

use thiserror::Error;

/// Errors reported by [`RollingHash`](crate::rolling_hash::RollingHash).
///
/// All variants except [`Error::WholeSequenceUnavailable`] are argument
/// validation failures raised by the factory before any computation happens.
/// Running out of sequence while advancing is *not* an error; it is the
/// `None` result of the advance operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The source sequence contains no elements.
    #[error("source sequence is empty")]
    EmptySource,

    /// The starting offset lies outside the source sequence.
    #[error("offset is {offset} but length is {len}")]
    OffsetOutOfBounds { offset: usize, len: usize },

    /// A window must cover at least one element.
    #[error("window length is zero")]
    ZeroWindowLength,

    /// The initial window does not fit into the source sequence.
    #[error("window of length {window_len} at offset {offset} does not fit into length {len}")]
    WindowOutOfBounds {
        offset: usize,
        window_len: usize,
        len: usize,
    },

    /// Hashing an entire sequence in one window failed. Only an empty source
    /// can trigger this.
    #[error("cannot fingerprint the whole sequence")]
    WholeSequenceUnavailable,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn display_test() {
        assert_eq!("source sequence is empty", Error::EmptySource.to_string());
        assert_eq!(
            "offset is 12 but length is 4",
            Error::OffsetOutOfBounds { offset: 12, len: 4 }.to_string()
        );
        assert_eq!(
            "window of length 8 at offset 2 does not fit into length 6",
            Error::WindowOutOfBounds {
                offset: 2,
                window_len: 8,
                len: 6
            }
            .to_string()
        );
    }
}
