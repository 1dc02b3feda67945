use thiserror::Error;

/// Errors produced when building or inspecting bit sequences.
///
/// Both kinds are deterministic caller errors rather than transient
/// failures; no operation partially applies before reporting one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A bit index or range bound exceeded the valid bit count.
    #[error("bit index {index} out of range for sequence of {len} bits")]
    IndexOutOfRange {
        /// The offending bit index or bound.
        index: usize,
        /// The number of valid bits available.
        len: usize,
    },

    /// A textual bit string held a character other than `'0'` or `'1'`.
    #[error("invalid character {found:?} in bit string, expected '0' or '1'")]
    InvalidFormat {
        /// The offending character.
        found: char,
    },
}
