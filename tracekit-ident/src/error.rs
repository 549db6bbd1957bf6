use std::num::ParseIntError;
use thiserror::Error;

/// Reasons an identifier fails to parse.
///
/// Surfaced by [`Factory::try_from_hex`] and [`Factory::try_from_bytes`];
/// the total forms [`Factory::from_hex`] and [`Factory::from_bytes`]
/// convert every failure into [`Identifier::EMPTY`] instead.
///
/// [`Factory::try_from_hex`]: crate::Factory::try_from_hex
/// [`Factory::try_from_bytes`]: crate::Factory::try_from_bytes
/// [`Factory::from_hex`]: crate::Factory::from_hex
/// [`Factory::from_bytes`]: crate::Factory::from_bytes
/// [`Identifier::EMPTY`]: crate::Identifier::EMPTY
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseError {
    /// The textual form is shorter than the factory requires, or cannot be
    /// split at the required character boundary.
    #[error("identifier needs at least {expected} hexadecimal characters, found {found}")]
    StringLength {
        /// Characters the factory requires.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },

    /// The binary form does not have the factory's exact width.
    #[error("identifier needs exactly {expected} bytes, found {found}")]
    BytesLength {
        /// Bytes the factory requires.
        expected: usize,
        /// Length of the rejected input.
        found: usize,
    },

    /// The input contains a character outside `[0-9a-fA-F]`.
    #[error("identifier contains a non-hexadecimal character")]
    NonHex,

    /// The codec rejected the value: empty input or numeric overflow.
    #[error("identifier is not an unsigned 64-bit hexadecimal value: {0}")]
    Hex(#[from] ParseIntError),
}
