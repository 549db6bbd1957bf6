use std::cell::RefCell;

use rand::{rngs, Rng, SeedableRng};

use crate::{hex, Identifier, ParseError};

thread_local! {
    /// Store random number generator for each thread
    static CURRENT_RNG: RefCell<rngs::SmallRng> = RefCell::new(rngs::SmallRng::from_entropy());
}

/// Generates and parses identifiers of one fixed width.
///
/// The two variants cover every identifier format the tracer produces:
/// [`EightBytes`] holds a single unsigned 64-bit value, [`SixteenBytes`] a
/// (high, low) pair of them. Factories are stateless `Copy` values, safe to
/// share across all threads for the lifetime of the process.
///
/// The parse operations are total. Malformed input of any kind (wrong
/// length, non-hexadecimal characters, numeric overflow) yields
/// [`Identifier::EMPTY`], never an error or panic. Callers that need the
/// failure cause use the `try_` forms.
///
/// [`EightBytes`]: Factory::EightBytes
/// [`SixteenBytes`]: Factory::SixteenBytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Factory {
    /// 8-byte identifiers: one unsigned 64-bit value, 16 hex characters.
    EightBytes,
    /// 16-byte identifiers: two unsigned 64-bit values, 32 hex characters.
    SixteenBytes,
}

impl Factory {
    /// Byte width of this factory's binary form.
    pub const fn width(&self) -> usize {
        match self {
            Factory::EightBytes => 8,
            Factory::SixteenBytes => 16,
        }
    }

    /// Produces a new identifier from the calling thread's random source.
    ///
    /// Identifiers are statistically unique, not unpredictable. Each
    /// thread owns its generator, so concurrent callers never contend on a
    /// shared lock. This operation has no failure mode.
    pub fn generate(&self) -> Identifier {
        match self {
            Factory::EightBytes => {
                let value = CURRENT_RNG.with(|rng| rng.borrow_mut().gen::<u64>());
                Identifier::new(hex::to_lower_hex(value), value.to_be_bytes().to_vec())
            }
            Factory::SixteenBytes => {
                let (high, low) = CURRENT_RNG.with(|rng| {
                    let mut rng = rng.borrow_mut();
                    (rng.gen::<u64>(), rng.gen::<u64>())
                });
                Identifier::new(
                    format!("{}{}", hex::to_lower_hex(high), hex::to_lower_hex(low)),
                    [high.to_be_bytes(), low.to_be_bytes()].concat(),
                )
            }
        }
    }

    /// Parses the textual form of an identifier.
    ///
    /// On success the returned identifier's string is exactly the input
    /// and its bytes are the decoded binary form. On any failure this
    /// returns [`Identifier::EMPTY`]; the cause is logged at debug level
    /// and never surfaced to the caller.
    pub fn from_hex(&self, hex: &str) -> Identifier {
        match self.try_from_hex(hex) {
            Ok(id) => id,
            Err(err) => {
                crate::ident_debug!(
                    name: "Factory.FromHex.ParseFailure",
                    reason = format!("{err}")
                );
                Identifier::EMPTY
            }
        }
    }

    /// Parses the binary form of an identifier.
    ///
    /// On success the returned identifier's bytes are exactly the input
    /// and its string is the re-encoded hexadecimal form. On any failure
    /// this returns [`Identifier::EMPTY`].
    pub fn from_bytes(&self, bytes: &[u8]) -> Identifier {
        match self.try_from_bytes(bytes) {
            Ok(id) => id,
            Err(err) => {
                crate::ident_debug!(
                    name: "Factory.FromBytes.ParseFailure",
                    reason = format!("{err}")
                );
                Identifier::EMPTY
            }
        }
    }

    /// Fallible form of [`from_hex`](Factory::from_hex).
    pub fn try_from_hex(&self, hex: &str) -> Result<Identifier, ParseError> {
        match self {
            Factory::EightBytes => {
                let value = hex::parse_unsigned_hex(hex)?;
                Ok(Identifier::new(hex.to_owned(), value.to_be_bytes().to_vec()))
            }
            Factory::SixteenBytes => {
                // Slicing must fail on non-boundary input, not panic.
                let (high_hex, low_hex) = match (hex.get(..16), hex.get(16..32)) {
                    (Some(high), Some(low)) => (high, low),
                    _ => {
                        return Err(ParseError::StringLength {
                            expected: 32,
                            found: hex.len(),
                        })
                    }
                };
                let high = hex::parse_unsigned_hex(high_hex)?;
                let low = hex::parse_unsigned_hex(low_hex)?;
                Ok(Identifier::new(
                    hex.to_owned(),
                    [high.to_be_bytes(), low.to_be_bytes()].concat(),
                ))
            }
        }
    }

    /// Fallible form of [`from_bytes`](Factory::from_bytes).
    pub fn try_from_bytes(&self, bytes: &[u8]) -> Result<Identifier, ParseError> {
        if bytes.len() != self.width() {
            return Err(ParseError::BytesLength {
                expected: self.width(),
                found: bytes.len(),
            });
        }
        let string = match self {
            Factory::EightBytes => {
                let mut value = [0u8; 8];
                value.copy_from_slice(bytes);
                hex::to_lower_hex(u64::from_be_bytes(value))
            }
            Factory::SixteenBytes => {
                let mut high = [0u8; 8];
                let mut low = [0u8; 8];
                high.copy_from_slice(&bytes[..8]);
                low.copy_from_slice(&bytes[8..]);
                format!(
                    "{}{}",
                    hex::to_lower_hex(u64::from_be_bytes(high)),
                    hex::to_lower_hex(u64::from_be_bytes(low))
                )
            }
        };
        Ok(Identifier::new(string, bytes.to_vec()))
    }
}
