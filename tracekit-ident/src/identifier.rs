use std::fmt;
use std::hash::{Hash, Hasher};

/// A trace or span identifier, held in both of its canonical forms.
///
/// An identifier carries the same value twice: a lowercase hexadecimal
/// string for logs and textual headers, and a fixed-width big-endian byte
/// buffer for binary wire formats. The two always decode to the same value
/// because non-empty identifiers are only constructed by a [`Factory`].
///
/// Equality and hashing are defined over the string form **only**. Two
/// identifiers with equal strings compare equal whatever their byte
/// buffers hold; downstream consumers correlate telemetry on the displayed
/// string and rely on these semantics.
///
/// Identifiers are immutable owned values and can be cloned and shared
/// across threads freely.
///
/// [`Factory`]: crate::Factory
#[derive(Clone)]
pub struct Identifier {
    string: String,
    bytes: Vec<u8>,
}

impl Identifier {
    /// The "no identifier" sentinel: empty string, empty bytes.
    ///
    /// Returned by the parse operations on malformed input and detectable
    /// with [`is_empty`](Identifier::is_empty).
    pub const EMPTY: Identifier = Identifier {
        string: String::new(),
        bytes: Vec::new(),
    };

    /// Trusted constructor for factories. `string` and `bytes` must encode
    /// the same value.
    pub(crate) fn new(string: String, bytes: Vec<u8>) -> Self {
        Identifier { string, bytes }
    }

    /// The textual form: lowercase hexadecimal for generated identifiers,
    /// the verbatim input for parsed ones.
    pub fn as_str(&self) -> &str {
        &self.string
    }

    /// The binary form: big-endian, 8 or 16 bytes for generated
    /// identifiers.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns `true` iff this is the empty identifier.
    pub fn is_empty(&self) -> bool {
        self.string.is_empty()
    }
}

impl PartialEq for Identifier {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl Eq for Identifier {}

impl Hash for Identifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.string.hash(state);
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::EMPTY
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(id: &Identifier) -> u64 {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn empty_sentinel() {
        assert!(Identifier::EMPTY.is_empty());
        assert_eq!(Identifier::EMPTY.as_str(), "");
        assert_eq!(Identifier::EMPTY.as_bytes(), &[] as &[u8]);
        assert_eq!(Identifier::default(), Identifier::EMPTY);
    }

    #[test]
    fn equality_ignores_bytes() {
        // The documented contract: identical strings compare equal even
        // when the byte buffers differ.
        let left = Identifier::new("4c721bf33e3caf8f".to_owned(), vec![1, 2, 3]);
        let right = Identifier::new("4c721bf33e3caf8f".to_owned(), vec![4, 5, 6]);

        assert_eq!(left, right);
        assert_eq!(hash_of(&left), hash_of(&right));
    }

    #[test]
    fn inequality_on_strings() {
        let left = Identifier::new("0000000000000001".to_owned(), vec![0; 8]);
        let right = Identifier::new("0000000000000002".to_owned(), vec![0; 8]);

        assert_ne!(left, right);
    }

    #[test]
    fn displays_string_form() {
        let id = Identifier::new("00000000000003e7".to_owned(), 999u64.to_be_bytes().to_vec());
        assert_eq!(id.to_string(), "00000000000003e7");
        assert_eq!(format!("{id:?}"), "00000000000003e7");
    }
}
