//! Event join codes.
//!
//! A join code is 6 characters from `A-Z0-9`. Codes typed by users are
//! accepted in any letter case and normalized to uppercase.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{LinkError, LinkResult};

/// Number of characters in a join code.
pub const CODE_LENGTH: usize = 6;

/// Alphabet join codes are drawn from.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// A validated, uppercase event join code.
///
/// # Examples
///
/// ```
/// use eventshare_links::EventCode;
///
/// let code = EventCode::parse(" ab12cd ").unwrap();
/// assert_eq!(code.as_str(), "AB12CD");
/// assert!(EventCode::parse("AB12C").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventCode(String);

impl EventCode {
    /// Validate and normalize a join code.
    ///
    /// Surrounding whitespace is ignored; letters are upper-cased.
    pub fn parse(input: &str) -> LinkResult<Self> {
        let trimmed = input.trim();
        if is_valid_code(trimmed) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(LinkError::InvalidEventCode(input.to_string()))
        }
    }

    /// Generate a random join code.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let code = (0..CODE_LENGTH)
            .map(|_| CODE_ALPHABET[rng.gen_range(0..CODE_ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// The code as an uppercase string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check whether `s` is exactly [`CODE_LENGTH`] ASCII letters or digits.
pub fn is_valid_code(s: &str) -> bool {
    s.len() == CODE_LENGTH && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

impl std::fmt::Display for EventCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EventCode {
    type Error = LinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventCode> for String {
    fn from(code: EventCode) -> Self {
        code.0
    }
}

impl std::str::FromStr for EventCode {
    type Err = LinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
