use std::fmt;

use serde::{Deserialize, Serialize};

/// Unit suffix the server expects on day-based expirations.
pub const EXPIRATION_DAY_SUFFIX: char = 'd';

/// Expiration duration as sent on the wire.
///
/// Built from the raw expiration field by appending [`EXPIRATION_DAY_SUFFIX`].
/// The field value is forwarded untouched; the server is the only validator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expiration(String);

impl Expiration {
    pub fn from_days_field(raw: &str) -> Self {
        let mut value = String::with_capacity(raw.len() + 1);
        value.push_str(raw);
        value.push(EXPIRATION_DAY_SUFFIX);
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_day_suffix_to_numeric_field() {
        assert_eq!(Expiration::from_days_field("7").as_str(), "7d");
        assert_eq!(Expiration::from_days_field("30").as_str(), "30d");
    }

    #[test]
    fn empty_field_becomes_bare_suffix() {
        assert_eq!(Expiration::from_days_field("").as_str(), "d");
    }

    #[test]
    fn forwards_unvalidated_input_verbatim() {
        for raw in ["-3", "abc", " 5 ", "1.5", "7d", "😀"] {
            assert_eq!(
                Expiration::from_days_field(raw).to_string(),
                format!("{raw}d")
            );
        }
    }
}
