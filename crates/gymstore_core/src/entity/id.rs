//! Entity identifier.

use serde::Deserialize;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a record within its namespace.
///
/// Entity IDs are positive 64-bit integers that are:
/// - Unique within a namespace (not across namespaces)
/// - Immutable once assigned
/// - Never reused, even after the record is deleted
///
/// Parsed and deserialized ids are at most [`EntityId::MAX`], the largest
/// value a signed 64-bit id can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u64")]
pub struct EntityId(u64);

impl EntityId {
    /// Largest id accepted from text or documents.
    pub const MAX: Self = Self(i64::MAX as u64);

    /// Creates an entity ID from a raw value.
    ///
    /// Generated and parsed IDs are never zero; callers building IDs by hand
    /// should keep to the same rule.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<EntityId> for u64 {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

/// Error returned when text or a number is not a valid entity ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEntityIdError {
    /// The text is not a base-10 unsigned integer.
    #[error("not a base-10 id: {0}")]
    NotANumber(#[from] ParseIntError),
    /// The value is zero.
    #[error("id must be positive")]
    Zero,
    /// The value is above [`EntityId::MAX`].
    #[error("id {0} exceeds the maximum {}", EntityId::MAX)]
    OutOfRange(u64),
}

impl TryFrom<u64> for EntityId {
    type Error = ParseEntityIdError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        match n {
            0 => Err(ParseEntityIdError::Zero),
            n if n > Self::MAX.0 => Err(ParseEntityIdError::OutOfRange(n)),
            n => Ok(Self(n)),
        }
    }
}

impl FromStr for EntityId {
    type Err = ParseEntityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<u64>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!("42".parse::<EntityId>().unwrap(), EntityId::new(42));
        assert_eq!(
            "9223372036854775807".parse::<EntityId>().unwrap(),
            EntityId::MAX
        );
    }

    #[test]
    fn parse_rejects_ids_above_max() {
        assert_eq!(
            "9223372036854775808".parse::<EntityId>(),
            Err(ParseEntityIdError::OutOfRange(1 << 63))
        );
        assert_eq!(
            "18446744073709551615".parse::<EntityId>(),
            Err(ParseEntityIdError::OutOfRange(u64::MAX))
        );
        assert!(EntityId::try_from(u64::MAX).is_err());
    }

    #[test]
    fn deserializes_from_numbers() {
        let id: EntityId = serde_json::from_str("7").unwrap();
        assert_eq!(id, EntityId::new(7));

        assert!(serde_json::from_str::<EntityId>("0").is_err());
        assert!(serde_json::from_str::<EntityId>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<EntityId>("\"7\"").is_err());
    }

    #[test]
    fn parse_rejects_zero_and_junk() {
        assert_eq!("0".parse::<EntityId>(), Err(ParseEntityIdError::Zero));
        assert!(matches!(
            "abc".parse::<EntityId>(),
            Err(ParseEntityIdError::NotANumber(_))
        ));
        assert!("-1".parse::<EntityId>().is_err());
        assert_eq!(
            "abc".parse::<EntityId>().unwrap_err().to_string(),
            "not a base-10 id: invalid digit found in string"
        );
        assert!("".parse::<EntityId>().is_err());
    }

    #[test]
    fn ordering() {
        assert!(EntityId::new(1) < EntityId::new(2));
    }

    #[test]
    fn display() {
        assert_eq!(EntityId::new(999).to_string(), "999");
    }
}
