//! Core type definitions for the store.

use crate::entity::{EntityId, ParseEntityIdError};
use std::borrow::{Borrow, Cow};
use std::fmt;
use thiserror::Error;

/// Partition of the key space holding the records of one entity type.
///
/// Namespaces are lower-case names such as `trainee` or `trainingtype`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Namespace(Cow<'static, str>);

impl Namespace {
    /// Creates a namespace from a static name without allocating.
    ///
    /// The name is expected to already be lower-case.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates a namespace, lower-casing the name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        if name.chars().any(char::is_uppercase) {
            Self(Cow::Owned(name.to_lowercase()))
        } else {
            Self(Cow::Owned(name.to_owned()))
        }
    }

    /// Returns the namespace name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Namespace {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Composite key addressing one record: `(namespace, id)`.
///
/// The textual form is `"<namespace>:<id>"`, as used by bulk-load documents.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey {
    /// Namespace of the record.
    pub namespace: Namespace,
    /// Identifier within the namespace.
    pub id: EntityId,
}

/// Why a textual storage key was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    /// The key has no `:` separator.
    #[error("expected `<namespace>:<id>`")]
    MissingSeparator,
    /// The part before `:` is empty.
    #[error("namespace is empty")]
    EmptyNamespace,
    /// The part after `:` is not a valid id.
    #[error("{0}")]
    InvalidId(#[from] ParseEntityIdError),
}

impl StorageKey {
    /// Creates a key.
    #[must_use]
    pub fn new(namespace: Namespace, id: EntityId) -> Self {
        Self { namespace, id }
    }

    /// Parses `"<namespace>:<id>"`, splitting on the first `:`.
    ///
    /// The namespace is lower-cased; the id must be a positive base-10 integer
    /// no larger than [`EntityId::MAX`].
    ///
    /// # Errors
    ///
    /// Returns a [`ParseKeyError`] describing the first problem found.
    pub fn parse(key: &str) -> Result<Self, ParseKeyError> {
        let (namespace, id) = key.split_once(':').ok_or(ParseKeyError::MissingSeparator)?;
        if namespace.is_empty() {
            return Err(ParseKeyError::EmptyNamespace);
        }
        let id = id.parse::<EntityId>()?;
        Ok(Self::new(Namespace::new(namespace), id))
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn namespace_is_lower_cased() {
        assert_eq!(Namespace::new("TrainingType").as_str(), "trainingtype");
        assert_eq!(Namespace::new("trainee"), Namespace::from_static("trainee"));
    }

    #[test]
    fn namespace_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Namespace::new("trainer"), 1);
        assert_eq!(map.get("trainer"), Some(&1));
    }

    #[test]
    fn parse_splits_on_first_colon() {
        let key = StorageKey::parse("Trainee:12").unwrap();
        assert_eq!(key.namespace.as_str(), "trainee");
        assert_eq!(key.id, EntityId::new(12));
        assert_eq!(key.to_string(), "trainee:12");

        assert!(matches!(
            StorageKey::parse("trainee:1:2"),
            Err(ParseKeyError::InvalidId(_))
        ));
    }

    #[test]
    fn parse_rejects_malformed_keys() {
        assert_eq!(
            StorageKey::parse("trainee"),
            Err(ParseKeyError::MissingSeparator)
        );
        assert_eq!(StorageKey::parse(":4"), Err(ParseKeyError::EmptyNamespace));
        assert_eq!(
            StorageKey::parse("trainee:0"),
            Err(ParseKeyError::InvalidId(ParseEntityIdError::Zero))
        );
        assert!(StorageKey::parse("trainee:x").is_err());
        assert_eq!(
            StorageKey::parse("trainee:18446744073709551615"),
            Err(ParseKeyError::InvalidId(ParseEntityIdError::OutOfRange(
                u64::MAX
            )))
        );
        assert_eq!(
            StorageKey::parse("trainee:").unwrap_err().to_string(),
            "not a base-10 id: cannot parse integer from empty string"
        );
    }
}
