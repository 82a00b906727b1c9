//! Trainee records.

use crate::entity::{Account, Entity, EntityId, Record};
use crate::model::{UnknownFields, UserProfile};
use serde::Deserialize;

/// A gym member who attends trainings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trainee {
    #[serde(default, rename = "userId")]
    id: Option<EntityId>,
    /// Account data.
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Date of birth as written in the source, e.g. `1990-05-01`.
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Postal address.
    #[serde(default)]
    pub address: Option<String>,
    #[serde(flatten)]
    unknown: UnknownFields,
}

impl Trainee {
    /// Creates an unsaved, active trainee.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: None,
            profile: UserProfile::new(first_name, last_name),
            date_of_birth: None,
            address: None,
            unknown: UnknownFields::new(),
        }
    }

    /// Sets the identifier of a trainee that has none yet.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.assign_id(id);
        self
    }

    /// Returns the identifier, `None` before the first save.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Copies the editable fields of `other` onto this trainee.
    pub fn update_from(&mut self, other: &Trainee) {
        self.profile.update_from(&other.profile);
        self.date_of_birth.clone_from(&other.date_of_birth);
        self.address.clone_from(&other.address);
    }
}

impl Entity for Trainee {
    const NAMESPACE: &'static str = "trainee";
    const TYPE_NAME: &'static str = "Trainee";

    fn entity_id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id.get_or_insert(id);
    }

    fn account(&self) -> Option<&dyn Account> {
        Some(self)
    }
}

impl Account for Trainee {
    fn username(&self) -> Option<&str> {
        self.profile.username.as_deref()
    }
}

impl Record for Trainee {
    fn unknown_fields(&self) -> Vec<String> {
        self.unknown.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<Trainee> {
        serde_json::from_str(json)
    }

    #[test]
    fn decodes_document_entry() {
        let trainee = decode(
            r#"{"userId":1,"firstName":"John","lastName":"Doe","username":"John.Doe",
                "isActive":true,"dateOfBirth":"1990-05-01","address":"Main St 1"}"#,
        )
        .unwrap();

        assert_eq!(trainee.id(), Some(EntityId::new(1)));
        assert_eq!(trainee.username(), Some("John.Doe"));
        assert_eq!(trainee.date_of_birth.as_deref(), Some("1990-05-01"));
        assert_eq!(trainee.address.as_deref(), Some("Main St 1"));
        assert!(trainee.profile.active);
        assert!(trainee.unknown_fields().is_empty());
    }

    #[test]
    fn undeclared_fields_are_kept_aside() {
        let trainee =
            decode(r#"{"firstName":"John","lastName":"Doe","nickname":"JD","active":true}"#)
                .unwrap();

        assert_eq!(trainee.unknown_fields(), vec!["nickname".to_owned()]);
        assert!(trainee.profile.active);
        assert_eq!(trainee.profile.last_name, "Doe");
    }

    #[test]
    fn rejects_bad_ids() {
        assert!(decode(r#"{"userId":0,"firstName":"A"}"#).is_err());
        assert!(decode(r#"{"userId":"1","firstName":"A"}"#).is_err());
        assert!(decode(r#"{"userId":18446744073709551615,"firstName":"A"}"#).is_err());
    }

    #[test]
    fn id_is_write_once() {
        let trainee = Trainee::new("John", "Doe")
            .with_id(EntityId::new(5))
            .with_id(EntityId::new(6));
        assert_eq!(trainee.id(), Some(EntityId::new(5)));
    }

    #[test]
    fn is_identity_bearing() {
        let mut trainee = Trainee::new("John", "Doe");
        assert!(trainee.account().is_some_and(|a| a.username().is_none()));

        trainee.profile.username = Some("John.Doe".into());
        assert_eq!(
            trainee.account().and_then(|a| a.username()),
            Some("John.Doe")
        );
    }

    #[test]
    fn update_keeps_identity() {
        let mut stored = Trainee::new("John", "Doe").with_id(EntityId::new(3));
        stored.profile.username = Some("John.Doe".into());

        let mut edit = Trainee::new("John", "Smith").with_id(EntityId::new(9));
        edit.address = Some("Elm St".into());
        stored.update_from(&edit);

        assert_eq!(stored.id(), Some(EntityId::new(3)));
        assert_eq!(stored.profile.last_name, "Smith");
        assert_eq!(stored.profile.username.as_deref(), Some("John.Doe"));
        assert_eq!(stored.address.as_deref(), Some("Elm St"));
    }
}
