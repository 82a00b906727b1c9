//! Trainer records.

use crate::entity::{Account, Entity, EntityId, Record};
use crate::model::{UnknownFields, UserProfile};
use serde::Deserialize;

/// A gym member who leads trainings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Trainer {
    #[serde(default, rename = "userId")]
    id: Option<EntityId>,
    /// Account data.
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Discipline the trainer teaches.
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(flatten)]
    unknown: UnknownFields,
}

impl Trainer {
    /// Creates an unsaved, active trainer.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            profile: UserProfile::new(first_name, last_name),
            specialization: Some(specialization.into()),
            unknown: UnknownFields::new(),
        }
    }

    /// Sets the identifier of a trainer that has none yet.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.assign_id(id);
        self
    }

    /// Returns the identifier, `None` before the first save.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Copies the editable fields of `other` onto this trainer.
    pub fn update_from(&mut self, other: &Trainer) {
        self.profile.update_from(&other.profile);
        self.specialization.clone_from(&other.specialization);
    }
}

impl Entity for Trainer {
    const NAMESPACE: &'static str = "trainer";
    const TYPE_NAME: &'static str = "Trainer";

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

impl Account for Trainer {
    fn username(&self) -> Option<&str> {
        self.profile.username.as_deref()
    }
}

impl Record for Trainer {
    fn unknown_fields(&self) -> Vec<String> {
        self.unknown.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<Trainer> {
        serde_json::from_str(json)
    }

    #[test]
    fn decodes_document_entry() {
        let trainer = decode(
            r#"{"userId":2,"firstName":"Mike","lastName":"Ross","username":"Mike.Ross",
                "password":"pw","active":true,"specialization":"Yoga"}"#,
        )
        .unwrap();

        assert_eq!(trainer.id(), Some(EntityId::new(2)));
        assert_eq!(trainer.specialization.as_deref(), Some("Yoga"));
        assert!(trainer.profile.active);
        assert_eq!(trainer.username(), Some("Mike.Ross"));
    }

    #[test]
    fn rejects_bad_entries() {
        assert!(decode(r#"{"userId":"two","firstName":"M","lastName":"R"}"#).is_err());
        assert!(decode(r#"{"userId":0,"firstName":"M","lastName":"R"}"#).is_err());
        assert!(decode(r#"{"firstName":"M","specialization":7}"#).is_err());
        assert!(decode(r#""Mike Ross""#).is_err());
    }

    #[test]
    fn sparse_entry_decodes_with_defaults() {
        let trainer = decode(r#"{"lastName":"Ross"}"#).unwrap();
        assert_eq!(trainer.profile.first_name, "");
        assert!(!trainer.profile.active);
        assert!(trainer.specialization.is_none());
        assert!(trainer.id().is_none());
    }

    #[test]
    fn update_copies_specialization() {
        let mut stored = Trainer::new("Mike", "Ross", "Yoga").with_id(EntityId::new(1));
        stored.update_from(&Trainer::new("Mike", "Ross", "Pilates"));

        assert_eq!(stored.specialization.as_deref(), Some("Pilates"));
        assert_eq!(stored.id(), Some(EntityId::new(1)));
    }
}
