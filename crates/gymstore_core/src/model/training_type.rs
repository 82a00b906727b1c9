//! Training type records.

use crate::entity::{Entity, EntityId, Record};
use crate::model::UnknownFields;
use serde::Deserialize;

/// A kind of training, such as yoga or boxing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingType {
    #[serde(default, rename = "trainingTypeId")]
    id: Option<EntityId>,
    /// Display name.
    #[serde(rename = "trainingTypeName")]
    pub name: String,
    #[serde(flatten)]
    unknown: UnknownFields,
}

impl TrainingType {
    /// Creates an unsaved training type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            unknown: UnknownFields::new(),
        }
    }

    /// Sets the identifier of a training type that has none yet.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.assign_id(id);
        self
    }

    /// Returns the identifier, `None` before the first save.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }
}

impl Entity for TrainingType {
    const NAMESPACE: &'static str = "trainingtype";
    const TYPE_NAME: &'static str = "TrainingType";

    fn entity_id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id.get_or_insert(id);
    }
}

impl Record for TrainingType {
    fn unknown_fields(&self) -> Vec<String> {
        self.unknown.keys().cloned().collect()
    }
}
