//! Training records.

use crate::entity::{Entity, EntityId, Record};
use crate::model::{TrainingType, UnknownFields};
use serde::Deserialize;

/// A scheduled session between one trainee and one trainer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Training {
    #[serde(default, rename = "trainingId")]
    id: Option<EntityId>,
    /// Attending trainee.
    #[serde(default)]
    pub trainee_id: Option<EntityId>,
    /// Leading trainer.
    #[serde(default)]
    pub trainer_id: Option<EntityId>,
    /// Display name.
    #[serde(rename = "trainingName")]
    pub name: String,
    /// Kind of training, embedded by value.
    #[serde(default)]
    pub training_type: Option<TrainingType>,
    /// Date as written in the source, e.g. `2024-03-01`.
    #[serde(default, rename = "trainingDate")]
    pub date: Option<String>,
    /// Length in minutes.
    #[serde(default, rename = "trainingDuration")]
    pub duration: Option<u32>,
    #[serde(flatten)]
    unknown: UnknownFields,
}

impl Training {
    /// Creates an unsaved training with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            trainee_id: None,
            trainer_id: None,
            name: name.into(),
            training_type: None,
            date: None,
            duration: None,
            unknown: UnknownFields::new(),
        }
    }

    /// Sets the identifier of a training that has none yet.
    #[must_use]
    pub fn with_id(mut self, id: EntityId) -> Self {
        self.assign_id(id);
        self
    }

    /// Returns the identifier, `None` before the first save.
    pub fn id(&self) -> Option<EntityId> {
        self.id
    }

    /// Sets the participants.
    #[must_use]
    pub fn between(mut self, trainee_id: EntityId, trainer_id: EntityId) -> Self {
        self.trainee_id = Some(trainee_id);
        self.trainer_id = Some(trainer_id);
        self
    }
}

impl Entity for Training {
    const NAMESPACE: &'static str = "training";
    const TYPE_NAME: &'static str = "Training";

    fn entity_id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id.get_or_insert(id);
    }
}

impl Record for Training {
    fn unknown_fields(&self) -> Vec<String> {
        let nested = self.training_type.iter().flat_map(|kind| {
            kind.unknown_fields()
                .into_iter()
                .map(|field| format!("trainingType.{field}"))
        });
        self.unknown.keys().cloned().chain(nested).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<Training> {
        serde_json::from_str(json)
    }

    #[test]
    fn decodes_nested_type() {
        let training = decode(
            r#"{"trainingId":1,"traineeId":1,"trainerId":2,"trainingName":"Morning Yoga",
                "trainingType":{"trainingTypeId":1,"trainingTypeName":"Yoga"},
                "trainingDate":"2024-03-01","trainingDuration":60}"#,
        )
        .unwrap();

        assert_eq!(training.id(), Some(EntityId::new(1)));
        assert_eq!(training.trainer_id, Some(EntityId::new(2)));
        assert_eq!(
            training.training_type.as_ref().map(|t| t.name.as_str()),
            Some("Yoga")
        );
        assert_eq!(training.duration, Some(60));
    }

    #[test]
    fn nested_unknown_fields_are_reported_with_a_path() {
        let training = decode(
            r#"{"trainingName":"T","room":"B",
                "trainingType":{"trainingTypeName":"Yoga","color":"red"}}"#,
        )
        .unwrap();
        assert_eq!(
            training.unknown_fields(),
            vec!["room".to_owned(), "trainingType.color".to_owned()]
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert!(decode(r#"{"trainingName":"T","trainingDuration":-5}"#).is_err());
        assert!(decode(r#"{"trainingName":"T","trainingDuration":4294967296}"#).is_err());
        assert!(decode(r#"{"trainingDuration":60}"#).is_err());
        assert!(decode(r#"{"trainingName":"T","trainingType":"Yoga"}"#).is_err());
    }

    #[test]
    fn between_sets_participants() {
        let training = Training::new("Sparring").between(EntityId::new(3), EntityId::new(4));
        assert_eq!(training.trainee_id, Some(EntityId::new(3)));
        assert_eq!(training.trainer_id, Some(EntityId::new(4)));
        assert!(training.id().is_none());
    }
}
