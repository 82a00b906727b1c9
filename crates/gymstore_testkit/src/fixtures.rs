//! Test fixtures and document helpers.
//!
//! Provides builders for bulk-load documents and convenience functions for
//! setting up gyms in common test scenarios.

use gymstore_core::{BulkLoader, Gym, LoadReport, TypedStore};
use serde_json::{json, Map, Value};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

/// Builder for bulk-load documents.
///
/// Account entries get a username of the form `first.last` and a fixed
/// ten-character password, the way a previously exported store would
/// contain them.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    entries: Map<String, Value>,
}

impl DocumentBuilder {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an active trainee under `trainee:<id>`.
    #[must_use]
    pub fn trainee(self, id: u32, first: &str, last: &str) -> Self {
        let mut body = account_fields(first, last);
        body.insert("userId".into(), id.into());
        body.insert("dateOfBirth".into(), "1990-01-01".into());
        self.entry(format!("trainee:{id}"), Value::Object(body))
    }

    /// Adds an active trainer under `trainer:<id>`.
    #[must_use]
    pub fn trainer(self, id: u32, first: &str, last: &str, specialization: &str) -> Self {
        let mut body = account_fields(first, last);
        body.insert("userId".into(), id.into());
        body.insert("specialization".into(), specialization.into());
        self.entry(format!("trainer:{id}"), Value::Object(body))
    }

    /// Adds a training type under `trainingtype:<id>`.
    #[must_use]
    pub fn training_type(self, id: u32, name: &str) -> Self {
        self.entry(format!("trainingtype:{id}"), training_type_value(id, name))
    }

    /// Adds a one-hour training under `training:<id>`.
    #[must_use]
    pub fn training(self, id: u32, trainee_id: u32, trainer_id: u32, name: &str) -> Self {
        let body = json!({
            "trainingId": id,
            "traineeId": trainee_id,
            "trainerId": trainer_id,
            "trainingName": name,
            "trainingType": training_type_value(1, "General"),
            "trainingDate": "2024-03-01",
            "trainingDuration": 60,
        });
        self.entry(format!("training:{id}"), body)
    }

    /// Adds an arbitrary entry, replacing any entry under the same key.
    #[must_use]
    pub fn entry(mut self, key: impl Into<String>, body: Value) -> Self {
        self.entries.insert(key.into(), body);
        self
    }

    /// Adds an entry whose body is given as JSON text.
    ///
    /// # Panics
    ///
    /// Panics if `json` does not parse.
    #[must_use]
    pub fn raw(self, key: impl Into<String>, json: &str) -> Self {
        let body = serde_json::from_str(json).expect("fixture JSON must parse");
        self.entry(key, body)
    }

    /// Returns the number of entries added.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were added.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the document as a value.
    pub fn build(&self) -> Value {
        Value::Object(self.entries.clone())
    }

    /// Returns the document as JSON text.
    pub fn to_json_string(&self) -> String {
        self.build().to_string()
    }

    /// Writes the document to a temporary file.
    pub fn write_temp(&self) -> TempDocument {
        TempDocument::with_contents(&self.to_json_string())
    }
}

fn account_fields(first: &str, last: &str) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("firstName".into(), first.into());
    fields.insert("lastName".into(), last.into());
    fields.insert("username".into(), format!("{first}.{last}").into());
    fields.insert("password".into(), "Fixture123".into());
    fields.insert("isActive".into(), true.into());
    fields
}

fn training_type_value(id: u32, name: &str) -> Value {
    json!({
        "trainingTypeId": id,
        "trainingTypeName": name,
    })
}

/// A document file removed when dropped.
#[derive(Debug)]
pub struct TempDocument {
    file: NamedTempFile,
}

impl TempDocument {
    /// Writes `contents` to a new temporary file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be created or written.
    pub fn with_contents(contents: &str) -> Self {
        let mut file = NamedTempFile::new().expect("Failed to create temp document");
        file.write_all(contents.as_bytes())
            .expect("Failed to write temp document");
        Self { file }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

/// Loads `doc` into a fresh gym and returns it with the load report.
///
/// # Panics
///
/// Panics if the document is rejected as a whole.
pub fn load_gym(doc: &DocumentBuilder) -> (Gym, LoadReport) {
    let store = TypedStore::new();
    let report = BulkLoader::default()
        .load_document(&store, &doc.build())
        .expect("Failed to load fixture document");
    (Gym::with_store(Arc::new(store)), report)
}

/// Runs a test with an empty in-memory gym.
pub fn with_gym<F, R>(f: F) -> R
where
    F: FnOnce(&Gym) -> R,
{
    let gym = Gym::in_memory();
    f(&gym)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;
    use gymstore_core::{Trainee, Trainer, Training, TrainingType};

    /// Creates a gym with `trainees` trainees and `trainers` trainers, all
    /// created through the facade so every account has credentials.
    pub fn populated_gym(trainees: usize, trainers: usize) -> Gym {
        let gym = Gym::in_memory();
        for i in 0..trainees {
            gym.create_trainee(Trainee::new("Trainee", format!("No{i}")));
        }
        for i in 0..trainers {
            gym.create_trainer(Trainer::new("Trainer", format!("No{i}"), "General"));
        }
        gym
    }

    /// Creates a gym with one trainee, one trainer, one training type and
    /// `sessions` trainings between them.
    pub fn scheduled_gym(sessions: usize) -> Gym {
        let gym = Gym::in_memory();
        let yoga = gym.create_training_type(TrainingType::new("Yoga"));
        let trainee = gym.create_trainee(Trainee::new("John", "Doe"));
        let trainer = gym.create_trainer(Trainer::new("Mike", "Ross", "Yoga"));

        if let (Some(trainee_id), Some(trainer_id)) = (trainee.id(), trainer.id()) {
            for i in 0..sessions {
                let mut training =
                    Training::new(format!("Session {i}")).between(trainee_id, trainer_id);
                training.training_type = Some(yoga.clone());
                gym.create_training(training);
            }
        }
        gym
    }
}
