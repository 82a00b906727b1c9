//! Domain facade over the typed repositories.

use crate::config::StoreConfig;
use crate::credentials;
use crate::entity::EntityId;
use crate::error::CoreResult;
use crate::loader::BulkLoader;
use crate::model::{Trainee, Trainer, Training, TrainingType, UserProfile};
use crate::repository::Repository;
use crate::store::TypedStore;
use std::sync::Arc;
use tracing::info;

/// Entry point for the gym services.
///
/// A `Gym` owns one repository per record type, all over the same store.
/// Creating a trainee or trainer issues credentials; updates never change
/// them.
///
/// # Example
///
/// ```rust
/// use gymstore_core::{Gym, Trainee};
///
/// let gym = Gym::in_memory();
/// let john = gym.create_trainee(Trainee::new("John", "Doe"));
/// let twin = gym.create_trainee(Trainee::new("John", "Doe"));
///
/// assert_eq!(john.profile.username.as_deref(), Some("John.Doe"));
/// assert_eq!(twin.profile.username.as_deref(), Some("John.Doe1"));
/// ```
#[derive(Debug, Clone)]
pub struct Gym {
    store: Arc<TypedStore>,
    trainees: Repository<Trainee>,
    trainers: Repository<Trainer>,
    trainings: Repository<Training>,
    training_types: Repository<TrainingType>,
}

impl Gym {
    /// Opens a gym, bulk loading `config.init_file` if one is set.
    ///
    /// A missing or unreadable document is logged and the gym starts empty.
    pub fn open(config: &StoreConfig) -> Self {
        let store = TypedStore::new();
        if let Some(path) = &config.init_file {
            BulkLoader::from_config(config).load_best_effort(&store, path);
        }
        info!(records = store.len(), "gym store ready");
        Self::with_store(Arc::new(store))
    }

    /// Creates a gym over an empty store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(TypedStore::new()))
    }

    /// Creates a gym over an existing store.
    pub fn with_store(store: Arc<TypedStore>) -> Self {
        Self {
            trainees: Repository::new(Arc::clone(&store)),
            trainers: Repository::new(Arc::clone(&store)),
            trainings: Repository::new(Arc::clone(&store)),
            training_types: Repository::new(Arc::clone(&store)),
            store,
        }
    }

    /// Returns the shared store.
    pub fn store(&self) -> &Arc<TypedStore> {
        &self.store
    }

    /// Returns the trainee repository.
    pub fn trainees(&self) -> &Repository<Trainee> {
        &self.trainees
    }

    /// Returns the trainer repository.
    pub fn trainers(&self) -> &Repository<Trainer> {
        &self.trainers
    }

    /// Returns the training repository.
    pub fn trainings(&self) -> &Repository<Training> {
        &self.trainings
    }

    /// Returns the training type repository.
    pub fn training_types(&self) -> &Repository<TrainingType> {
        &self.training_types
    }

    // Trainees

    /// Issues credentials for `trainee` and saves it.
    pub fn create_trainee(&self, mut trainee: Trainee) -> Trainee {
        self.issue_credentials(&mut trainee.profile);
        let saved = self.trainees.save(trainee);
        info!(username = ?saved.profile.username, "created trainee");
        saved
    }

    /// Returns the trainee stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is none.
    pub fn select_trainee(&self, id: EntityId) -> CoreResult<Trainee> {
        self.trainees.find_by_id(id)
    }

    /// Copies the editable fields of `changes` onto the trainee stored under
    /// `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is no such trainee.
    pub fn update_trainee(&self, id: EntityId, changes: &Trainee) -> CoreResult<Trainee> {
        let mut stored = self.trainees.find_by_id(id)?;
        stored.update_from(changes);
        Ok(self.trainees.save(stored))
    }

    /// Deletes the trainee stored under `id`, if any.
    pub fn delete_trainee(&self, id: EntityId) {
        self.trainees.delete_by_id(id);
    }

    // Trainers

    /// Issues credentials for `trainer` and saves it.
    pub fn create_trainer(&self, mut trainer: Trainer) -> Trainer {
        self.issue_credentials(&mut trainer.profile);
        let saved = self.trainers.save(trainer);
        info!(username = ?saved.profile.username, "created trainer");
        saved
    }

    /// Returns the trainer stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is none.
    pub fn select_trainer(&self, id: EntityId) -> CoreResult<Trainer> {
        self.trainers.find_by_id(id)
    }

    /// Copies the editable fields of `changes` onto the trainer stored under
    /// `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is no such trainer.
    pub fn update_trainer(&self, id: EntityId, changes: &Trainer) -> CoreResult<Trainer> {
        let mut stored = self.trainers.find_by_id(id)?;
        stored.update_from(changes);
        Ok(self.trainers.save(stored))
    }

    // Trainings

    /// Saves a new training.
    pub fn create_training(&self, training: Training) -> Training {
        self.trainings.save(training)
    }

    /// Returns the training stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is none.
    pub fn select_training(&self, id: EntityId) -> CoreResult<Training> {
        self.trainings.find_by_id(id)
    }

    /// Returns the trainings attended by `trainee_id`, ordered by id.
    pub fn trainings_for_trainee(&self, trainee_id: EntityId) -> Vec<Training> {
        let mut found = self
            .trainings
            .find_by_condition(|t| t.trainee_id == Some(trainee_id));
        found.sort_by_key(Training::id);
        found
    }

    /// Returns the trainings led by `trainer_id`, ordered by id.
    pub fn trainings_for_trainer(&self, trainer_id: EntityId) -> Vec<Training> {
        let mut found = self
            .trainings
            .find_by_condition(|t| t.trainer_id == Some(trainer_id));
        found.sort_by_key(Training::id);
        found
    }

    // Training types

    /// Saves a new training type.
    pub fn create_training_type(&self, training_type: TrainingType) -> TrainingType {
        self.training_types.save(training_type)
    }

    /// Returns the training type stored under `id`.
    ///
    /// # Errors
    ///
    /// `NotFound` if there is none.
    pub fn select_training_type(&self, id: EntityId) -> CoreResult<TrainingType> {
        self.training_types.find_by_id(id)
    }

    /// Returns every training type, ordered by id.
    pub fn list_training_types(&self) -> Vec<TrainingType> {
        let mut all = self.training_types.find_all();
        all.sort_by_key(TrainingType::id);
        all
    }

    fn issue_credentials(&self, profile: &mut UserProfile) {
        let issued = credentials::issue(&profile.first_name, &profile.last_name, |candidate| {
            self.store.exists_by_username(candidate)
        });
        profile.username = Some(issued.username);
        profile.password = Some(issued.password);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::SECRET_LENGTH;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn create_trainee_issues_credentials() {
        let gym = Gym::in_memory();
        let trainee = gym.create_trainee(Trainee::new("John", "Doe"));

        assert_eq!(trainee.id(), Some(EntityId::new(1)));
        assert_eq!(trainee.profile.username.as_deref(), Some("John.Doe"));
        assert_eq!(
            trainee.profile.password.as_ref().map(String::len),
            Some(SECRET_LENGTH)
        );
        assert_eq!(gym.select_trainee(EntityId::new(1)).unwrap(), trainee);
    }

    #[test]
    fn usernames_are_unique_across_types() {
        let gym = Gym::in_memory();
        let trainee = gym.create_trainee(Trainee::new("Alex", "Kim"));
        let trainer = gym.create_trainer(Trainer::new("Alex", "Kim", "Boxing"));

        assert_eq!(trainee.profile.username.as_deref(), Some("Alex.Kim"));
        assert_eq!(trainer.profile.username.as_deref(), Some("Alex.Kim1"));
        assert_eq!(trainer.id(), Some(EntityId::new(1)));
    }

    #[test]
    fn update_keeps_credentials() {
        let gym = Gym::in_memory();
        let created = gym.create_trainee(Trainee::new("John", "Doe"));
        let id = created.id().unwrap();

        let mut changes = Trainee::new("Johnny", "Doe");
        changes.address = Some("Main St".into());
        let updated = gym.update_trainee(id, &changes).unwrap();

        assert_eq!(updated.id(), Some(id));
        assert_eq!(updated.profile.first_name, "Johnny");
        assert_eq!(updated.profile.username, created.profile.username);
        assert_eq!(updated.profile.password, created.profile.password);
        assert_eq!(gym.trainees().count(), 1);
    }

    #[test]
    fn update_missing_is_not_found() {
        let gym = Gym::in_memory();
        let err = gym
            .update_trainer(EntityId::new(5), &Trainer::new("A", "B", "C"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Trainer not found with id: 5");
    }

    #[test]
    fn delete_trainee_frees_username() {
        let gym = Gym::in_memory();
        let created = gym.create_trainee(Trainee::new("John", "Doe"));
        gym.delete_trainee(created.id().unwrap());

        assert!(gym.select_trainee(created.id().unwrap()).is_err());
        let again = gym.create_trainee(Trainee::new("John", "Doe"));
        assert_eq!(again.profile.username.as_deref(), Some("John.Doe"));
        assert_eq!(again.id(), Some(EntityId::new(2)));
    }

    #[test]
    fn trainings_by_participant() {
        let gym = Gym::in_memory();
        let yoga = gym.create_training_type(TrainingType::new("Yoga"));
        let trainee = gym.create_trainee(Trainee::new("John", "Doe"));
        let trainer = gym.create_trainer(Trainer::new("Mike", "Ross", "Yoga"));
        let (trainee_id, trainer_id) = (trainee.id().unwrap(), trainer.id().unwrap());

        let mut morning = Training::new("Morning Yoga").between(trainee_id, trainer_id);
        morning.training_type = Some(yoga.clone());
        gym.create_training(morning);
        gym.create_training(Training::new("Evening Yoga").between(trainee_id, trainer_id));
        gym.create_training(Training::new("Other").between(EntityId::new(9), trainer_id));

        let for_trainee = gym.trainings_for_trainee(trainee_id);
        assert_eq!(
            for_trainee.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            vec!["Morning Yoga", "Evening Yoga"]
        );
        assert_eq!(gym.trainings_for_trainer(trainer_id).len(), 3);
        assert_eq!(
            gym.select_training(EntityId::new(1))
                .unwrap()
                .training_type
                .and_then(|t| t.id()),
            yoga.id()
        );
    }

    #[test]
    fn training_types_are_listed_in_id_order() {
        let gym = Gym::in_memory();
        for name in ["Yoga", "Boxing", "Pilates"] {
            gym.create_training_type(TrainingType::new(name));
        }
        let names: Vec<_> = gym
            .list_training_types()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Yoga", "Boxing", "Pilates"]);
        assert!(gym.select_training_type(EntityId::new(2)).is_ok());
    }

    #[test]
    fn open_loads_configured_document() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            br#"{"trainee:4": {"firstName": "John", "lastName": "Doe", "username": "John.Doe"}}"#,
        )
        .unwrap();

        let gym = Gym::open(&StoreConfig::new().init_file(file.path()));
        assert!(gym.select_trainee(EntityId::new(4)).is_ok());

        let created = gym.create_trainee(Trainee::new("John", "Doe"));
        assert_eq!(created.id(), Some(EntityId::new(5)));
        assert_eq!(created.profile.username.as_deref(), Some("John.Doe1"));
    }

    #[test]
    fn open_without_document_is_empty() {
        let gym = Gym::open(&StoreConfig::new().init_file("/nonexistent/gym.json"));
        assert!(gym.store().is_empty());

        let gym = Gym::open(&StoreConfig::default());
        assert!(gym.store().is_empty());
    }
}
