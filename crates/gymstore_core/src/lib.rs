//! # GymStore Core
//!
//! Process-local typed record store for the gym services.
//!
//! This crate provides:
//! - [`TypedStore`]: namespaced concurrent record map with per-type id counters
//! - [`Repository`]: typed access layer assigning ids on first save
//! - [`BulkLoader`]: startup seeding from a JSON document
//! - [`credentials`]: username and password generation
//! - [`Gym`]: the trainee, trainer and training flows built on top
//!
//! ```rust
//! use gymstore_core::{Gym, Trainer};
//!
//! let gym = Gym::in_memory();
//! let trainer = gym.create_trainer(Trainer::new("Mike", "Ross", "Yoga"));
//! let id = trainer.id().unwrap();
//!
//! assert_eq!(gym.select_trainer(id).unwrap().profile.username.as_deref(), Some("Mike.Ross"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
pub mod credentials;
mod entity;
mod error;
mod gym;
mod loader;
pub mod model;
mod repository;
mod stats;
mod store;
mod types;

pub use config::{StoreConfig, INIT_FILE_ENV, STRICT_FIELDS_ENV};
pub use credentials::Credentials;
pub use entity::{Account, Entity, EntityId, ParseEntityIdError, Record};
pub use error::{CoreError, CoreResult, DecodeError};
pub use gym::Gym;
pub use loader::{BulkLoader, DecoderRegistry, LoadReport, SkippedEntry};
pub use model::{Trainee, Trainer, Training, TrainingType, UserProfile};
pub use repository::Repository;
pub use stats::{StatsSnapshot, StoreStats};
pub use store::TypedStore;
pub use types::{Namespace, ParseKeyError, StorageKey};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
