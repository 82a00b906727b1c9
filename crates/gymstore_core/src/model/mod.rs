//! Gym domain records.
//!
//! | Type | Namespace | Identity-bearing |
//! |---|---|---|
//! | [`Trainee`] | `trainee` | yes |
//! | [`Trainer`] | `trainer` | yes |
//! | [`Training`] | `training` | no |
//! | [`TrainingType`] | `trainingtype` | no |

mod trainee;
mod trainer;
mod training;
mod training_type;
mod user;

pub use trainee::Trainee;
pub use trainer::Trainer;
pub use training::Training;
pub use training_type::TrainingType;
pub use user::UserProfile;

use crate::loader::DecoderRegistry;
use std::collections::BTreeMap;

/// Document fields a record does not declare, captured during decoding.
pub(crate) type UnknownFields = BTreeMap<String, serde_json::Value>;

/// Returns a registry with decoders for every gym record type.
pub fn default_registry() -> DecoderRegistry {
    let mut registry = DecoderRegistry::new();
    registry
        .register::<Trainee>()
        .register::<Trainer>()
        .register::<Training>()
        .register::<TrainingType>();
    registry
}
