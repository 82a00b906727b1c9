//! Property-based test generators using proptest.
//!
//! Provides strategies for generating gym records and bulk-load documents
//! that satisfy the loader's rules.

use crate::fixtures::DocumentBuilder;
use gymstore_core::{EntityId, Trainee, Trainer, TrainingType};
use proptest::prelude::*;
use std::collections::BTreeMap;

/// Strategy for generating valid entity IDs.
pub fn entity_id_strategy() -> impl Strategy<Value = EntityId> {
    (1u64..1_000_000).prop_map(EntityId::new)
}

/// Strategy for generating capitalized personal names.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z][a-z]{1,9}").expect("Invalid regex")
}

/// Strategy for generating unsaved trainees.
pub fn trainee_strategy() -> impl Strategy<Value = Trainee> {
    (
        name_strategy(),
        name_strategy(),
        prop::option::of("(19[5-9][0-9]|20[01][0-9])-0[1-9]-1[0-9]"),
        prop::option::of("[A-Z][a-z]{2,8} St [1-9][0-9]?"),
    )
        .prop_map(|(first, last, date_of_birth, address)| {
            let mut trainee = Trainee::new(first, last);
            trainee.date_of_birth = date_of_birth;
            trainee.address = address;
            trainee
        })
}

/// Strategy for generating unsaved trainers.
pub fn trainer_strategy() -> impl Strategy<Value = Trainer> {
    (name_strategy(), name_strategy(), training_type_name_strategy())
        .prop_map(|(first, last, specialization)| Trainer::new(first, last, specialization))
}

/// Strategy for generating training type names.
pub fn training_type_name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Yoga", "Boxing", "Pilates", "Crossfit", "Zumba"])
        .prop_map(str::to_owned)
}

/// Strategy for generating unsaved training types.
pub fn training_type_strategy() -> impl Strategy<Value = TrainingType> {
    training_type_name_strategy().prop_map(TrainingType::new)
}

/// Namespaces a generated document may use.
pub const DOCUMENT_NAMESPACES: [&str; 4] = ["trainee", "trainer", "training", "trainingtype"];

/// A generated bulk-load document together with what loading it must yield.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    /// The document.
    pub builder: DocumentBuilder,
    /// Highest id per namespace, for namespaces that have entries.
    pub max_ids: BTreeMap<&'static str, u32>,
}

/// Strategy for generating well-formed documents with up to `max_entries`
/// entries and unique keys.
pub fn document_strategy(max_entries: usize) -> impl Strategy<Value = GeneratedDocument> {
    prop::collection::btree_map(
        (0..DOCUMENT_NAMESPACES.len(), 1u32..500),
        (name_strategy(), name_strategy()),
        0..max_entries,
    )
    .prop_map(|entries| {
        let mut builder = DocumentBuilder::new();
        let mut max_ids = BTreeMap::new();

        for ((ns, id), (first, last)) in entries {
            let namespace = DOCUMENT_NAMESPACES[ns];
            builder = match namespace {
                "trainee" => builder.trainee(id, &first, &last),
                "trainer" => builder.trainer(id, &first, &last, "General"),
                "training" => builder.training(id, 1, 1, &first),
                _ => builder.training_type(id, &last),
            };
            let max = max_ids.entry(namespace).or_insert(id);
            *max = (*max).max(id);
        }

        GeneratedDocument { builder, max_ids }
    })
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
