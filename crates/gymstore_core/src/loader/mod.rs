//! Startup bulk load of typed records from a JSON document.
//!
//! A document is a JSON object mapping `"<namespace>:<id>"` keys to field
//! objects:
//!
//! ```json
//! {
//!   "trainee:1": { "firstName": "John", "lastName": "Doe", "isActive": true },
//!   "trainingtype:1": { "trainingTypeName": "Yoga" }
//! }
//! ```
//!
//! Entries are independent. A malformed key, an unknown namespace or a field
//! error skips that entry only; the rest of the document still loads.
//!
//! Ids in keys and bodies must lie in `1..=EntityId::MAX`. Account names may
//! be missing or `null`; they load as empty names.

mod registry;

pub use registry::DecoderRegistry;

use crate::config::StoreConfig;
use crate::error::{CoreError, CoreResult};
use crate::model::default_registry;
use crate::store::TypedStore;
use crate::types::StorageKey;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// A document entry that was not loaded.
#[derive(Debug)]
pub struct SkippedEntry {
    /// The entry's key as written in the document.
    pub key: String,
    /// Why it was skipped.
    pub error: CoreError,
}

/// Outcome of a bulk load.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Number of records stored.
    pub loaded: usize,
    /// Entries that were skipped, in document key order.
    pub skipped: Vec<SkippedEntry>,
}

impl LoadReport {
    /// Returns true if every entry was loaded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Returns the number of entries seen.
    pub fn total(&self) -> usize {
        self.loaded + self.skipped.len()
    }

    fn skip(&mut self, key: &str, error: CoreError) {
        warn!(key, %error, "skipping document entry");
        self.skipped.push(SkippedEntry {
            key: key.to_owned(),
            error,
        });
    }
}

/// Seeds a [`TypedStore`] from a document.
///
/// Each loaded record is stored under its key and the namespace counter is
/// raised to the key's id, so ids generated afterwards continue above the
/// highest loaded one.
///
/// # Example
///
/// ```rust
/// use gymstore_core::{BulkLoader, Trainee, TypedStore};
///
/// let store = TypedStore::new();
/// let report = BulkLoader::default()
///     .load_str(&store, r#"{"trainee:5": {"firstName": "John", "lastName": "Doe"}}"#)
///     .unwrap();
///
/// assert_eq!(report.loaded, 1);
/// assert_eq!(store.generate_id::<Trainee>().as_u64(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct BulkLoader {
    registry: DecoderRegistry,
    strict_fields: bool,
}

impl BulkLoader {
    /// Creates a loader for the types in `registry`, rejecting unknown fields.
    pub fn new(registry: DecoderRegistry) -> Self {
        Self {
            registry,
            strict_fields: true,
        }
    }

    /// Creates a loader for the gym record types using `config`.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(default_registry()).strict_fields(config.strict_fields)
    }

    /// Sets whether entries with undeclared fields are skipped.
    #[must_use]
    pub fn strict_fields(mut self, strict: bool) -> Self {
        self.strict_fields = strict;
        self
    }

    /// Returns the decoder registry.
    pub fn registry(&self) -> &DecoderRegistry {
        &self.registry
    }

    /// Loads the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `SourceUnavailable` if the file cannot be read and
    /// `InvalidDocument` if it is not a JSON object. Entry-level problems
    /// are reported in the [`LoadReport`] instead.
    pub fn load_file(&self, store: &TypedStore, path: impl AsRef<Path>) -> CoreResult<LoadReport> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CoreError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = text.len(), "read bulk-load document");
        self.load_str(store, &text)
    }

    /// Loads a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if the text is not a JSON object.
    pub fn load_str(&self, store: &TypedStore, text: &str) -> CoreResult<LoadReport> {
        let document: Value =
            serde_json::from_str(text).map_err(|e| CoreError::invalid_document(e.to_string()))?;
        self.load_document(store, &document)
    }

    /// Loads an already parsed document.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDocument` if `document` is not a JSON object.
    pub fn load_document(&self, store: &TypedStore, document: &Value) -> CoreResult<LoadReport> {
        let entries = document.as_object().ok_or_else(|| {
            CoreError::invalid_document(format!(
                "expected an object of entries, found {}",
                kind(document)
            ))
        })?;

        let mut report = LoadReport::default();
        for (key, body) in entries {
            match self.load_entry(store, key, body) {
                Ok(()) => report.loaded += 1,
                Err(e) => report.skip(key, e),
            }
        }

        info!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "bulk load finished"
        );
        Ok(report)
    }

    /// Loads the document at `path`, starting empty on any document-level
    /// failure.
    ///
    /// The failure is logged; nothing is returned to the caller but an empty
    /// report.
    pub fn load_best_effort(&self, store: &TypedStore, path: impl AsRef<Path>) -> LoadReport {
        let path = path.as_ref();
        self.load_file(store, path).unwrap_or_else(|e| {
            error!(path = %path.display(), error = %e, "bulk load failed, starting empty");
            LoadReport::default()
        })
    }

    fn load_entry(&self, store: &TypedStore, key: &str, body: &Value) -> CoreResult<()> {
        let parsed = StorageKey::parse(key).map_err(|e| CoreError::invalid_key(key, e))?;

        match self.registry.decode_into(
            store,
            &parsed.namespace,
            parsed.id,
            body,
            self.strict_fields,
        ) {
            Some(Ok(())) => {
                debug!(%parsed, "loaded entry");
                Ok(())
            }
            Some(Err(e)) => Err(CoreError::decode(key, e)),
            None => Err(CoreError::UnknownNamespace {
                key: key.to_owned(),
                namespace: parsed.namespace.to_string(),
            }),
        }
    }
}

impl Default for BulkLoader {
    fn default() -> Self {
        Self::from_config(&StoreConfig::default())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
