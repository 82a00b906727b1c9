//! CLI command implementations.

pub mod credentials;
pub mod inspect;
pub mod verify;

use gymstore_core::{BulkLoader, LoadReport, StoreConfig, TypedStore};
use std::path::Path;
use tracing::debug;

/// Loads the document at `path` into a fresh store.
///
/// Unlike service startup, an unreadable or malformed document is an error
/// here.
pub(crate) fn load(
    path: &Path,
    config: &StoreConfig,
) -> Result<(TypedStore, LoadReport), Box<dyn std::error::Error>> {
    debug!(path = %path.display(), strict = config.strict_fields, "loading document");
    let store = TypedStore::new();
    let report = BulkLoader::from_config(config).load_file(&store, path)?;
    Ok((store, report))
}
