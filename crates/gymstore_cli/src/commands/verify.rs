//! Verify command implementation.

use gymstore_core::StoreConfig;
use std::path::Path;

/// Runs the verify command.
///
/// Every skipped entry is listed with its reason; any skip fails the command.
pub fn run(path: &Path, config: &StoreConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("Verifying document at {}", path.display());
    println!();

    let (_, report) = super::load(path, config)?;

    println!("Checked {} entries", report.total());
    for entry in &report.skipped {
        println!("  ✗ {}: {}", entry.key, entry.error);
    }

    println!();
    if report.is_clean() {
        println!("✓ Document verification passed ({} entries)", report.loaded);
        Ok(())
    } else {
        println!(
            "✗ Document verification failed ({} of {} entries skipped)",
            report.skipped.len(),
            report.total()
        );
        Err("Verification failed".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("gym.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn clean_document_passes() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, r#"{"trainingtype:1": {"trainingTypeName": "Yoga"}}"#);
        assert!(run(&path, &StoreConfig::default()).is_ok());
    }

    #[test]
    fn skipped_entry_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, r#"{"trainer:1": {"lastName": "Ross", "userId": 2}}"#);
        assert!(run(&path, &StoreConfig::default()).is_err());
    }

    #[test]
    fn unknown_field_passes_when_lenient() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"{"trainingtype:1": {"trainingTypeName": "Yoga", "color": "red"}}"#,
        );
        assert!(run(&path, &StoreConfig::default()).is_err());
        assert!(run(&path, &StoreConfig::new().strict_fields(false)).is_ok());
    }

    #[test]
    fn missing_document_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(run(&dir.path().join("none.json"), &StoreConfig::default()).is_err());
    }
}
