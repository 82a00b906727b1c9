//! Credentials command implementation.

use gymstore_core::{credentials, Credentials, StoreConfig, TypedStore};
use serde::Serialize;
use std::path::Path;

/// Preview of the credentials a new account would receive.
#[derive(Debug, Serialize)]
pub struct CredentialsPreview {
    /// Login name.
    pub username: String,
    /// Secret.
    pub password: String,
}

impl From<Credentials> for CredentialsPreview {
    fn from(c: Credentials) -> Self {
        Self {
            username: c.username,
            password: c.password,
        }
    }
}

/// Runs the credentials command.
///
/// Usernames already present in the document at `path` count as taken.
pub fn run(
    path: Option<&Path>,
    config: &StoreConfig,
    first: &str,
    last: &str,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = match path {
        Some(path) => super::load(path, config)?.0,
        None => TypedStore::new(),
    };
    let preview = preview(&store, first, last);

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&preview)?),
        _ => {
            println!("Username: {}", preview.username);
            println!("Password: {}", preview.password);
        }
    }

    Ok(())
}

fn preview(store: &TypedStore, first: &str, last: &str) -> CredentialsPreview {
    credentials::issue(first, last, |candidate| store.exists_by_username(candidate)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gymstore_core::{EntityId, Trainer};

    #[test]
    fn preview_skips_taken_names() {
        let store = TypedStore::new();
        let mut trainer = Trainer::new("Mike", "Ross", "Yoga");
        trainer.profile.username = Some("Mike.Ross".into());
        store.put(EntityId::new(1), trainer);

        let preview = preview(&store, "Mike", "Ross");
        assert_eq!(preview.username, "Mike.Ross1");
        assert_eq!(preview.password.len(), credentials::SECRET_LENGTH);
    }
}
