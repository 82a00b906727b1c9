//! Profile shared by trainees and trainers.

use serde::{Deserialize, Deserializer};

/// Personal and login data common to every gym member account.
///
/// Trainees and trainers embed a profile instead of inheriting from a shared
/// user type. `username` and `password` stay `None` until credentials are
/// issued.
///
/// In documents the profile fields sit directly in the account entry.
/// Missing or `null` names decode as empty; `active` is accepted for
/// `isActive`, and an account with neither is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Given name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    /// Family name.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    /// Login name, unique across all accounts.
    #[serde(default)]
    pub username: Option<String>,
    /// Login secret.
    #[serde(default)]
    pub password: Option<String>,
    /// Whether the account may be used.
    #[serde(default, rename = "isActive", alias = "active")]
    pub active: bool,
}

impl UserProfile {
    /// Creates an active profile without credentials.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            username: None,
            password: None,
            active: true,
        }
    }

    /// Copies the editable parts of `other` onto this profile.
    ///
    /// Credentials are never touched by an update.
    pub fn update_from(&mut self, other: &UserProfile) {
        self.first_name.clone_from(&other.first_name);
        self.last_name.clone_from(&other.last_name);
        self.active = other.active;
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> serde_json::Result<UserProfile> {
        serde_json::from_str(json)
    }

    #[test]
    fn decodes_all_fields() {
        let profile = decode(
            r#"{"firstName":"John","lastName":"Doe","username":"John.Doe","password":"abc","isActive":true}"#,
        )
        .unwrap();

        assert_eq!(profile.first_name, "John");
        assert_eq!(profile.username.as_deref(), Some("John.Doe"));
        assert_eq!(profile.password.as_deref(), Some("abc"));
        assert!(profile.active);
    }

    #[test]
    fn active_alias() {
        let profile = decode(r#"{"firstName":"A","lastName":"B","active":true}"#).unwrap();
        assert!(profile.active);

        let profile = decode(r#"{"firstName":"A","lastName":"B"}"#).unwrap();
        assert!(!profile.active);
        assert!(profile.username.is_none());
    }

    #[test]
    fn names_may_be_missing_or_null() {
        let profile = decode(r#"{"firstName":"A"}"#).unwrap();
        assert_eq!(profile.first_name, "A");
        assert_eq!(profile.last_name, "");

        let profile = decode(r#"{"firstName":null,"lastName":"B"}"#).unwrap();
        assert_eq!(profile.first_name, "");
        assert_eq!(profile.last_name, "B");
    }

    #[test]
    fn names_must_be_text() {
        assert!(decode(r#"{"firstName":1,"lastName":"B"}"#).is_err());
        assert!(decode(r#"{"firstName":"A","isActive":"yes"}"#).is_err());
    }

    #[test]
    fn update_keeps_credentials() {
        let mut stored = UserProfile::new("John", "Doe");
        stored.username = Some("John.Doe".into());
        stored.password = Some("secret".into());

        let mut edit = UserProfile::new("Johnny", "Doe");
        edit.active = false;
        edit.username = Some("hijack".into());
        stored.update_from(&edit);

        assert_eq!(stored.first_name, "Johnny");
        assert!(!stored.active);
        assert_eq!(stored.username.as_deref(), Some("John.Doe"));
        assert_eq!(stored.password.as_deref(), Some("secret"));
    }
}
