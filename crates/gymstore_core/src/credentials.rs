//! Username and password generation for new accounts.
//!
//! Both functions are pure apart from the randomness of the secret: the
//! caller decides what "taken" means by passing an existence oracle,
//! usually [`Repository::exists_by_username`](crate::Repository::exists_by_username).

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

/// Length of generated passwords.
pub const SECRET_LENGTH: usize = 10;

/// A freshly issued username and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Collision-free login name.
    pub username: String,
    /// Random secret.
    pub password: String,
}

/// Derives a username `first.last` that `exists` does not report as taken.
///
/// When the base name is taken, numeric suffixes `1`, `2`, … are tried in
/// order and the first free one is returned.
///
/// The check and the later save are not atomic; two concurrent callers can
/// receive the same name.
///
/// ```rust
/// use gymstore_core::credentials::assign_display_name;
///
/// let taken = ["John.Doe", "John.Doe1"];
/// let name = assign_display_name("John", "Doe", |c| taken.contains(&c));
/// assert_eq!(name, "John.Doe2");
/// ```
pub fn assign_display_name(first: &str, last: &str, exists: impl Fn(&str) -> bool) -> String {
    let base = format!("{first}.{last}");
    if !exists(&base) {
        return base;
    }

    (1u64..)
        .map(|suffix| format!("{base}{suffix}"))
        .find(|candidate| !exists(candidate))
        .unwrap_or(base)
}

/// Returns a [`SECRET_LENGTH`]-character password drawn uniformly from
/// `[A-Za-z0-9]` with the operating system's random source.
pub fn assign_secret() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(SECRET_LENGTH)
        .map(char::from)
        .collect()
}

/// Issues a username and a password for `first last`.
pub fn issue(first: &str, last: &str, exists: impl Fn(&str) -> bool) -> Credentials {
    Credentials {
        username: assign_display_name(first, last, exists),
        password: assign_secret(),
    }
}
