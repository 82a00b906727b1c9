//! Capability traits for records kept in the store.

use crate::entity::EntityId;
use crate::types::Namespace;
use serde::de::DeserializeOwned;

/// Trait for types that can be stored as records in a [`TypedStore`].
///
/// Implementors must provide:
/// - `NAMESPACE`: the lower-case namespace all records of the type share
/// - `TYPE_NAME`: the display name used in errors and logs
/// - `entity_id()` / `assign_id()`: access to the identifier field
///
/// # Example
///
/// ```rust
/// use gymstore_core::{Entity, EntityId};
///
/// #[derive(Clone)]
/// struct Room {
///     id: Option<EntityId>,
///     name: String,
/// }
///
/// impl Entity for Room {
///     const NAMESPACE: &'static str = "room";
///     const TYPE_NAME: &'static str = "Room";
///
///     fn entity_id(&self) -> Option<EntityId> {
///         self.id
///     }
///
///     fn assign_id(&mut self, id: EntityId) {
///         self.id.get_or_insert(id);
///     }
/// }
/// ```
///
/// [`TypedStore`]: crate::TypedStore
pub trait Entity: Clone + Send + Sync + 'static {
    /// Namespace of this record type. Must be lower-case.
    const NAMESPACE: &'static str;

    /// Display name of this record type, e.g. `Trainee`.
    const TYPE_NAME: &'static str;

    /// Returns the record's identifier, or `None` before the first save.
    fn entity_id(&self) -> Option<EntityId>;

    /// Sets the identifier of a record that does not have one yet.
    ///
    /// Once set, an identifier must not change; implementations ignore calls
    /// on a record that already has one.
    fn assign_id(&mut self, id: EntityId);

    /// Returns the identity capability if this record type is identity-bearing.
    ///
    /// Only records returning `Some` take part in username uniqueness checks.
    fn account(&self) -> Option<&dyn Account> {
        None
    }

    /// Returns the namespace of this record type.
    fn namespace() -> Namespace {
        Namespace::from_static(Self::NAMESPACE)
    }
}

/// Capability of identity-bearing records: they expose a username.
pub trait Account {
    /// Returns the username, or `None` if none has been assigned yet.
    fn username(&self) -> Option<&str>;
}

/// Records that can be loaded from a bulk-load document entry.
///
/// Entries are decoded through the type's `Deserialize` implementation.
/// Fields the type does not declare are kept aside during decoding so that a
/// strict load can reject the entry afterwards.
pub trait Record: Entity + DeserializeOwned {
    /// Returns the names of undeclared fields the entry carried, including
    /// those of nested records as `outer.inner`.
    fn unknown_fields(&self) -> Vec<String>;
}
