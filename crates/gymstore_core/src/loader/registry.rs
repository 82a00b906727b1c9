//! Namespace → decoder table used by the bulk loader.

use crate::entity::{EntityId, Record};
use crate::error::DecodeError;
use crate::store::TypedStore;
use crate::types::Namespace;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Decodes one entry body and stores the record under the given id.
type Decoder = fn(&TypedStore, EntityId, &Value, bool) -> Result<(), DecodeError>;

/// Explicit table of the record types a document may contain.
///
/// Each registered type is decoded with its `Deserialize` implementation.
/// Namespaces without a decoder are reported as unknown by the loader.
#[derive(Clone, Default)]
pub struct DecoderRegistry {
    decoders: HashMap<Namespace, Decoder>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its namespace, replacing any earlier decoder.
    pub fn register<T: Record>(&mut self) -> &mut Self {
        self.decoders.insert(T::namespace(), insert::<T>);
        self
    }

    /// Returns true if a decoder is registered for `namespace`.
    pub fn contains(&self, namespace: &str) -> bool {
        self.decoders.contains_key(namespace)
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Returns the registered namespaces, sorted by name.
    pub fn namespaces(&self) -> Vec<Namespace> {
        let mut names: Vec<_> = self.decoders.keys().cloned().collect();
        names.sort();
        names
    }

    /// Decodes `body` with the decoder of `namespace` and stores the result.
    ///
    /// With `strict` set, a body carrying fields the type does not declare is
    /// rejected. Returns `None` if no decoder is registered for `namespace`.
    pub(crate) fn decode_into(
        &self,
        store: &TypedStore,
        namespace: &Namespace,
        id: EntityId,
        body: &Value,
        strict: bool,
    ) -> Option<Result<(), DecodeError>> {
        self.decoders
            .get(namespace)
            .map(|decode| decode(store, id, body, strict))
    }
}

impl std::fmt::Debug for DecoderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderRegistry")
            .field("namespaces", &self.namespaces())
            .finish()
    }
}

fn insert<T: Record>(
    store: &TypedStore,
    id: EntityId,
    body: &Value,
    strict: bool,
) -> Result<(), DecodeError> {
    let mut record = T::deserialize(body)?;
    if strict {
        if let Some(field) = record.unknown_fields().into_iter().next() {
            return Err(DecodeError::UnknownField(field));
        }
    }

    match record.entity_id() {
        Some(body_id) if body_id != id => {
            return Err(DecodeError::IdMismatch { body: body_id, key: id });
        }
        Some(_) => {}
        None => record.assign_id(id),
    }

    store.put(id, record);
    store.initialize_id_counter(&T::namespace(), id);
    Ok(())
}
