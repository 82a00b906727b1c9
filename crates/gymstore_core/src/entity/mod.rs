//! Entity identity and capabilities.

mod id;
mod traits;

pub use id::{EntityId, ParseEntityIdError};
pub use traits::{Account, Entity, Record};
