//! Common types

use uuid::Uuid;

/// Opaque identifier assigned by the store on first save.
pub type EntityId = String;

pub fn new_id() -> EntityId {
    Uuid::new_v4().to_string()
}
