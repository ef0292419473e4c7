//! The generic async-resource container and the helpers every slice shares.

mod async_resource;
mod decode;
mod entity;
mod envelope;
mod phase;

pub use async_resource::AsyncResource;
pub use decode::{decode_object, decode_sequence, sequence_or_empty, DecodeError};
pub use entity::{find_by_id, remove_by_id, replace_by_id, upsert_by_id, Entity};
pub use envelope::unwrap_envelope;
pub use phase::AsyncPhase;
