//! # tob-storage
//!
//! Cloud Datastore mapping for Tour of Beam learning content.
//!
//! Translates the `tob-core` domain model into Datastore entity shapes and
//! keys, and back:
//! - [`keys`]: deterministic name keys in the `Playground` namespace
//! - [`entities`]: the `Tb*` projections stored per kind
//! - [`adapter`]: domain <-> projection mappers, including the tagged node
//!   decode and the partial-projection fallbacks
//! - [`wire`]: the Datastore v1 REST JSON form of keys and entities
//! - [`plan`] / [`assemble`]: a whole learning path to keyed records and back
//!
//! Nothing here performs I/O. Reading and writing the store is left to the
//! Datastore client that consumes these values.

pub mod adapter;
pub mod assemble;
pub mod entities;
pub mod error;
pub mod helpers;
pub mod keys;
pub mod plan;
pub mod wire;

#[cfg(test)]
mod test_support;

pub use error::StorageError;
pub use keys::{Key, PG_NAMESPACE};
