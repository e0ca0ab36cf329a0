//! # tob-core
//!
//! Learning-content domain model for the Tour of Beam backend.
//!
//! This crate provides the types shared by the storage adapter and the CLI:
//! - The closed `Sdk` set and the `NodeType` discriminant
//! - Entity structs for learning content (modules, groups, units, nodes)
//! - `ContentTree`, a whole learning path for one SDK
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
