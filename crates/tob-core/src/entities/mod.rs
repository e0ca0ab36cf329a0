//! Entity structs for learning content.
//!
//! A learning path (`ContentTree`) holds modules; a module holds a tree of
//! nodes, where each node is either a `Group` heading or a `Unit` exercise.
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation.

mod group;
mod module;
mod node;
mod tree;
mod unit;

pub use group::Group;
pub use module::Module;
pub use node::Node;
pub use tree::ContentTree;
pub use unit::Unit;
