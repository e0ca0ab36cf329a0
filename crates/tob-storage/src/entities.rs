//! Storage-side projections of learning content.
//!
//! Each `Tb*` struct mirrors the properties of one Datastore entity kind (or
//! of an entity embedded in a node). Property names and index exclusions live
//! in [`crate::wire`]; these structs only hold the values.

use tob_core::enums::NodeType;

/// Root entity of an SDK's learning path.
pub const TB_LEARNING_PATH_KIND: &str = "pg_learning_paths";
/// A module under a learning path.
pub const TB_LEARNING_MODULE_KIND: &str = "pg_learning_modules";
/// A group or unit node under a module or a group.
pub const TB_LEARNING_NODE_KIND: &str = "pg_learning_nodes";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TbLearningPath {
    pub title: String,
}

/// Module entity with its position among the path's modules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TbLearningModule {
    pub id: String,
    pub title: String,
    pub complexity: String,
    pub order: i64,
}

/// Node entity: common summary fields plus the payload selected by
/// `node_type`.
///
/// `id` and `title` are duplicated out of the payload so that projection
/// queries can return them without the embedded entity. `unit` and `group`
/// are `None` in such projections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TbLearningNode {
    pub id: String,
    pub title: String,
    pub node_type: NodeType,
    pub order: i64,
    pub level: i64,
    pub unit: Option<TbLearningUnit>,
    pub group: Option<TbLearningGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TbLearningGroup {
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TbLearningUnit {
    pub id: String,
    pub title: String,
    pub description: String,
    pub hints: Vec<String>,
    pub task_snippet_id: String,
    pub solution_snippet_id: String,
}

/// Any top-level record this crate persists, tagged by entity kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Path(TbLearningPath),
    Module(TbLearningModule),
    Node(TbLearningNode),
}

impl Record {
    /// Datastore kind the record is stored under.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Path(_) => TB_LEARNING_PATH_KIND,
            Self::Module(_) => TB_LEARNING_MODULE_KIND,
            Self::Node(_) => TB_LEARNING_NODE_KIND,
        }
    }
}
