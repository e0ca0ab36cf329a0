//! Conversions between domain entities and their Datastore projections.
//!
//! Forward mappers stamp the caller-supplied position (`order` among
//! siblings, nesting `level`) onto the projection. Reverse mappers accept
//! either a full entity or only the summary fields a projection query
//! returns, and rebuild as much of the domain value as is available.

use tob_core::entities::{Group, Module, Node, Unit};
use tob_core::enums::{NodeType, Sdk};

use crate::entities::{
    TbLearningGroup, TbLearningModule, TbLearningNode, TbLearningPath, TbLearningUnit,
};

/// Project a unit into a node entity. `None` in, `None` out.
#[must_use]
pub fn make_unit_node(unit: Option<&Unit>, order: i64, level: i64) -> Option<TbLearningNode> {
    unit.map(|unit| unit_node(unit, order, level))
}

fn unit_node(unit: &Unit, order: i64, level: i64) -> TbLearningNode {
    TbLearningNode {
        id: unit.id.clone(),
        title: unit.title.clone(),

        node_type: NodeType::Unit,
        order,
        level,

        unit: Some(TbLearningUnit {
            id: unit.id.clone(),
            title: unit.title.clone(),

            description: unit.description.clone(),
            hints: unit.hints.clone(),
            task_snippet_id: unit.task_snippet_id.clone(),
            solution_snippet_id: unit.solution_snippet_id.clone(),
        }),
        group: None,
    }
}

/// Project a group heading into a node entity. `None` in, `None` out.
///
/// The node id is the group title, so that group nodes show up in
/// id-ordered queries next to units. Child nodes are not included; they are
/// separate entities keyed under this one.
#[must_use]
pub fn make_group_node(group: Option<&Group>, order: i64, level: i64) -> Option<TbLearningNode> {
    group.map(|group| group_node(group, order, level))
}

fn group_node(group: &Group, order: i64, level: i64) -> TbLearningNode {
    TbLearningNode {
        id: group.title.clone(),
        title: group.title.clone(),

        node_type: NodeType::Group,
        order,
        level,

        unit: None,
        group: Some(TbLearningGroup {
            title: group.title.clone(),
        }),
    }
}

/// Project either kind of node.
#[must_use]
pub fn make_node(node: &Node, order: i64, level: i64) -> TbLearningNode {
    match node {
        Node::Unit(unit) => unit_node(unit, order, level),
        Node::Group(group) => group_node(group, order, level),
    }
}

/// Rebuild a unit from its entity, or from the node summary fields when a
/// projection left the entity out.
#[must_use]
pub fn from_datastore_unit(tb_unit: Option<&TbLearningUnit>, id: &str, title: &str) -> Unit {
    let Some(tb_unit) = tb_unit else {
        return Unit {
            id: id.to_string(),
            title: title.to_string(),
            ..Unit::default()
        };
    };
    Unit {
        id: tb_unit.id.clone(),
        title: tb_unit.title.clone(),
        description: tb_unit.description.clone(),
        hints: tb_unit.hints.clone(),
        task_snippet_id: tb_unit.task_snippet_id.clone(),
        solution_snippet_id: tb_unit.solution_snippet_id.clone(),
    }
}

/// Rebuild a group heading, falling back to the node title. Children are
/// left empty.
#[must_use]
pub fn from_datastore_group(tb_group: Option<&TbLearningGroup>, title: &str) -> Group {
    let title = tb_group.map_or(title, |g| g.title.as_str());
    Group {
        title: title.to_string(),
        nodes: Vec::new(),
    }
}

/// Decode a node entity into the domain node selected by its type.
///
/// Only the payload matching `node_type` is read; a stray payload of the
/// other kind is ignored.
#[must_use]
pub fn from_datastore_node(tb_node: &TbLearningNode) -> Node {
    match tb_node.node_type {
        NodeType::Group => Node::Group(from_datastore_group(
            tb_node.group.as_ref(),
            &tb_node.title,
        )),
        NodeType::Unit => Node::Unit(from_datastore_unit(
            tb_node.unit.as_ref(),
            &tb_node.id,
            &tb_node.title,
        )),
    }
}

/// Project a module with its position among the path's modules.
#[must_use]
pub fn make_datastore_module(module: &Module, order: i64) -> TbLearningModule {
    TbLearningModule {
        id: module.id.clone(),
        title: module.title.clone(),
        complexity: module.complexity.clone(),

        order,
    }
}

/// Rebuild a module without its nodes.
#[must_use]
pub fn from_datastore_module(tb_module: &TbLearningModule) -> Module {
    Module {
        id: tb_module.id.clone(),
        title: tb_module.title.clone(),
        complexity: tb_module.complexity.clone(),
        nodes: Vec::new(),
    }
}

#[must_use]
pub fn make_datastore_path(sdk: Sdk) -> TbLearningPath {
    TbLearningPath {
        title: sdk.title().to_string(),
    }
}
