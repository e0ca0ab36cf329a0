//! Flattening a content tree into keyed records.
//!
//! The upload job persists a whole learning path in one commit. This module
//! computes what that commit contains: one root path entity, one entity per
//! module, and one node entity per group or unit, each under the key of its
//! parent. The plan is a pure value; sending it is the client's job.

use std::collections::HashSet;

use tob_core::entities::{ContentTree, Node};
use tob_core::enums::Sdk;

use crate::adapter::{make_datastore_module, make_datastore_path, make_node};
use crate::entities::{Record, TB_LEARNING_MODULE_KIND, TB_LEARNING_NODE_KIND};
use crate::error::StorageError;
use crate::keys::{Key, datastore_key, learning_path_key};
use crate::wire::{Mutation, Partition, encode_entity};

/// A record together with the key it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedEntity {
    pub key: Key,
    pub record: Record,
}

struct Planner {
    sdk: Sdk,
    entities: Vec<PlannedEntity>,
    seen: HashSet<Key>,
}

impl Planner {
    fn push(&mut self, key: Key, record: Record) -> Result<(), StorageError> {
        if !self.seen.insert(key.clone()) {
            return Err(StorageError::DuplicateKey(key.to_string()));
        }
        self.entities.push(PlannedEntity { key, record });
        Ok(())
    }

    fn push_nodes(&mut self, nodes: &[Node], level: i64, parent: &Key) -> Result<(), StorageError> {
        for (order, node) in (0_i64..).zip(nodes) {
            let key = datastore_key(TB_LEARNING_NODE_KIND, self.sdk, node.id(), Some(parent));
            self.push(key.clone(), Record::Node(make_node(node, order, level)))?;
            if let Node::Group(group) = node {
                self.push_nodes(&group.nodes, level + 1, &key)?;
            }
        }
        Ok(())
    }
}

/// Compute every entity needed to store `tree`, parents before children.
///
/// Modules are ordered by their position in the tree. Nodes directly under
/// a module are at level 0; a group's children are one level deeper than
/// the group.
///
/// # Errors
///
/// Returns `StorageError::DuplicateKey` if two siblings share an id (for
/// groups, a title), or two modules share an id.
pub fn plan_content_tree(tree: &ContentTree) -> Result<Vec<PlannedEntity>, StorageError> {
    let mut planner = Planner {
        sdk: tree.sdk,
        entities: Vec::new(),
        seen: HashSet::new(),
    };

    let root = learning_path_key(tree.sdk);
    planner.push(root.clone(), Record::Path(make_datastore_path(tree.sdk)))?;

    for (order, module) in (0_i64..).zip(&tree.modules) {
        let module_key = datastore_key(TB_LEARNING_MODULE_KIND, tree.sdk, &module.id, Some(&root));
        planner.push(
            module_key.clone(),
            Record::Module(make_datastore_module(module, order)),
        )?;
        planner.push_nodes(&module.nodes, 0, &module_key)?;
    }

    tracing::debug!(
        sdk = %tree.sdk,
        modules = tree.modules.len(),
        entities = planner.entities.len(),
        "planned content tree"
    );
    Ok(planner.entities)
}

/// Turn a plan into `commit` upserts within `partition`.
#[must_use]
pub fn into_mutations(plan: &[PlannedEntity], partition: &Partition) -> Vec<Mutation> {
    plan.iter()
        .map(|entity| Mutation::Upsert(encode_entity(&entity.key, &entity.record, partition)))
        .collect()
}
