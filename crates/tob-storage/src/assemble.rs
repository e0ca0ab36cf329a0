//! Rebuilding a content tree from stored records.
//!
//! The inverse of [`crate::plan`]: given the records of one learning path
//! (as fetched by an ancestor query over the path's root key), nest nodes
//! under their parent keys and order siblings by their stored `order`.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tob_core::entities::{ContentTree, Module, Node};
use tob_core::enums::{NodeType, Sdk};

use crate::adapter::{from_datastore_module, from_datastore_node};
use crate::entities::{Record, TB_LEARNING_PATH_KIND, TbLearningModule, TbLearningNode};
use crate::error::StorageError;
use crate::keys::{Key, key_to_sdk};

type ChildMap = HashMap<Key, Vec<(Key, TbLearningNode)>>;

/// Assemble the tree of the single learning path among `records`.
///
/// Records may arrive in any order, and an identical record may appear more
/// than once. Nodes decode through [`from_datastore_node`], so projected
/// records (no embedded payload) yield summary-only units and groups.
/// Modules not under the root and nodes whose parent is absent are logged
/// and skipped.
///
/// # Errors
///
/// Returns `StorageError::MissingRoot` if no path record is present,
/// `StorageError::DuplicateKey` if one key carries two different records,
/// `StorageError::InvalidKey` for two different roots, a parentless node, or
/// a node keyed under the root or under a unit, and
/// `StorageError::UnknownSdkTag` if the root key is not an SDK tag.
pub fn assemble_content_tree(
    records: impl IntoIterator<Item = (Key, Record)>,
) -> Result<ContentTree, StorageError> {
    let mut by_key: HashMap<Key, Record> = HashMap::new();
    for (key, record) in records {
        match by_key.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(record);
            }
            Entry::Occupied(existing) if *existing.get() == record => {
                tracing::debug!(key = %existing.key(), "ignoring repeated record");
            }
            Entry::Occupied(existing) => {
                return Err(StorageError::DuplicateKey(existing.key().to_string()));
            }
        }
    }

    let mut root: Option<(Key, Sdk)> = None;
    let mut modules: Vec<(Key, TbLearningModule)> = Vec::new();
    let mut children = ChildMap::new();
    let mut node_types: HashMap<Key, NodeType> = HashMap::new();

    for (key, record) in by_key {
        match record {
            Record::Path(_) => {
                if let Some((existing, _)) = &root {
                    return Err(StorageError::InvalidKey(format!(
                        "more than one learning path root: {existing} and {key}"
                    )));
                }
                let sdk = key_to_sdk(key.name())?;
                root = Some((key, sdk));
            }
            Record::Module(module) => modules.push((key, module)),
            Record::Node(node) => {
                let parent = key
                    .parent()
                    .cloned()
                    .ok_or_else(|| StorageError::InvalidKey(format!("node {key} has no parent")))?;
                node_types.insert(key.clone(), node.node_type);
                children.entry(parent).or_default().push((key, node));
            }
        }
    }

    let (root_key, sdk) = root.ok_or(StorageError::MissingRoot)?;

    modules.retain(|(key, _)| {
        let under_root = key.parent() == Some(&root_key);
        if !under_root {
            tracing::warn!(%key, root = %root_key, "skipping module outside the learning path");
        }
        under_root
    });
    modules.sort_by_key(|(_, module)| module.order);

    let modules: Vec<Module> = modules
        .into_iter()
        .map(|(key, tb_module)| Module {
            nodes: take_children(&mut children, &key),
            ..from_datastore_module(&tb_module)
        })
        .collect();

    for (parent, nodes) in &children {
        let under_leaf = parent.kind() == TB_LEARNING_PATH_KIND
            || node_types.get(parent) == Some(&NodeType::Unit);
        if under_leaf {
            let (key, _) = &nodes[0];
            return Err(StorageError::InvalidKey(format!(
                "node {key} is keyed under {parent}, which is not a module or group"
            )));
        }
        tracing::warn!(%parent, count = nodes.len(), "skipping nodes whose parent is missing");
    }

    tracing::debug!(%sdk, modules = modules.len(), "assembled content tree");
    Ok(ContentTree { sdk, modules })
}

fn take_children(children: &mut ChildMap, parent: &Key) -> Vec<Node> {
    let Some(mut nodes) = children.remove(parent) else {
        return Vec::new();
    };
    nodes.sort_by_key(|(_, node)| node.order);
    nodes
        .into_iter()
        .map(|(key, tb_node)| {
            let mut node = from_datastore_node(&tb_node);
            if let Node::Group(group) = &mut node {
                group.nodes = take_children(children, &key);
            }
            node
        })
        .collect()
}
