//! Datastore v1 REST representation of keys and entities.
//!
//! The shapes here serialize to the JSON that the Datastore `commit`,
//! `lookup` and `runQuery` endpoints exchange:
//!
//! ```json
//! {
//!   "key": {
//!     "partitionId": { "projectId": "my-project", "namespaceId": "Playground" },
//!     "path": [{ "kind": "pg_learning_paths", "name": "SDK_GO" }]
//!   },
//!   "properties": { "title": { "stringValue": "Go" } }
//! }
//! ```
//!
//! The [`DatastoreEntity`] impls fix property names and index exclusions for
//! every `Tb*` record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::{
    Record, TB_LEARNING_MODULE_KIND, TB_LEARNING_NODE_KIND, TB_LEARNING_PATH_KIND,
    TbLearningGroup, TbLearningModule, TbLearningNode, TbLearningPath, TbLearningUnit,
};
use crate::error::StorageError;
use crate::helpers::{
    get_entity, get_integer, get_string, get_string_array, parse_node_type, require_integer,
};
use crate::keys::{Key, PG_NAMESPACE};

/// Property map of an entity, ordered by name for stable output.
pub type Properties = BTreeMap<String, PropertyValue>;

// ---------------------------------------------------------------------------
// Keys
// ---------------------------------------------------------------------------

/// Project and database a key is written to. The namespace is always
/// [`PG_NAMESPACE`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    pub project_id: String,
    /// Empty selects the project's default database.
    pub database_id: String,
}

impl Partition {
    #[must_use]
    pub fn new(project_id: impl Into<String>, database_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            database_id: database_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionId {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub database_id: String,
    #[serde(default)]
    pub namespace_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathElement {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Auto-allocated numeric id (int64 as a decimal string). Never produced
    /// here and rejected on decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireKey {
    #[serde(default)]
    pub partition_id: PartitionId,
    pub path: Vec<PathElement>,
}

impl Key {
    /// Express the key in REST form within `partition`.
    #[must_use]
    pub fn to_wire(&self, partition: &Partition) -> WireKey {
        WireKey {
            partition_id: PartitionId {
                project_id: partition.project_id.clone(),
                database_id: partition.database_id.clone(),
                namespace_id: self.namespace().to_string(),
            },
            path: self
                .path()
                .into_iter()
                .map(|(kind, name)| PathElement {
                    kind: kind.to_string(),
                    name: Some(name.to_string()),
                    id: None,
                })
                .collect(),
        }
    }

    /// Rebuild a key from its REST form. Project and database are dropped.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::InvalidKey` for an empty path or a path element
    /// without a name.
    pub fn from_wire(wire: &WireKey) -> Result<Self, StorageError> {
        if wire.path.is_empty() {
            return Err(StorageError::InvalidKey("key path is empty".into()));
        }
        let namespace = &wire.partition_id.namespace_id;
        let mut key: Option<Self> = None;
        for element in &wire.path {
            let Some(name) = &element.name else {
                return Err(StorageError::InvalidKey(format!(
                    "path element of kind '{}' has no name (id: {:?})",
                    element.kind, element.id
                )));
            };
            key = Some(Self::from_parts(
                element.kind.clone(),
                name.clone(),
                namespace.clone(),
                key,
            ));
        }
        key.ok_or_else(|| StorageError::InvalidKey("key path is empty".into()))
    }
}

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A typed property value. Serialized externally tagged, e.g.
/// `{"integerValue": "3"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    /// int64 as a decimal string, as the REST API encodes it.
    IntegerValue(String),
    StringValue(String),
    EntityValue(WireEntity),
    ArrayValue(ArrayValue),
}

impl Value {
    #[must_use]
    pub fn string(s: impl Into<String>) -> Self {
        Self::StringValue(s.into())
    }

    #[must_use]
    pub fn integer(n: i64) -> Self {
        Self::IntegerValue(n.to_string())
    }

    #[must_use]
    pub fn entity(properties: Properties) -> Self {
        Self::EntityValue(WireEntity {
            key: None,
            properties,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(default)]
    pub values: Vec<PropertyValue>,
}

/// A value plus its index flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyValue {
    #[serde(flatten)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exclude_from_indexes: bool,
}

impl PropertyValue {
    #[must_use]
    pub const fn indexed(value: Value) -> Self {
        Self {
            value,
            exclude_from_indexes: false,
        }
    }

    #[must_use]
    pub const fn unindexed(value: Value) -> Self {
        Self {
            value,
            exclude_from_indexes: true,
        }
    }

    /// An array whose elements are all excluded from indexes.
    ///
    /// The flag goes on each element; Datastore rejects it on the array
    /// value itself.
    #[must_use]
    pub fn unindexed_array(values: impl IntoIterator<Item = Value>) -> Self {
        Self::indexed(Value::ArrayValue(ArrayValue {
            values: values.into_iter().map(Self::unindexed).collect(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Entities and mutations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEntity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<WireKey>,
    #[serde(default)]
    pub properties: Properties,
}

/// One element of a `commit` request's `mutations` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    Upsert(WireEntity),
}

impl Mutation {
    #[must_use]
    pub const fn entity(&self) -> &WireEntity {
        match self {
            Self::Upsert(entity) => entity,
        }
    }
}

/// A record type with a fixed property layout.
pub trait DatastoreEntity: Sized {
    /// Record name used in decode errors.
    const NAME: &'static str;

    fn to_properties(&self) -> Properties;

    /// Decode from properties. Absent scalar properties decode to their zero
    /// value, matching what a projection query leaves out.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if a property has the wrong type or a required
    /// property is missing.
    fn from_properties(properties: &Properties) -> Result<Self, StorageError>;
}

fn prop(name: &str, value: PropertyValue) -> (String, PropertyValue) {
    (name.to_string(), value)
}

impl DatastoreEntity for TbLearningPath {
    const NAME: &'static str = "TbLearningPath";

    fn to_properties(&self) -> Properties {
        Properties::from([prop(
            "title",
            PropertyValue::indexed(Value::string(&self.title)),
        )])
    }

    fn from_properties(properties: &Properties) -> Result<Self, StorageError> {
        Ok(Self {
            title: get_string(properties, "title")?,
        })
    }
}

impl DatastoreEntity for TbLearningModule {
    const NAME: &'static str = "TbLearningModule";

    fn to_properties(&self) -> Properties {
        Properties::from([
            prop("id", PropertyValue::indexed(Value::string(&self.id))),
            prop("title", PropertyValue::indexed(Value::string(&self.title))),
            prop(
                "complexity",
                PropertyValue::indexed(Value::string(&self.complexity)),
            ),
            prop("order", PropertyValue::indexed(Value::integer(self.order))),
        ])
    }

    fn from_properties(properties: &Properties) -> Result<Self, StorageError> {
        Ok(Self {
            id: get_string(properties, "id")?,
            title: get_string(properties, "title")?,
            complexity: get_string(properties, "complexity")?,
            order: get_integer(properties, "order")?,
        })
    }
}

impl DatastoreEntity for TbLearningGroup {
    const NAME: &'static str = "TbLearningGroup";

    fn to_properties(&self) -> Properties {
        Properties::from([prop(
            "title",
            PropertyValue::indexed(Value::string(&self.title)),
        )])
    }

    fn from_properties(properties: &Properties) -> Result<Self, StorageError> {
        Ok(Self {
            title: get_string(properties, "title")?,
        })
    }
}

impl DatastoreEntity for TbLearningUnit {
    const NAME: &'static str = "TbLearningUnit";

    fn to_properties(&self) -> Properties {
        Properties::from([
            prop("id", PropertyValue::indexed(Value::string(&self.id))),
            prop("title", PropertyValue::indexed(Value::string(&self.title))),
            prop(
                "description",
                PropertyValue::unindexed(Value::string(&self.description)),
            ),
            prop(
                "hints",
                PropertyValue::unindexed_array(self.hints.iter().map(Value::string)),
            ),
            prop(
                "taskSnippetId",
                PropertyValue::indexed(Value::string(&self.task_snippet_id)),
            ),
            prop(
                "solutionSnippetId",
                PropertyValue::indexed(Value::string(&self.solution_snippet_id)),
            ),
        ])
    }

    fn from_properties(properties: &Properties) -> Result<Self, StorageError> {
        Ok(Self {
            id: get_string(properties, "id")?,
            title: get_string(properties, "title")?,
            description: get_string(properties, "description")?,
            hints: get_string_array(properties, "hints")?,
            task_snippet_id: get_string(properties, "taskSnippetId")?,
            solution_snippet_id: get_string(properties, "solutionSnippetId")?,
        })
    }
}

impl DatastoreEntity for TbLearningNode {
    const NAME: &'static str = "TbLearningNode";

    fn to_properties(&self) -> Properties {
        let mut properties = Properties::from([
            prop("id", PropertyValue::indexed(Value::string(&self.id))),
            prop("title", PropertyValue::indexed(Value::string(&self.title))),
            prop(
                "type",
                PropertyValue::indexed(Value::integer(self.node_type.code())),
            ),
            prop("order", PropertyValue::indexed(Value::integer(self.order))),
            prop("level", PropertyValue::indexed(Value::integer(self.level))),
        ]);
        if let Some(unit) = &self.unit {
            properties.insert(
                "unit".into(),
                PropertyValue::unindexed(Value::entity(unit.to_properties())),
            );
        }
        if let Some(group) = &self.group {
            properties.insert(
                "group".into(),
                PropertyValue::unindexed(Value::entity(group.to_properties())),
            );
        }
        properties
    }

    fn from_properties(properties: &Properties) -> Result<Self, StorageError> {
        let code = require_integer(properties, Self::NAME, "type")?;
        Ok(Self {
            id: get_string(properties, "id")?,
            title: get_string(properties, "title")?,
            node_type: parse_node_type(code)?,
            order: get_integer(properties, "order")?,
            level: get_integer(properties, "level")?,
            unit: get_entity(properties, "unit")?
                .map(TbLearningUnit::from_properties)
                .transpose()?,
            group: get_entity(properties, "group")?
                .map(TbLearningGroup::from_properties)
                .transpose()?,
        })
    }
}

impl Record {
    #[must_use]
    pub fn to_properties(&self) -> Properties {
        match self {
            Self::Path(path) => path.to_properties(),
            Self::Module(module) => module.to_properties(),
            Self::Node(node) => node.to_properties(),
        }
    }
}

/// Express a keyed record as a REST entity.
#[must_use]
pub fn encode_entity(key: &Key, record: &Record, partition: &Partition) -> WireEntity {
    WireEntity {
        key: Some(key.to_wire(partition)),
        properties: record.to_properties(),
    }
}

/// Decode a REST entity, choosing the record type from its key's kind.
///
/// # Errors
///
/// Returns `StorageError` if the entity has no key, the kind is not one of
/// the learning-content kinds, or a property fails to decode.
pub fn decode_entity(entity: &WireEntity) -> Result<(Key, Record), StorageError> {
    let wire_key = entity
        .key
        .as_ref()
        .ok_or_else(|| StorageError::InvalidKey("entity has no key".into()))?;
    let key = Key::from_wire(wire_key)?;
    if key.namespace() != PG_NAMESPACE {
        tracing::debug!(%key, namespace = key.namespace(), "entity outside the playground namespace");
    }
    let properties = &entity.properties;
    let record = match key.kind() {
        TB_LEARNING_PATH_KIND => Record::Path(TbLearningPath::from_properties(properties)?),
        TB_LEARNING_MODULE_KIND => Record::Module(TbLearningModule::from_properties(properties)?),
        TB_LEARNING_NODE_KIND => Record::Node(TbLearningNode::from_properties(properties)?),
        other => return Err(StorageError::UnknownKind(other.to_string())),
    };
    Ok((key, record))
}

/// Decode every entity, stopping at the first failure.
///
/// # Errors
///
/// Returns the first `StorageError` from [`decode_entity`].
pub fn decode_entities<'a>(
    entities: impl IntoIterator<Item = &'a WireEntity>,
) -> Result<Vec<(Key, Record)>, StorageError> {
    entities.into_iter().map(decode_entity).collect()
}
