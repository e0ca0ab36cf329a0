//! Property-to-field parsing helpers.
//!
//! Every `DatastoreEntity` impl needs to read typed fields out of a property
//! map that may be partial: projection queries return only the projected
//! properties. These helpers isolate the lookups, the zero-value defaults,
//! and the REST API's decimal-string encoding of integers.

use tob_core::enums::NodeType;

use crate::error::StorageError;
use crate::wire::{Properties, Value};

fn wrong_type(name: &str, expected: &'static str) -> StorageError {
    StorageError::PropertyType {
        property: name.to_string(),
        expected,
    }
}

/// Look up a property, treating an explicit `nullValue` as absent.
fn lookup<'a>(properties: &'a Properties, name: &str) -> Option<&'a Value> {
    properties
        .get(name)
        .map(|p| &p.value)
        .filter(|value| !matches!(value, Value::NullValue(())))
}

/// Read a string property. Absent or null reads as `""`.
///
/// # Errors
///
/// Returns `StorageError::PropertyType` if the value is not a string.
pub fn get_string(properties: &Properties, name: &str) -> Result<String, StorageError> {
    match lookup(properties, name) {
        None => Ok(String::new()),
        Some(Value::StringValue(s)) => Ok(s.clone()),
        Some(_) => Err(wrong_type(name, "string")),
    }
}

fn parse_integer(name: &str, value: &Value) -> Result<i64, StorageError> {
    match value {
        Value::IntegerValue(s) => s
            .parse()
            .map_err(|_| wrong_type(name, "integer encoded as a decimal string")),
        _ => Err(wrong_type(name, "integer")),
    }
}

/// Read an integer property. Absent or null reads as `0`.
///
/// # Errors
///
/// Returns `StorageError::PropertyType` if the value is not an integer.
pub fn get_integer(properties: &Properties, name: &str) -> Result<i64, StorageError> {
    lookup(properties, name).map_or(Ok(0), |value| parse_integer(name, value))
}

/// Read an integer property that has no meaningful default.
///
/// # Errors
///
/// Returns `StorageError::MissingProperty` if the property is absent, or
/// `StorageError::PropertyType` if it is not an integer.
pub fn require_integer(
    properties: &Properties,
    entity: &'static str,
    name: &'static str,
) -> Result<i64, StorageError> {
    let value = lookup(properties, name).ok_or(StorageError::MissingProperty {
        entity,
        property: name,
    })?;
    parse_integer(name, value)
}

/// Read an array of strings. Absent or null reads as an empty list.
///
/// # Errors
///
/// Returns `StorageError::PropertyType` if the value is not an array or an
/// element is not a string.
pub fn get_string_array(properties: &Properties, name: &str) -> Result<Vec<String>, StorageError> {
    match lookup(properties, name) {
        None => Ok(Vec::new()),
        Some(Value::ArrayValue(array)) => array
            .values
            .iter()
            .map(|element| match &element.value {
                Value::StringValue(s) => Ok(s.clone()),
                _ => Err(wrong_type(name, "array of strings")),
            })
            .collect(),
        Some(_) => Err(wrong_type(name, "array")),
    }
}

/// Read an embedded entity's properties. Absent or null reads as `None`.
///
/// # Errors
///
/// Returns `StorageError::PropertyType` if the value is not an entity.
pub fn get_entity<'a>(
    properties: &'a Properties,
    name: &str,
) -> Result<Option<&'a Properties>, StorageError> {
    match lookup(properties, name) {
        None => Ok(None),
        Some(Value::EntityValue(entity)) => Ok(Some(&entity.properties)),
        Some(_) => Err(wrong_type(name, "entity")),
    }
}

/// Parse a stored node-type code.
///
/// # Errors
///
/// Returns `StorageError::Core` wrapping `CoreError::UnknownNodeType` for
/// any code other than the unit and group codes.
pub fn parse_node_type(code: i64) -> Result<NodeType, StorageError> {
    Ok(NodeType::try_from(code)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn props(value: serde_json::Value) -> Properties {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn absent_and_null_read_as_zero_values() {
        let p = props(json!({ "title": { "nullValue": null } }));
        assert_eq!(get_string(&p, "title").unwrap(), "");
        assert_eq!(get_string(&p, "missing").unwrap(), "");
        assert_eq!(get_integer(&p, "order").unwrap(), 0);
        assert!(get_string_array(&p, "hints").unwrap().is_empty());
        assert!(get_entity(&p, "unit").unwrap().is_none());
    }

    #[test]
    fn integers_parse_from_decimal_strings() {
        let p = props(json!({ "order": { "integerValue": "-42" } }));
        assert_eq!(get_integer(&p, "order").unwrap(), -42);
        assert_eq!(require_integer(&p, "TbLearningNode", "order").unwrap(), -42);
    }

    #[test]
    fn malformed_integer_is_a_type_error() {
        let p = props(json!({ "order": { "integerValue": "forty" } }));
        assert!(matches!(
            get_integer(&p, "order"),
            Err(StorageError::PropertyType { ref property, .. }) if property == "order"
        ));
    }

    #[test]
    fn wrong_value_types_are_rejected() {
        let p = props(json!({
            "title": { "integerValue": "1" },
            "order": { "stringValue": "1" },
            "hints": { "arrayValue": { "values": [{ "booleanValue": true }] } },
            "unit": { "stringValue": "not an entity" }
        }));
        assert!(get_string(&p, "title").is_err());
        assert!(get_integer(&p, "order").is_err());
        assert!(get_string_array(&p, "hints").is_err());
        assert!(get_entity(&p, "unit").is_err());
    }

    #[test]
    fn require_integer_reports_missing_property() {
        let p = Properties::new();
        assert!(matches!(
            require_integer(&p, "TbLearningNode", "type"),
            Err(StorageError::MissingProperty {
                entity: "TbLearningNode",
                property: "type"
            })
        ));
    }

    #[test]
    fn parse_node_type_wraps_core_error() {
        assert_eq!(parse_node_type(2).unwrap(), NodeType::Group);
        assert!(matches!(parse_node_type(0), Err(StorageError::Core(_))));
    }
}
