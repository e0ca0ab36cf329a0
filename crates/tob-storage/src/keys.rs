//! Deterministic Datastore key derivation.
//!
//! Every key this crate produces is a name key inside [`PG_NAMESPACE`], and
//! its name is derived only from the SDK and the entity's own identifier:
//!
//! ```text
//! /pg_learning_paths,SDK_JAVA
//! /pg_learning_paths,SDK_JAVA/pg_learning_modules,SDK_JAVA_module-intro
//! /pg_learning_paths,SDK_JAVA/pg_learning_modules,SDK_JAVA_module-intro/pg_learning_nodes,SDK_JAVA_intro-unit
//! ```
//!
//! No randomness and no auto-allocated ids: the same inputs always give the
//! same key.

use std::fmt;

use tob_core::enums::Sdk;

use crate::entities::TB_LEARNING_PATH_KIND;
use crate::error::StorageError;

/// Namespace partition shared by every entity of the playground backend.
pub const PG_NAMESPACE: &str = "Playground";

/// A Datastore name key, optionally nested under a parent key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    kind: String,
    name: String,
    namespace: String,
    parent: Option<Box<Key>>,
}

impl Key {
    pub(crate) fn from_parts(
        kind: String,
        name: String,
        namespace: String,
        parent: Option<Self>,
    ) -> Self {
        Self {
            kind,
            name,
            namespace,
            parent: parent.map(Box::new),
        }
    }

    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }

    /// `(kind, name)` pairs from the root ancestor down to this key.
    #[must_use]
    pub fn path(&self) -> Vec<(&str, &str)> {
        let mut path = Vec::new();
        let mut current = Some(self);
        while let Some(key) = current {
            path.push((key.kind(), key.name()));
            current = key.parent();
        }
        path.reverse();
        path
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, name) in self.path() {
            write!(f, "/{kind},{name}")?;
        }
        Ok(())
    }
}

/// Stable key tag of an SDK.
///
/// Exhaustive over the closed [`Sdk`] set, so there is no "unknown SDK" case.
#[must_use]
pub const fn sdk_to_key(sdk: Sdk) -> &'static str {
    match sdk {
        Sdk::Go => "SDK_GO",
        Sdk::Python => "SDK_PYTHON",
        Sdk::Java => "SDK_JAVA",
        Sdk::Scio => "SDK_SCIO",
    }
}

/// Inverse of [`sdk_to_key`].
///
/// # Errors
///
/// Returns `StorageError::UnknownSdkTag` if `tag` is not one of the four tags.
pub fn key_to_sdk(tag: &str) -> Result<Sdk, StorageError> {
    Sdk::ALL
        .into_iter()
        .find(|sdk| sdk_to_key(*sdk) == tag)
        .ok_or_else(|| StorageError::UnknownSdkTag(tag.to_string()))
}

/// Name key of `kind` inside the playground namespace.
#[must_use]
pub fn pg_name_key(kind: &str, name: &str, parent: Option<&Key>) -> Key {
    Key::from_parts(
        kind.to_string(),
        name.to_string(),
        PG_NAMESPACE.to_string(),
        parent.cloned(),
    )
}

/// Entity key built from an SDK and an entity-local id: `SDK_JAVA_{id}`.
#[must_use]
pub fn datastore_key(kind: &str, sdk: Sdk, id: &str, parent: Option<&Key>) -> Key {
    let name = format!("{}_{id}", sdk_to_key(sdk));
    pg_name_key(kind, &name, parent)
}

/// Root key of an SDK's learning path.
#[must_use]
pub fn learning_path_key(sdk: Sdk) -> Key {
    pg_name_key(TB_LEARNING_PATH_KIND, sdk_to_key(sdk), None)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::entities::{TB_LEARNING_MODULE_KIND, TB_LEARNING_NODE_KIND};

    #[rstest]
    #[case(Sdk::Go, "SDK_GO")]
    #[case(Sdk::Python, "SDK_PYTHON")]
    #[case(Sdk::Java, "SDK_JAVA")]
    #[case(Sdk::Scio, "SDK_SCIO")]
    fn sdk_tags_are_stable(#[case] sdk: Sdk, #[case] tag: &str) {
        assert_eq!(sdk_to_key(sdk), tag);
        assert_eq!(key_to_sdk(tag).unwrap(), sdk);
    }

    #[rstest]
    #[case("")]
    #[case("SDK_RUST")]
    #[case("sdk_go")]
    #[case("SDK_GO_unit")]
    fn unknown_sdk_tags_are_rejected(#[case] tag: &str) {
        let err = key_to_sdk(tag).unwrap_err();
        assert!(matches!(err, StorageError::UnknownSdkTag(ref t) if t == tag));
    }

    #[test]
    fn datastore_key_prefixes_id_with_sdk_tag() {
        let root = learning_path_key(Sdk::Java);
        let key = datastore_key(TB_LEARNING_MODULE_KIND, Sdk::Java, "intro", Some(&root));

        assert_eq!(key.kind(), TB_LEARNING_MODULE_KIND);
        assert_eq!(key.name(), "SDK_JAVA_intro");
        assert_eq!(key.namespace(), PG_NAMESPACE);
        assert_eq!(key.parent(), Some(&root));
    }

    #[test]
    fn learning_path_key_is_a_root_named_by_tag() {
        let key = learning_path_key(Sdk::Scio);
        assert_eq!(key.kind(), TB_LEARNING_PATH_KIND);
        assert_eq!(key.name(), "SDK_SCIO");
        assert!(key.parent().is_none());
    }

    #[test]
    fn keys_are_deterministic() {
        let root = learning_path_key(Sdk::Go);
        let a = datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u1", Some(&root));
        let b = datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u1", Some(&root));
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn varying_any_input_changes_the_key() {
        let root = learning_path_key(Sdk::Go);
        let other_root = learning_path_key(Sdk::Python);
        let base = datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u1", Some(&root));

        let variants = [
            datastore_key(TB_LEARNING_MODULE_KIND, Sdk::Go, "u1", Some(&root)),
            datastore_key(TB_LEARNING_NODE_KIND, Sdk::Java, "u1", Some(&root)),
            datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u2", Some(&root)),
            datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u1", Some(&other_root)),
            datastore_key(TB_LEARNING_NODE_KIND, Sdk::Go, "u1", None),
        ];
        for variant in &variants {
            assert_ne!(&base, variant, "{variant} should differ from {base}");
        }
    }

    #[test]
    fn path_and_display_are_root_first() {
        let root = learning_path_key(Sdk::Java);
        let module = datastore_key(TB_LEARNING_MODULE_KIND, Sdk::Java, "m1", Some(&root));
        let node = datastore_key(TB_LEARNING_NODE_KIND, Sdk::Java, "u1", Some(&module));

        assert_eq!(
            node.path(),
            vec![
                (TB_LEARNING_PATH_KIND, "SDK_JAVA"),
                (TB_LEARNING_MODULE_KIND, "SDK_JAVA_m1"),
                (TB_LEARNING_NODE_KIND, "SDK_JAVA_u1"),
            ]
        );
        assert_eq!(
            node.to_string(),
            "/pg_learning_paths,SDK_JAVA/pg_learning_modules,SDK_JAVA_m1/pg_learning_nodes,SDK_JAVA_u1"
        );
    }
}
