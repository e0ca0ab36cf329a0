use anyhow::anyhow;
use serde::Serialize;
use tob_config::TobConfig;
use tob_core::enums::Sdk;
use tob_storage::Key;
use tob_storage::entities::{TB_LEARNING_MODULE_KIND, TB_LEARNING_NODE_KIND};
use tob_storage::keys::{datastore_key, learning_path_key};
use tob_storage::wire::WireKey;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::KeyArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct KeyResponse {
    display: String,
    key: WireKey,
}

/// Handle `tob key`.
pub fn handle(args: &KeyArgs, config: &TobConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = derive_key(args, config.general.default_sdk)?;
    let response = KeyResponse {
        display: key.to_string(),
        key: key.to_wire(&bootstrap::partition(config)),
    };
    output(&response, flags.format, config.general.pretty)
}

fn derive_key(args: &KeyArgs, default_sdk: Option<Sdk>) -> anyhow::Result<Key> {
    let sdk = args
        .sdk
        .or(default_sdk)
        .ok_or_else(|| anyhow!("no SDK given: pass --sdk or set general.default_sdk"))?;

    let mut key = learning_path_key(sdk);
    if let Some(module) = &args.module {
        key = datastore_key(TB_LEARNING_MODULE_KIND, sdk, module, Some(&key));
        for node in &args.nodes {
            key = datastore_key(TB_LEARNING_NODE_KIND, sdk, node, Some(&key));
        }
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(sdk: Option<Sdk>, module: Option<&str>, nodes: &[&str]) -> KeyArgs {
        KeyArgs {
            sdk,
            module: module.map(str::to_string),
            nodes: nodes.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn root_key_without_module() {
        let key = derive_key(&args(Some(Sdk::Python), None, &[]), None).unwrap();
        assert_eq!(key.to_string(), "/pg_learning_paths,SDK_PYTHON");
    }

    #[test]
    fn nested_node_key_follows_the_given_path() {
        let key = derive_key(
            &args(Some(Sdk::Java), Some("intro"), &["Basics", "pcollection"]),
            None,
        )
        .unwrap();
        assert_eq!(
            key.to_string(),
            "/pg_learning_paths,SDK_JAVA/pg_learning_modules,SDK_JAVA_intro\
             /pg_learning_nodes,SDK_JAVA_Basics/pg_learning_nodes,SDK_JAVA_pcollection"
        );
    }

    #[test]
    fn configured_default_sdk_fills_in() {
        let key = derive_key(&args(None, Some("m"), &[]), Some(Sdk::Go)).unwrap();
        assert_eq!(key.name(), "SDK_GO_m");
    }

    #[test]
    fn flag_beats_configured_default() {
        let key = derive_key(&args(Some(Sdk::Scio), None, &[]), Some(Sdk::Go)).unwrap();
        assert_eq!(key.name(), "SDK_SCIO");
    }

    #[test]
    fn missing_sdk_is_an_error() {
        let err = derive_key(&args(None, None, &[]), None).unwrap_err();
        assert!(err.to_string().contains("--sdk"));
    }
}
