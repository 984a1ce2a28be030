//! Layered YAML exchange catalog.
//!
//! Catalog files are merged in order (earlier docs are base, later docs
//! override), canonicalized to JSON and hashed so two processes can confirm
//! they are reading the same schedule data. Every record is validated through
//! `ExchangeSchedule::new` before a catalog is handed out.

mod catalog;

pub use catalog::{ExchangeCatalog, ExchangeRecord};

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use tracing::debug;

/// Catalog compiled into the binaries; used when no `--config` path is given.
pub const BUILTIN_CATALOG_YAML: &str = include_str!("../../../config/exchanges.yaml");

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for (i, raw) in yaml_docs.iter().enumerate() {
        let v_yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml (layer {i})"))?;
        let v_json = serde_json::to_value(v_yaml).context("yaml->json conversion failed")?;
        // An empty overlay file parses as null; it overrides nothing.
        if v_json.is_null() {
            continue;
        }
        merged = deep_merge(merged, v_json);
    }

    let canonical_json = canonicalize_json(&merged)?;
    let config_hash = sha256_hex(canonical_json.as_bytes());
    Ok(LoadedConfig {
        config_hash,
        canonical_json,
        config_json: merged,
    })
}

/// Load and validate a catalog from layered files.
pub fn load_catalog(paths: &[&str]) -> Result<ExchangeCatalog> {
    let loaded = load_layered_yaml(paths)?;
    let catalog = ExchangeCatalog::from_loaded(&loaded)?;
    debug!(
        layers = paths.len(),
        exchanges = catalog.len(),
        catalog_hash = %catalog.catalog_hash(),
        "exchange catalog loaded"
    );
    Ok(catalog)
}

/// Load and validate a catalog from in-memory YAML layers.
pub fn catalog_from_strings(yaml_docs: &[&str]) -> Result<ExchangeCatalog> {
    let loaded = load_layered_yaml_from_strings(yaml_docs)?;
    ExchangeCatalog::from_loaded(&loaded)
}

/// The bundled catalog (`config/exchanges.yaml`).
pub fn builtin_catalog() -> Result<ExchangeCatalog> {
    catalog_from_strings(&[BUILTIN_CATALOG_YAML]).context("bundled exchange catalog is invalid")
}

/// Layered files when `paths` is non-empty, the bundled catalog otherwise.
pub fn load_catalog_or_builtin(paths: &[&str]) -> Result<ExchangeCatalog> {
    if paths.is_empty() {
        builtin_catalog()
    } else {
        load_catalog(paths)
    }
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        (_, b_other) => b_other,
    }
}

fn canonicalize_json(v: &Value) -> Result<String> {
    // serde_json's default Map is a BTreeMap, so object keys serialize sorted
    // and the output is independent of source key order.
    let s = serde_json::to_string(v).context("canonical json serialize failed")?;
    Ok(s)
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    hex::encode(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_merge_recurses_into_maps_and_replaces_leaves() {
        let a = serde_json::json!({"x": {"a": 1, "b": [1, 2]}, "y": 1});
        let b = serde_json::json!({"x": {"b": [3]}, "z": true});
        let m = deep_merge(a, b);
        assert_eq!(m, serde_json::json!({"x": {"a": 1, "b": [3]}, "y": 1, "z": true}));
    }

    #[test]
    fn sha256_hex_is_lowercase_64_chars() {
        let h = sha256_hex(b"bell");
        assert_eq!(h.len(), 64);
        assert!(h.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }
}
