//! Bundled datasets and data file loading.

use std::fs;
use std::path::Path;

use crate::error::{CatalogResult, ConfigError};
use crate::types::Record;

const COMPUTERS_JSON: &str = include_str!("../../../data/computers.json");
const USERS_JSON: &str = include_str!("../../../data/users.json");

/// Resource types that are registered without any bundled records.
pub const EMPTY_COLLECTIONS: &[&str] = &[
    "business-roles",
    "application-roles",
    "azure-licenses",
    "azure-admin-roles",
    "azure-rbac-roles",
    "management-roles",
    "mailboxes",
    "shared-folders",
];

/// Decodes the bundled datasets, keyed by resource type.
pub fn bundled() -> CatalogResult<Vec<(String, Vec<Record>)>> {
    let mut datasets = vec![
        ("computers".to_string(), decode("computers", COMPUTERS_JSON)?),
        ("users".to_string(), decode("users", USERS_JSON)?),
    ];
    datasets.extend(
        EMPTY_COLLECTIONS
            .iter()
            .map(|key| (key.to_string(), Vec::new())),
    );
    Ok(datasets)
}

/// Decodes a JSON array of records.
pub fn decode(name: &str, json: &str) -> CatalogResult<Vec<Record>> {
    serde_json::from_str(json).map_err(|e| {
        ConfigError::Dataset {
            name: name.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Reads every `*.json` file in `dir` as a dataset named after its file stem.
///
/// Files are returned in name order.
pub fn load_dir(dir: &Path) -> CatalogResult<Vec<(String, Vec<Record>)>> {
    let dataset_error = |message: String| ConfigError::Dataset {
        name: dir.display().to_string(),
        message,
    };

    let entries = fs::read_dir(dir).map_err(|e| dataset_error(e.to_string()))?;
    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| dataset_error(e.to_string()))?.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut datasets = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let json = fs::read_to_string(&path).map_err(|e| ConfigError::Dataset {
            name: name.to_string(),
            message: e.to_string(),
        })?;
        datasets.push((name.to_string(), decode(name, &json)?));
    }
    Ok(datasets)
}
