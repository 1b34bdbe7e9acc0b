use crate::error::{Result, StatusError};
use serde_yml::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the service names declared in a compose file, in file order.
pub fn list_services(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| StatusError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let services = parse_services(&content, path)?;
    debug!("{} service(s) declared in {:?}", services.len(), path);
    Ok(services)
}

fn parse_services(content: &str, path: &Path) -> Result<Vec<String>> {
    if content.trim().is_empty() {
        return Err(StatusError::Schema {
            path: path.to_path_buf(),
        });
    }

    let doc: Value = serde_yml::from_str(content).map_err(|e| StatusError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let services = doc
        .as_mapping()
        .and_then(|root| root.get("services"))
        .and_then(Value::as_mapping)
        .ok_or_else(|| StatusError::Schema {
            path: path.to_path_buf(),
        })?;

    Ok(services.keys().filter_map(key_name).collect())
}

fn key_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
