//! # Document Loading
//!
//! Reads a schema node (or context value) from disk as a
//! `serde_json::Value`. The format is picked from the file extension:
//! `.yaml`/`.yml` are parsed as YAML, everything else as JSON.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Error loading a document from disk.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Read {
        /// Path to the document.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON.
    #[error("invalid JSON in '{path}': {reason}")]
    InvalidJson {
        /// Path to the document.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The file is not valid YAML.
    #[error("invalid YAML in '{path}': {reason}")]
    InvalidYaml {
        /// Path to the document.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// The YAML parsed but has no JSON equivalent.
    #[error("YAML-to-JSON conversion failed for '{path}': {reason}")]
    Conversion {
        /// Path to the document.
        path: String,
        /// What could not be converted.
        reason: String,
    },
}

/// Load a JSON or YAML document into a JSON value.
///
/// # Errors
///
/// Returns [`DocumentError`] if the file cannot be read or parsed.
pub fn load_document(path: &Path) -> Result<Value, DocumentError> {
    let path_str = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path_str.clone(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    tracing::debug!(path = %path_str, format = ext, bytes = content.len(), "loading document");

    match ext {
        "yaml" | "yml" => parse_yaml(&content, &path_str),
        _ => serde_json::from_str(&content).map_err(|e| DocumentError::InvalidJson {
            path: path_str,
            reason: e.to_string(),
        }),
    }
}

fn parse_yaml(content: &str, path: &str) -> Result<Value, DocumentError> {
    let yaml: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| DocumentError::InvalidYaml {
            path: path.to_string(),
            reason: e.to_string(),
        })?;
    yaml_to_json_value(&yaml).map_err(|reason| DocumentError::Conversion {
        path: path.to_string(),
        reason,
    })
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Scalar map keys (numbers, booleans) become their string form, since
/// JSON object keys are always strings. Tags are dropped.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> = seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn loads_json_node() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "node.json", r#"{"required": true, "type": "string"}"#);
        assert_eq!(
            load_document(&path).unwrap(),
            json!({ "required": true, "type": "string" })
        );
    }

    #[test]
    fn loads_yaml_node() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "node.yaml", "required: true\n$ref: '#/components/schemas/Pet'\n");
        assert_eq!(
            load_document(&path).unwrap(),
            json!({ "required": true, "$ref": "#/components/schemas/Pet" })
        );
    }

    #[test]
    fn yml_extension_is_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "node.yml", "required: 1\n");
        assert_eq!(load_document(&path).unwrap(), json!({ "required": 1 }));
    }

    #[test]
    fn unknown_extension_parsed_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "node.txt", "null");
        assert_eq!(load_document(&path).unwrap(), Value::Null);
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DocumentError::Read { .. }), "got: {err}");
    }

    #[test]
    fn malformed_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.json", "{ required: true");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidJson { .. }), "got: {err}");
    }

    #[test]
    fn malformed_yaml_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "bad.yaml", "required: [true\n");
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, DocumentError::InvalidYaml { .. }), "got: {err}");
    }

    #[test]
    fn yaml_scalar_keys_become_strings() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\ntrue: yes\n").unwrap();
        let value = yaml_to_json_value(&yaml).unwrap();
        assert_eq!(value["1"], "one");
        assert_eq!(value["true"], "yes");
    }

    #[test]
    fn yaml_sequence_key_rejected() {
        let yaml: serde_yaml::Value = serde_yaml::from_str("? [a, b]\n: x\n").unwrap();
        assert!(yaml_to_json_value(&yaml).is_err());
    }
}
