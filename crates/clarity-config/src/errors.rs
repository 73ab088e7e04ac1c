//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Error types raised while decoding configuration documents."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}", json_message(.path, .source))]
    Json {
        path: Option<PathBuf>,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}", shape_message(.path, .found))]
    NotAnObject {
        path: Option<PathBuf>,
        found: &'static str,
    },
}

fn json_message(path: &Option<PathBuf>, source: &serde_json::Error) -> String {
    match path {
        Some(path) => format!("failed to decode {}: {}", path.display(), source),
        None => format!("failed to decode document: {}", source),
    }
}

fn shape_message(path: &Option<PathBuf>, found: &str) -> String {
    match path {
        Some(path) => format!("{} must hold a JSON object, found {}", path.display(), found),
        None => format!("document must hold a JSON object, found {}", found),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Decode a configuration document. The top level must be a JSON object.
pub(crate) fn decode_document<T: DeserializeOwned>(content: &str, path: Option<&Path>) -> Result<T> {
    let json_error = |source: serde_json::Error| ConfigError::Json {
        path: path.map(Path::to_path_buf),
        source,
    };
    let value: Value = serde_json::from_str(content).map_err(json_error)?;
    if !value.is_object() {
        return Err(ConfigError::NotAnObject {
            path: path.map(Path::to_path_buf),
            found: kind_of(&value),
        });
    }
    serde_json::from_value(value).map_err(json_error)
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!(config_path = %path.display(), "loading configuration document");
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_document(&raw, Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntityLog, Formatting, Settings};

    #[test]
    fn top_level_must_be_an_object() {
        for raw in ["[]", "null", "3", "\"settings\""] {
            assert!(matches!(
                decode_document::<Settings>(raw, None),
                Err(ConfigError::NotAnObject { path: None, .. })
            ));
            assert!(matches!(
                decode_document::<Formatting>(raw, None),
                Err(ConfigError::NotAnObject { .. })
            ));
            assert!(matches!(
                decode_document::<EntityLog>(raw, None),
                Err(ConfigError::NotAnObject { .. })
            ));
        }
    }

    #[test]
    fn shape_error_names_the_file() {
        let err = decode_document::<Settings>("[]", Some(Path::new("conf/settings.json"))).unwrap_err();
        assert_eq!(
            err.to_string(),
            "conf/settings.json must hold a JSON object, found an array"
        );
    }

    #[test]
    fn syntax_errors_stay_json_errors() {
        assert!(matches!(
            decode_document::<Settings>("{ nope", None),
            Err(ConfigError::Json { .. })
        ));
    }
}
