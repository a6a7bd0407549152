use crate::errors::UpdateError;
use log::debug;
use serde_json::Value;
use std::path::Path;

/// Reads a file into a decoded document and writes a mutated document back.
///
/// The resolver is format-agnostic once a file is decoded; only the codec
/// knows the on-disk syntax. A load/modify/persist cycle owns its document
/// exclusively and is not transactional across files.
pub trait Codec {
    fn load(path: impl AsRef<Path>) -> Result<Value, UpdateError>;
    fn persist(path: impl AsRef<Path>, doc: &Value) -> Result<(), UpdateError>;
}

pub struct JsonCodec;

impl Codec for JsonCodec {
    fn load(path: impl AsRef<Path>) -> Result<Value, UpdateError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(UpdateError::NotFound(path.to_path_buf()));
        }
        debug!("Loading file: '{}'", path.display());
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|source| UpdateError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    fn persist(path: impl AsRef<Path>, doc: &Value) -> Result<(), UpdateError> {
        let path = path.as_ref();
        debug!("Persisting file: '{}'", path.display());
        // Two-space indentation, the document's own key order and a trailing
        // newline keep diffs clean.
        let mut serialized = serde_json::to_string_pretty(doc).map_err(|source| {
            UpdateError::Decode {
                path: path.to_path_buf(),
                source,
            }
        })?;
        serialized.push('\n');
        std::fs::write(path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonCodec::load(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, UpdateError::NotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("broken.json");
        std::fs::write(&file, "{ not json").unwrap();
        let err = JsonCodec::load(&file).unwrap_err();
        assert!(matches!(err, UpdateError::Decode { .. }));
    }

    #[test]
    fn test_round_trip_preserves_content() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("manifest.json");
        let doc = json!({"name": "pkg", "version": "1.0.0", "deps": {"a": "^2"}});
        JsonCodec::persist(&file, &doc).unwrap();
        let reloaded = JsonCodec::load(&file).unwrap();
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn test_persist_preserves_key_order() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("manifest.json");
        let doc = json!({"zeta": 1, "version": "1.0.0", "alpha": 2});
        JsonCodec::persist(&file, &doc).unwrap();

        let contents = std::fs::read_to_string(&file).unwrap();
        let zeta = contents.find("\"zeta\"").unwrap();
        let version = contents.find("\"version\"").unwrap();
        let alpha = contents.find("\"alpha\"").unwrap();
        assert!(zeta < version && version < alpha);
    }

    #[test]
    fn test_persist_ends_with_newline() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("manifest.json");
        JsonCodec::persist(&file, &json!({"version": "1.0.0"})).unwrap();
        let contents = std::fs::read_to_string(&file).unwrap();
        assert!(contents.ends_with('\n'));
    }
}
