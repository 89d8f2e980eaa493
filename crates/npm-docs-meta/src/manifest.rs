//! Manifest Loader
//!
//! Reads and parses an npm `package.json` into a JSON object.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{MetaError, MetaResult};

/// Manifest location relative to the documentation directory
pub const DEFAULT_MANIFEST_PATH: &str = "../package.json";

/// A parsed `package.json`
#[derive(Debug, Clone)]
pub struct PackageManifest {
    pub path: PathBuf,
    pub raw: Map<String, Value>,
}

impl PackageManifest {
    /// Build a manifest from an already parsed value
    pub fn from_value(path: impl Into<PathBuf>, value: Value) -> MetaResult<Self> {
        let path = path.into();
        match value {
            Value::Object(raw) => Ok(Self { path, raw }),
            _ => Err(MetaError::NotAnObject { path }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    /// Look up a required string field
    pub fn str_field(&self, key: &str) -> MetaResult<&str> {
        match self.raw.get(key) {
            None => Err(MetaError::MissingField(key.to_string())),
            Some(Value::String(s)) => Ok(s),
            Some(_) => Err(MetaError::FieldType {
                field: key.to_string(),
                expected: "string",
            }),
        }
    }

    pub fn name(&self) -> MetaResult<&str> {
        self.str_field("name")
    }

    pub fn version(&self) -> MetaResult<&str> {
        self.str_field("version")
    }
}

/// Load `package.json` from `path`
pub fn load_package_json(path: impl AsRef<Path>) -> MetaResult<PackageManifest> {
    let path = path.as_ref();
    debug!("Reading manifest {:?}", path);

    let bytes = fs::read(path).map_err(|source| MetaError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    // Bad UTF-8 surfaces here as a JSON error, not an I/O one
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| MetaError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest = PackageManifest::from_value(path, value)?;
    let name = manifest.get("name").and_then(|v| v.as_str()).unwrap_or("?");
    let version = manifest.get("version").and_then(|v| v.as_str()).unwrap_or("?");
    info!("Loaded manifest {:?} (name: {}, version: {})", path, name, version);
    Ok(manifest)
}
