//! Static mapping files.
//!
//! The mock service can be configured from a directory of mapping files
//! instead of its admin API. Files are written as pretty JSON named after the
//! mapping guid; JSON and YAML are both accepted when loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use uuid::Uuid;

use super::MappingSpecification;
use crate::error::{MappingError, Result};

enum MappingFormat {
    Json,
    Yaml,
}

impl MappingFormat {
    fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(MappingFormat::Json),
            "yaml" | "yml" => Some(MappingFormat::Yaml),
            _ => None,
        }
    }
}

/// Write `mapping` to `<dir>/<guid>.json`, creating `dir` if needed.
///
/// A mapping without a guid gets a fresh one; the returned path names the file written.
pub fn save_mapping(dir: &Path, mapping: &MappingSpecification) -> Result<PathBuf> {
    let guid = mapping.guid.unwrap_or_else(Uuid::new_v4);
    let mapping = MappingSpecification {
        guid: Some(guid),
        ..mapping.clone()
    };

    fs::create_dir_all(dir).map_err(|e| MappingError::io(dir, e))?;
    let path = dir.join(format!("{guid}.json"));
    let json = mapping.to_json_pretty()?;
    fs::write(&path, json).map_err(|e| MappingError::io(&path, e))?;

    info!("Saved mapping {} to {:?}", guid, path);
    Ok(path)
}

/// Load a single `.json`, `.yaml` or `.yml` mapping file.
pub fn load_mapping(path: &Path) -> Result<MappingSpecification> {
    let format = MappingFormat::from_path(path)
        .ok_or_else(|| MappingError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs::read_to_string(path).map_err(|e| MappingError::io(path, e))?;

    let mapping = match format {
        MappingFormat::Json => serde_json::from_str(&content)?,
        MappingFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    debug!("Loaded mapping from {:?}", path);
    Ok(mapping)
}

/// Load every mapping file in `dir` (non-recursive), ordered by file name.
///
/// Files with other extensions are skipped; a malformed mapping file fails the whole load.
pub fn load_mappings(dir: &Path) -> Result<Vec<MappingSpecification>> {
    let entries = fs::read_dir(dir).map_err(|e| MappingError::io(dir, e))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| MappingError::io(dir, e))?.path();
        if path.is_file() && MappingFormat::from_path(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();

    let mappings = paths
        .iter()
        .map(|path| load_mapping(path))
        .collect::<Result<Vec<_>>>()?;
    info!("Loaded {} mappings from {:?}", mappings.len(), dir);
    Ok(mappings)
}
