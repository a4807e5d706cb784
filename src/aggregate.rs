//! The aggregation pipeline: seed, fold pallet files, write once.
//!
//! Nothing is written until every pallet file has been read and parsed, so a
//! failed run leaves any existing output exactly as it was.

use crate::config::AggregatorConfig;
use crate::error::{AggregateError, Result};
use crate::mapping::{TypeMapping, value_kind};
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSummary {
    pub pallets: usize,
    pub types: usize,
    pub output: PathBuf,
}

pub struct Aggregator {
    config: AggregatorConfig,
}

impl Aggregator {
    pub fn new(config: AggregatorConfig) -> Self {
        Self { config }
    }

    /// Runtime-own types overlaid with the custom types.
    pub fn seed(&self) -> TypeMapping {
        TypeMapping::merged([
            self.config.runtime_own_types.clone(),
            self.config.custom_types.clone(),
        ])
    }

    /// Merge the seed and every pallet file in list order. Stops at the first
    /// unreadable or malformed file.
    pub fn collect(&self) -> Result<TypeMapping> {
        let mut types = self.seed();
        for pallet in &self.config.pallets {
            let path = self.config.pallet_types_path(pallet);
            let pallet_types = load_module_types(&path)?;
            debug!(
                pallet = pallet.as_str(),
                path = %path.display(),
                types = pallet_types.len(),
                "loaded pallet types"
            );
            types.merge(pallet_types);
        }
        Ok(types)
    }

    /// Collect, then write the consolidated file.
    pub fn run(&self) -> Result<AggregateSummary> {
        let types = self.collect()?;
        let output = self.config.output_path();
        write_types(&output, &types)?;
        info!(
            pallets = self.config.pallets.len(),
            types = types.len(),
            output = %output.display(),
            "wrote aggregated types"
        );
        Ok(AggregateSummary {
            pallets: self.config.pallets.len(),
            types: types.len(),
            output,
        })
    }
}

/// Run the fixed aggregation relative to the working directory.
pub fn aggregate() -> Result<AggregateSummary> {
    Aggregator::new(AggregatorConfig::default()).run()
}

/// The built-in seed: runtime-own types overlaid with custom types.
pub fn seed_types() -> TypeMapping {
    Aggregator::new(AggregatorConfig::default()).seed()
}

/// Read one pallet's `types.json`; the top level must be a JSON object.
pub fn load_module_types(path: &Path) -> Result<TypeMapping> {
    let bytes = fs::read(path).map_err(|source| AggregateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    // from_slice rejects invalid UTF-8 as a parse error, not a read error.
    let value: Value = serde_json::from_slice(&bytes).map_err(|source| AggregateError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    match value {
        Value::Object(map) => Ok(TypeMapping::from(map)),
        other => Err(AggregateError::NotAnObject {
            path: path.to_path_buf(),
            found: value_kind(&other),
        }),
    }
}

/// Replace `path` with the pretty-printed mapping.
///
/// The JSON goes to a temporary file beside the target first and is renamed
/// into place, so the target is either the old file or the complete new one.
/// A symlinked target is written through to the file it points at; a
/// read-only target is refused.
pub fn write_types(path: &Path, types: &TypeMapping) -> Result<()> {
    let rendered = types.to_pretty_json().map_err(AggregateError::Serialize)?;
    let write_err = |source: io::Error| AggregateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if let Ok(meta) = fs::metadata(&target) {
        if meta.permissions().readonly() {
            return Err(write_err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "output file is read-only",
            )));
        }
    }

    let dir = target
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(rendered.as_bytes()).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    set_output_permissions(&target, &staged).map_err(write_err)?;
    staged.persist(&target).map_err(|err| write_err(err.error))?;
    Ok(())
}

// Temp files are created 0600; keep the existing file's mode, or use a
// world-readable default for a fresh file.
fn set_output_permissions(path: &Path, staged: &NamedTempFile) -> io::Result<()> {
    if let Ok(meta) = fs::metadata(path) {
        return staged.as_file().set_permissions(meta.permissions());
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        staged
            .as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))?;
    }
    Ok(())
}
