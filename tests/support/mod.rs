use anyhow::{Context, Result};
use pallet_types::{AggregatorConfig, PALLETS};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway node repository: `scripts/` as the working directory and
/// `pallets/<name>/types.json` beside it.
pub struct NodeTree {
    root: TempDir,
}

impl NodeTree {
    pub fn new() -> Result<Self> {
        let root = TempDir::new().context("failed to allocate node tree")?;
        fs::create_dir_all(root.path().join("scripts"))?;
        fs::create_dir_all(root.path().join("pallets"))?;
        Ok(Self { root })
    }

    /// A tree where every known pallet ships an empty `{}` types file.
    pub fn with_all_pallets_empty() -> Result<Self> {
        let tree = Self::new()?;
        for pallet in PALLETS {
            tree.write_raw(pallet, "{}")?;
        }
        Ok(tree)
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root.path().join("scripts")
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.path().join("types.json")
    }

    pub fn pallet_path(&self, pallet: &str) -> PathBuf {
        self.root.path().join("pallets").join(pallet).join("types.json")
    }

    pub fn write(&self, pallet: &str, types: &Value) -> Result<()> {
        self.write_raw(pallet, &serde_json::to_string_pretty(types)?)
    }

    pub fn write_raw(&self, pallet: &str, contents: &str) -> Result<()> {
        let path = self.pallet_path(pallet);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents).with_context(|| format!("writing {}", path.display()))
    }

    /// Default configuration, resolved from this tree's `scripts/` directory.
    pub fn config(&self) -> AggregatorConfig {
        AggregatorConfig::in_dir(self.scripts_dir())
    }

    pub fn config_for(&self, pallets: &[&str]) -> AggregatorConfig {
        self.config().with_pallets(pallets.iter().copied())
    }

    pub fn read_output(&self) -> Result<Value> {
        read_json(&self.output_path())
    }
}

pub fn read_json(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
