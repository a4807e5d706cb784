//! Static aggregation settings.
//!
//! The pallet list, override tables and path templates are fixed; the
//! defaults resolve every path relative to the working directory, which is
//! expected to be the node repository's `scripts/` directory.

use crate::mapping::TypeMapping;
use std::path::PathBuf;

/// Pallets whose `types.json` files are merged, in merge order.
pub const PALLETS: [&str; 15] = [
    "donations",
    "moderation",
    "permissions",
    "post-history",
    "posts",
    "profile-history",
    "profiles",
    "reactions",
    "roles",
    "scores",
    "session-keys",
    "space-history",
    "spaces",
    "subscriptions",
    "utils",
];

/// Types native to the runtime itself rather than to any pallet.
pub const RUNTIME_OWN_TYPES: &[(&str, &str)] =
    &[("Address", "AccountId"), ("LookupSource", "AccountId")];

/// Project-wide custom types not owned by a single pallet.
pub const CUSTOM_TYPES: &[(&str, &str)] = &[("IpfsCid", "Text")];

pub const PALLET_PLACEHOLDER: &str = "{pallet}";
pub const PALLET_TYPES_TEMPLATE: &str = "../pallets/{pallet}/types.json";
pub const OUTPUT_PATH: &str = "../types.json";

/// Inputs and outputs of one aggregation run.
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Directory the templates are resolved against. Empty means the working directory.
    pub base_dir: PathBuf,
    pub pallets: Vec<String>,
    pub runtime_own_types: TypeMapping,
    pub custom_types: TypeMapping,
    pub pallet_types_template: String,
    pub output: PathBuf,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            pallets: PALLETS.iter().map(|p| p.to_string()).collect(),
            runtime_own_types: TypeMapping::from_pairs(RUNTIME_OWN_TYPES),
            custom_types: TypeMapping::from_pairs(CUSTOM_TYPES),
            pallet_types_template: PALLET_TYPES_TEMPLATE.to_string(),
            output: PathBuf::from(OUTPUT_PATH),
        }
    }
}

impl AggregatorConfig {
    /// The fixed configuration, resolved against `base_dir` instead of the working directory.
    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_pallets<I, S>(mut self, pallets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pallets = pallets.into_iter().map(Into::into).collect();
        self
    }

    pub fn pallet_types_path(&self, pallet: &str) -> PathBuf {
        self.base_dir
            .join(self.pallet_types_template.replace(PALLET_PLACEHOLDER, pallet))
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.output)
    }
}
