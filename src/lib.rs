//! Consolidates the runtime's type definitions for client libraries.
//!
//! Every pallet ships a `types.json` describing the custom types it exposes.
//! This crate merges those files, in a fixed pallet order, on top of two
//! built-in override tables and writes the union to a single `types.json`
//! that a client-side type registry can load. Later sources silently win on
//! key collisions.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod mapping;

pub use aggregate::{
    AggregateSummary, Aggregator, aggregate, load_module_types, seed_types, write_types,
};
pub use config::{
    AggregatorConfig, CUSTOM_TYPES, OUTPUT_PATH, PALLET_TYPES_TEMPLATE, PALLETS,
    RUNTIME_OWN_TYPES,
};
pub use error::{AggregateError, Result};
pub use mapping::TypeMapping;
