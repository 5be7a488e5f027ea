//! facet-stats library - facet value statistics from a search stats component
//!
//! Exposes [`FacetValueStats`], a read-only view with named accessors over
//! the statistics computed for one facet value, along with decoding of
//! facets documents and report rendering used by the `facet-stats` binary.

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod stats;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::FacetStatsError;
pub use report::Report;
pub use stats::{FacetValueStats, StatKey};
