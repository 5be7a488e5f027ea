//! Stats module for facet value statistics
//!
//! This module provides a read-only view over the statistics returned for each
//! distinct value of a faceted field, plus the decoding of a facets document
//! into those views.

mod decode;
mod facet_value;
mod key;

// Re-export public types
pub use decode::{decode_facets, parse_facets};
pub use facet_value::FacetValueStats;
pub use key::StatKey;
