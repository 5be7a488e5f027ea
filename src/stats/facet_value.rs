//! Read-only view over the statistics of one facet value

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::stats::key::StatKey;

/// Statistics computed for one distinct facet value
///
/// Holds the facet value label and the stats mapping exactly as the stats
/// component returned them. Nothing is validated: a missing key just means the
/// statistic was not requested or not computed, and reads as `None`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FacetValueStats {
    value: String,
    #[serde(default)]
    stats: Map<String, Value>,
}

impl FacetValueStats {
    pub fn new(value: impl Into<String>, stats: Map<String, Value>) -> Self {
        Self {
            value: value.into(),
            stats,
        }
    }

    /// Facet value label
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whole stats mapping, for keys without a named accessor
    pub fn stats(&self) -> &Map<String, Value> {
        &self.stats
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Look up a statistic by key
    ///
    /// An explicit JSON `null` reads the same as a missing key.
    pub fn get(&self, key: StatKey) -> Option<&Value> {
        self.stats.get(key.as_str()).filter(|value| !value.is_null())
    }

    /// Minimum value of the field in the document set
    pub fn min(&self) -> Option<&Value> {
        self.get(StatKey::Min)
    }

    /// Maximum value of the field in the document set
    pub fn max(&self) -> Option<&Value> {
        self.get(StatKey::Max)
    }

    /// Sum of all values of the field in the document set
    pub fn sum(&self) -> Option<&Value> {
        self.get(StatKey::Sum)
    }

    /// Number of values found in the document set
    pub fn count(&self) -> Option<&Value> {
        self.get(StatKey::Count)
    }

    /// Number of documents in the set without a value for the field
    pub fn missing(&self) -> Option<&Value> {
        self.get(StatKey::Missing)
    }

    /// Sum of all values squared (a by-product of stddev)
    pub fn sum_of_squares(&self) -> Option<&Value> {
        self.get(StatKey::SumOfSquares)
    }

    pub fn mean(&self) -> Option<&Value> {
        self.get(StatKey::Mean)
    }

    /// Standard deviation of the values in the set
    pub fn stddev(&self) -> Option<&Value> {
        self.get(StatKey::Stddev)
    }

    /// Percentile values keyed by cut-off point (t-digest approximation)
    pub fn percentiles(&self) -> Option<&Value> {
        self.get(StatKey::Percentiles)
    }

    /// Every distinct value of the field in the document set
    pub fn distinct_values(&self) -> Option<&Value> {
        self.get(StatKey::DistinctValues)
    }

    /// Exact number of distinct values
    pub fn count_distinct(&self) -> Option<&Value> {
        self.get(StatKey::CountDistinct)
    }

    /// HyperLogLog estimate of the number of distinct values
    pub fn cardinality(&self) -> Option<&Value> {
        self.get(StatKey::Cardinality)
    }

    pub fn facets(&self) -> Option<&Value> {
        self.get(StatKey::Facets)
    }
}

#[cfg(test)]
#[path = "facet_value_tests.rs"]
mod facet_value_tests;
