//! Recognized statistic names

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FacetStatsError;

/// A statistic the stats component can return for a facet value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKey {
    /// Minimum value across the document set
    Min,
    /// Maximum value across the document set
    Max,
    /// Sum of all values
    Sum,
    /// Number of values found
    Count,
    /// Number of documents without a value
    Missing,
    /// Sum of all values squared
    SumOfSquares,
    /// Average value
    Mean,
    /// Standard deviation
    Stddev,
    /// Approximate percentiles keyed by cut-off point
    Percentiles,
    /// Every distinct value seen
    DistinctValues,
    /// Exact number of distinct values
    CountDistinct,
    /// Approximate number of distinct values
    Cardinality,
    /// Nested per-facet stats
    Facets,
}

impl StatKey {
    pub const ALL: [StatKey; 13] = [
        StatKey::Min,
        StatKey::Max,
        StatKey::Sum,
        StatKey::Count,
        StatKey::Missing,
        StatKey::SumOfSquares,
        StatKey::Mean,
        StatKey::Stddev,
        StatKey::Percentiles,
        StatKey::DistinctValues,
        StatKey::CountDistinct,
        StatKey::Cardinality,
        StatKey::Facets,
    ];

    /// Key name as it appears in the stats response
    pub fn as_str(self) -> &'static str {
        match self {
            StatKey::Min => "min",
            StatKey::Max => "max",
            StatKey::Sum => "sum",
            StatKey::Count => "count",
            StatKey::Missing => "missing",
            StatKey::SumOfSquares => "sumOfSquares",
            StatKey::Mean => "mean",
            StatKey::Stddev => "stddev",
            StatKey::Percentiles => "percentiles",
            StatKey::DistinctValues => "distinctValues",
            StatKey::CountDistinct => "countDistinct",
            StatKey::Cardinality => "cardinality",
            StatKey::Facets => "facets",
        }
    }

    fn snake_case(self) -> Option<&'static str> {
        match self {
            StatKey::SumOfSquares => Some("sum_of_squares"),
            StatKey::DistinctValues => Some("distinct_values"),
            StatKey::CountDistinct => Some("count_distinct"),
            _ => None,
        }
    }
}

impl fmt::Display for StatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatKey {
    type Err = FacetStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s || key.snake_case() == Some(s))
            .ok_or_else(|| FacetStatsError::UnknownStat(s.to_string()))
    }
}

impl Serialize for StatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use proptest::prelude::*;

    #[test]
    fn test_camel_case_names() {
        assert_eq!(StatKey::SumOfSquares.as_str(), "sumOfSquares");
        assert_eq!(StatKey::DistinctValues.as_str(), "distinctValues");
        assert_eq!(StatKey::CountDistinct.as_str(), "countDistinct");
        assert_eq!(StatKey::Stddev.to_string(), "stddev");
    }

    #[test]
    fn test_parse_snake_case_alias() {
        assert_eq!("sum_of_squares".parse::<StatKey>(), Ok(StatKey::SumOfSquares));
        assert_eq!("distinct_values".parse::<StatKey>(), Ok(StatKey::DistinctValues));
        assert_eq!("count_distinct".parse::<StatKey>(), Ok(StatKey::CountDistinct));
    }

    #[test]
    fn test_parse_unknown_name() {
        let err = "median".parse::<StatKey>().unwrap_err();
        assert_eq!(err, FacetStatsError::UnknownStat("median".to_string()));
        assert_snapshot!(err.to_string(), @"Unknown statistic: median");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("MIN".parse::<StatKey>().is_err());
        assert!("sumofsquares".parse::<StatKey>().is_err());
    }

    #[test]
    fn test_serde_uses_key_name() {
        let json = serde_json::to_string(&StatKey::CountDistinct).unwrap();
        assert_eq!(json, r#""countDistinct""#);

        let key: StatKey = serde_json::from_str(r#""cardinality""#).unwrap();
        assert_eq!(key, StatKey::Cardinality);

        assert!(serde_json::from_str::<StatKey>(r#""median""#).is_err());
    }

    #[test]
    fn test_all_names_are_unique() {
        let mut names: Vec<_> = StatKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), StatKey::ALL.len());
    }

    fn arb_stat_key() -> impl Strategy<Value = StatKey> {
        prop::sample::select(StatKey::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_name_parses_back(key in arb_stat_key()) {
            prop_assert_eq!(key.as_str().parse::<StatKey>(), Ok(key));
            prop_assert_eq!(key.to_string(), key.as_str());
        }
    }
}
