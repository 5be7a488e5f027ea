//! Building facet value stats from an already decoded facets document
//!
//! A facets document maps each distinct facet value to the stats object
//! computed for it:
//!
//! ```json
//! {"red": {"min": 1.0, "max": 9.5}, "blue": {"count": 0}}
//! ```

use serde_json::{Map, Value};

use crate::error::FacetStatsError;
use crate::stats::facet_value::FacetValueStats;

/// Parse a facets document from text
///
/// # Examples
/// ```
/// use facet_stats::stats::parse_facets;
///
/// let facets = parse_facets(r#"{"red": {"min": "1.0"}}"#).unwrap();
/// assert_eq!(facets[0].value(), "red");
/// ```
pub fn parse_facets(json: &str) -> Result<Vec<FacetValueStats>, FacetStatsError> {
    let document: Value =
        serde_json::from_str(json).map_err(|e| FacetStatsError::InvalidJson(e.to_string()))?;
    decode_facets(&document)
}

/// Build one `FacetValueStats` per entry of a facets document, in document order
///
/// A `null` stats entry becomes an empty mapping.
pub fn decode_facets(document: &Value) -> Result<Vec<FacetValueStats>, FacetStatsError> {
    let entries = document.as_object().ok_or_else(|| FacetStatsError::NotAnObject {
        context: "facets document".to_string(),
        found: type_name(document),
    })?;

    entries
        .iter()
        .map(|(label, stats)| {
            let stats = match stats {
                Value::Object(map) => map.clone(),
                Value::Null => {
                    log::debug!("Facet value {:?} has null stats", label);
                    Map::new()
                }
                other => {
                    return Err(FacetStatsError::NotAnObject {
                        context: format!("stats of facet value {:?}", label),
                        found: type_name(other),
                    });
                }
            };
            Ok(FacetValueStats::new(label.as_str(), stats))
        })
        .collect()
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "decode_tests.rs"]
mod decode_tests;
