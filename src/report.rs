//! Report rendering for facet value statistics
//!
//! Renders a list of facet values as a table with one row per facet value and
//! one column per selected statistic.

use serde_json::{Map, Value};

use crate::error::FacetStatsError;
use crate::stats::{FacetValueStats, StatKey};

const COLUMN_GAP: &str = "  ";

/// Selected stat columns plus the placeholder for absent stats
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    columns: Vec<StatKey>,
    absent: String,
}

impl Report {
    pub fn new(columns: Vec<StatKey>, absent: impl Into<String>) -> Self {
        Self {
            columns,
            absent: absent.into(),
        }
    }

    /// Build a report from stat names, rejecting unknown ones
    pub fn from_names<S: AsRef<str>>(
        names: &[S],
        absent: impl Into<String>,
    ) -> Result<Self, FacetStatsError> {
        let columns = names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<Vec<StatKey>, _>>()?;
        Ok(Self::new(columns, absent))
    }

    pub fn columns(&self) -> &[StatKey] {
        &self.columns
    }

    /// Render as an aligned plain-text table
    pub fn render_text(&self, facets: &[FacetValueStats]) -> String {
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(facets.len() + 1);

        let mut header = vec!["value".to_string()];
        header.extend(self.columns.iter().map(|key| key.as_str().to_string()));
        rows.push(header);

        for facet in facets {
            let mut row = vec![facet.value().to_string()];
            row.extend(self.columns.iter().map(|&key| self.cell(facet, key)));
            rows.push(row);
        }

        let widths: Vec<usize> = (0..=self.columns.len())
            .map(|col| {
                rows.iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut output = String::new();
        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP);
            output.push_str(line.trim_end());
            output.push('\n');
        }
        output
    }

    /// Render as a JSON array, absent stats as `null`
    pub fn render_json(&self, facets: &[FacetValueStats]) -> Value {
        facets
            .iter()
            .map(|facet| {
                let mut row = Map::new();
                row.insert("value".to_string(), Value::from(facet.value()));
                for &key in &self.columns {
                    let stat = facet.get(key).cloned().unwrap_or(Value::Null);
                    row.insert(key.as_str().to_string(), stat);
                }
                Value::Object(row)
            })
            .collect()
    }

    fn cell(&self, facet: &FacetValueStats, key: StatKey) -> String {
        match facet.get(key) {
            None => self.absent.clone(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
