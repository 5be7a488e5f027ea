use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FacetStatsError {
    #[error("Invalid JSON input: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON object for {context}, found {found}")]
    NotAnObject { context: String, found: &'static str },

    #[error("Unknown statistic: {0}")]
    UnknownStat(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for FacetStatsError {
    fn from(err: std::io::Error) -> Self {
        FacetStatsError::Io(err.to_string())
    }
}
