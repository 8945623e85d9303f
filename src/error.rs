use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    #[error("the three datasets share no common employee")]
    NoCommonEmployees,

    #[error("{metric} out of range for {employee}: {value}")]
    OutOfRange {
        metric: &'static str,
        employee: String,
        value: f64,
    },

    #[error("unknown task complexity: {0}")]
    UnknownComplexity(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoringError>;
