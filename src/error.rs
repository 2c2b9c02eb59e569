use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required column: {0}")]
    MissingColumn(String),

    #[error("Food record is missing a value for {0}")]
    MissingField(&'static str),

    #[error("Invalid calories for '{food}': {value:?}")]
    InvalidCalories { food: String, value: String },

    #[error("Catalog row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<PlannerError>,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Plan not found: {0}")]
    PlanNotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
