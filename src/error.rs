use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealPlanError {
    #[error("Saved plan not found: {0}")]
    PlanNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Parsed plan has wrong shape: {0}")]
    ShapeMismatch(String),
}

pub type Result<T> = std::result::Result<T, MealPlanError>;
