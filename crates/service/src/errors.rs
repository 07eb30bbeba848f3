use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("Student with this roll number already exists")]
    DuplicateKey { roll_no: String },
    #[error("Student not found")]
    NotFound { roll_no: String },
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(roll_no: &str) -> Self { Self::NotFound { roll_no: roll_no.to_string() } }

    pub fn duplicate(roll_no: &str) -> Self { Self::DuplicateKey { roll_no: roll_no.to_string() } }

    /// Stable outcome label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "invalid",
            ServiceError::DuplicateKey { .. } => "duplicate",
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Db(_) => "error",
        }
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => ServiceError::Validation(msg),
            ModelError::Duplicate(roll_no) => ServiceError::DuplicateKey { roll_no },
            ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}
