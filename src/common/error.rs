use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Trajectory not found: {id}")]
    TrajectoryNotFound { id: i64 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}

impl DomainError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        DomainError::InvalidInput { reason: reason.into() }
    }
}

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Trajectory store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] anyhow::Error),
}

impl ApplicationError {
    /// True when the error maps to a missing trajectory (the "404" case).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApplicationError::Domain(DomainError::TrajectoryNotFound { .. }))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
pub type ApplicationResult<T> = Result<T, ApplicationError>;
