use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("inconsistent catalog: {0}")]
    Inconsistent(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self { Self::Validation(msg.into()) }

    pub fn storage(e: impl std::fmt::Display) -> Self { Self::Storage(e.to_string()) }
}
