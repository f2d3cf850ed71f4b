use crate::error::ErrorKind;
use domain::like::LikeError;
use model::ModelError;
use thiserror::Error;

pub mod get_like_count;
pub mod has_user_liked;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Database error: {0}")]
    DbError(String),
}

impl QueryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            QueryError::InvalidInput(_) => ErrorKind::InvalidInput,
            QueryError::ExecutionError(_) | QueryError::DbError(_) => ErrorKind::Internal,
        }
    }
}

impl From<LikeError> for QueryError {
    fn from(err: LikeError) -> Self {
        match err {
            LikeError::Validation(msg) => QueryError::InvalidInput(msg),
            LikeError::DbErr(msg) => QueryError::DbError(msg),
            other => QueryError::ExecutionError(other.to_string()),
        }
    }
}

impl From<ModelError> for QueryError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DbErr(msg) => QueryError::DbError(msg),
        }
    }
}
