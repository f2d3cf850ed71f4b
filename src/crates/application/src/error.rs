use domain::like::LikeError;

use thiserror::Error;

/// Coarse classification used by the HTTP layer to pick a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    Conflict,
    NotFound,
    Internal,
}

impl From<&LikeError> for ErrorKind {
    fn from(err: &LikeError) -> Self {
        match err {
            LikeError::Validation(_) => ErrorKind::InvalidInput,
            LikeError::Conflict { .. } => ErrorKind::Conflict,
            LikeError::LikeNotFound { .. } | LikeError::StatsNotFound(_) => ErrorKind::NotFound,
            LikeError::DbErr(_) => ErrorKind::Internal,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Like error: {0}")]
    LikeError(#[from] LikeError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::LikeError(e) => ErrorKind::from(e),
        }
    }
}
