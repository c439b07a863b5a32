use barbuzz_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use thiserror::Error;

pub use barbuzz_core::repositories;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> AppError {
        AppError::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> AppError {
        AppError::Business(err.into())
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("No wait time available")]
    WaitTimeUnavailable,
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            // Unwrap to keep repository errors distinguishable
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}

impl AppError {
    /// Validation errors are caused by the client.
    pub fn is_parameter_error(&self) -> bool {
        matches!(self, Self::Business(BError::Parameter(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_repository_errors_of_use_cases() {
        let err = AppError::from(ParameterError::Repo(RepoError::NotFound));
        assert!(matches!(
            err,
            AppError::Business(BError::Repo(RepoError::NotFound))
        ));
        assert!(!err.is_parameter_error());
        let err = AppError::from(ParameterError::MissingLocation);
        assert!(err.is_parameter_error());
        assert_eq!("Location parameters required", err.to_string());
    }
}
