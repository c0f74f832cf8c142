use async_graphql::ErrorExtensions;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(String),

    #[error("Unauthenticated!")]
    Unauthenticated,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("A database error occurred")]
    Database(#[from] mongodb::error::Error),

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Auth(_) => "AUTH_ERROR",
            AppError::Unauthenticated => "UNAUTHENTICATED",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn log(&self) {
        match self {
            AppError::Validation(msg)
            | AppError::Auth(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Internal(msg) => {
                error!(error = ?self, message = %msg, "Application error");
            }
            AppError::Unauthenticated => {
                error!(error = ?self, "Application error");
            }
            AppError::Database(e) => {
                error!(error = ?e, "Database error");
            }
        }
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        // Log internal details; the Display impl is what the client sees
        // (database detail stays out of the response).
        self.log();

        async_graphql::Error::new(self.to_string()).extend_with(|_, e| e.set("code", self.code()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_message_is_shielded() {
        let err = AppError::Database(mongodb::error::Error::custom("dropped connection"));
        assert_eq!(err.to_string(), "A database error occurred");
        assert_eq!(err.code(), "DATABASE_ERROR");
    }

    #[test]
    fn test_domain_error_messages_pass_through() {
        let err = AppError::NotFound("Event with id 'x' was not found".to_string());
        assert_eq!(err.to_string(), "Event with id 'x' was not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
