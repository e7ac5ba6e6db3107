use std::fmt;

/// Coarse classification of an [`AppError`], stable across context wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidUserName,
    InvalidUserEmail,
    Database,
    Serialization,
    Timeout,
    Configuration,
    Internal,
}

#[derive(Debug)]
pub enum AppError {
    InvalidUserName,
    InvalidUserEmail,
    Database(String),
    Serialization(String),
    Timeout(String),
    Configuration(String),
    Internal(String),
    /// Failure of a service operation, carrying the operation name.
    Operation {
        operation: &'static str,
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidUserName => ErrorKind::InvalidUserName,
            AppError::InvalidUserEmail => ErrorKind::InvalidUserEmail,
            AppError::Database(_) => ErrorKind::Database,
            AppError::Serialization(_) => ErrorKind::Serialization,
            AppError::Timeout(_) => ErrorKind::Timeout,
            AppError::Configuration(_) => ErrorKind::Configuration,
            AppError::Internal(_) => ErrorKind::Internal,
            AppError::Operation { source, .. } => source.kind(),
        }
    }

    /// Wrap this error with the name of the operation that produced it
    pub fn in_operation(self, operation: &'static str) -> Self {
        AppError::Operation {
            operation,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidUserName => write!(f, "invalid user name"),
            AppError::InvalidUserEmail => write!(f, "invalid user email"),
            AppError::Database(e) => write!(f, "Database error: {}", e),
            AppError::Serialization(e) => write!(f, "Serialization error: {}", e),
            AppError::Timeout(e) => write!(f, "Timeout: {}", e),
            AppError::Configuration(e) => write!(f, "Configuration error: {}", e),
            AppError::Internal(e) => write!(f, "Internal error: {}", e),
            AppError::Operation { operation, source } => {
                write!(f, "failed to {}: {}", operation, source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Operation { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
