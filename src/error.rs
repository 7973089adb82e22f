//! Error types for xchange

use thiserror::Error;

/// Main error type for xchange
#[derive(Error, Debug)]
pub enum XchangeError {
    #[error("{0}")]
    FetchFailure(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Exchange rate not available for currency: {0}")]
    RateUnavailable(String),

    #[error("Invalid exchange rate (division by zero) for currency: {0}")]
    ZeroRate(String),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// What the interactive session does when it meets an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Report and restart the current iteration
    Retry,
    /// Say goodbye and exit successfully
    Farewell,
    /// Report and exit with a failure status
    Terminate,
}

impl ErrorPolicy {
    /// Process exit status for this policy
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorPolicy::Retry | ErrorPolicy::Farewell => 0,
            ErrorPolicy::Terminate => 1,
        }
    }
}

impl XchangeError {
    /// Recovery policy for this error kind.
    ///
    /// Only a malformed amount is recoverable inside the loop. Currency and
    /// rate problems end the session.
    pub fn policy(&self) -> ErrorPolicy {
        match self {
            XchangeError::InvalidAmount(_) => ErrorPolicy::Retry,
            XchangeError::UserCancelled => ErrorPolicy::Farewell,
            XchangeError::FetchFailure(_)
            | XchangeError::UnsupportedCurrency(_)
            | XchangeError::RateUnavailable(_)
            | XchangeError::ZeroRate(_)
            | XchangeError::IoError(_) => ErrorPolicy::Terminate,
        }
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        self.policy().exit_code()
    }

    pub fn is_recoverable(&self) -> bool {
        self.policy() == ErrorPolicy::Retry
    }
}

/// Result type alias for xchange operations
pub type Result<T> = std::result::Result<T, XchangeError>;
