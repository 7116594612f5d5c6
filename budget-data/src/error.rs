/// Error types for the budget chart widget
use thiserror::Error;

/// Main error type for budget chart operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BudgetChartError {
    /// The server-injected initial payload was not a valid monthly series
    #[error("Failed to parse initial monthly data: {0}")]
    PayloadParse(String),

    /// A fetched response body was not a valid monthly series
    #[error("Failed to parse monthly data response: {0}")]
    ResponseParse(String),

    /// A fetched series did not contain one record per month
    #[error("Expected {expected} monthly records, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The network request could not be completed
    #[error("Request failed: {0}")]
    Fetch(String),

    /// The endpoint answered with a non-success status
    #[error("Request to {url} failed with HTTP status {status}")]
    HttpStatus { status: u16, url: String },

    /// The embedded widget configuration was malformed
    #[error("Invalid widget configuration: {0}")]
    Config(String),

    /// A required page element was missing or unreadable
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Type alias for Results using BudgetChartError
pub type Result<T> = std::result::Result<T, BudgetChartError>;
