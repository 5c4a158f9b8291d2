use thiserror::Error;

/// Errors produced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The HTTP round trip itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The remote endpoint answered with a non-success status.
    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
    /// The response body did not match the expected document shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The response document violated a domain constraint.
    #[error("invalid product data: {0}")]
    Validation(String),
}

/// Convenient alias for results returned from catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
