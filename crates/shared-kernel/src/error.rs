// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum NamedataError {
    /// Adds human context while preserving the original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<NamedataError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

pub type Result<T> = std::result::Result<T, NamedataError>;

/// Domain-layer specific errors: schema violations, field conversion
/// failures, and aggregations that need at least one record.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("wrong column count: expected {expected}, got {actual}")]
    RowFormat { expected: usize, actual: usize },

    #[error("column '{column}': cannot convert '{value}': {details}")]
    FieldConversion {
        column: &'static str,
        value: String,
        details: String,
    },

    #[error("malformed vehicle description '{text}': {reason}")]
    VehicleFormat { text: String, reason: String },

    #[error("{operation} requires at least one record")]
    EmptyCollection { operation: &'static str },

    /// Row-level wrapper attached by the loader. `row` is 1-based and
    /// counts the header as row 1.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    pub fn at_row(self, row: usize) -> Self {
        Self::Row { row, source: Box::new(self) }
    }
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to load records: {reason}")]
    LoadFailed {
        reason: String,
        #[source]
        source: Option<Box<NamedataError>>,
    },

    #[error("Failed to present report: {reason}")]
    ReportFailed {
        reason: String,
        #[source]
        source: Option<Box<NamedataError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Output error: {message}")]
    Output {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for NamedataError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<NamedataError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| NamedataError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| NamedataError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
