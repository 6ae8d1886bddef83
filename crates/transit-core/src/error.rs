//! Error types and exit codes for transit
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid network, unknown node, bad weight)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid network definition or query (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur while building or querying a network
#[derive(Error, Debug)]
pub enum TransitError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("node already exists: {id}")]
    DuplicateNode { id: String },

    #[error(
        "invalid weight for edge {from} - {to}: {weight} (must be between 0 and {max})",
        max = crate::graph::network::MAX_WEIGHT
    )]
    InvalidWeight { from: String, to: String, weight: f64 },

    #[error("self loop on node {id} is not allowed")]
    SelfLoop { id: String },

    #[error("edge already exists: {from} - {to}")]
    DuplicateEdge { from: String, to: String },

    // Generic failures (exit code 1)
    #[error("failed to {operation} {path}: {source}")]
    Io {
        operation: String,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TransitError {
    /// Create an error for a node that is not part of the graph
    pub fn unknown_node(id: impl Into<String>) -> Self {
        TransitError::UnknownNode { id: id.into() }
    }

    /// Create an error for a node that was added twice
    pub fn duplicate_node(id: impl Into<String>) -> Self {
        TransitError::DuplicateNode { id: id.into() }
    }

    /// Create an error for a rejected edge weight
    pub fn invalid_weight(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        TransitError::InvalidWeight {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Create an error for a failed IO operation on `path`
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        source: std::io::Error,
    ) -> Self {
        TransitError::Io {
            operation: operation.to_string(),
            path: path.to_string(),
            source,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            TransitError::UnknownFormat(_) | TransitError::UsageError(_) => ExitCode::Usage,

            TransitError::UnknownNode { .. }
            | TransitError::DuplicateNode { .. }
            | TransitError::InvalidWeight { .. }
            | TransitError::SelfLoop { .. }
            | TransitError::DuplicateEdge { .. } => ExitCode::Data,

            TransitError::Io { .. }
            | TransitError::Toml(_)
            | TransitError::Json(_)
            | TransitError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            TransitError::UnknownFormat(_) => "unknown_format",
            TransitError::UsageError(_) => "usage_error",
            TransitError::UnknownNode { .. } => "unknown_node",
            TransitError::DuplicateNode { .. } => "duplicate_node",
            TransitError::InvalidWeight { .. } => "invalid_weight",
            TransitError::SelfLoop { .. } => "self_loop",
            TransitError::DuplicateEdge { .. } => "duplicate_edge",
            TransitError::Io { .. } => "io_error",
            TransitError::Toml(_) => "toml_error",
            TransitError::Json(_) => "json_error",
            TransitError::Other(_) => "other",
        }
    }

    /// Convert error to a JSON envelope for `--format json` output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for transit operations
pub type Result<T> = std::result::Result<T, TransitError>;
