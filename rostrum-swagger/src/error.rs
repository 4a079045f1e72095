//! Error types for document generation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SwaggerError {
    /// A response status that is neither numeric nor `default`
    #[error("operation '{nickname}' has invalid response status '{status}': {source}")]
    InvalidResponseStatus {
        nickname: String,
        status: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("path '{path}': {source}")]
    Path {
        path: String,
        #[source]
        source: Box<SwaggerError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SwaggerError {
    /// Attach the resource path an operation error occurred under
    pub fn in_path(self, path: impl Into<String>) -> Self {
        SwaggerError::Path {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

/// Reasons a base path could not be composed
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BasePathError {
    #[error("host '{0}' is not a bare authority")]
    InvalidHost(String),

    #[error("base path '{path}' is invalid: {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("malformed URL '{url}': {source}")]
    Malformed {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, SwaggerError>;
