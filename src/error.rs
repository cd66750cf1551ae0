//! Error types for the field and render layers.
//!
//! The steering core itself has no error type: it is a total function of its
//! inputs and degenerate geometry propagates as NaN/Inf rather than an error.

use thiserror::Error;

/// Errors from field generation and rendering
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Field is empty")]
    EmptyField,

    #[error("Field has no value range to normalize")]
    FlatField,

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, FieldError>;
