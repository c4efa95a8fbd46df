use miette::Diagnostic;
use thiserror::Error;

/// Main error type for stitchplan operations
#[derive(Error, Diagnostic, Debug)]
pub enum StitchError {
    #[error("IO error: {0}")]
    #[diagnostic(code(stitch::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(stitch::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(stitch::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(stitch::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(stitch::render))]
    Render { message: String },
}

pub type Result<T> = std::result::Result<T, StitchError>;
