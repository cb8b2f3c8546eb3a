//! Error types for code generation.

use thiserror::Error;

/// Errors that can occur while generating AST source files.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A type descriptor in the grammar could not be parsed.
    #[error("Parse error: {0}")]
    Parse(#[from] astgen_schema::ParseError),

    /// The output directory or file could not be written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
