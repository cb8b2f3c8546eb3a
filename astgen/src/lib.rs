//! # Astgen
//!
//! Generator for the interpreter's AST boilerplate.
//!
//! The AST modules follow a rigid shape: a sum type over every node kind, a
//! `Visitor` trait with one method per kind, and one struct per kind that
//! forwards `accept` to its visit method. Writing that by hand is mechanical
//! and error-prone, so this workspace generates it from one-line type
//! descriptors instead.
//!
//! ## Quick Start
//!
//! ```ignore
//! use astgen::prelude::*;
//!
//! // Generate the built-in grammar into src/ast/
//! let driver = Driver::new("src/ast");
//! driver.run()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Grammar model and type-descriptor parsing
//! - [`codegen`] - Rust source generation and the filesystem driver

pub mod prelude;

/// Grammar model and type-descriptor parsing.
pub mod schema {
    pub use astgen_schema::*;
}

/// Rust source generation and the filesystem driver.
pub mod codegen {
    pub use astgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use astgen_codegen::{CodegenError, Driver, Generator, generate_group};
pub use astgen_schema::{FieldDef, FieldType, GrammarGroup, NodeDef, ParseError};
