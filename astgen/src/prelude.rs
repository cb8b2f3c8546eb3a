//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use astgen::prelude::*;
//! ```

// Schema types
pub use astgen_schema::{FieldDef, FieldType, GrammarGroup, NodeDef, ParseError};
pub use astgen_schema::{builtin, parse_group, parse_node};

// Codegen types
pub use astgen_codegen::{CodegenError, Driver, Generator, generate_group};
