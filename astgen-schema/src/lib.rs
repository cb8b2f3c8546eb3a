//! # Astgen Schema
//!
//! Grammar model and type-descriptor parsing for AST code generation.
//!
//! This crate provides:
//! - The grammar data model (groups, node types, fields)
//! - Descriptor string parsing into node definitions
//! - The built-in grammar of the interpreter's expression language
//! - Parse error types

pub mod builtin;
pub mod error;
pub mod parser;
pub mod types;

pub use error::ParseError;
pub use parser::{parse_group, parse_node};
pub use types::{FieldDef, FieldType, GrammarGroup, NodeDef};
