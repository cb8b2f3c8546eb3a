//! # Astgen Codegen
//!
//! Rust code generation for the interpreter's AST.
//!
//! This crate provides:
//! - Base sum type generation with `accept` dispatch
//! - Visitor trait generation, one method per node type
//! - Node struct generation from type descriptors
//! - A driver that writes one module per grammar group

pub mod driver;
pub mod error;
pub mod generator;
pub mod rust;

pub use driver::Driver;
pub use error::CodegenError;
pub use generator::Generator;

/// Generates the Rust source for a single grammar group.
///
/// # Arguments
/// * `group` - Grammar group whose type descriptors are rendered
///
/// # Returns
/// Generated Rust source as a string.
///
/// # Errors
/// Returns `CodegenError` if any type descriptor fails to parse.
pub fn generate_group(group: &astgen_schema::GrammarGroup) -> Result<String, CodegenError> {
    let nodes = astgen_schema::parse_group(group)?;
    let generator = Generator::new(group, &nodes);
    Ok(generator.generate())
}
