//! Rust source emitters for the generated AST module.

pub mod base;
pub mod variants;
pub mod visitor;

pub use base::BaseGenerator;
pub use variants::VariantGenerator;
pub use visitor::VisitorGenerator;
