//! Error types for descriptor parsing.

use thiserror::Error;

/// Error type for grammar descriptor parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Descriptor has no name/field-list separator.
    #[error("missing ':' separator in descriptor '{descriptor}'")]
    MissingColon {
        /// The offending descriptor string.
        descriptor: String,
    },

    /// Descriptor's name segment is blank.
    #[error("empty type name in descriptor '{descriptor}'")]
    EmptyName {
        /// The offending descriptor string.
        descriptor: String,
    },

    /// A field segment does not consist of a type token and a name token.
    #[error("field '{field}' in descriptor '{descriptor}' must be '<type> <name>'")]
    InvalidField {
        /// The offending descriptor string.
        descriptor: String,
        /// The offending field segment.
        field: String,
    },

    /// Two descriptors in one group declare the same type name.
    #[error("duplicate type '{name}' in grammar group '{group}'")]
    DuplicateNode {
        /// Group name.
        group: String,
        /// The duplicated type name.
        name: String,
    },
}

impl ParseError {
    /// Creates a missing colon error.
    pub fn missing_colon(descriptor: impl Into<String>) -> Self {
        Self::MissingColon {
            descriptor: descriptor.into(),
        }
    }

    /// Creates an empty name error.
    pub fn empty_name(descriptor: impl Into<String>) -> Self {
        Self::EmptyName {
            descriptor: descriptor.into(),
        }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(descriptor: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidField {
            descriptor: descriptor.into(),
            field: field.into(),
        }
    }

    /// Creates a duplicate node error.
    pub fn duplicate_node(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateNode {
            group: group.into(),
            name: name.into(),
        }
    }
}
