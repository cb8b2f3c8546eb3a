//! Grammar data model.
//!
//! This module contains the data structures describing one grammar group
//! and the node definitions parsed from its type descriptors.

/// Reserved field-type token marking a recursive reference to the group's
/// own base type. Rendered with owned indirection by the code generator.
pub const NODE_REF_TOKEN: &str = "Node";

/// One named grammar group: the unit of generation.
///
/// A group owns an ordered list of type-descriptor source strings of the
/// form `"Binary : Node left, Token operator, Node right"`, plus the module
/// paths its generated file must import. Descriptor order determines
/// emission order.
#[derive(Debug, Clone)]
pub struct GrammarGroup {
    /// Group name, lowercase (e.g. `"expr"`).
    pub name: String,
    /// Module paths emitted as `use <path>;` lines, in order.
    pub imports: Vec<String>,
    /// Type-descriptor source strings, in emission order.
    pub types: Vec<String>,
}

impl GrammarGroup {
    /// Creates a new empty grammar group.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            imports: Vec::new(),
            types: Vec::new(),
        }
    }

    /// Adds an import path to the group.
    pub fn add_import(&mut self, path: impl Into<String>) {
        self.imports.push(path.into());
    }

    /// Adds a type-descriptor source string to the group.
    pub fn add_type(&mut self, descriptor: impl Into<String>) {
        self.types.push(descriptor.into());
    }

    /// Returns the name of the generated base type (e.g. `Expr` for `expr`).
    #[must_use]
    pub fn base_name(&self) -> String {
        to_pascal_case(&self.name)
    }

    /// Returns the file name the group is generated into (e.g. `expr.rs`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.name)
    }
}

/// One parsed node type: a name plus its ordered fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDef {
    /// Type name as declared (e.g. `Binary`).
    pub name: String,
    /// Fields in declared order. May be empty for nullary variants.
    pub fields: Vec<FieldDef>,
}

impl NodeDef {
    /// Creates a new node definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Adds a field to the node.
    pub fn add_field(&mut self, field: FieldDef) {
        self.fields.push(field);
    }

    /// Returns the visitor method name for this node within `group`
    /// (e.g. `visit_binary_expr`).
    #[must_use]
    pub fn visit_method(&self, group: &str) -> String {
        format!("visit_{}_{}", self.name.to_ascii_lowercase(), group)
    }
}

/// One field of a node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared field type.
    pub field_type: FieldType,
    /// Field name.
    pub name: String,
}

impl FieldDef {
    /// Creates a new field definition.
    #[must_use]
    pub fn new(field_type: FieldType, name: impl Into<String>) -> Self {
        Self {
            field_type,
            name: name.into(),
        }
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    /// Recursive reference to the group's own base type.
    NodeRef,
    /// Any other type token, emitted verbatim.
    Named(String),
}

impl FieldType {
    /// Classifies a field-type token from a descriptor.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == NODE_REF_TOKEN {
            Self::NodeRef
        } else {
            Self::Named(token.to_string())
        }
    }

    /// Renders the Rust type for a field, given the group's base type name.
    ///
    /// A recursive reference becomes an owned heap handle (`Box<Expr>`);
    /// named types are emitted verbatim.
    #[must_use]
    pub fn rust_type(&self, base: &str) -> String {
        match self {
            Self::NodeRef => format!("Box<{base}>"),
            Self::Named(name) => name.clone(),
        }
    }
}

/// Converts a string to PascalCase.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}
