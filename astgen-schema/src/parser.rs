//! Type-descriptor parsing.
//!
//! A descriptor is a single line of the form
//! `"<TypeName> : <type> <name>, <type> <name>, ..."`. The field list may be
//! empty, which declares a nullary variant.

use crate::error::ParseError;
use crate::types::{FieldDef, FieldType, GrammarGroup, NodeDef};
use std::collections::HashSet;

/// Parses one type descriptor into a node definition.
///
/// The descriptor is split on the first colon into a name segment and a
/// field-list segment. Each comma-separated field segment must hold exactly
/// a type token and a name token. The reserved `Node` token is recorded as a
/// recursive reference to the group's base type.
///
/// # Errors
/// Returns `ParseError` if the colon is missing, the name is blank, or a
/// field segment is not `<type> <name>`.
pub fn parse_node(descriptor: &str) -> Result<NodeDef, ParseError> {
    let (name_segment, field_segment) = descriptor
        .split_once(':')
        .ok_or_else(|| ParseError::missing_colon(descriptor))?;

    let name = name_segment.trim();
    if name.is_empty() {
        return Err(ParseError::empty_name(descriptor));
    }

    let mut node = NodeDef::new(name);

    let field_segment = field_segment.trim();
    if field_segment.is_empty() {
        // Nullary variant: permitted, emitted as a unit struct.
        return Ok(node);
    }

    for field in field_segment.split(',') {
        let field = field.trim();
        let mut tokens = field.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(field_type), Some(field_name), None) => {
                node.add_field(FieldDef::new(FieldType::from_token(field_type), field_name));
            }
            _ => return Err(ParseError::invalid_field(descriptor, field)),
        }
    }

    Ok(node)
}

/// Parses every descriptor of a group, in order.
///
/// # Errors
/// Returns the first `ParseError` encountered, or `DuplicateNode` if two
/// descriptors declare the same type name (duplicates would emit
/// conflicting definitions).
pub fn parse_group(group: &GrammarGroup) -> Result<Vec<NodeDef>, ParseError> {
    let mut nodes = Vec::with_capacity(group.types.len());
    let mut seen = HashSet::new();

    for descriptor in &group.types {
        let node = parse_node(descriptor)?;
        if !seen.insert(node.name.clone()) {
            return Err(ParseError::duplicate_node(&group.name, &node.name));
        }
        nodes.push(node);
    }

    Ok(nodes)
}
