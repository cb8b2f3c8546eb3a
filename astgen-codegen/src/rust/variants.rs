//! Node struct code generation.

use astgen_schema::{GrammarGroup, NodeDef};

/// Generator for per-type node structs and their `accept` impls.
pub struct VariantGenerator<'a> {
    group: &'a GrammarGroup,
    nodes: &'a [NodeDef],
}

impl<'a> VariantGenerator<'a> {
    /// Creates a new node struct generator.
    #[must_use]
    pub fn new(group: &'a GrammarGroup, nodes: &'a [NodeDef]) -> Self {
        Self { group, nodes }
    }

    /// Generates every node struct, separated by blank lines.
    #[must_use]
    pub fn generate(&self) -> String {
        let sections: Vec<String> = self
            .nodes
            .iter()
            .map(|node| self.generate_node(node))
            .collect();
        sections.join("\n")
    }

    /// Generates one struct definition and its `accept` forwarding impl.
    fn generate_node(&self, node: &NodeDef) -> String {
        let mut output = String::new();
        let base = self.group.base_name();

        if node.fields.is_empty() {
            output.push_str(&format!("pub struct {};\n", node.name));
        } else {
            output.push_str(&format!("pub struct {} {{\n", node.name));
            for field in &node.fields {
                output.push_str(&format!(
                    "    pub {}: {},\n",
                    field.name,
                    field.field_type.rust_type(&base)
                ));
            }
            output.push_str("}\n");
        }

        output.push('\n');
        output.push_str(&format!("impl {} {{\n", node.name));
        output.push_str("    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Result {\n");
        output.push_str(&format!(
            "        visitor.{}(self)\n",
            node.visit_method(&self.group.name)
        ));
        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}
