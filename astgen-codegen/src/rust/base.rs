//! Base sum type code generation.

use astgen_schema::{GrammarGroup, NodeDef};

/// Generator for a group's base enum and its `accept` dispatch.
pub struct BaseGenerator<'a> {
    group: &'a GrammarGroup,
    nodes: &'a [NodeDef],
}

impl<'a> BaseGenerator<'a> {
    /// Creates a new base type generator.
    #[must_use]
    pub fn new(group: &'a GrammarGroup, nodes: &'a [NodeDef]) -> Self {
        Self { group, nodes }
    }

    /// Generates the base enum together with its dispatch impl.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        output.push_str(&self.generate_enum());
        output.push('\n');
        output.push_str(&self.generate_dispatch());
        output
    }

    /// Generates the enum with one variant per node type.
    fn generate_enum(&self) -> String {
        let mut output = String::new();
        let base = self.group.base_name();

        if self.nodes.is_empty() {
            output.push_str(&format!("pub enum {} {{}}\n", base));
            return output;
        }

        output.push_str(&format!("pub enum {} {{\n", base));
        for node in self.nodes {
            output.push_str(&format!("    {}({}),\n", node.name, node.name));
        }
        output.push_str("}\n");

        output
    }

    /// Generates the `accept` impl that forwards to the active variant.
    fn generate_dispatch(&self) -> String {
        let mut output = String::new();
        let base = self.group.base_name();
        // Bindings use the group name; node names like Break or Return
        // would lowercase into keywords.
        let binding = &self.group.name;

        output.push_str(&format!("impl {} {{\n", base));

        if self.nodes.is_empty() {
            output.push_str("    pub fn accept<V: Visitor>(&self, _visitor: &mut V) -> V::Result {\n");
            output.push_str("        match *self {}\n");
        } else {
            output.push_str("    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Result {\n");
            output.push_str("        match self {\n");
            for node in self.nodes {
                output.push_str(&format!(
                    "            {}::{}({}) => {}.accept(visitor),\n",
                    base, node.name, binding, binding
                ));
            }
            output.push_str("        }\n");
        }

        output.push_str("    }\n");
        output.push_str("}\n");

        output
    }
}
