//! Visitor trait code generation.

use astgen_schema::{GrammarGroup, NodeDef};

/// Generator for a group's `Visitor` trait.
pub struct VisitorGenerator<'a> {
    group: &'a GrammarGroup,
    nodes: &'a [NodeDef],
}

impl<'a> VisitorGenerator<'a> {
    /// Creates a new visitor trait generator.
    #[must_use]
    pub fn new(group: &'a GrammarGroup, nodes: &'a [NodeDef]) -> Self {
        Self { group, nodes }
    }

    /// Generates the trait with one method per node type, in grammar order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str("pub trait Visitor {\n");
        output.push_str("    type Result;\n");

        if !self.nodes.is_empty() {
            output.push('\n');
            for node in self.nodes {
                output.push_str(&format!(
                    "    fn {}(&mut self, {}: &{}) -> Self::Result;\n",
                    node.visit_method(&self.group.name),
                    self.group.name,
                    node.name
                ));
            }
        }

        output.push_str("}\n");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::{builtin, parse_group};

    #[test]
    fn test_generate_one_method_per_type_in_order() {
        let group = builtin::expr();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = VisitorGenerator::new(&group, &nodes);
        let output = generator.generate();

        assert!(output.contains("pub trait Visitor {"));
        assert!(output.contains("    type Result;"));

        let methods = [
            "fn visit_assign_expr(&mut self, expr: &Assign) -> Self::Result;",
            "fn visit_binary_expr(&mut self, expr: &Binary) -> Self::Result;",
            "fn visit_grouping_expr(&mut self, expr: &Grouping) -> Self::Result;",
            "fn visit_literal_expr(&mut self, expr: &Literal) -> Self::Result;",
            "fn visit_unary_expr(&mut self, expr: &Unary) -> Self::Result;",
            "fn visit_variable_expr(&mut self, expr: &Variable) -> Self::Result;",
        ];
        let mut last = 0;
        for method in methods {
            let at = output[last..].find(method).expect("method missing or out of order");
            last += at;
        }
    }

    #[test]
    fn test_generate_keyword_named_types_use_group_param() {
        let group = builtin::stmt();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = VisitorGenerator::new(&group, &nodes);
        let output = generator.generate();

        assert!(output.contains("fn visit_break_stmt(&mut self, stmt: &Break) -> Self::Result;"));
        assert!(output.contains("fn visit_while_stmt(&mut self, stmt: &While) -> Self::Result;"));
    }

    #[test]
    fn test_generate_empty_group_keeps_result_type() {
        let group = GrammarGroup::new("expr");
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = VisitorGenerator::new(&group, &nodes);
        let output = generator.generate();

        assert_eq!(output, "pub trait Visitor {\n    type Result;\n}\n");
    }
}
