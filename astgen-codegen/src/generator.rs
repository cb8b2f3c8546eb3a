//! Whole-file assembly for one grammar group.

use astgen_schema::{GrammarGroup, NodeDef};

use crate::rust::{BaseGenerator, VariantGenerator, VisitorGenerator};

/// Generator for the complete source of one grammar group's module.
pub struct Generator<'a> {
    group: &'a GrammarGroup,
    nodes: &'a [NodeDef],
}

impl<'a> Generator<'a> {
    /// Creates a new file generator.
    #[must_use]
    pub fn new(group: &'a GrammarGroup, nodes: &'a [NodeDef]) -> Self {
        Self { group, nodes }
    }

    /// Generates the full module source.
    ///
    /// Sections appear in a fixed order: imports, base enum with its
    /// dispatch impl, the `Visitor` trait, then one struct per node type.
    /// Output is byte-identical across runs for the same group.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !self.group.imports.is_empty() {
            sections.push(self.generate_imports());
        }

        sections.push(BaseGenerator::new(self.group, self.nodes).generate());
        sections.push(VisitorGenerator::new(self.group, self.nodes).generate());

        let variants = VariantGenerator::new(self.group, self.nodes).generate();
        if !variants.is_empty() {
            sections.push(variants);
        }

        sections.join("\n")
    }

    /// Generates one `use` line per declared import.
    fn generate_imports(&self) -> String {
        let mut output = String::new();
        for path in &self.group.imports {
            output.push_str(&format!("use {};\n", path));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use astgen_schema::{builtin, parse_group};

    #[test]
    fn test_generate_small_group_exact_output() {
        let mut group = GrammarGroup::new("expr");
        group.add_import("crate::token::*");
        group.add_type("Grouping : Node expression");
        group.add_type("Literal  : Literals value");
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);

        let expected = r#"use crate::token::*;

pub enum Expr {
    Grouping(Grouping),
    Literal(Literal),
}

impl Expr {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Result {
        match self {
            Expr::Grouping(expr) => expr.accept(visitor),
            Expr::Literal(expr) => expr.accept(visitor),
        }
    }
}

pub trait Visitor {
    type Result;

    fn visit_grouping_expr(&mut self, expr: &Grouping) -> Self::Result;
    fn visit_literal_expr(&mut self, expr: &Literal) -> Self::Result;
}

pub struct Grouping {
    pub expression: Box<Expr>,
}

impl Grouping {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Result {
        visitor.visit_grouping_expr(self)
    }
}

pub struct Literal {
    pub value: Literals,
}

impl Literal {
    pub fn accept<V: Visitor>(&self, visitor: &mut V) -> V::Result {
        visitor.visit_literal_expr(self)
    }
}
"#;
        assert_eq!(generator.generate(), expected);
    }

    #[test]
    fn test_generate_section_order() {
        let group = builtin::expr();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);
        let output = generator.generate();

        let use_at = output.find("use crate::token::*;").expect("imports missing");
        let enum_at = output.find("pub enum Expr {").expect("enum missing");
        let trait_at = output.find("pub trait Visitor {").expect("trait missing");
        let struct_at = output.find("pub struct Assign {").expect("structs missing");
        assert!(use_at < enum_at);
        assert!(enum_at < trait_at);
        assert!(trait_at < struct_at);
    }

    #[test]
    fn test_generate_expression_grammar_counts() {
        let group = builtin::expr();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);
        let output = generator.generate();

        // One accept on the base enum plus one per variant struct.
        assert_eq!(output.matches("pub fn accept<V: Visitor>").count(), 7);
        // Six trait method declarations plus six forwarding calls.
        assert_eq!(output.matches("visit_").count(), 12);
        assert_eq!(output.matches("pub struct ").count(), 6);
    }

    #[test]
    fn test_generate_empty_group_exact_output() {
        let group = GrammarGroup::new("expr");
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);

        let expected = r#"pub enum Expr {}

impl Expr {
    pub fn accept<V: Visitor>(&self, _visitor: &mut V) -> V::Result {
        match *self {}
    }
}

pub trait Visitor {
    type Result;
}
"#;
        assert_eq!(generator.generate(), expected);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let group = builtin::expr();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);

        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_generate_single_trailing_newline() {
        let group = builtin::expr();
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);
        let output = generator.generate();

        assert!(output.ends_with("}\n"));
        assert!(!output.ends_with("\n\n"));
    }

    #[test]
    fn test_generate_no_imports_starts_at_enum() {
        let mut group = GrammarGroup::new("expr");
        group.add_type("Literal : Literals value");
        let nodes = parse_group(&group).expect("Failed to parse");
        let generator = Generator::new(&group, &nodes);
        let output = generator.generate();

        assert!(output.starts_with("pub enum Expr {"));
    }
}
