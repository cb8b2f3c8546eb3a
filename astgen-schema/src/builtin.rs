//! Built-in grammar of the interpreter.
//!
//! The grammar is embedded configuration: constructed fresh for each run,
//! never mutated, never persisted. The descriptor columns are aligned for
//! readability only; the parser trims the padding.

use crate::types::GrammarGroup;

/// The expression grammar: six node types sharing the `Expr` base.
#[must_use]
pub fn expr() -> GrammarGroup {
    let mut group = GrammarGroup::new("expr");
    group.add_import("crate::token::*");
    group.add_type("Assign   : Token name, Node value");
    group.add_type("Binary   : Node left, Token operator, Node right");
    group.add_type("Grouping : Node expression");
    group.add_type("Literal  : Literals value");
    group.add_type("Unary    : Token operator, Node right");
    group.add_type("Variable : Token name");
    group
}

/// The statement grammar: the interpreter's ten statement forms.
///
/// Statement nodes reference the expression grammar through the sibling
/// module (`super::expr`); `Node` marks recursion on `Stmt` itself.
#[must_use]
pub fn stmt() -> GrammarGroup {
    let mut group = GrammarGroup::new("stmt");
    group.add_import("crate::token::*");
    group.add_import("super::expr::*");
    group.add_type("Block      : Vec<Stmt> statements");
    group.add_type("Break      :");
    group.add_type("Class      : Token name, Option<Token> superclass, Vec<Stmt> methods");
    group.add_type("Expression : Expr expression");
    group.add_type("For        : Token variable, Token iterable, Node body");
    group.add_type("Function   : Token name, Vec<Token> params, Node body");
    group.add_type("Print      : Expr expression");
    group.add_type("Return     : Expr value");
    group.add_type("Variable   : Token name, Option<Expr> initializer");
    group.add_type("While      : Expr condition, Node body");
    group
}

/// The default grammar generated by a plain run.
#[must_use]
pub fn grammar() -> Vec<GrammarGroup> {
    vec![expr()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_group;

    #[test]
    fn test_expr_grammar() {
        let group = expr();
        assert_eq!(group.name, "expr");

        let nodes = parse_group(&group).expect("Failed to parse expr grammar");
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Assign", "Binary", "Grouping", "Literal", "Unary", "Variable"]
        );
    }

    #[test]
    fn test_stmt_grammar() {
        let group = stmt();
        let nodes = parse_group(&group).expect("Failed to parse stmt grammar");

        assert_eq!(nodes.len(), 10);
        let brk = nodes.iter().find(|n| n.name == "Break").expect("no Break");
        assert!(brk.fields.is_empty());
    }

    #[test]
    fn test_default_grammar_is_expr_only() {
        let groups = grammar();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, "expr");
    }
}
