use crate::node::{
    CompilationUnit, FunctionDeclaration, Identifier, IfExpression, InvocationExpression,
    LiteralBoolean, LiteralNumber, LiteralString, ParenthesizedExpression, ReturnStatement,
    VariableDeclaration,
};
use crate::visitor::{walk_invocation_expression_args, Visitor};

/// Renders a tree into an indented, deterministic text form — one line per
/// node, children indented one level beneath their parent. Two runs over
/// the same tree always produce identical output, which is what makes this
/// visitor useful in a snapshot test.
pub struct PrintTreeVisitor {
    output: String,
    indent_width: usize,
    depth: usize,
}

impl Default for PrintTreeVisitor {
    fn default() -> Self {
        Self {
            output: String::new(),
            indent_width: 2,
            depth: 0,
        }
    }
}

impl PrintTreeVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        Self {
            indent_width,
            ..Self::default()
        }
    }

    /// Consumes the visitor, returning the text accumulated so far.
    pub fn into_output(self) -> String {
        self.output
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    fn write_line(&mut self, line: impl AsRef<str>) {
        for _ in 0..self.depth * self.indent_width {
            self.output.push(' ');
        }
        self.output.push_str(line.as_ref());
        self.output.push('\n');
    }

    fn indented(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

impl Visitor for PrintTreeVisitor {
    fn visit_compilation_unit(&mut self, node: &CompilationUnit) {
        self.write_line("CompilationUnit");
        self.indented(|v| {
            for function in &node.functions {
                function.accept(v);
            }
        });
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        self.write_line(format!(
            "FunctionDeclaration name={} params=({})",
            node.name,
            node.parameters.join(", ")
        ));
        self.indented(|v| {
            for element in &node.body {
                element.accept(v);
            }
        });
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        self.write_line(format!("VariableDeclaration name={}", node.name));
        self.indented(|v| node.value.accept(v));
    }

    fn visit_literal_boolean(&mut self, node: &LiteralBoolean) {
        self.write_line(format!("LiteralBoolean value={}", node.value));
    }

    fn visit_literal_number(&mut self, node: &LiteralNumber) {
        self.write_line(format!("LiteralNumber value={}", node.value));
    }

    fn visit_literal_string(&mut self, node: &LiteralString) {
        self.write_line(format!("LiteralString value={:?}", node.value));
    }

    fn visit_identifier(&mut self, node: &Identifier) {
        self.write_line(format!("Identifier name={}", node.name));
    }

    fn visit_parenthesized_expression(&mut self, node: &ParenthesizedExpression) {
        self.write_line("ParenthesizedExpression");
        self.indented(|v| {
            for element in &node.body {
                element.accept(v);
            }
        });
    }

    fn visit_if_expression(&mut self, node: &IfExpression) {
        self.write_line("IfExpression");
        self.indented(|v| {
            v.write_line("If");
            v.indented(|v| node.condition.accept(v));

            v.write_line("Then");
            v.indented(|v| {
                for element in &node.if_body {
                    element.accept(v);
                }
            });

            if !node.else_body.is_empty() {
                v.write_line("Else");
                v.indented(|v| {
                    for element in &node.else_body {
                        element.accept(v);
                    }
                });
            }
        });
    }

    fn visit_invocation_expression(&mut self, node: &InvocationExpression) {
        self.write_line("InvocationExpression");
        self.indented(|v| {
            v.write_line("Target:");
            v.indented(|v| node.target.accept(v));

            v.write_line("Args:");
            v.indented(|v| walk_invocation_expression_args(node, v));
        });
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        self.write_line("ReturnStatement");
        if let Some(value) = &node.value {
            self.indented(|v| value.accept(v));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;
    use ember_source::StringSpan;

    fn span(text: &str) -> StringSpan {
        StringSpan::new(0, 0, 0, text)
    }

    fn identifier(name: &str) -> Node {
        Node::Identifier(Identifier {
            name: name.to_string(),
            span: span(name),
        })
    }

    fn number(value: &str) -> Node {
        Node::LiteralNumber(LiteralNumber {
            value: value.to_string(),
            span: span(value),
        })
    }

    #[test]
    fn prints_flat_literal() {
        let tree = Node::LiteralBoolean(LiteralBoolean {
            value: true,
            span: span("true"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        assert_eq!(visitor.into_output(), "LiteralBoolean value=true\n");
    }

    #[test]
    fn indents_nested_children() {
        let tree = Node::VariableDeclaration(VariableDeclaration {
            name: "x".to_string(),
            value: Box::new(number("1")),
            span: span("let x = 1"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        let expected = "VariableDeclaration name=x\n  LiteralNumber value=1\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn if_expression_omits_else_when_empty() {
        let tree = Node::IfExpression(IfExpression {
            condition: Box::new(identifier("cond")),
            if_body: vec![number("1")],
            else_body: vec![],
            span: span("if cond { 1 }"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        let expected = "IfExpression\n  If\n    Identifier name=cond\n  Then\n    LiteralNumber value=1\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn if_expression_includes_else_when_present() {
        let tree = Node::IfExpression(IfExpression {
            condition: Box::new(identifier("cond")),
            if_body: vec![number("1")],
            else_body: vec![number("2")],
            span: span("if cond { 1 } else { 2 }"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        let expected = "IfExpression\n  If\n    Identifier name=cond\n  Then\n    LiteralNumber value=1\n  Else\n    LiteralNumber value=2\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn invocation_expression_has_target_and_args_subheadings() {
        let tree = Node::InvocationExpression(InvocationExpression {
            target: Box::new(identifier("add")),
            args: vec![number("1"), number("2")],
            span: span("add(1, 2)"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        let expected = "InvocationExpression\n  Target:\n    Identifier name=add\n  Args:\n    LiteralNumber value=1\n    LiteralNumber value=2\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn invocation_expression_with_no_args_still_prints_heading() {
        let tree = Node::InvocationExpression(InvocationExpression {
            target: Box::new(identifier("noop")),
            args: vec![],
            span: span("noop()"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        let expected = "InvocationExpression\n  Target:\n    Identifier name=noop\n  Args:\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn return_statement_without_value_has_no_children() {
        let tree = Node::ReturnStatement(ReturnStatement {
            value: None,
            span: span("return"),
        });

        let mut visitor = PrintTreeVisitor::new();
        tree.accept(&mut visitor);

        assert_eq!(visitor.into_output(), "ReturnStatement\n");
    }

    #[test]
    fn custom_indent_width_is_honored() {
        let tree = Node::VariableDeclaration(VariableDeclaration {
            name: "x".to_string(),
            value: Box::new(number("1")),
            span: span("let x = 1"),
        });

        let mut visitor = PrintTreeVisitor::with_indent_width(4);
        tree.accept(&mut visitor);

        let expected = "VariableDeclaration name=x\n    LiteralNumber value=1\n";
        assert_eq!(visitor.into_output(), expected);
    }

    #[test]
    fn whole_compilation_unit_walks_deterministically() {
        let function = FunctionDeclaration {
            name: "main".to_string(),
            parameters: vec![],
            body: vec![Node::ReturnStatement(ReturnStatement {
                value: Some(Box::new(number("0"))),
                span: span("return 0"),
            })],
            span: span("fn main() { return 0 }"),
        };
        let unit = CompilationUnit {
            functions: vec![function],
            span: span("fn main() { return 0 }"),
        };

        let mut first = PrintTreeVisitor::new();
        unit.accept(&mut first);
        let mut second = PrintTreeVisitor::new();
        unit.accept(&mut second);

        assert_eq!(first.output(), second.output());
        assert!(first.output().starts_with("CompilationUnit\n"));
    }
}
