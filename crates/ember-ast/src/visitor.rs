use crate::node::{
    CompilationUnit, FunctionDeclaration, Identifier, IfExpression, InvocationExpression,
    LiteralBoolean, LiteralNumber, LiteralString, ParenthesizedExpression, ReturnStatement,
    VariableDeclaration,
};

/// Double-dispatch visitor over the AST.
///
/// Each hook has a default implementation that walks the node's children —
/// override only the hooks you care about and fall through to the default
/// for everything else. A leaf node (`Identifier`, the literal kinds) has no
/// children, so its default body is empty.
pub trait Visitor {
    fn visit_compilation_unit(&mut self, node: &CompilationUnit) {
        walk_compilation_unit(node, self);
    }

    fn visit_function_declaration(&mut self, node: &FunctionDeclaration) {
        walk_function_declaration(node, self);
    }

    fn visit_variable_declaration(&mut self, node: &VariableDeclaration) {
        walk_variable_declaration(node, self);
    }

    fn visit_literal_boolean(&mut self, _node: &LiteralBoolean) {}

    fn visit_literal_number(&mut self, _node: &LiteralNumber) {}

    fn visit_literal_string(&mut self, _node: &LiteralString) {}

    fn visit_identifier(&mut self, _node: &Identifier) {}

    fn visit_parenthesized_expression(&mut self, node: &ParenthesizedExpression) {
        walk_parenthesized_expression(node, self);
    }

    fn visit_if_expression(&mut self, node: &IfExpression) {
        walk_if_expression(node, self);
    }

    /// The base walk deliberately does not visit `node.target`: an
    /// invocation's callee is usually an identifier or member access a
    /// caller wants to inspect separately from the call's arguments, not
    /// fold into the same traversal order.
    fn visit_invocation_expression(&mut self, node: &InvocationExpression) {
        walk_invocation_expression_args(node, self);
    }

    fn visit_return_statement(&mut self, node: &ReturnStatement) {
        walk_return_statement(node, self);
    }
}

pub fn walk_compilation_unit(node: &CompilationUnit, visitor: &mut dyn Visitor) {
    for function in &node.functions {
        function.accept(visitor);
    }
}

pub fn walk_function_declaration(node: &FunctionDeclaration, visitor: &mut dyn Visitor) {
    for element in &node.body {
        element.accept(visitor);
    }
}

pub fn walk_variable_declaration(node: &VariableDeclaration, visitor: &mut dyn Visitor) {
    node.value.accept(visitor);
}

pub fn walk_parenthesized_expression(node: &ParenthesizedExpression, visitor: &mut dyn Visitor) {
    for element in &node.body {
        element.accept(visitor);
    }
}

pub fn walk_if_expression(node: &IfExpression, visitor: &mut dyn Visitor) {
    node.condition.accept(visitor);
    for element in &node.if_body {
        element.accept(visitor);
    }
    for element in &node.else_body {
        element.accept(visitor);
    }
}

pub fn walk_invocation_expression_args(node: &InvocationExpression, visitor: &mut dyn Visitor) {
    for arg in &node.args {
        arg.accept(visitor);
    }
}

pub fn walk_return_statement(node: &ReturnStatement, visitor: &mut dyn Visitor) {
    if let Some(value) = &node.value {
        value.accept(visitor);
    }
}
