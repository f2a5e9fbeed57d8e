//! # Ember AST
//!
//! Node definitions and a double-dispatch visitor framework for the Ember
//! compiler front-end. No grammar, precedence, or reduction logic lives
//! here — these types describe the shape a finished parse hands downstream,
//! not how to produce one.

mod node;
mod print_visitor;
mod visitor;

pub use node::{
    CompilationUnit, FunctionDeclaration, Identifier, IfExpression, InvocationExpression,
    LiteralBoolean, LiteralNumber, LiteralString, Node, ParenthesizedExpression, ReturnStatement,
    VariableDeclaration,
};
pub use print_visitor::PrintTreeVisitor;
pub use visitor::{
    walk_compilation_unit, walk_function_declaration, walk_if_expression,
    walk_invocation_expression_args, walk_parenthesized_expression, walk_return_statement,
    walk_variable_declaration, Visitor,
};
