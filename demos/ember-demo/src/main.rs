//! # Ember Demo
//!
//! Small illustrative binary, not a committed CLI surface: lexes a sample
//! program, hand-builds the AST a parser would eventually produce for it,
//! and prints the tree with [`PrintTreeVisitor`].

use ember_ast::{
    CompilationUnit, FunctionDeclaration, Identifier, InvocationExpression, LiteralNumber, Node,
    PrintTreeVisitor, ReturnStatement, VariableDeclaration,
};
use ember_lexer::tokenize;
use ember_source::{SourceFile, StringSpan};

const SAMPLE: &str = r#"
fn main() {
    let total = add(1, 2);
    return total;
}
"#;

fn main() {
    tracing_subscriber::fmt::init();

    let file = SourceFile::with_origin(SAMPLE, "demo.ember");
    let tokens = tokenize(&file);
    tracing::info!(count = tokens.len(), "lexed sample program");
    for token in &tokens {
        println!("{:?} {:?}", token.kind, token.lexeme);
    }

    // The parser is out of scope, so the tree below is hand-built rather
    // than produced from `tokens` — it mirrors what scanning `SAMPLE` would
    // eventually hand a parser, for illustration only.
    let unit = sample_tree();

    let mut printer = PrintTreeVisitor::new();
    unit.accept(&mut printer);
    println!("{}", printer.into_output());
}

fn sample_tree() -> CompilationUnit {
    let span = |text: &str| StringSpan::new(0, 0, 0, text);

    let invocation = Node::InvocationExpression(InvocationExpression {
        target: Box::new(Node::Identifier(Identifier {
            name: "add".to_string(),
            span: span("add"),
        })),
        args: vec![
            Node::LiteralNumber(LiteralNumber {
                value: "1".to_string(),
                span: span("1"),
            }),
            Node::LiteralNumber(LiteralNumber {
                value: "2".to_string(),
                span: span("2"),
            }),
        ],
        span: span("add(1, 2)"),
    });

    let total_decl = Node::VariableDeclaration(VariableDeclaration {
        name: "total".to_string(),
        value: Box::new(invocation),
        span: span("let total = add(1, 2)"),
    });

    let return_stmt = Node::ReturnStatement(ReturnStatement {
        value: Some(Box::new(Node::Identifier(Identifier {
            name: "total".to_string(),
            span: span("total"),
        }))),
        span: span("return total"),
    });

    let main_fn = FunctionDeclaration {
        name: "main".to_string(),
        parameters: vec![],
        body: vec![total_decl, return_stmt],
        span: span("fn main() { ... }"),
    };

    CompilationUnit {
        functions: vec![main_fn],
        span: span(SAMPLE),
    }
}
