//! The six concrete end-to-end scenarios from the language spec, each
//! checked against the literal input and expected AST shape they name.

use petiole_parser::ast::decl::Decl;
use petiole_parser::ast::expr::{BinaryOp, Expr};
use petiole_parser::ast::stmt::Stmt;
use petiole_parser::parse;

fn parse_ok(src: &str) -> petiole_parser::Program {
    let (program, report) = parse(src).expect("lex should succeed");
    assert!(!report.has_errors(), "unexpected parse errors: {:?}", report.errors);
    program
}

#[test]
fn minimal_function() {
    let src = "func Add(a int, b int) int\n    return a + b\n";
    let program = parse_ok(src);
    assert_eq!(program.declarations.len(), 1);

    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(func.name, "Add");
    assert_eq!(func.params.len(), 2);
    assert_eq!(func.params[0].name, "a");
    assert_eq!(func.params[1].name, "b");
    assert_eq!(func.returns.len(), 1);

    assert_eq!(func.body.statements.len(), 1);
    let Stmt::Return { values, .. } = &func.body.statements[0] else {
        panic!("expected a return statement");
    };
    assert_eq!(values.len(), 1);
    assert!(matches!(
        &values[0],
        Expr::Binary { op: BinaryOp::Add, .. }
    ));
}

#[test]
fn indentation_bookkeeping() {
    let src = "func F()\n    if x\n        g()\n    h()\n";
    let tokens = petiole_lexer::lex(src).unwrap();
    let indents = tokens.iter().filter(|t| t.kind == petiole_lexer::TokenKind::Indent).count();
    let dedents = tokens.iter().filter(|t| t.kind == petiole_lexer::TokenKind::Dedent).count();
    assert_eq!(indents, 2);
    assert_eq!(dedents, 2);

    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(func.body.statements.len(), 2);
    assert!(matches!(func.body.statements[0], Stmt::If { .. }));
    assert!(matches!(
        func.body.statements[1],
        Stmt::Expression { expr: Expr::Call { .. }, .. }
    ));
}

#[test]
fn multi_value_declaration() {
    let src = "func F()\n    a, b, err := f()\n";
    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::VarDecl { names, values, .. } = &func.body.statements[0] else {
        panic!("expected a var decl");
    };
    assert_eq!(names, &vec!["a".to_string(), "b".to_string(), "err".to_string()]);
    assert_eq!(values.len(), 1);
    assert!(matches!(&values[0], Expr::Call { .. }));
}

#[test]
fn pipe_with_placeholder() {
    let src = "func F()\n    data |> encode(opts, _, fmt)\n";
    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::Expression { expr, .. } = &func.body.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Pipe { left, right, .. } = expr else {
        panic!("expected a pipe expression");
    };
    assert!(matches!(left.as_ref(), Expr::Identifier { name, .. } if name == "data"));

    let Expr::Call { callee, args, .. } = right.as_ref() else {
        panic!("expected a call on the right of the pipe");
    };
    assert!(matches!(callee.as_ref(), Expr::Identifier { name, .. } if name == "encode"));
    assert_eq!(args.len(), 3);
    assert!(matches!(args[0].value, Expr::Identifier { .. }));
    assert!(matches!(args[1].value, Expr::Discard { .. }));
    assert!(matches!(args[2].value, Expr::Identifier { .. }));
}

#[test]
fn arrow_lambda_in_pipe() {
    let src = "func F()\n    items |> filter((x Repo) => x.Stars > 100)\n";
    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::Expression { expr, .. } = &func.body.statements[0] else {
        panic!("expected an expression statement");
    };
    let Expr::Pipe { right, .. } = expr else {
        panic!("expected a pipe expression");
    };
    let Expr::Call { callee, args, .. } = right.as_ref() else {
        panic!("expected a call on the right of the pipe");
    };
    assert!(matches!(callee.as_ref(), Expr::Identifier { name, .. } if name == "filter"));
    assert_eq!(args.len(), 1);

    let Expr::ArrowLambda { params, body, .. } = &args[0].value else {
        panic!("expected an arrow lambda argument");
    };
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name, "x");
    assert!(params[0].ty.is_some());

    let petiole_parser::ast::expr::LambdaBody::Expr(body_expr) = body else {
        panic!("expected a single-expression lambda body");
    };
    let Expr::Binary { op: BinaryOp::Gt, left, right, .. } = body_expr.as_ref() else {
        panic!("expected a `>` comparison body");
    };
    assert!(matches!(
        left.as_ref(),
        Expr::MethodCall { method, args, .. } if method == "Stars" && args.is_empty()
    ));
    assert!(matches!(right.as_ref(), Expr::Integer { value: 100, .. }));
}

#[test]
fn onerr_block_with_alias() {
    let src = "func F()\n    data := read() onerr as err\n        log(err)\n        return empty, err\n";
    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::VarDecl { names, values, onerr, .. } = &func.body.statements[0] else {
        panic!("expected a var decl");
    };
    assert_eq!(names, &vec!["data".to_string()]);
    assert_eq!(values.len(), 1);
    assert!(matches!(&values[0], Expr::Call { .. }));

    let onerr = onerr.as_ref().expect("expected an onerr clause");
    assert_eq!(onerr.alias.as_deref(), Some("err"));
    let block = onerr.block.as_ref().expect("expected a block handler");
    assert_eq!(block.len(), 2);
    assert!(matches!(block[0], Stmt::Expression { expr: Expr::Call { .. }, .. }));
    let Stmt::Return { values, .. } = &block[1] else {
        panic!("expected a return statement");
    };
    assert_eq!(values.len(), 2);
    assert!(matches!(values[0], Expr::Empty { .. }));
    assert!(matches!(values[1], Expr::Identifier { .. }));
}

#[test]
fn string_literal_carries_its_lexer_literal() {
    let src = "func F() string\n    return \"hi\"\n";
    let program = parse_ok(src);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::Return { values, .. } = &func.body.statements[0] else {
        panic!("expected a return statement");
    };
    match &values[0] {
        Expr::Str { value, .. } => assert_eq!(value, "hi"),
        other => panic!("expected a string literal, got {other:?}"),
    }
}

