//! Primary-expression forms not already exercised elsewhere: arrow
//! lambdas with a block body, bracket list literals, struct-literal
//! trailing commas, and the `as Type` postfix cast.

use petiole_parser::ast::decl::Decl;
use petiole_parser::ast::expr::{Expr, LambdaBody};
use petiole_parser::ast::stmt::Stmt;
use petiole_parser::ast::ty::Type;
use petiole_parser::parse;

fn first_value(body: &str) -> Expr {
    let src = format!("func F()\n{body}");
    let (program, report) = parse(&src).expect("lex should succeed");
    assert!(!report.has_errors(), "unexpected parse errors: {:?}", report.errors);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    let Stmt::VarDecl { values, .. } = &func.body.statements[0] else {
        panic!("expected a var decl");
    };
    values[0].clone()
}

#[test]
fn arrow_lambda_with_an_indented_block_body() {
    let value = first_value("    f := x =>\n        y := x + 1\n        y\n");
    let Expr::ArrowLambda { params, body, .. } = value else {
        panic!("expected an arrow lambda");
    };
    assert_eq!(params.len(), 1);
    assert!(matches!(body, LambdaBody::Block(stmts) if stmts.len() == 2));
}

#[test]
fn typed_multi_param_arrow_lambda() {
    let value = first_value("    f := (x int, y int) => x + y\n");
    let Expr::ArrowLambda { params, body, .. } = value else {
        panic!("expected an arrow lambda");
    };
    assert_eq!(params.len(), 2);
    assert!(params.iter().all(|p| p.ty.is_some()));
    assert!(matches!(body, LambdaBody::Expr(_)));
}

#[test]
fn zero_param_arrow_lambda() {
    let value = first_value("    f := () => 1\n");
    let Expr::ArrowLambda { params, .. } = value else {
        panic!("expected an arrow lambda");
    };
    assert!(params.is_empty());
}

#[test]
fn bracket_list_literal_is_untyped() {
    let value = first_value("    xs := [1, 2, 3]\n");
    let Expr::ListLiteral { element_type, elements, .. } = value else {
        panic!("expected a list literal");
    };
    assert!(element_type.is_none());
    assert_eq!(elements.len(), 3);
}

#[test]
fn bracket_list_literal_tolerates_a_trailing_comma() {
    let value = first_value("    xs := [1, 2, 3,]\n");
    let Expr::ListLiteral { elements, .. } = value else {
        panic!("expected a list literal");
    };
    assert_eq!(elements.len(), 3);
}

#[test]
fn struct_literal_brace_form_tolerates_a_trailing_comma() {
    let value = first_value("    p := Point{ x: 1, y: 2, }\n");
    let Expr::StructLiteral { fields, .. } = value else {
        panic!("expected a struct literal");
    };
    assert_eq!(fields.len(), 2);
}

#[test]
fn type_cast_postfix() {
    let value = first_value("    n := v as int\n");
    let Expr::TypeCast { target, .. } = value else {
        panic!("expected a type cast");
    };
    assert!(matches!(target, Type::Primitive { .. }));
}

#[test]
fn list_of_type_with_no_brace_is_a_typed_empty_shorthand() {
    let value = first_value("    xs := list of int\n");
    let Expr::ListLiteral { element_type, elements, .. } = value else {
        panic!("expected a list literal");
    };
    assert!(element_type.is_some());
    assert!(elements.is_empty());
}
