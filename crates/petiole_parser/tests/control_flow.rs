//! Control-header struct-literal ambiguity, for-loop variant dispatch,
//! switch/type-switch reinterpretation, and if-init detection.

use petiole_parser::ast::decl::Decl;
use petiole_parser::ast::stmt::{ForKind, Stmt};
use petiole_parser::parse;

fn first_stmt(body: &str) -> Stmt {
    let src = format!("func F()\n{body}");
    let (program, report) = parse(&src).expect("lex should succeed");
    assert!(!report.has_errors(), "unexpected parse errors: {:?}", report.errors);
    let Decl::Function(func) = &program.declarations[0] else {
        panic!("expected a function declaration");
    };
    func.body.statements[0].clone()
}

#[test]
fn bare_identifier_if_condition_does_not_swallow_its_block() {
    // Without the control-header guard, `if ready` followed by an
    // indented block would be misread as a struct literal continuation
    // of `ready`.
    let stmt = first_stmt("    if ready\n        go()\n");
    let Stmt::If { condition, consequence, .. } = stmt else {
        panic!("expected an if statement");
    };
    assert!(matches!(
        condition,
        petiole_parser::ast::expr::Expr::Identifier { .. }
    ));
    assert_eq!(consequence.statements.len(), 1);
}

#[test]
fn struct_literal_block_form_still_works_outside_a_header() {
    let stmt = first_stmt("    p := Point\n        x: 1\n        y: 2\n");
    let Stmt::VarDecl { values, .. } = stmt else {
        panic!("expected a var decl");
    };
    let petiole_parser::ast::expr::Expr::StructLiteral { name, fields, .. } = &values[0] else {
        panic!("expected a struct literal");
    };
    assert_eq!(name, "Point");
    assert_eq!(fields.len(), 2);
}

#[test]
fn if_with_init_statement() {
    let stmt = first_stmt("    if x := f(); x > 0\n        g()\n");
    let Stmt::If { init, condition, .. } = stmt else {
        panic!("expected an if statement");
    };
    assert!(init.is_some());
    assert!(matches!(
        condition,
        petiole_parser::ast::expr::Expr::Binary { .. }
    ));
}

#[test]
fn for_range_two_variable_form() {
    let stmt = first_stmt("    for i, x in items\n        use(x)\n");
    let Stmt::For { kind, .. } = stmt else {
        panic!("expected a for statement");
    };
    let ForKind::Range { index, binding, .. } = kind else {
        panic!("expected a range for loop");
    };
    assert_eq!(index.as_deref(), Some("i"));
    assert_eq!(binding, "x");
}

#[test]
fn for_numeric_exclusive_and_inclusive() {
    let stmt = first_stmt("    for i from 0 to 10\n        use(i)\n");
    let Stmt::For { kind, .. } = stmt else {
        panic!("expected a for statement");
    };
    let ForKind::Numeric { inclusive, .. } = kind else {
        panic!("expected a numeric for loop");
    };
    assert!(!inclusive);

    let stmt = first_stmt("    for i from 0 through 10\n        use(i)\n");
    let Stmt::For { kind, .. } = stmt else {
        panic!("expected a for statement");
    };
    let ForKind::Numeric { inclusive, .. } = kind else {
        panic!("expected a numeric for loop");
    };
    assert!(inclusive);
}

#[test]
fn bare_for_is_while_true() {
    let stmt = first_stmt("    for\n        break\n");
    let Stmt::For { kind, .. } = stmt else {
        panic!("expected a for statement");
    };
    assert!(matches!(kind, ForKind::Bare));
}

#[test]
fn for_condition_form_does_not_swallow_block_as_struct_literal() {
    let stmt = first_stmt("    for running\n        step()\n");
    let Stmt::For { kind, body, .. } = stmt else {
        panic!("expected a for statement");
    };
    assert!(matches!(kind, ForKind::Condition(_)));
    assert_eq!(body.statements.len(), 1);
}

#[test]
fn type_switch_reinterprets_cast_subject() {
    let stmt = first_stmt(
        "    switch v as Shape\n        when Circle\n            r()\n        otherwise\n            d()\n",
    );
    let Stmt::TypeSwitch { binding, cases, otherwise, .. } = stmt else {
        panic!("expected a type switch");
    };
    assert_eq!(binding, "v");
    assert_eq!(cases.len(), 1);
    assert!(otherwise.is_some());
}

#[test]
fn switch_on_a_bare_identifier_does_not_swallow_its_body() {
    let stmt = first_stmt(
        "    switch mode\n        when 1\n            a()\n",
    );
    let Stmt::Switch { subject, cases, .. } = stmt else {
        panic!("expected a plain switch");
    };
    assert!(matches!(
        subject,
        Some(petiole_parser::ast::expr::Expr::Identifier { .. })
    ));
    assert_eq!(cases.len(), 1);
}

#[test]
fn plain_switch_on_a_value_subject() {
    let stmt = first_stmt(
        "    switch status\n        when 200\n            ok()\n        when 404, 410\n            missing()\n",
    );
    let Stmt::Switch { cases, .. } = stmt else {
        panic!("expected a plain switch");
    };
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[1].values.len(), 2);
}
