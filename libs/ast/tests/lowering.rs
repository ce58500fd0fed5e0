//! Source tree → target tree → code, through the public API only.

use tiny_ast::ast::{Expression, Program, Statement};
use tiny_ast::walker::Node;
use tiny_ast::{generate, transform, traverse, VisitorTable};
use tiny_parser::{parse, tokenize, NodeKind};

fn lower(source: &str) -> Program {
    let program = parse(tokenize(source).expect("lexes")).expect("parses");
    transform(&program).expect("transforms")
}

/// Calls found anywhere below `expression`, none of which may be wrapped.
fn nested_calls(expression: &Expression) -> usize {
    match expression {
        Expression::CallExpression(call) => 1 + call.arguments.iter().map(nested_calls).sum::<usize>(),
        Expression::NumberLiteral(_) | Expression::StringLiteral(_) => 0,
    }
}

#[test]
fn every_source_call_appears_once_in_target() {
    let source = "(a 1 (b 2 (c)) \"x\") (d (e) (f 3))";
    let program = parse(tokenize(source).unwrap()).unwrap();

    let mut source_calls = 0;
    let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |_, _| {
        source_calls += 1;
        Ok(())
    });
    traverse(&program, &mut table).unwrap();
    drop(table);

    let target = transform(&program).unwrap();
    let mut statements = 0;
    let mut target_calls = 0;
    for statement in &target.body {
        if let Statement::ExpressionStatement(stmt) = statement {
            statements += 1;
            target_calls += nested_calls(&Expression::CallExpression(stmt.expression.clone()));
        }
    }

    assert_eq!(source_calls, 6);
    assert_eq!(target_calls, source_calls);
    assert_eq!(statements, 2);
}

#[test]
fn wrapped_iff_direct_child_of_program() {
    let source = "(outer (inner 1)) (solo)";
    let program = parse(tokenize(source).unwrap()).unwrap();

    let mut top_level = Vec::new();
    let mut table = VisitorTable::new().on_enter(NodeKind::CallExpression, |node, parent| {
        if let (Node::CallExpression(call), Some(Node::Program(_))) = (node, parent) {
            top_level.push(call.name.clone());
        }
        Ok(())
    });
    traverse(&program, &mut table).unwrap();
    drop(table);

    let wrapped: Vec<_> = transform(&program)
        .unwrap()
        .body
        .into_iter()
        .filter_map(|s| match s {
            Statement::ExpressionStatement(stmt) => Some(stmt.expression.callee.name.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(wrapped, top_level);
    assert_eq!(wrapped, ["outer", "solo"]);
}

#[test]
fn target_tree_serializes_like_a_js_ast() {
    let json = serde_json::to_value(lower("(add 2 (multiply 3 4))")).unwrap();
    let expression = &json["body"][0]["expression"];
    assert_eq!(json["body"][0]["type"], "ExpressionStatement");
    assert_eq!(expression["callee"]["name"], "add");
    assert_eq!(expression["arguments"][1]["type"], "CallExpression");
    assert_eq!(expression["arguments"][1]["callee"]["name"], "multiply");
}

#[test]
fn generated_code_for_reference_programs() {
    let cases = [
        ("(add 2 3)", "add(2, 3);"),
        ("(add 2 (multiply 3 4))", "add(2, multiply(3, 4));"),
        ("(concat \"foo\" \"bar\")", "concat(\"foo\", \"bar\");"),
        ("(add 2 3) (multiply 4 5)", "add(2, 3);\nmultiply(4, 5);"),
    ];
    for (source, expected) in cases {
        assert_eq!(generate(&lower(source)).unwrap(), expected, "source: {source}");
    }
}
