use std::fs;

use lemur::{
    interpret,
    interpreter::{lexer::Lexer, parser::Parser, value::Value},
};
use walkdir::WalkDir;

fn run(source: &str) -> Value {
    match interpret(source) {
        Ok(value) => value,
        Err(e) => panic!("Script failed to parse:\n{source}\nError: {e}"),
    }
}

fn assert_value(source: &str, expected: Value) {
    assert_eq!(run(source), expected, "source: {source}");
}

fn assert_runtime_error(source: &str, message: &str) {
    match run(source) {
        Value::Error(error) => assert_eq!(error.to_string(), message, "source: {source}"),
        other => panic!("Expected a runtime error for {source:?}, got {other:?}"),
    }
}

fn parse_errors(source: &str) -> Vec<String> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_program();
    parser.errors().iter().map(ToString::to_string).collect()
}

#[test]
fn final_values() {
    assert_value("5", Value::Integer(5));
    assert_value("-5", Value::Integer(-5));
    assert_value("!!false", Value::Boolean(false));
    assert_value("(3 > 1) == true", Value::Boolean(true));
    assert_value("5 + 5 * 2", Value::Integer(15));
    assert_value("if (false) { 10 }", Value::Null);
    assert_value("if (true) { if (true) { return 10; } return 5; };", Value::Integer(10));
    assert_value("if (true) { if (false) { return 10; } return 5; };", Value::Integer(5));
    assert_value("let a = 5; a;", Value::Integer(5));
    assert_value("let f = fn(x) { x * 2 }; f(5);", Value::Integer(10));
}

#[test]
fn double_negation_is_the_truthy_projection() {
    assert_value("!!5", Value::Boolean(true));
    assert_value("!!0", Value::Boolean(true));
    assert_value("!!true", Value::Boolean(true));
    assert_value("!!false", Value::Boolean(false));
    assert_value("!!(1 > 2)", Value::Boolean(false));
}

#[test]
fn closures_see_definition_site_bindings() {
    let source = "
        let newAdder = fn(x) { fn(y) { x + y } };
        let addTwo = newAdder(2);
        let x = 100;
        addTwo(3);";
    assert_value(source, Value::Integer(5));
}

#[test]
fn functions_can_call_themselves_through_their_binding() {
    let source = "
        let countDown = fn(x) { if (x == 0) { 0 } else { countDown(x - 1) } };
        countDown(3);";
    assert_value(source, Value::Integer(0));
}

#[test]
fn shadowing_rebinds_in_the_current_scope() {
    assert_value("let x = 5; let x = x + 1; x;", Value::Integer(6));
}

#[test]
fn runtime_errors() {
    assert_runtime_error("5 + true;", "type mismatch: INTEGER + BOOLEAN");
    assert_runtime_error("-true", "unknown operator: -BOOLEAN");
    assert_runtime_error("let x = 1; x + y;", "identifier not found: y");
    assert_runtime_error("1 / 0;", "division by zero");
    assert_runtime_error("9223372036854775807 + 1;", "integer overflow");
    assert_runtime_error("let f = fn(x, y) { x + y }; f(1);",
                         "wrong number of arguments: expected 2, got 1");
    assert_runtime_error("let x = 5; x(1);", "not a function: INTEGER");
}

#[test]
fn the_first_bad_argument_wins() {
    assert_runtime_error("let f = fn(x, y) { x }; f(missing, alsoMissing);",
                         "identifier not found: missing");
}

#[test]
fn parse_errors_accumulate_without_aborting() {
    assert_eq!(parse_errors("let 1 = x;"),
               vec!["expected next token to be IDENT, got INT instead".to_owned(),
                    "no prefix parse function for = found".to_owned()]);
    assert!(parse_errors("let x = 5; let y = x * 2; y;").is_empty());
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.lmr").expect("missing file");
    assert_eq!(run(&script), Value::Integer(55));
}

#[test]
fn docs_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("docs").into_iter()
                            .filter_map(Result::ok)
                            .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_lemur_blocks(&content).into_iter().enumerate() {
            count += 1;
            match interpret(&code) {
                Ok(value) => assert!(!value.is_error(),
                                     "Example {} in {:?} failed:\n{}\n{}",
                                     i + 1,
                                     path,
                                     code,
                                     value),
                Err(e) => panic!("Example {} in {:?} failed to parse:\n{}\nError: {}",
                                 i + 1,
                                 path,
                                 code,
                                 e),
            }
        }
    }

    assert!(count > 0, "No lemur examples found in docs");
}

fn extract_lemur_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lemur") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}
