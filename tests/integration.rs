//! Integration tests for the tokcop pipeline.
//!
//! These tests exercise the full path: dump loading, config loading, checker
//! registry, checker execution and diagnostic collection. They write real
//! JSON dumps and YAML configs to a temp directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tokcop::checker::registry::CheckerRegistry;
use tokcop::config::load_config;
use tokcop::diagnostic::Severity;
use tokcop::linter::{lint_all, lint_tokens};
use tokcop::token::dump::{load_dump, parse_dump};

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Dump JSON for `lines` of whitespace-separated tokens. Brackets are linked by
/// nesting; `extra` patches individual tokens by position (AST edges,
/// variables).
fn dump_json(file: &str, lines: &[&str], extra: &[(usize, Value)], variables: Value) -> String {
    let mut tokens = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    for (line_idx, line) in lines.iter().enumerate() {
        for (col, word) in line.split_whitespace().enumerate() {
            let idx = tokens.len();
            let mut tok = json!({
                "id": format!("t{}", idx + 1),
                "str": word,
                "linenr": line_idx + 1,
                "column": col + 1,
            });
            match word {
                "(" | "[" | "{" => stack.push(idx),
                ")" | "]" | "}" => {
                    let open = stack.pop().unwrap();
                    tok["link"] = json!(format!("t{}", open + 1));
                    let opener: &mut Value = &mut tokens[open];
                    opener["link"] = json!(format!("t{}", idx + 1));
                }
                _ => {}
            }
            tokens.push(tok);
        }
    }
    for (idx, patch) in extra {
        for (key, value) in patch.as_object().unwrap() {
            tokens[*idx][key] = value.clone();
        }
    }
    json!({ "file": file, "tokens": tokens, "variables": variables }).to_string()
}

#[test]
fn for_loop_should_be_while_loop_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let condition_only = write_file(
        dir.path(),
        "a.json",
        &dump_json("a.cpp", &["for ( ; true ; ) {", "}"], &[], json!([])),
    );
    let counted = write_file(
        dir.path(),
        "b.json",
        &dump_json(
            "b.cpp",
            &["for ( int i = 0 ; i < n ; ++i ) {", "  f ( ) ;", "}"],
            &[],
            json!([]),
        ),
    );

    let result = tokcop::run_dumps(&[condition_only.as_path(), counted.as_path()], None).unwrap();
    assert_eq!(result.list_count, 2);
    let rendered: Vec<String> = result
        .diagnostics
        .iter()
        .filter(|d| d.checker == "ForLoopShouldBeWhileLoop")
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "a.cpp:1:1: style: ForLoopShouldBeWhileLoop: Use a while loop instead of a for loop without initialization and increment."
        ]
    );
}

#[test]
fn config_disables_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_file(
        dir.path(),
        "a.json",
        &dump_json("a.cpp", &["goto out ;", "if ( x ) { }", "out : ;"], &[], json!([])),
    );
    let config = write_file(
        dir.path(),
        ".tokcop.yml",
        "Checkers:\n  GotoStatement:\n    Enabled: false\n  EmptyIfStatement:\n    Severity: warning\n",
    );

    let result = tokcop::run_dumps(&[dump.as_path()], Some(config.as_path())).unwrap();
    assert_eq!(result.diagnostics.len(), 1);
    let d = &result.diagnostics[0];
    assert_eq!(d.checker, "EmptyIfStatement");
    assert_eq!(d.severity, Severity::Warning);
    assert_eq!((d.location.line, d.location.column), (2, 1));
}

#[test]
fn unnecessary_empty_condition_from_dump() {
    // if ( v . empty ( ) ) { for ( auto && x : v ) { } }
    let json = dump_json(
        "v.cpp",
        &[
            "if ( v . empty ( ) )",
            "{",
            "for ( auto && x : v )",
            "{ }",
            "}",
        ],
        &[(2, json!({ "variable": "v1" })), (15, json!({ "variable": "v1" }))],
        json!([{ "id": "v1", "nameToken": "t3" }]),
    );
    let list = parse_dump("fallback.cpp", &json).unwrap();
    assert_eq!(list.path(), "v.cpp");
    let registry = CheckerRegistry::default_registry();
    let config = load_config(Some(Path::new("/nonexistent/.tokcop.yml"))).unwrap();
    let diagnostics = lint_tokens(&list, &registry, &config);
    let names: Vec<&str> = diagnostics.iter().map(|d| d.checker.as_str()).collect();
    assert!(names.contains(&"UnnecessaryEmptyCondition"), "{names:?}");
    assert!(names.contains(&"EmptyForStatement"), "{names:?}");
}

#[test]
fn unnecessary_empty_condition_ignores_shadowing_variable() {
    // The loop ranges over an inner `v`, a different variable from the guarded one.
    let json = dump_json(
        "s.cpp",
        &["if ( v . empty ( ) ) {", "for ( auto && x : v ) { }", "}"],
        &[(2, json!({ "variable": "v1" })), (15, json!({ "variable": "v2" }))],
        json!([
            { "id": "v1", "nameToken": "t3" },
            { "id": "v2", "nameToken": "t16" }
        ]),
    );
    let list = parse_dump("s.cpp", &json).unwrap();
    let registry = CheckerRegistry::default_registry();
    let config = load_config(Some(Path::new("/nonexistent/.tokcop.yml"))).unwrap();
    let diagnostics = lint_tokens(&list, &registry, &config);
    assert!(
        diagnostics.iter().all(|d| d.checker != "UnnecessaryEmptyCondition"),
        "{diagnostics:?}"
    );
}

#[test]
fn expression_tree_checkers_from_dump() {
    // x = ! ! y ;  with `=` over `x` and the outer `!`.
    let json = dump_json(
        "e.cpp",
        &["x = ! ! y ;"],
        &[
            (0, json!({ "astParent": "t2" })),
            (1, json!({ "astOperand1": "t1", "astOperand2": "t3" })),
            (2, json!({ "astParent": "t2", "astOperand1": "t4" })),
            (3, json!({ "astParent": "t3", "astOperand1": "t5" })),
            (4, json!({ "astParent": "t4" })),
        ],
        json!([]),
    );
    let list = parse_dump("e.cpp", &json).unwrap();
    let registry = CheckerRegistry::default_registry();
    let config = load_config(Some(Path::new("/nonexistent/.tokcop.yml"))).unwrap();
    let result = lint_all(std::slice::from_ref(&list), &registry, &config);
    let found: Vec<(&str, usize)> = result
        .diagnostics
        .iter()
        .map(|d| (d.checker.as_str(), d.anchor.index()))
        .collect();
    assert!(found.contains(&("MultipleUnaryOperator", 2)), "{found:?}");
    assert!(found.contains(&("UseNamedLogicOperator", 2)), "{found:?}");
    assert!(found.contains(&("UseNamedLogicOperator", 3)), "{found:?}");
}

#[test]
fn bad_dump_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let dump = write_file(
        dir.path(),
        "broken.json",
        r#"{"tokens":[{"id":"t1","str":"(","link":"t9"}]}"#,
    );
    let err = load_dump(&dump).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("broken.json"), "{message}");
    assert!(message.contains("t9"), "{message}");
}

#[test]
fn missing_dump_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(tokcop::run_dumps(&[missing.as_path()], None).is_err());
}
