//! CLI tests

use super::*;
use crate::error::Error;
use clap::Parser;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use test_case::test_case;

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

fn parse(values: &[&str]) -> Cli {
    let mut argv = vec!["json-to-ts"];
    argv.extend_from_slice(values);
    Cli::try_parse_from(argv).unwrap()
}

// ============================================================================
// Input resolution
// ============================================================================

#[test]
fn test_resolve_no_arguments() {
    let dir = tempdir().unwrap();
    let err = resolve_input(&[], dir.path()).unwrap_err();
    assert!(matches!(err, Error::MissingInput));
}

#[test]
fn test_resolve_literal_json() {
    let dir = tempdir().unwrap();
    let source = resolve_input(&args(&[r#"{"a": 1}"#]), dir.path()).unwrap();
    assert_eq!(source, InputSource::Literal(r#"{"a": 1}"#.to_string()));
}

#[test]
fn test_resolve_existing_file_relative_to_cwd() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), r#"{"a": 1}"#).unwrap();

    let source = resolve_input(&args(&["data.json"]), dir.path()).unwrap();
    assert_eq!(source, InputSource::File(dir.path().join("data.json")));
}

#[test]
fn test_resolve_file_wins_over_literal() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("data.json"), "{}").unwrap();

    let source = resolve_input(&args(&["data.json", r#"{"b": 2}"#]), dir.path()).unwrap();
    assert_eq!(source, InputSource::File(dir.path().join("data.json")));
}

#[test]
fn test_resolve_last_literal_wins() {
    let dir = tempdir().unwrap();
    let source = resolve_input(&args(&["[1]", r#"{"b": 2}"#]), dir.path()).unwrap();
    assert_eq!(source, InputSource::Literal(r#"{"b": 2}"#.to_string()));
}

#[test]
fn test_resolve_missing_file_lists_candidates() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("users.json"), "{}").unwrap();
    fs::write(dir.path().join("orders.JSON"), "{}").unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    let err = resolve_input(&args(&["user.json", "other.json"]), dir.path()).unwrap_err();

    match err {
        Error::FileNotFound {
            path, candidates, ..
        } => {
            assert_eq!(path, std::path::PathBuf::from("other.json"));
            assert_eq!(candidates, vec!["orders.JSON", "users.json"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_list_json_files_missing_dir() {
    assert!(list_json_files(std::path::Path::new("/no/such/dir/anywhere")).is_empty());
}

#[test_case("{\"a\":1}", true ; "object")]
#[test_case("  [1, 2]", true ; "array with leading space")]
#[test_case("\"text\"", true ; "string")]
#[test_case("-1.5", true ; "negative number")]
#[test_case("42", true ; "number")]
#[test_case("null", true ; "null")]
#[test_case("data.json", false ; "file name")]
#[test_case("./dir/data.json", false ; "relative path")]
#[test_case("", false ; "empty")]
fn test_looks_like_json(arg: &str, expected: bool) {
    assert_eq!(looks_like_json(arg), expected);
}

#[test]
fn test_read_file_source() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("in.json");
    fs::write(&path, "[true]").unwrap();

    assert_eq!(InputSource::File(path).read().unwrap(), "[true]");
}

#[test]
fn test_read_missing_file_source() {
    let err = InputSource::File("/no/such/in.json".into()).read().unwrap_err();
    assert!(err.to_string().starts_with("Failed to read /no/such/in.json"));
}

// ============================================================================
// Argument parsing and options
// ============================================================================

#[test]
fn test_parse_flags() {
    let cli = parse(&[
        "--root-name",
        "User",
        "--use-types",
        "--no-export",
        "--optional",
        "--output",
        "types.ts",
        "user.json",
    ]);

    assert_eq!(cli.root_name.as_deref(), Some("User"));
    assert!(cli.use_types);
    assert!(cli.no_export);
    assert!(cli.optional);
    assert_eq!(cli.output, Some("types.ts".into()));
    assert_eq!(cli.inputs, vec!["user.json"]);
}

#[test]
fn test_parse_negative_number_input() {
    let cli = parse(&["--optional", "-1.5"]);
    assert_eq!(cli.inputs, vec!["-1.5"]);

    let runner = Runner::new(cli);
    assert_eq!(runner.generate().unwrap(), "");
}

#[test]
fn test_unknown_flag_still_rejected() {
    let argv = ["json-to-ts", "--bogus", "{}"];
    assert!(Cli::try_parse_from(argv).is_err());
}

#[test]
fn test_default_options() {
    let runner = Runner::new(parse(&["{}"]));
    assert_eq!(runner.build_options().unwrap(), crate::ConvertOptions::default());
}

#[test]
fn test_flags_override_options_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("options.yaml");
    fs::write(&config, "rootName: FromFile\noptionalFields: true\n").unwrap();

    let runner = Runner::new(parse(&[
        "--config",
        config.to_str().unwrap(),
        "--root-name",
        "FromFlag",
        "--use-types",
        "{}",
    ]));
    let options = runner.build_options().unwrap();

    assert_eq!(options.root_name, "FromFlag");
    assert!(options.optional_fields);
    assert!(!options.use_interfaces);
    assert!(options.export_types);
}

#[test]
fn test_empty_root_name_flag_rejected() {
    let runner = Runner::new(parse(&["--root-name", "", "{}"]));
    assert!(matches!(
        runner.build_options().unwrap_err(),
        Error::Config { .. }
    ));
}

// ============================================================================
// Logging
// ============================================================================

#[test_case(false, None, "warn" ; "default")]
#[test_case(true, None, "debug" ; "verbose")]
#[test_case(false, Some("debug"), "debug" ; "rust log raises level")]
#[test_case(true, Some("json_to_ts=trace"), "json_to_ts=trace" ; "rust log wins over verbose")]
#[test_case(false, Some("error"), "error" ; "rust log lowers level")]
#[test_case(true, Some("  "), "debug" ; "blank rust log ignored")]
fn test_log_directives(verbose: bool, rust_log: Option<&str>, expected: &str) {
    assert_eq!(log_directives(verbose, rust_log), expected);
}

// ============================================================================
// Runner
// ============================================================================

#[test]
fn test_generate_from_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("user.json");
    fs::write(&input, r#"{"id": 7, "profile": {"bio": null}}"#).unwrap();

    let runner = Runner::new(parse(&["--root-name", "User", input.to_str().unwrap()]));

    assert_eq!(
        runner.generate().unwrap(),
        "export interface Profile {\n  bio: null;\n}\n\nexport interface User {\n  id: number;\n  profile: Profile;\n}"
    );
}

#[test]
fn test_run_writes_output_file() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("types.ts");

    let runner = Runner::new(parse(&[
        "--no-export",
        "--output",
        output.to_str().unwrap(),
        r#"{"ok": true}"#,
    ]));
    runner.run().unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "interface RootObject {\n  ok: boolean;\n}"
    );
}

#[test]
fn test_run_invalid_json_fails() {
    let runner = Runner::new(parse(&["{\"broken\": "]));
    assert!(matches!(runner.run().unwrap_err(), Error::InvalidInput(_)));
}
