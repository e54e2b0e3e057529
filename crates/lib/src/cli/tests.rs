use std::ffi::OsString;
use std::path::Path;

use super::{error_context, LineCol, Opts};

fn args(args: &[&str]) -> Vec<OsString> {
    args.iter().map(OsString::from).collect()
}

#[test]
fn test_default_opts() {
    let opts = Opts::parse_from(args(&[])).unwrap();
    assert!(!opts.json);
    assert_eq!(opts.log_level(), log::LevelFilter::Info);
    assert_eq!(
        opts.input_or(Path::new("inputs/d11.txt")),
        Path::new("inputs/d11.txt")
    );
}

#[test]
fn test_opts() {
    let opts = Opts::parse_from(args(&["--json", "-V", "--verbose", "input.txt"])).unwrap();
    assert!(opts.json);
    assert_eq!(opts.log_level(), log::LevelFilter::Trace);
    assert_eq!(opts.input_or(Path::new("default")), Path::new("input.txt"));

    let opts = Opts::parse_from(args(&["--", "--json"])).unwrap();
    assert!(!opts.json);
    assert_eq!(opts.input_or(Path::new("default")), Path::new("--json"));
}

#[test]
fn test_bad_opts() {
    assert!(Opts::parse_from(args(&["--bench"])).is_err());
    assert!(Opts::parse_from(args(&["a.txt", "b.txt"])).is_err());
    assert!(Opts::parse_from(args(&["--", "a.txt", "b.txt"])).is_err());
}

#[test]
fn test_output() {
    let opts = Opts::parse_from(args(&[])).unwrap();
    let mut o = opts.output(Vec::new());
    o.answer("part1", 10605u64).unwrap();
    o.error("boom").unwrap();
    let out = String::from_utf8(o.into_inner()).unwrap();
    assert_eq!(out, "part1: 10605\nerror: boom\n");
}

#[test]
fn test_json_output() {
    let opts = Opts::parse_from(args(&["--json"])).unwrap();
    let mut o = opts.output(Vec::new());
    o.answer("part2", 2713310158u64).unwrap();
    o.error(format_args!("ran out of {}", "items")).unwrap();
    let out = String::from_utf8(o.into_inner()).unwrap();

    let mut lines = out.lines();

    let answer: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(answer["type"], "answer");
    assert_eq!(answer["data"]["name"], "part2");
    assert_eq!(answer["data"]["value"], 2713310158u64);

    let message: serde_json::Value = serde_json::from_str(lines.next().unwrap()).unwrap();
    assert_eq!(message["type"], "message");
    assert_eq!(message["data"]["kind"], "error");
    assert_eq!(message["data"]["output"], "ran out of items");

    assert!(lines.next().is_none());
}

#[test]
fn test_error_context() {
    let error = error_context(
        Path::new("inputs/d11.txt"),
        Some(LineCol::new(3, 18)),
        anyhow::anyhow!("divisor must be non-zero"),
    );

    assert_eq!(error.to_string(), "inputs/d11.txt:4:19");
    assert_eq!(
        format!("{error:#}"),
        "inputs/d11.txt:4:19: divisor must be non-zero"
    );
}
