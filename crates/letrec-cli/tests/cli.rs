//! Runs the `letrec` binary.

use std::process::{Command, Output};

fn letrec(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_letrec"))
        .args(args)
        .env_remove("LETREC_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_run_inline() {
    let out = letrec(&["run", "-e", "let y = 74 in let p = proc (x) -(y, x) in (p 5)"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "69\n");
}

#[test]
fn test_check_inline() {
    let out = letrec(&["check", "--show-subst", "-e", "proc (x: ?) zero?(x)"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "int -> bool\n{\n\t(t_1, int)\n}\n");
}

#[test]
fn test_by_value_warns_only_for_set() {
    let out = letrec(&["run", "--by-value", "--no-color", "-e", "let r = newref(1) in deref(r)"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1\n");
    assert!(stderr(&out).is_empty());

    let out = letrec(&["run", "--by-value", "--no-color", "-e", "let x = 1 in set x = 2"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("with --by-value, variables cannot be assigned"));
}

#[test]
fn test_type_error_exit_code() {
    let out = letrec(&["check", "--no-color", "-e", "if zero?(1) then 1 else true"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).starts_with("1:25: error: type conflict: cannot unify int with bool\n"));
}

#[test]
fn test_unknown_annotation() {
    let out = letrec(&["check", "--no-color", "-e", "proc (x: float) x"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("help: annotations are `int`, `bool` or `?`"));
}

#[test]
fn test_run_file() {
    let path = std::env::temp_dir().join(format!("letrec-cli-{}.lr", std::process::id()));
    std::fs::write(
        &path,
        "% doubles its argument\n\
         letrec double (x) = if zero?(x) then 0 else -((double -(x, 1)), -2)\n\
         in (double 3)\n",
    )
    .unwrap();

    let out = letrec(&["run", path.to_str().unwrap()]);
    std::fs::remove_file(&path).ok();

    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(stdout(&out), "6\n");
}

#[test]
fn test_missing_file() {
    let out = letrec(&["run", "--no-color", "no-such-file.lr"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("error: cannot read no-such-file.lr"));
}

#[test]
fn test_usage_error() {
    let out = letrec(&["launch"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(stderr(&out).contains("unknown command 'launch'"));
    assert!(stderr(&out).contains("usage: letrec"));
}

#[test]
fn test_fmt() {
    let out = letrec(&["fmt", "-e", "let  x=1 in x"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "let x = 1\nin x\n");
}

#[test]
fn test_log_level_option() {
    let out = letrec(&["run", "--log-level=debug", "--no-color", "-e", "1"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1\n");
    assert!(stderr(&out).contains("DEBUG"));
}
