use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ufuncgen_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ufuncgen").unwrap();
    // keep a stray ufuncgen.json in the working tree out of the tests
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = tempfile::tempdir().unwrap();

    ufuncgen_cmd(&dir)
        .arg("only-source.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_generates_target() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ufuncs.txt");
    let target = dir.path().join("ufunc_instances.hpp");
    std::fs::write(&source, "Math\nadd(x1, x2)\ncpp[x1 + x2]\nAdds two values.\n").unwrap();

    ufuncgen_cmd(&dir).arg(&source).arg(&target).assert().success();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("struct _add"));
    assert!(written.contains("  ufunc_binary<_add> add;\t// Adds two values.\n"));
}

#[test]
fn test_arity_error_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ufuncs.txt");
    let target = dir.path().join("out.hpp");
    std::fs::write(&source, "clip(a, lo, hi)\n").unwrap();

    ufuncgen_cmd(&dir)
        .arg(&source)
        .arg(&target)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("clip is neither unary nor binary"))
        .stderr(predicate::str::contains("may be incomplete"));
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ufuncs.txt");
    let target = dir.path().join("out.hpp");
    let config = dir.path().join("custom.json");
    std::fs::write(&source, "neg(x)\ncpp[-x]\n").unwrap();
    std::fs::write(&config, r#"{"namespace": "xt"}"#).unwrap();

    ufuncgen_cmd(&dir)
        .arg(&source)
        .arg(&target)
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.contains("namespace xt {"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("ufuncs.txt");
    let target = dir.path().join("out.hpp");
    let config = dir.path().join("ufuncgen.json");
    std::fs::write(&source, "neg(x)\ncpp[-x]\n").unwrap();
    std::fs::write(&config, r#"{"namespace": ""}"#).unwrap();

    ufuncgen_cmd(&dir)
        .arg(&source)
        .arg(&target)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("namespace must not be empty"))
        .stderr(predicate::str::contains("may be incomplete").not());

    assert!(!target.exists());
}
