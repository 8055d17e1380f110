use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_os_exits_with_usage_code() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["--arch", "arm64"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: The os argument is required"));
}

#[test]
fn unknown_option_after_os_exits_with_usage_code() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["debian", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error: No such option --bogus"));
}

#[test]
fn flag_without_value_exits_with_usage_code() {
    let ctx = TestContext::new();

    ctx.cli().args(["debian", "--tags"]).assert().code(2);
}

#[test]
fn help_prints_usage() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rolecheck [OPTIONS] <OS>"));
}
