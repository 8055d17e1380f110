use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn missing_catalog_exits_before_any_role() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["debian", "--catalog", "absent.json"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("testing:").not())
        .stderr(predicate::str::contains("absent.json"));
}

#[test]
fn malformed_catalog_exits_with_catalog_code() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog("roles.json", r#"{"name": "not-a-list"}"#);

    ctx.cli()
        .arg("debian")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Failed to parse role catalog"));
}

#[test]
fn duplicate_role_names_are_rejected() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog(
        "roles.json",
        r#"[{"name": "git", "tests": ["true"]}, {"name": "git", "tests": ["true"]}]"#,
    );

    ctx.cli()
        .arg("debian")
        .arg("--catalog")
        .arg(&catalog)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("testing:").not())
        .stderr(predicate::str::contains("Role 'git' appears more than once"));
}
