#![cfg(unix)]

use crate::harness::TestContext;
use predicates::prelude::*;

const CATALOG: &str = r#"[
    {"name": "docker", "tests": ["true"], "skip": [{"os": "linux"}]},
    {"name": "brew", "tests": ["true"], "skip": [{"os": "alpine"}, {"arch": "arm64"}]},
    {"name": "node", "tests": {"debian": ["false"], "default": ["true"]}},
    {"name": "winget", "tests": {"win32": ["false"]}}
]"#;

#[test]
fn linux_skip_condition_covers_distributions() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog("roles.json", CATALOG);

    ctx.cli_with_catalog(&catalog)
        .arg("alpine")
        .assert()
        .success()
        .stdout(predicate::str::contains("testing: docker -> skip"))
        .stdout(predicate::str::contains("testing: brew -> skip"))
        .stdout(predicate::str::contains("testing: node -> pass"))
        .stdout(predicate::str::contains("testing: winget -> skip"));
}

#[test]
fn non_linux_os_is_not_skipped_by_linux_condition() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog("roles.json", CATALOG);

    ctx.cli_with_catalog(&catalog)
        .arg("darwin")
        .assert()
        .success()
        .stdout(predicate::str::contains("testing: docker -> pass"))
        .stdout(predicate::str::contains("testing: brew -> pass"));
}

#[test]
fn architecture_flag_feeds_skip_conditions() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog("roles.json", CATALOG);

    ctx.cli_with_catalog(&catalog)
        .args(["darwin", "--arch", "arm64"])
        .assert()
        .success()
        .stdout(predicate::str::contains("testing: brew -> skip"));
}

#[test]
fn os_keyed_tests_use_host_entry_before_default() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog("roles.json", CATALOG);

    ctx.cli_with_catalog(&catalog)
        .arg("debian")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("testing: node -> fail"));

    ctx.cli_with_catalog(&catalog)
        .arg("freebsd")
        .assert()
        .success()
        .stdout(predicate::str::contains("testing: node -> pass"));
}

#[test]
fn yaml_catalog_is_supported() {
    let ctx = TestContext::new();
    let catalog = ctx.write_catalog(
        "roles.yaml",
        "- name: git\n  tests:\n    - \"true\"\n- name: bat\n  skip:\n    - os: linux\n",
    );

    ctx.cli_with_catalog(&catalog)
        .arg("suse")
        .assert()
        .success()
        .stdout(predicate::str::contains("testing: git -> pass"))
        .stdout(predicate::str::contains("testing: bat -> skip"));
}
