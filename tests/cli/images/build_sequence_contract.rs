#![cfg(unix)]

use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn builds_each_distro_with_expected_arguments() {
    let ctx = TestContext::new();

    ctx.images_cli("echo")
        .args(["-d", "alpine", "debian", "-a", "arm64", "-s", "docker", "rust"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "build --no-cache -f tests/integration/alpine.Dockerfile -t bootware:alpine \
             --platform linux/arm64 . --build-arg skip=docker,rust --build-arg test=true",
        ))
        .stdout(predicate::str::contains("Integration test alpine passed."))
        .stdout(predicate::str::contains("Integration test debian passed."))
        .stdout(predicate::str::contains("All integration tests passed."));
}

#[test]
fn cache_flag_drops_no_cache() {
    let ctx = TestContext::new();

    ctx.images_cli("echo")
        .args(["--cache", "--distros", "fedora", "--tags", "git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-cache").not())
        .stdout(predicate::str::contains("--build-arg tags=git"));
}

#[test]
fn first_failed_build_aborts_the_run() {
    let ctx = TestContext::new();

    ctx.images_cli("false")
        .args(["-d", "alpine", "debian"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Integration test").not())
        .stderr(predicate::str::contains("Image build for 'alpine' failed"));
}
