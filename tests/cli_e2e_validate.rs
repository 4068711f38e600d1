//! End-to-end tests for the `validate` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of the
//! `validate` subcommand from a user's perspective.

mod common;
use common::prelude::*;

#[test]
fn test_validate_valid_tree() {
    let fixture = TestFixture::new()
        .with_primary(configs::MINIMAL)
        .with_file("jobs/build.yml", configs::BUILD_JOB)
        .with_file("orbs/node.yml", "circleci/node@5.0.2\n")
        .with_file("orbs/mine/commands/greet.yml", "steps: [checkout]");

    fixture
        .command()
        .args(["--color", "never", "validate", "."])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Configuration at . packs cleanly"))
        .stdout(predicate::str::contains("Commands: 1"))
        .stdout(predicate::str::contains("Jobs: 1"))
        .stdout(predicate::str::contains("Local orbs: 1"))
        .stdout(predicate::str::contains("Orb references: 1"));
}

#[test]
fn test_validate_invalid_yaml() {
    let fixture = TestFixture::new()
        .with_primary(configs::MINIMAL)
        .with_file("jobs/build.yml", configs::INVALID_YAML);

    fixture
        .command()
        .args(["--color", "never", "validate", "."])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERR] ParseError"))
        .stderr(predicate::str::contains("is invalid"));
}

#[test]
fn test_validate_nested_reserved_directory() {
    let fixture = TestFixture::new()
        .with_primary(configs::MINIMAL)
        .with_file("commands/extra/greet.yml", "steps: []");

    fixture
        .command()
        .args(["--color", "never", "validate", "."])
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERR] StructureError"))
        .stdout(predicate::str::contains("inside 'commands'"));
}

#[test]
fn test_validate_fixture_summary() {
    let root = fixture_dir("nested-orbs-and-local-commands").join("test");

    cargo_bin_cmd!("config-pack")
        .args(["--color", "never", "validate"])
        .arg(&root)
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands: 4"))
        .stdout(predicate::str::contains("Jobs: 2"))
        .stdout(predicate::str::contains("Executors: 1"))
        .stdout(predicate::str::contains("Local orbs: 2"))
        .stdout(predicate::str::contains("Orb references: 1"));
}
