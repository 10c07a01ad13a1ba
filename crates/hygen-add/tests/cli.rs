//! Integration tests for the hygen-add binary
//!
//! Each test runs the binary inside a temporary working directory with the
//! global module root and destination redirected into that directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("work")).unwrap();
        fs::create_dir_all(dir.path().join("global")).unwrap();
        Self { dir }
    }

    fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn global(&self) -> PathBuf {
        self.dir.path().join("global")
    }

    fn dest(&self) -> PathBuf {
        self.dir.path().join("dest")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("hygen-add").unwrap();
        cmd.current_dir(self.work())
            .env("NPM_CONFIG_PREFIX", self.global())
            .env("HYGEN_TMPLS", self.dest())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }
}

/// `bar/` generator plus a loose `baz.txt`
fn write_templates(root: &Path) {
    fs::create_dir_all(root.join("bar/new")).unwrap();
    fs::write(root.join("bar/new/hello.ejs.t"), "---\nto: hello.txt\n---\nhi").unwrap();
    fs::write(root.join("baz.txt"), "source baz").unwrap();
}

#[test]
fn test_no_identifier_prints_usage() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Please specify a package to add."))
        .stdout(predicate::str::contains("--prefix"));
}

#[test]
fn test_unknown_package_is_not_found() {
    let sandbox = Sandbox::new();

    sandbox
        .cmd()
        .arg("cra")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cra not found"));

    assert!(!sandbox.dest().exists());
}

#[test]
fn test_adds_generators_from_path() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.work().join("foo/_templates"));

    sandbox
        .cmd()
        .arg("foo/_templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("added: bar"))
        .stdout(predicate::str::contains("added: baz.txt"));

    assert_eq!(
        fs::read_to_string(sandbox.dest().join("bar/new/hello.ejs.t")).unwrap(),
        "---\nto: hello.txt\n---\nhi"
    );
    assert_eq!(
        fs::read_to_string(sandbox.dest().join("baz.txt")).unwrap(),
        "source baz"
    );
}

#[test]
fn test_declined_conflict_is_skipped() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.work().join("foo/_templates"));
    fs::create_dir_all(sandbox.dest()).unwrap();
    fs::write(sandbox.dest().join("baz.txt"), "local changes").unwrap();

    sandbox
        .cmd()
        .args(["foo/_templates", "--no"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added: bar"))
        .stdout(predicate::str::contains("skipped: baz.txt"));

    assert_eq!(
        fs::read_to_string(sandbox.dest().join("baz.txt")).unwrap(),
        "local changes"
    );
}

#[test]
fn test_confirmed_conflict_is_overwritten() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.work().join("foo/_templates"));
    fs::create_dir_all(sandbox.dest()).unwrap();
    fs::write(sandbox.dest().join("baz.txt"), "local changes").unwrap();

    sandbox
        .cmd()
        .args(["foo/_templates", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added: baz.txt"));

    assert_eq!(
        fs::read_to_string(sandbox.dest().join("baz.txt")).unwrap(),
        "source baz"
    );
}

#[test]
fn test_prefix_renames_generators() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.work().join("foo/_templates"));

    sandbox
        .cmd()
        .args(["foo/_templates", "--prefix", "p"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added: p-bar"))
        .stdout(predicate::str::contains("added: p-baz.txt"));

    assert!(sandbox.dest().join("p-bar/new/hello.ejs.t").is_file());
    assert!(!sandbox.dest().join("bar").exists());
}

#[test]
fn test_resolves_global_module() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.global().join("hygen-cra/_templates"));

    sandbox
        .cmd()
        .arg("cra")
        .assert()
        .success()
        .stdout(predicate::str::contains("added: bar"));

    assert!(sandbox.dest().join("baz.txt").is_file());
}

#[test]
fn test_exact_skips_module_prefix() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.global().join("canvas/_templates"));

    sandbox
        .cmd()
        .arg("canvas")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("canvas not found"));

    sandbox
        .cmd()
        .args(["canvas", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added: bar"));
}

#[test]
fn test_path_wins_over_module() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.global().join("hygen-cra/_templates"));
    fs::create_dir_all(sandbox.work().join("cra")).unwrap();
    fs::write(sandbox.work().join("cra/local.txt"), "local").unwrap();

    sandbox
        .cmd()
        .arg("cra")
        .assert()
        .success()
        .stdout(predicate::str::contains("added: local.txt"))
        .stdout(predicate::str::contains("bar").not());
}

#[test]
fn test_copy_failure_names_package() {
    let sandbox = Sandbox::new();
    write_templates(&sandbox.global().join("hygen-cra/_templates"));
    // A file where the destination directory should be
    fs::write(sandbox.dest(), "").unwrap();

    sandbox
        .cmd()
        .arg("cra")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Can't add hygen-cra"))
        .stdout(predicate::str::contains("Failed to create destination"));

    sandbox
        .cmd()
        .args(["cra", "--name", "create-react-app"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Can't add create-react-app"));
}

#[test]
fn test_destination_equal_to_source_is_refused() {
    let sandbox = Sandbox::new();
    let templates = sandbox.work().join("_templates");
    write_templates(&templates);

    sandbox
        .cmd()
        .env("HYGEN_TMPLS", &templates)
        .args(["_templates", "--yes"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Can't add hygen-_templates"))
        .stdout(predicate::str::contains("destination is the source or inside it"));

    assert_eq!(
        fs::read_to_string(templates.join("baz.txt")).unwrap(),
        "source baz"
    );
    assert_eq!(
        fs::read_to_string(templates.join("bar/new/hello.ejs.t")).unwrap(),
        "---\nto: hello.txt\n---\nhi"
    );
}
