//! CLI integration tests.
//!
//! Run the compiled binary against fixture packages.

use crate::fixtures::ThemePackage;
use assert_cmd::Command;
use predicates::prelude::*;

fn phoenix_check(package: &ThemePackage) -> Command {
    let mut cmd = Command::cargo_bin("phoenix-theme-check").expect("bin");
    cmd.current_dir(package.root())
        .env_remove("PHOENIX_THEME_ROOT")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_valid_package_exits_zero() {
    let package = ThemePackage::valid();

    phoenix_check(&package)
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed."))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_no_arguments_uses_working_directory() {
    let package = ThemePackage::valid();

    Command::cargo_bin("phoenix-theme-check")
        .expect("bin")
        .current_dir(package.root())
        .env_remove("PHOENIX_THEME_ROOT")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("README.md exists"));
}

#[test]
fn test_missing_readme_exits_one() {
    let package = ThemePackage::valid().without("README.md");

    phoenix_check(&package)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("  ✗ README.md exists"))
        .stderr(predicate::str::contains("1 check(s) failed."));
}

#[test]
fn test_missing_markup_exits_fatal() {
    let package = ThemePackage::valid().without("index.html");

    phoenix_check(&package)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Error: failed to read"))
        .stderr(predicate::str::contains("check(s) failed").not())
        .stdout(predicate::str::contains("3. Brand colours in HTML").not());
}

#[test]
fn test_root_flag_overrides_working_directory() {
    let package = ThemePackage::valid();
    let elsewhere = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("phoenix-theme-check")
        .expect("bin")
        .current_dir(elsewhere.path())
        .env_remove("RUST_LOG")
        .arg("--root")
        .arg(package.root())
        .assert()
        .success();
}

#[test]
fn test_root_from_environment() {
    let package = ThemePackage::valid().without("assets/Phoenix_Transparent.png");
    let elsewhere = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("phoenix-theme-check")
        .expect("bin")
        .current_dir(elsewhere.path())
        .env("PHOENIX_THEME_ROOT", package.root())
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("  ✗ assets/Phoenix_Transparent.png exists"));
}

#[test]
fn test_list_does_not_touch_filesystem() {
    let empty = tempfile::tempdir().expect("temp dir");

    Command::cargo_bin("phoenix-theme-check")
        .expect("bin")
        .current_dir(empty.path())
        .env_remove("PHOENIX_THEME_ROOT")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("4. PowerShell theme definitions"))
        .stdout(predicate::str::contains("  - PS1 uses Phoenix Gold"));
}

#[test]
fn test_unknown_argument_is_rejected() {
    let package = ThemePackage::valid();

    phoenix_check(&package).arg("--fast").assert().code(2);
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("phoenix-theme-check")
        .expect("bin")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_light_theme_exits_one() {
    let package = ThemePackage::valid().replace(
        "Phoenix-SharePoint-Theme.ps1",
        "PhoenixElectric-Light",
        "PhoenixElectric-Pale",
    );

    phoenix_check(&package)
        .assert()
        .code(1)
        .stderr("  ✗ Light theme defined\n1 check(s) failed.\n\n");
}

#[test]
fn test_non_utf8_theme_script_exits_fatal() {
    let package =
        ThemePackage::valid().write_bytes("Phoenix-SharePoint-Theme.ps1", &[0x24, 0xff, 0xfe, 0x7b]);

    phoenix_check(&package)
        .assert()
        .code(3)
        .stdout(predicate::str::ends_with("\n4. PowerShell theme definitions\n"))
        .stderr(predicate::str::contains("Phoenix-SharePoint-Theme.ps1"))
        .stderr(predicate::str::contains("check(s) failed").not());
}
