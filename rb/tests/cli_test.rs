//! Binary smoke tests
//!
//! None of these reach the network: they cover argument handling and
//! input rejection, which happen before any fetch.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rbx(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rbx").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("SPOONACULAR_API_KEY", "test-key")
        .current_dir(home.path());
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    rbx(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("trending"))
        .stdout(predicate::str::contains("ingredients"))
        .stdout(predicate::str::contains("products"))
        .stdout(predicate::str::contains("cook"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();
    rbx(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_blank_search_is_rejected() {
    let home = TempDir::new().unwrap();
    rbx(&home)
        .args(["search", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a search term."));
}

#[test]
fn test_blank_ingredients_are_rejected() {
    let home = TempDir::new().unwrap();
    rbx(&home)
        .args(["ingredients", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter at least one ingredient."));
}

#[test]
fn test_blank_product_is_rejected() {
    let home = TempDir::new().unwrap();
    rbx(&home)
        .args(["products", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a product name."));
}

#[test]
fn test_non_numeric_recipe_id_is_rejected() {
    let home = TempDir::new().unwrap();
    rbx(&home).args(["recipe", "pancakes"]).assert().failure();
}

#[test]
fn test_bad_config_file_fails() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("broken.yml");
    std::fs::write(&path, "provider: [not, a, map]").unwrap();

    rbx(&home)
        .args(["--config", path.to_str().unwrap(), "search", "soup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
