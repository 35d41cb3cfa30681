mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{make_method, write_catalog};
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_malformed_catalog_json() {
    let file = catalog_file("[{ \"id\": \"broken\", ");

    let mut cmd = Command::new(cargo_bin!("paypick"));
    cmd.arg("--catalog").arg(file.path()).arg("presets");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("JSON"));
}

#[test]
fn test_unknown_market_in_catalog() {
    let method = serde_json::to_value(make_method("far-away")).unwrap();
    let mut json = method.to_string();
    json = json.replace(r#""markets":["PH"]"#, r#""markets":["SG"]"#);
    let file = catalog_file(&format!("[{json}]"));

    let mut cmd = Command::new(cargo_bin!("paypick"));
    cmd.arg("--catalog").arg(file.path()).arg("filter");

    cmd.assert().failure();
}

#[test]
fn test_inverted_amount_range_is_rejected() {
    let mut method = make_method("inverted");
    method.min_amount = rust_decimal_macros::dec!(500);
    method.max_amount = rust_decimal_macros::dec!(100);
    let file = write_catalog(&[method]);

    let mut cmd = Command::new(cargo_bin!("paypick"));
    cmd.arg("--catalog").arg(file.path()).arg("filter");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("inverted"));
}

#[test]
fn test_missing_catalog_file() {
    let mut cmd = Command::new(cargo_bin!("paypick"));
    cmd.args(["--catalog", "does/not/exist.json", "filter"]);

    cmd.assert().failure();
}

#[test]
fn test_invalid_flag_values() {
    for args in [
        ["filter", "--speed", "warp"],
        ["filter", "--convenience", "teleport"],
        ["filter", "--category", "crypto"],
        ["recommend", "--delivery", "drone"],
    ] {
        let mut cmd = Command::new(cargo_bin!("paypick"));
        cmd.args(args);
        cmd.assert().failure();
    }
}

#[test]
fn test_empty_catalog_is_not_an_error() {
    let file = write_catalog(&[]);

    let mut cmd = Command::new(cargo_bin!("paypick"));
    cmd.arg("--catalog").arg(file.path()).arg("recommend");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No strong match for this order"));
}
