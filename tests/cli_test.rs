mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use common::{make_method, write_catalog};
use paypick::domain::method::Market;
use predicates::prelude::*;
use std::process::Command;

fn paypick() -> Command {
    Command::new(cargo_bin!("paypick"))
}

#[test]
fn test_cli_filter_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["filter", "--market", "PH", "--speed", "instant"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gcash"))
        .stdout(predicate::str::contains("incompatible: Takes up to 2 hours to confirm"))
        .stdout(predicate::str::contains("2 of 5 compatible"))
        // GCash is the top same-day pick, so it carries the star
        .stdout(predicate::str::contains("★ gcash"));

    Ok(())
}

#[test]
fn test_cli_filter_csv() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args([
            "filter",
            "--market",
            "TH",
            "--convenience",
            "cash-preferred",
            "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "id,name,category,fit_status,fit_reason,confirmation_minutes,popularity_rank",
        ))
        .stdout(predicate::str::contains("counter-service,"))
        .stdout(predicate::str::contains("Not a cash payment option"));

    Ok(())
}

#[test]
fn test_cli_filter_search_json() -> Result<(), Box<dyn std::error::Error>> {
    let output = paypick()
        .args(["filter", "--search", "gcash", "--format", "json"])
        .output()?;
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["total"], 5);
    let results = json["results"].as_array().ok_or("results is not an array")?;
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["method"]["id"], "gcash");
    assert_eq!(results[0]["fitStatus"], "compatible");

    Ok(())
}

#[test]
fn test_cli_recommend_defaults() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .arg("recommend")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Based on your same-day delivery order in the Philippines, we recommend:",
        ))
        .stdout(predicate::str::contains("Order value: ₱500"))
        .stdout(predicate::str::contains("1. GCash (100/100)"));

    Ok(())
}

#[test]
fn test_cli_recommend_preset() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["recommend", "--preset", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Based on your express delivery order in Indonesia, we recommend:",
        ))
        .stdout(predicate::str::contains("Rp\u{a0}100.000"));

    Ok(())
}

#[test]
fn test_cli_recommend_unknown_preset_fails() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["recommend", "--preset", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No preset #42"));

    paypick()
        .args(["recommend", "--preset", "0"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn test_cli_recommend_csv_and_json() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["recommend", "--market", "TH", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rank,id,name,score,reason\n1,"));

    let output = paypick()
        .args(["recommend", "--market", "ID", "--delivery", "standard", "--format", "json"])
        .output()?;
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert!(json["isConfident"].is_boolean());
    assert!(json["recommendations"].as_array().ok_or("not an array")?.len() <= 3);

    Ok(())
}

#[test]
fn test_cli_compare() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["compare", "gcash", "instapay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("GCash"))
        .stdout(predicate::str::contains("InstaPay"))
        .stdout(predicate::str::contains("Confirmation time"));

    Ok(())
}

#[test]
fn test_cli_compare_rejects_four_ids() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["compare", "gcash", "instapay", "card", "bdo-direct"])
        .assert()
        .failure();

    Ok(())
}

#[test]
fn test_cli_compare_unknown_only_fails() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["compare", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("None of the requested payment methods exist"));

    Ok(())
}

#[test]
fn test_cli_presets() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Manila · Same-day · Small"))
        .stdout(predicate::str::contains("6. "));

    Ok(())
}

#[test]
fn test_cli_custom_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let mut local = make_method("local-wallet");
    local.name = "Local Wallet".to_string();
    let mut abroad = make_method("abroad");
    abroad.markets = vec![Market::Thailand];
    let file = write_catalog(&[local, abroad]);

    paypick()
        .arg("--catalog")
        .arg(file.path())
        .args(["filter", "--market", "PH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("local-wallet"))
        .stdout(predicate::str::contains("abroad").not())
        .stdout(predicate::str::contains("1 of 1 compatible"));

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_market() -> Result<(), Box<dyn std::error::Error>> {
    paypick()
        .args(["filter", "--market", "SG"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SG"));

    Ok(())
}
