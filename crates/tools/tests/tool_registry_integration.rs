//! Integration tests for calculator tools run through the registry

use serde_json::json;

use nestiq_config::{load_settings_from, Settings};
use nestiq_tools::{create_registry, ToolError, ToolExecutor};

/// Settings from a config directory flow into tool defaults
#[tokio::test]
async fn test_configured_jurisdiction_from_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("default.yaml"),
        "tax:\n  default_jurisdiction: on_ltt\nmortgage:\n  annual_rate_percent: 0\n",
    )
    .unwrap();
    let settings = load_settings_from(dir.path(), None).unwrap();
    let registry = create_registry(&settings);

    let output = registry
        .execute(
            "calculate_transfer_tax",
            json!({"purchasePrice": 500000, "isFirstTimeBuyer": true}),
        )
        .await
        .unwrap();
    let value = output.as_json().unwrap();
    assert_eq!(value["jurisdiction"], "on_ltt");
    assert_eq!(value["exemption"], 4_000.0);
    assert_eq!(value["netTax"], 2_475.0);

    let output = registry
        .execute("calculate_mortgage", json!({"purchasePrice": 300000}))
        .await
        .unwrap();
    assert_eq!(output.as_json().unwrap()["monthlyPayment"], 800.0);
}

/// Unknown jurisdiction codes still produce an estimate
#[tokio::test]
async fn test_unknown_jurisdiction_falls_back() {
    let registry = create_registry(&Settings::default());
    let output = registry
        .execute(
            "calculate_transfer_tax",
            json!({"purchasePrice": 1000000, "jurisdiction": "sk_ltt"}),
        )
        .await
        .unwrap();

    let value = output.as_json().unwrap();
    assert_eq!(value["jurisdiction"], "generic");
    assert_eq!(value["totalTax"], 15_000.0);
    assert_eq!(value["regionName"], "General");
}

/// Tool schemas are advertised in name order
#[tokio::test]
async fn test_list_tools() {
    let registry = create_registry(&Settings::default());
    let names: Vec<String> = registry.list_tools().into_iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["calculate_mortgage", "calculate_transfer_tax"]);

    let err = registry
        .execute("calculate_land_value", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::NotFound(_)));
}
