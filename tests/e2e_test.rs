/// End-to-end tests for the CLI
///
/// Only offline paths are exercised: platform listing, the synthetic Taobao
/// resolver, QR interpretation and argument/config failures. LCSC lookups
/// are covered against mock fetchers in the integration tests.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const TAOBAO_ID: &str = "123456789012";

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - synthetic resolution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("component-resolver")
            .arg(TAOBAO_ID)
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("component-resolver")
            .arg("--help")
            .assert()
            .code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("component-resolver")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: No platform recognizes the code
    #[test]
    fn test_exit_code_unrecognized_code() {
        cargo_bin_cmd!("component-resolver")
            .arg("XYZ-123")
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Unrecognized platform code format: XYZ-123",
            ));
    }

    /// Exit code 1: QR payload without a quantity
    #[test]
    fn test_exit_code_unrecognized_qr_payload() {
        cargo_bin_cmd!("component-resolver")
            .args(["--qr", "{pc:C2040}"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Unrecognized QR payload format"));
    }

    /// Exit code 1: whitespace-only QR payload
    #[test]
    fn test_exit_code_empty_qr_payload() {
        cargo_bin_cmd!("component-resolver")
            .args(["--qr", "   "])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("QR payload is empty"));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("component-resolver")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("component-resolver")
            .args([TAOBAO_ID, "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Neither a code nor a payload
    #[test]
    fn test_exit_code_missing_input() {
        cargo_bin_cmd!("component-resolver").assert().code(2);
    }

    /// Exit code 2: Code and payload are mutually exclusive
    #[test]
    fn test_exit_code_code_and_qr_conflict() {
        cargo_bin_cmd!("component-resolver")
            .args([TAOBAO_ID, "--qr", "{pc:C2040,qty:1}"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - explicit config file missing
    #[test]
    fn test_exit_code_missing_config_file() {
        cargo_bin_cmd!("component-resolver")
            .args([TAOBAO_ID, "-c", "/nonexistent/component-resolver.config.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    /// Exit code 3: Application error - timeout outside the accepted range
    #[test]
    fn test_exit_code_invalid_timeout() {
        cargo_bin_cmd!("component-resolver")
            .args([TAOBAO_ID, "--timeout", "0"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("timeout must be between"));
    }

    /// Exit code 1: Oversized code is rejected as user input
    #[test]
    fn test_exit_code_oversized_code() {
        let code = "C".repeat(5000);
        cargo_bin_cmd!("component-resolver")
            .arg(code)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Component code is too large"));
    }

    /// Exit code 1: Oversized QR payload is rejected as user input
    #[test]
    fn test_exit_code_oversized_qr_payload() {
        let payload = format!("{{pc:C2040,qty:1,pad:{}}}", "x".repeat(5000));
        cargo_bin_cmd!("component-resolver")
            .args(["--qr", payload.as_str()])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("QR payload is too large"));
    }
}

#[test]
fn test_list_platforms_in_dispatch_order() {
    let output = cargo_bin_cmd!("component-resolver")
        .arg("--list-platforms")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 2);
    assert_eq!(json["platforms"][0], "立创商城(LCSC)");
    assert_eq!(json["platforms"][1], "淘宝");
}

#[test]
fn test_list_platforms_markdown() {
    cargo_bin_cmd!("component-resolver")
        .args(["--list-platforms", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. 立创商城(LCSC)"))
        .stdout(predicate::str::contains("2. 淘宝"));
}

#[test]
fn test_resolve_taobao_code_as_json() {
    let output = cargo_bin_cmd!("component-resolver")
        .arg(TAOBAO_ID)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["name"], "淘宝元件");
    assert_eq!(json["platform_code"], TAOBAO_ID);
    assert_eq!(json["platform_name"], "淘宝");
    assert_eq!(
        json["platform_url"],
        "https://item.taobao.com/item.htm?id=123456789012"
    );
}

#[test]
fn test_resolve_taobao_code_as_markdown() {
    cargo_bin_cmd!("component-resolver")
        .args([TAOBAO_ID, "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Field | Value |"))
        .stdout(predicate::str::contains("淘宝元件"));
}

#[test]
fn test_scan_qr_payload() {
    let output = cargo_bin_cmd!("component-resolver")
        .args(["--qr", "{pc:123456789012,qty:3,on:SO123}"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["quantity"], 3);
    assert_eq!(json["component"]["platform_code"], TAOBAO_ID);
    assert_eq!(json["qrcode_info"]["code"], TAOBAO_ID);
    assert_eq!(json["qrcode_info"]["attributes"]["order_number"], "SO123");
}

#[test]
fn test_write_output_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("component.json");

    cargo_bin_cmd!("component-resolver")
        .args([TAOBAO_ID, "-o", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["platform_code"], TAOBAO_ID);
}
