//! Request files on disk → report, through the same entry points the binary uses.

use std::io::Write;

use nem_cli::{check_address, check_request_json, read_request, CheckReport, CliError, OutputFormat};
use nem_crypto::{encode_address, NemAddressCodec};
use nem_types::NetworkId;

fn request_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

fn supply_change_json() -> &'static str {
    r#"{
        "transaction": {"network": 152, "timestamp": 1, "fee": 2, "deadline": 3},
        "supply_change": {"namespace": "gimre.games.pong", "mosaic": "paddles", "type": 1, "delta": 10}
    }"#
}

#[test]
fn accepted_request_from_file() {
    let file = request_file(supply_change_json());
    let json = read_request(file.path().to_str().unwrap(), 64 * 1024).unwrap();
    let report = check_request_json(&json, &NemAddressCodec).unwrap();
    assert!(report.is_accepted());
    assert_eq!(
        report.render(OutputFormat::Text).unwrap(),
        "accepted: supply_change (0x4002) on testnet"
    );
}

#[test]
fn rejected_request_reports_first_violation() {
    let json = supply_change_json().replace(r#""delta": 10"#, r#""delta": null"#);
    let report = check_request_json(&json, &NemAddressCodec).unwrap();
    assert_eq!(
        report,
        CheckReport::Rejected {
            code: "missing_field",
            reason: "No delta provided".to_string(),
        }
    );
}

#[test]
fn malformed_json_is_an_error_not_a_rejection() {
    let result = check_request_json("{ not json", &NemAddressCodec);
    assert!(matches!(result, Err(CliError::Json(_))));
}

#[test]
fn oversized_request_is_refused() {
    let file = request_file(supply_change_json());
    let result = read_request(file.path().to_str().unwrap(), 16);
    assert!(matches!(result, Err(CliError::RequestTooLarge { limit: 16 })));
}

#[test]
fn missing_request_file_is_an_io_error() {
    let result = read_request("/nonexistent/request.json", 1024);
    assert!(matches!(result, Err(CliError::Io { .. })));
}

#[test]
fn address_check_uses_network() {
    let address = encode_address(NetworkId::Mijin, &[0x5a; 20]);
    assert!(check_address(&address, NetworkId::Mijin).valid);
    assert!(!check_address(&address, NetworkId::Mainnet).valid);
}
