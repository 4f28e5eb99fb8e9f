use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time")
        .as_nanos();
    std::env::temp_dir().join(format!("{}_{}_{}", prefix, std::process::id(), nanos))
}

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_clientbook-import"))
}

#[test]
fn valid_export_exits_zero_and_writes_report() {
    let dir = temp_dir("clientbook_cli_valid");
    fs::create_dir_all(&dir).expect("create dir");
    let input = dir.join("clients.csv");
    fs::write(
        &input,
        "Client Name,File No,Email Address\nAcme Traders,F-101,accounts@acme.example\n",
    )
    .expect("write input");

    let output = bin()
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&dir)
        .arg("--pretty")
        .output()
        .expect("run binary");

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Client import validation: VALID"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("report.json")).expect("report"))
            .expect("json");
    assert_eq!(report["summary"]["row_count"], 1);
    assert_eq!(report["is_valid"], true);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_export_exits_nonzero() {
    let dir = temp_dir("clientbook_cli_invalid");
    fs::create_dir_all(&dir).expect("create dir");
    let input = dir.join("clients.csv");
    fs::write(&input, "Client Name,File No\n,F-101\n").expect("write input");

    let output = bin()
        .arg("--input")
        .arg(&input)
        .arg("--quiet")
        .output()
        .expect("run binary");

    assert!(!output.status.success());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn explicit_mapping_file_overrides_header_guesses() {
    let dir = temp_dir("clientbook_cli_mapping");
    fs::create_dir_all(&dir).expect("create dir");
    let input = dir.join("clients.csv");
    fs::write(&input, "Kunde,Akte\nAcme Traders,F-101\n").expect("write input");
    let mapping = dir.join("mapping.json");
    fs::write(&mapping, r#"{"Kunde": "name", "Akte": "file_no"}"#).expect("write mapping");

    let output = bin()
        .arg("--input")
        .arg(&input)
        .arg("--mapping")
        .arg(&mapping)
        .output()
        .expect("run binary");

    assert!(output.status.success(), "{:?}", output);

    fs::remove_dir_all(&dir).ok();
}
