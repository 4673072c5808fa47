use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new("cargo")
        .args(["run", "--quiet", "--bin", "sim", "--", "7"])
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["won"], true);
    assert_eq!(v["ships_sunk"], 10);
    let moves = v["moves"].as_u64().unwrap();
    assert!((20..=100).contains(&moves));
    // GameStarted + one MovePlayed per move + GameWon
    assert_eq!(v["events"].as_u64().unwrap(), moves + 2);
    assert_eq!(v["sessions"], 1);
}
