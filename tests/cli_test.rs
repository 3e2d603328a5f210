use std::process::Command;

#[test]
fn test_serve_without_config_exits() {
    let missing = std::env::temp_dir().join("spotrec-missing-config").join("config.yaml");

    let output = Command::new(env!("CARGO_BIN_EXE_spotrec"))
        .args(["serve", "--config"])
        .arg(&missing)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("'config.yaml' was not found"));
    assert!(!stdout.contains("Listening on"));
}

#[test]
fn test_recommend_requires_seed_artist() {
    let output = Command::new(env!("CARGO_BIN_EXE_spotrec"))
        .args(["recommend", "--seed-track", "abc"])
        .output()
        .unwrap();

    assert!(!output.status.success());
}
