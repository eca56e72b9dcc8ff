// main.rsとエントリーポイントのテスト
use std::process::Command;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_prototype_bench"))
}

#[test]
fn test_cli_help() {
    let output = binary().arg("--help").output().expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bench"));
    assert!(stdout.contains("demo"));
}

#[test]
fn test_demo_prints_sections_then_fails() {
    let output = binary().arg("demo").output().expect("Failed to execute binary");

    // 最後の i.fullName() が失敗して終了コード1になる
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let expected = [
        "",
        "Examples using invoke context.",
        "Sander Rossel",
        "Sander Rossel",
        "Sander Rossel",
        "",
        "Examples using delete.",
        "Sander Rossel",
        "undefined",
        "",
        "Example using static prototype property.",
        "Bill Gates is a friend of Sander Rossel",
        "Bill Gates is a friend of Bill Gates",
        "",
        "Examples using inheritance.",
        "Sander Rossel earns 1000000",
        "e is an instance of Employee.",
        "e is an instance of PersonProto.",
        "",
        "Examples using Object.create.",
        "Sander Rossel",
        "o is an instance of PersonProto.",
        "Sander Rossel earns 1000000",
        "e is an instance of Employee2.",
        "e is an instance of PersonProto.",
        "",
        "Examples on __proto__.",
        "__proto__ points to the constructors prototype.",
        "Sander Rossel",
        "Sander Rossel",
    ];
    assert_eq!(stdout.lines().collect::<Vec<_>>(), expected);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("fullName"));
}

#[test]
fn test_all_with_small_iteration_count() {
    let output = binary()
        .args(["all", "--iterations", "1000"])
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "Example benchmarks proto vs. no proto.");
    assert!(lines[1].starts_with("Full name took: "));
    assert!(lines[2].starts_with("No full name took: "));
    assert!(lines[3].starts_with("Proto full name took: "));
    assert_eq!(lines[5], "Examples using invoke context.");
}

#[test]
fn test_bench_writes_json_report() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let report = temp_dir.path().join("report.json");

    let output = binary()
        .args(["bench", "--iterations", "100", "--quiet", "--json"])
        .arg(&report)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let content = std::fs::read_to_string(&report).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["results"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_bench_rejects_zero_iterations() {
    let output = binary()
        .args(["bench", "--iterations", "0"])
        .output()
        .expect("Failed to execute binary");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_demo_has_no_receiver_policy_option() {
    let output = binary()
        .args(["demo", "--receiver-policy", "sloppy"])
        .output()
        .expect("Failed to execute binary");

    // clap の引数エラーは終了コード2
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
