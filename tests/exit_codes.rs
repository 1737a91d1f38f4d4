use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicU64, Ordering};

fn scanprint_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scanprint"));
    cmd.env("HOME", home);
    cmd.env_remove("SCANPRINT_CONFIG");
    cmd.env_remove("SCANPRINT_UI_COLOR");
    cmd.env_remove("SCANPRINT_VERBOSE");
    cmd.env_remove("SCANPRINT_FORMAT_VERSION");
    cmd.env_remove("SCANPRINT_DOCS_BASE_URL");
    cmd.env_remove("SCANPRINT_INFO_GLYPH");
    cmd.env_remove("SCANPRINT_INFO_MAX_REPEAT");
    cmd
}

fn run(home: &Path, args: &[&str]) -> Output {
    scanprint_cmd(home).args(args).output().expect("run scanprint")
}

fn make_temp_home() -> PathBuf {
    static HOME_SEQ: AtomicU64 = AtomicU64::new(0);

    let temp = std::env::temp_dir();
    let seq = HOME_SEQ.fetch_add(1, Ordering::Relaxed);
    let uniq = format!("scanprint-exit-test-{}-{seq}", std::process::id());
    let home = temp.join(uniq);
    let _ = std::fs::remove_dir_all(&home);
    std::fs::create_dir_all(&home).expect("create home");
    home
}

#[test]
fn missing_input_exits_10() {
    let home = make_temp_home();
    let missing = home.join("nope.json").display().to_string();

    let out = run(&home, &["render", &missing]);
    assert_eq!(out.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to read scan results"), "stderr={stderr}");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn malformed_input_exits_10() {
    let home = make_temp_home();
    let input = home.join("bad.json");
    std::fs::write(&input, b"{ not json").expect("write input");
    let input = input.display().to_string();

    let out = run(&home, &["render", &input]);
    assert_eq!(out.status.code(), Some(10));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("failed to parse scan results"), "stderr={stderr}");

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn unknown_format_version_exits_2() {
    let home = make_temp_home();
    let out = run(&home, &["render", "-", "--format-version", "v3"]);
    assert_eq!(out.status.code(), Some(2));

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn unsupported_completion_shell_exits_2() {
    let home = make_temp_home();
    let out = run(&home, &["completion", "tcsh"]);
    assert_eq!(out.status.code(), Some(2));

    let out = run(&home, &["completion", "bash"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("scanprint"));

    let _ = std::fs::remove_dir_all(&home);
}

#[test]
fn unwritable_output_exits_20() {
    let home = make_temp_home();
    let input = home.join("results.json");
    std::fs::write(&input, br#"{"summary": {}}"#).expect("write input");
    let input = input.display().to_string();
    let target = home.join("missing-dir/report.txt").display().to_string();

    let out = run(&home, &["render", &input, "--output", &target]);
    assert_eq!(out.status.code(), Some(20));

    let _ = std::fs::remove_dir_all(&home);
}
