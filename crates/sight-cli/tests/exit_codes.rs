//! Process-level behavior of the `sightline` binary.

use std::process::{Command, Output};

fn sightline(args: &[&str], credentials: Option<&str>) -> Output {
    sightline_with_log(args, credentials, None)
}

fn sightline_with_log(args: &[&str], credentials: Option<&str>, rust_log: Option<&str>) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_sightline"));
    command
        .args(args)
        .env_remove("VISION_API_ENDPOINT")
        .env_remove("LOG_FORMAT");
    match rust_log {
        Some(filter) => command.env("RUST_LOG", filter),
        None => command.env_remove("RUST_LOG"),
    };
    match credentials {
        Some(path) => command.env("GOOGLE_APPLICATION_CREDENTIALS", path),
        None => command.env_remove("GOOGLE_APPLICATION_CREDENTIALS"),
    };
    command.output().expect("failed to spawn sightline")
}

#[test]
fn test_no_images_prints_usage_and_exits_1() {
    let output = sightline(&["-face"], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage of"));
    assert!(stderr.contains("--face"));
}

#[test]
fn test_unknown_flag_exits_1() {
    let output = sightline(&["-bogus", "a.png"], None);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_credentials_exits_2() {
    let output = sightline(&["-label", "photo.jpg"], None);

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unable to fetch credentials"));
}

#[test]
fn test_fatal_error_printed_regardless_of_log_filter() {
    for filter in ["sight_vision=debug", "off"] {
        let output = sightline_with_log(&["-label", "photo.jpg"], None, Some(filter));

        assert_eq!(output.status.code(), Some(2), "RUST_LOG={filter}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(
            stderr.contains("unable to fetch credentials"),
            "RUST_LOG={filter}: {stderr}"
        );
    }
}

#[test]
fn test_unreadable_image_exits_3() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");

    let output = sightline(
        &["-label", missing.to_str().unwrap()],
        Some("/nonexistent/key.json"),
    );

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing.png"));
}

#[test]
fn test_help_exits_0() {
    let output = sightline(&["--help"], None);
    assert_eq!(output.status.code(), Some(0));
}
