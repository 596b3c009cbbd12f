use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn wavescope_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wavescope").expect("Failed to find wavescope binary");
    cmd.env_remove("WAVESCOPE_FFMPEG");
    cmd
}

#[test]
fn test_version_flag() -> Result<(), Box<dyn Error>> {
    wavescope_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("wavescope"));
    Ok(())
}

#[test]
fn test_help_lists_style_flags() -> Result<(), Box<dyn Error>> {
    wavescope_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--cqt-timeclamp"))
        .stdout(contains("--use-gpu"));
    Ok(())
}

#[test]
fn test_unknown_flag_exits_with_one() -> Result<(), Box<dyn Error>> {
    wavescope_cmd().arg("--no-such-flag").assert().code(1);
    Ok(())
}

#[test]
fn test_out_of_range_quality() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .args(["--quality", "99"])
        .assert()
        .code(1)
        .stdout(contains("quality"))
        .stdout(contains("[0, 51]"));
    Ok(())
}

#[test]
fn test_negative_frame_rate_is_a_range_error() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .args(["-r", "-5"])
        .assert()
        .code(1)
        .stdout(contains("frame_rate"));
    Ok(())
}

#[test]
fn test_invalid_color() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .args(["--title-color", "red"])
        .assert()
        .code(1)
        .stdout(contains("Invalid hexcode"));
    Ok(())
}

#[test]
fn test_invalid_gpu_selector() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .args(["--use-gpu", "x"])
        .assert()
        .code(1)
        .stdout(contains("use_gpu"));
    Ok(())
}

#[test]
fn test_invalid_engine_path() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    let missing = home.path().join("bin").join("ffmpeg");
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .arg("--ffmpeg")
        .arg(&missing)
        .assert()
        .code(1)
        .stdout(contains("FFmpeg path is invalid"));
    Ok(())
}

#[test]
fn test_log_file_receives_errors() -> Result<(), Box<dyn Error>> {
    let home = tempdir()?;
    let log_path = home.path().join("wavescope.log");
    wavescope_cmd()
        .env("WAVESCOPE_HOME", home.path())
        .args(["--spec-scale", "7thrt", "--log-file"])
        .arg(&log_path)
        .assert()
        .code(1);

    let log = std::fs::read_to_string(&log_path)?;
    assert!(log.contains("spec_scale"), "log file was: {log}");
    Ok(())
}
