//! CLI argument surface: usage errors must be rejected before any resource
//! is touched and must not leave artifacts behind.

use assert_cmd::Command;

#[test]
fn help_works() {
    Command::cargo_bin("sgemm-bench")
        .unwrap()
        .arg("--help")
        .assert()
        .success();
}

#[test]
fn missing_arguments_fail() {
    Command::cargo_bin("sgemm-bench")
        .unwrap()
        .args(["64", "64"])
        .assert()
        .failure();
}

#[test]
fn unsupported_variant_is_rejected_without_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let ref_out = dir.path().join("naive.bin");
    let kernel_out = dir.path().join("tuned.bin");

    let output = Command::cargo_bin("sgemm-bench")
        .unwrap()
        .current_dir(dir.path())
        .args(["4", "4", "8"])
        .arg("--reference-out")
        .arg(&ref_out)
        .arg("--kernel-out")
        .arg(&kernel_out)
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8(output).unwrap();
    assert!(stderr.contains("n must be 24 or 16"), "stderr: {stderr}");

    assert!(!ref_out.exists());
    assert!(!kernel_out.exists());
}

#[test]
fn zero_dimension_is_rejected() {
    Command::cargo_bin("sgemm-bench")
        .unwrap()
        .args(["0", "4", "16"])
        .assert()
        .failure();
}
