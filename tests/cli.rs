//! Runs the `parmul` binary against real files.

use std::{
    env, fs,
    path::PathBuf,
    process::{Command, Output},
};

use parmul::{matrix::Matrix, single};

fn scratch(name: &str) -> PathBuf {
    env::temp_dir().join(format!("parmul-cli-{}-{name}", std::process::id()))
}

fn parmul(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_parmul"))
        .args(args)
        .output()
        .expect("failed to run parmul")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn wrong_argument_count_prints_usage() {
    let output = parmul(&["only-one.mat"]);
    assert!(stderr(&output).contains("Usage:"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn known_product_end_to_end() {
    let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]);

    let a_path = scratch("known-a.mat");
    let b_path = scratch("known-b.mat");
    let c_path = scratch("known-c.mat");
    a.store(&a_path).unwrap();
    b.store(&b_path).unwrap();

    let output = parmul(&[
        a_path.to_str().unwrap(),
        b_path.to_str().unwrap(),
        "2",
        c_path.to_str().unwrap(),
    ]);

    let report = stdout(&output);
    assert!(report.contains("A(2x2)"), "report: {report}");
    assert!(report.contains("results match"), "report: {report}");

    let c = Matrix::load(&c_path).unwrap();
    assert_eq!(c, Matrix::from_rows(&[vec![19.0, 22.0], vec![43.0, 50.0]]));

    for path in [a_path, b_path, c_path] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn incompatible_dimensions_abort_without_output() {
    let a_path = scratch("mismatch-a.mat");
    let b_path = scratch("mismatch-b.mat");
    let c_path = scratch("mismatch-c.mat");
    Matrix::zeros(2, 3).store(&a_path).unwrap();
    Matrix::zeros(4, 2).store(&b_path).unwrap();

    let output = parmul(&[
        a_path.to_str().unwrap(),
        b_path.to_str().unwrap(),
        "2",
        c_path.to_str().unwrap(),
    ]);

    assert!(stderr(&output).contains("incompatible"));
    assert!(!c_path.exists(), "no output may be written on mismatch");

    for path in [a_path, b_path] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn oversized_worker_count_is_clamped() {
    let a = Matrix::from_fn(3, 2, |i, j| (i + j) as f64);
    let b = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as f64);

    let a_path = scratch("clamp-a.mat");
    let b_path = scratch("clamp-b.mat");
    let c_path = scratch("clamp-c.mat");
    a.store(&a_path).unwrap();
    b.store(&b_path).unwrap();

    let output = parmul(&[
        a_path.to_str().unwrap(),
        b_path.to_str().unwrap(),
        "10",
        c_path.to_str().unwrap(),
    ]);

    let report = stdout(&output);
    assert!(report.contains("Using 3 workers"), "report: {report}");
    assert!(report.contains("results match"), "report: {report}");

    let c = Matrix::load(&c_path).unwrap();
    assert_eq!(c, single::multiply(&a, &b));

    for path in [a_path, b_path, c_path] {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn missing_input_file_is_reported() {
    let missing = scratch("nowhere.mat");
    let c_path = scratch("nowhere-c.mat");

    let output = parmul(&[
        missing.to_str().unwrap(),
        missing.to_str().unwrap(),
        "1",
        c_path.to_str().unwrap(),
    ]);

    assert!(stderr(&output).contains("cannot access"));
    assert!(!c_path.exists());
}
