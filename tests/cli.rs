use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Runs the binary in `dir` and returns the captured output.
fn run_cli(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ucds-bench"))
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap()
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn dry_run_build_enumerates_the_full_grid() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["--dry-run", "build", "cg"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 40);
    assert_eq!(
        lines[0],
        "gcc -Wall -Wno-unknown-pragmas -DBIGFLOAT -fopenmp -O0 -funroll-loops \
         ucds.c projcommon.c runconjgrad.c -o timecg/dmpurucdscg0 -lrt -lm"
    );
    assert!(lines
        .iter()
        .any(|line| line.contains("-o timecg/ucdscgfast")));

    // The output directory is created even on a dry run.
    assert!(dir.path().join("timecg").is_dir());
}

#[test]
fn build_and_run_agree_on_executable_names() {
    let dir = tempdir().unwrap();

    let build = run_cli(dir.path(), &["-n", "build", "test"]);
    assert!(build.status.success());
    let mut built: Vec<String> = stdout_lines(&build)
        .iter()
        .map(|line| {
            let mut tokens = line.split(' ');
            tokens
                .by_ref()
                .find(|token| *token == "-o")
                .expect("compile line without -o");
            format!("./{}", tokens.next().expect("-o without a path"))
        })
        .collect();
    built.sort();

    let run = run_cli(dir.path(), &["-n", "run", "test"]);
    assert!(run.status.success());
    // Header lines hold the bare executable path; invocation lines carry
    // arguments after it.
    let mut swept: Vec<String> = stdout_lines(&run)
        .into_iter()
        .filter(|line| !line.contains(' '))
        .collect();
    swept.sort();

    assert_eq!(built.len(), 40);
    assert_eq!(built, swept);
}

#[test]
fn run_uses_the_suite_sweep_defaults() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["-n", "run", "cg"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    // 40 variants, each a header line plus sizes 1024, 2048, 4096, 8192.
    assert_eq!(lines.len(), 40 * 5);
    assert_eq!(lines[0], "./timecg/dmpurucdscg0");
    assert_eq!(lines[1], "./timecg/dmpurucdscg0 1024 1");
    assert_eq!(lines[4], "./timecg/dmpurucdscg0 8192 1");
}

#[test]
fn run_positionals_override_the_defaults() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["-n", "run", "ucds", "16", "64", "5"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    // 20 variants, each a header line plus sizes 16, 32, 64.
    assert_eq!(lines.len(), 20 * 4);
    assert_eq!(lines[0], "./timeucds/mpurucds0");
    assert_eq!(lines[1], "./timeucds/mpurucds0 16 5");
    assert_eq!(lines[3], "./timeucds/mpurucds0 64 5");
}

#[test]
fn diagonal_suite_sweeps_once_per_diagonal_count() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["-n", "run", "diagmatrix-cl"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    // 40 variants, one size, seven diagonal counts each.
    assert_eq!(lines.len(), 40 * 8);
    assert_eq!(lines[0], "./timediagmatrixcl/dmpurdiagmatrixcl0");
    assert_eq!(lines[1], "./timediagmatrixcl/dmpurdiagmatrixcl0 10 1 10 1");
    assert_eq!(lines[7], "./timediagmatrixcl/dmpurdiagmatrixcl0 10 13 10 1");
}

#[test]
fn intel_builds_source_the_environment_first() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["-n", "build", "icc-test"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 21);
    assert_eq!(
        lines[0],
        "/bin/sh /opt/intel/composer_xe_2013.4.183/bin/compilervars.sh intel64"
    );
    assert!(lines[1].starts_with("/opt/intel/bin/icc "));
}

#[test]
fn setup_and_compiler_overrides_are_honored() {
    let dir = tempdir().unwrap();
    let output = run_cli(
        dir.path(),
        &[
            "-n",
            "--compiler",
            "cc",
            "--setup",
            "env.sh",
            "build",
            "icc-test",
        ],
    );
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines[0], "/bin/sh env.sh intel64");
    assert!(lines[1].starts_with("cc "));
}

#[cfg(unix)]
#[test]
fn failing_compiles_do_not_abort_the_enumeration() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["--compiler", "/bin/false", "build", "ucds"]);
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.matches("warning:").count(), 20);
}

#[test]
fn missing_executables_abort_the_sweep() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["run", "cg"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("ucds-bench:"));
}

#[test]
fn list_names_every_suite() {
    let dir = tempdir().unwrap();
    let output = run_cli(dir.path(), &["list"]);
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    for name in [
        "ucds",
        "test",
        "icc-test",
        "cg",
        "saxpy-cl",
        "dotproduct-cl",
        "diagmatrix-cl",
    ] {
        assert!(text.contains(name), "missing suite {name}");
    }
}
