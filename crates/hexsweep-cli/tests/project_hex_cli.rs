use assert_cmd::cargo::cargo_bin_cmd;
use hexsweep_testing::{TestProject, assertions, fixtures};
use predicates::prelude::*;

fn sample_project() -> TestProject {
    TestProject::new()
        .with_file("src/theme.css", fixtures::THEME_CSS)
        .with_file("src/Button.tsx", fixtures::BUTTON_TSX)
        .with_file("package.json", fixtures::PACKAGE_JSON)
        .with_file("node_modules/lib/index.js", "module.exports = 1;")
}

#[test]
fn test_writes_all_outputs_into_root_by_default() {
    let project = sample_project();

    let mut cmd = cargo_bin_cmd!("project-hex");
    project.configure_command(&mut cmd).arg(project.root());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Processing: package.json"))
        .stdout(predicate::str::contains("Done! 3 files converted"))
        .stdout(predicate::str::contains("CONVERSION COMPLETE"))
        .stdout(predicate::str::contains("node_modules").not());

    let root = project.root();
    assert!(root.join("hexdump_detailed.txt").is_file());
    assert!(root.join("project_combined.bin").is_file());
    assert!(root.join("project_combined_hex.txt").is_file());
}

#[test]
fn test_output_dir_option_and_rerun_is_reproducible() {
    let project = sample_project();
    let out = project.workdir().join("out");

    for _ in 0..2 {
        let mut cmd = cargo_bin_cmd!("project-hex");
        project
            .configure_command(&mut cmd)
            .arg(project.root())
            .arg("--output-dir")
            .arg(&out);
        cmd.assert().success();
    }

    // Outputs land outside the project, so the second run sees the same tree.
    assert!(!project.root().join("hexdump_detailed.txt").exists());
    let archive = std::fs::read(out.join("project_combined.bin")).unwrap();
    assert!(archive.starts_with(b"\n--- package.json ---\n{"));

    let hex_text = std::fs::read_to_string(out.join("project_combined_hex.txt")).unwrap();
    let payload: Vec<&str> = hex_text.lines().skip(6).collect();
    assertions::assert_hex_block(&payload).unwrap();
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_abort_the_run() {
    let project = sample_project().with_unreadable("src/broken.js");

    let mut cmd = cargo_bin_cmd!("project-hex");
    project.configure_command(&mut cmd).arg(project.root());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Done! 3 files converted"))
        .stdout(predicate::str::contains("1 files could not be read"));

    let report = std::fs::read_to_string(project.root().join("hexdump_detailed.txt")).unwrap();
    assert!(report.contains("### ERROR: "));
    assert!(report.contains("broken.js"));
    assert!(report.contains("Total files: 3\n"));
}

#[test]
fn test_config_overrides_extensions() {
    let project = sample_project();
    let config = project.workdir().join("hexsweep.toml");
    std::fs::write(&config, "[dump]\nextensions = [\"css\"]\n").unwrap();

    let mut cmd = cargo_bin_cmd!("project-hex");
    project
        .configure_command(&mut cmd)
        .arg(project.root())
        .arg("--config")
        .arg(&config);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Processing: src/theme.css"))
        .stdout(predicate::str::contains("Button.tsx").not());
}

#[test]
fn test_missing_root_argument_is_a_usage_error() {
    let project = sample_project();

    let mut cmd = cargo_bin_cmd!("project-hex");
    project.configure_command(&mut cmd);
    cmd.assert().failure().stderr(predicate::str::contains("<ROOT>"));
}

#[test]
fn test_unwritable_output_is_fatal() {
    let project = sample_project();
    let blocker = project.workdir().join("blocker");
    std::fs::write(&blocker, "a file, not a directory").unwrap();

    let mut cmd = cargo_bin_cmd!("project-hex");
    project
        .configure_command(&mut cmd)
        .arg(project.root())
        .arg("--output-dir")
        .arg(&blocker);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_nonexistent_root_is_fatal() {
    let project = sample_project();

    let mut cmd = cargo_bin_cmd!("project-hex");
    project
        .configure_command(&mut cmd)
        .arg(project.temp_dir().join("nope"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Not a directory"));
}
