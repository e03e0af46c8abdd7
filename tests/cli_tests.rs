#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const FIXTURE: &str = include_str!("fixtures/Cargo.toml");

    fn cli() -> Command {
        let mut cmd = Command::cargo_bin("semantic_release_cargo").expect("binary should build");
        cmd.env_remove("NEXT_RELEASE_VERSION")
            .env_remove("SEMANTIC_RELEASE_CWD");
        cmd
    }

    fn project_with_fixture() -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::write(temp_dir.path().join("Cargo.toml"), FIXTURE).expect("Failed to write fixture");
        temp_dir
    }

    /// Config replacing `cargo build --release` with a shell snippet
    fn write_build_config(dir: &Path, script: &str) -> std::path::PathBuf {
        let path = dir.join("release.toml");
        fs::write(
            &path,
            format!("build_command = [\"sh\", \"-c\", \"{}\"]\n", script),
        )
        .expect("Failed to write config");
        path
    }

    #[test]
    fn test_verify_conditions_succeeds_with_manifest() {
        let project = project_with_fixture();
        cli()
            .arg("--cwd")
            .arg(project.path())
            .arg("verify-conditions")
            .assert()
            .success();
    }

    #[test]
    fn test_verify_conditions_fails_without_manifest() {
        let project = TempDir::new().expect("Failed to create temp dir");
        cli()
            .current_dir(project.path())
            .arg("verify-conditions")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Cargo.toml not found"));
    }

    #[test]
    fn test_prepare_requires_version_source() {
        let project = project_with_fixture();
        cli()
            .current_dir(project.path())
            .arg("prepare")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--next-version or --context"));
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_with_next_version() {
        let project = project_with_fixture();
        let config = write_build_config(project.path(), "touch built");

        cli()
            .current_dir(project.path())
            .arg("--config")
            .arg(&config)
            .args(["prepare", "--next-version", "1.0.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Updating Cargo.toml to version 1.0.0"))
            .stdout(predicate::str::contains("Successfully built release binary"));

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert_eq!(
            manifest,
            FIXTURE.replacen("version = \"0.1.0\"", "version = \"1.0.0\"", 1)
        );
        assert!(manifest.contains("version = \"0.4\""));
        assert!(project.path().join("built").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_from_context_file() {
        let project = project_with_fixture();
        let config = write_build_config(project.path(), "exit 0");
        let context = project.path().join("context.json");
        fs::write(
            &context,
            format!(
                r#"{{"cwd": {:?}, "nextRelease": {{"version": "0.2.0", "gitTag": "v0.2.0"}}, "commits": []}}"#,
                project.path().to_string_lossy()
            ),
        )
        .unwrap();

        cli()
            .arg("--config")
            .arg(&config)
            .arg("prepare")
            .arg("--context")
            .arg(&context)
            .assert()
            .success();

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert!(manifest.starts_with("[package]\nname = \"fixture-app\"\nversion = \"0.2.0\"\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_build_failure_is_not_fatal() {
        let project = project_with_fixture();
        let config = write_build_config(project.path(), "exit 101");

        cli()
            .current_dir(project.path())
            .arg("--config")
            .arg(&config)
            .args(["prepare", "--next-version", "0.1.1"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Failed to build release binary"))
            .stderr(predicate::str::contains("exited with status 101"));

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert!(manifest.contains("version = \"0.1.1\""));
    }

    #[test]
    fn test_prepare_rejects_invalid_version() {
        let project = project_with_fixture();
        cli()
            .current_dir(project.path())
            .args(["prepare", "--next-version", "not-a-version"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to parse version 'not-a-version'"));

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert_eq!(manifest, FIXTURE);
    }

    #[cfg(unix)]
    #[test]
    fn test_prepare_reads_context_from_stdin() {
        let project = project_with_fixture();
        let config = write_build_config(project.path(), "exit 0");

        cli()
            .current_dir(project.path())
            .arg("--config")
            .arg(&config)
            .args(["prepare", "--context", "-"])
            .write_stdin(r#"{"nextRelease": {"version": "0.3.0", "notes": "fixes"}, "branch": {"name": "main"}}"#)
            .assert()
            .success()
            .stdout(predicate::str::contains("Updating Cargo.toml to version 0.3.0"));

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert_eq!(
            manifest,
            FIXTURE.replacen("version = \"0.1.0\"", "version = \"0.3.0\"", 1)
        );
    }

    #[test]
    fn test_prepare_unreadable_context_file() {
        let project = project_with_fixture();
        cli()
            .current_dir(project.path())
            .args(["prepare", "--context", "missing-context.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to read release context missing-context.json",
            ));

        let manifest = fs::read_to_string(project.path().join("Cargo.toml")).unwrap();
        assert_eq!(manifest, FIXTURE);
    }
}
