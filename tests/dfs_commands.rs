// tests/dfs_commands.rs

use std::fs;
use std::path::Path;

use hadctl::cluster::dfs::{copy_from_local, copy_to_local, submit_job};
use hadctl::errors::HadctlError;
use hadctl_test_utils::init_tracing;
use hadctl_test_utils::install::FakeInstall;

/// Script that appends its arguments to `invocations.log` in the home dir.
const RECORDING_SCRIPT: &str = r#"printf '%s\n' "$*" >> invocations.log"#;

fn invocations(install: &FakeInstall) -> Vec<String> {
    fs::read_to_string(install.scratch("invocations.log"))
        .map(|s| s.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn copy_from_local_cleans_then_copies() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let data = tempfile::tempdir().unwrap();
    fs::write(data.path().join("input.txt"), b"payload").unwrap();
    let source = data.path().join("input.txt");
    let canonical = fs::canonicalize(&source).unwrap();

    copy_from_local(&settings, &source, Some("/data/in".to_string()), true, true)
        .await
        .unwrap();

    let lines = invocations(&install);
    assert_eq!(
        lines,
        [
            "fs -rmr hdfs://localhost:9000/data/in".to_string(),
            format!("fs -copyFromLocal {} /data/in", canonical.display()),
        ]
    );
}

#[tokio::test]
async fn copy_from_local_target_defaults_to_canonical_source() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let data = tempfile::tempdir().unwrap();
    fs::write(data.path().join("input.txt"), b"payload").unwrap();
    let source = data.path().join("input.txt");
    let canonical = fs::canonicalize(&source).unwrap();

    copy_from_local(&settings, &source, None, false, true)
        .await
        .unwrap();

    let lines = invocations(&install);
    assert_eq!(
        lines,
        [format!(
            "fs -copyFromLocal {} {}",
            canonical.display(),
            canonical.display()
        )]
    );
}

#[tokio::test]
async fn copy_from_local_missing_source_is_fatal() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let missing = Path::new("/nonexistent/input.txt");
    assert!(copy_from_local(&settings, missing, None, true, true)
        .await
        .is_err());
    assert!(invocations(&install).is_empty());
}

#[tokio::test]
async fn copy_from_local_clean_failure_is_only_a_warning() {
    init_tracing();

    // -rmr fails (nothing to clean), the copy itself must still run.
    let script = r#"
case "$*" in
    *-rmr*) exit 255 ;;
    *) printf '%s\n' "$*" >> invocations.log ;;
esac"#;
    let install = FakeInstall::with_script(script).unwrap();
    let settings = install.settings().unwrap();

    let data = tempfile::tempdir().unwrap();
    fs::write(data.path().join("input.txt"), b"payload").unwrap();
    let source = data.path().join("input.txt");

    copy_from_local(&settings, &source, Some("/data/in".to_string()), true, true)
        .await
        .unwrap();

    let lines = invocations(&install);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("fs -copyFromLocal"), "got {lines:?}");
}

#[tokio::test]
async fn copy_to_local_cleans_existing_target_first() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let scratch = tempfile::tempdir().unwrap();
    let target = scratch.path().join("out");
    fs::create_dir_all(target.join("old")).unwrap();
    fs::write(target.join("old/stale.txt"), b"stale").unwrap();

    copy_to_local(&settings, Some("/data/out".to_string()), &target, true, true)
        .await
        .unwrap();

    assert!(!target.exists(), "stale local target should be removed");
    let lines = invocations(&install);
    assert_eq!(
        lines,
        [format!("fs -copyToLocal /data/out {}", target.display())]
    );
}

#[tokio::test]
async fn copy_to_local_source_defaults_to_target_path() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let scratch = tempfile::tempdir().unwrap();
    let target = fs::canonicalize(scratch.path()).unwrap().join("out");

    copy_to_local(&settings, None, &target, true, true)
        .await
        .unwrap();

    let lines = invocations(&install);
    assert_eq!(
        lines,
        [format!(
            "fs -copyToLocal {} {}",
            target.display(),
            target.display()
        )]
    );
}

#[tokio::test]
async fn submit_job_passes_jar_and_parameters() {
    init_tracing();

    let install = FakeInstall::with_script(RECORDING_SCRIPT).unwrap();
    let settings = install.settings().unwrap();

    let jar = Path::new("/tmp/sort-job.jar");
    submit_job(&settings, jar, "sort /data/in /data/out", true)
        .await
        .unwrap();

    let lines = invocations(&install);
    assert_eq!(lines, ["jar /tmp/sort-job.jar sort /data/in /data/out"]);
}

#[tokio::test]
async fn failing_job_surfaces_as_job_failure() {
    init_tracing();

    let install = FakeInstall::with_script("exit 2").unwrap();
    let settings = install.settings().unwrap();

    let err = submit_job(&settings, Path::new("/tmp/sort-job.jar"), "", true)
        .await
        .unwrap_err();
    assert!(matches!(err, HadctlError::JobFailed(2)), "got {err:?}");
}
