//! End-to-end invocation tests against fake archiver binaries.
//!
//! A scratch binaries tree is laid out the way the shipped layout looks
//! (`<root>/binaries/<platform>/7za`) with small shell scripts standing in
//! for the archiver, so the full spawn/stream/terminate path is exercised
//! without a real 7-Zip install.

#![cfg(unix)]

use anyhow::Result;
use sevenz_runtime::{ArchiverRunner, DriverConfig, DriverError, ProgressSink, Switches};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::sync::{Mutex, Once};
use tempfile::TempDir;
use tokio_test::assert_err;

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Platform directory the resolver picks on this host.
fn platform_dir() -> &'static str {
    if cfg!(target_os = "macos") {
        "darwin"
    } else {
        std::env::consts::OS
    }
}

/// Lay out `<root>/binaries/<platform>/7za` as a shell script.
fn fake_archiver(script: &str) -> Result<TempDir> {
    let root = TempDir::new()?;
    let dir = root.path().join("binaries").join(platform_dir());
    fs::create_dir_all(&dir)?;
    let binary = dir.join("7za");
    fs::write(&binary, format!("#!/bin/sh\n{script}\n"))?;
    fs::set_permissions(&binary, fs::Permissions::from_mode(0o755))?;
    Ok(root)
}

#[derive(Default)]
struct CollectingSink {
    lines: Mutex<Vec<String>>,
}

impl ProgressSink for CollectingSink {
    fn line(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[tokio::test]
async fn successful_invocation_resolves_with_the_argument_vector() -> Result<()> {
    init_tracing();
    let root = fake_archiver("echo '+ file0.txt'\nexit 0")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let args = runner
        .run("7za", r#"a "out.7z" "file0.txt""#, &Switches::new(), false)
        .await?;
    assert_eq!(args[0], "a");
    assert_eq!(args.last().map(String::as_str), Some("-bb2"));
    Ok(())
}

#[tokio::test]
async fn progress_lines_arrive_in_emission_order() -> Result<()> {
    init_tracing();
    let root = fake_archiver("echo '+ file0.txt'\necho '+ file1.txt'\nexit 0")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));
    let sink = CollectingSink::default();

    runner
        .run_with_sink("7za", r#"a "out.7z""#, &Switches::new(), false, &sink)
        .await?;
    assert_eq!(
        *sink.lines.lock().unwrap(),
        vec!["+ file0.txt", "+ file1.txt"]
    );
    Ok(())
}

#[tokio::test]
async fn error_line_rejects_even_when_the_exit_code_is_zero() -> Result<()> {
    init_tracing();
    let root = fake_archiver("echo 'Error: Cannot find archive'\nexit 0")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let err = runner
        .run("7za", r#"l "missing.7z""#, &Switches::new(), false)
        .await
        .unwrap_err();
    match err {
        DriverError::ArchiverReported { message } => assert_eq!(message, "Cannot find archive"),
        other => panic!("expected ArchiverReported, got {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn the_first_error_report_is_retained() -> Result<()> {
    init_tracing();
    let root = fake_archiver("echo 'Error: first failure'\necho 'Error: second failure'\nexit 1")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let err = runner
        .run("7za", r#"l "a.7z""#, &Switches::new(), false)
        .await
        .unwrap_err();
    match err {
        DriverError::ArchiverReported { message } => assert_eq!(message, "first failure"),
        other => panic!("expected ArchiverReported, got {other}"),
    }
    Ok(())
}

#[tokio::test]
async fn stderr_reports_are_also_scanned() -> Result<()> {
    init_tracing();
    let root = fake_archiver("echo 'Error: Unsupported command' >&2\nexit 0")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let err = runner
        .run("7za", r#"q "a.7z""#, &Switches::new(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, DriverError::ArchiverReported { .. }));
    Ok(())
}

#[tokio::test]
async fn nonzero_exit_without_error_text_is_an_exit_failure() -> Result<()> {
    init_tracing();
    let root = fake_archiver("exit 2")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let err = runner
        .run("7za", r#"t "a.7z""#, &Switches::new(), false)
        .await
        .unwrap_err();
    assert!(matches!(err, DriverError::ExitFailure { code: Some(2) }));
    Ok(())
}

#[tokio::test]
async fn missing_binary_is_a_launch_error() -> Result<()> {
    init_tracing();
    let root = TempDir::new()?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));

    let result = runner.run("7za", "l", &Switches::new(), false).await;
    assert!(matches!(result, Err(DriverError::Launch(_))));
    Ok(())
}

#[tokio::test]
async fn validation_fails_before_any_spawn() -> Result<()> {
    init_tracing();
    // No binaries tree at all: validation must reject first.
    let runner = ArchiverRunner::new(DriverConfig::new("/nonexistent"));
    let result = runner.run("", "l", &Switches::new(), false).await;
    tokio_test::assert_err!(&result);
    assert!(matches!(result, Err(DriverError::EmptyInvocation)));
    Ok(())
}

#[tokio::test]
async fn fake_archiver_receives_the_built_arguments() -> Result<()> {
    init_tracing();
    // The script echoes its arguments back, one per line.
    let root = fake_archiver("for arg in \"$@\"; do echo \"$arg\"; done")?;
    let runner = ArchiverRunner::new(DriverConfig::new(root.path()));
    let sink = CollectingSink::default();

    let args = runner
        .run_with_sink(
            "7za",
            r#"a "out.7z" "in file.txt""#,
            &Switches::new().flag("sdel", true),
            false,
            &sink,
        )
        .await?;
    assert_eq!(*sink.lines.lock().unwrap(), args);
    Ok(())
}

/// Full delete-then-extract scenario against a real archiver install.
///
/// Requires a binaries tree at `SEVENZ_BINARIES_ROOT` (or next to the test
/// executable); run with `--ignored` where one is available.
#[tokio::test]
#[ignore]
async fn delete_then_extract_removes_the_selected_files() -> Result<()> {
    init_tracing();
    let scratch = TempDir::new()?;
    let src = scratch.path().join("zip");
    fs::create_dir_all(src.join("folder"))?;
    for name in ["file0.txt", "file1.txt", "file2.txt"] {
        fs::write(src.join(name), name)?;
    }
    fs::write(src.join("folder").join("file3.txt"), "file3")?;

    let archive = scratch.path().join("test.7z");
    let archive = archive.to_string_lossy();
    let out = scratch.path().join("out");
    let out = out.to_string_lossy();

    let runner = ArchiverRunner::new(DriverConfig::from_environment());
    runner
        .add(&archive, [src.to_string_lossy().as_ref()], &Switches::new())
        .await?;
    runner
        .delete(
            &archive,
            ["zip/file0.txt", "zip/file1.txt"],
            &Switches::new(),
        )
        .await?;
    runner.extract_full(&archive, &out, &Switches::new()).await?;

    let extracted = scratch.path().join("out").join("zip");
    assert!(!extracted.join("file0.txt").exists());
    assert!(!extracted.join("file1.txt").exists());
    assert!(extracted.join("file2.txt").exists());
    assert!(extracted.join("folder").exists());
    Ok(())
}
