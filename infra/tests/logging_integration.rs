//! Integration tests for the console + per-level file logger

use std::fs;
use std::path::Path;
use std::thread;

use tempfile::TempDir;
use tracing::dispatcher::{self, Dispatch};

use ink_infra::logging::{build_subscriber, ComponentLogger, LoggingError, ERROR_LOG, INFO_LOG, WARN_LOG};
use ink_shared::config::LoggingConfig;

const LOG: ComponentLogger = ComponentLogger::new("auth");

fn test_config(dir: &Path) -> LoggingConfig {
    LoggingConfig::new(dir).with_level("info").with_ansi(false)
}

fn read_log(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap()
}

#[test]
fn test_levels_route_to_their_own_files() {
    let dir = TempDir::new().unwrap();
    let subscriber = build_subscriber(&test_config(dir.path())).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        LOG.info("login", format_args!("user {} signed in", 7));
        LOG.warn("login", format_args!("slow password check"));
        LOG.error("login", format_args!("token store unreachable"));
    });

    let info = read_log(dir.path(), INFO_LOG);
    let warn = read_log(dir.path(), WARN_LOG);
    let error = read_log(dir.path(), ERROR_LOG);

    assert!(info.contains("user 7 signed in"));
    assert!(!info.contains("slow password check"));
    assert!(!info.contains("token store unreachable"));

    assert!(warn.contains("slow password check"));
    assert!(!warn.contains("user 7 signed in"));

    assert!(error.contains("token store unreachable"));
    assert!(!error.contains("slow password check"));
}

#[test]
fn test_lines_carry_timestamp_and_fields() {
    let dir = TempDir::new().unwrap();
    let subscriber = build_subscriber(&test_config(dir.path())).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        LOG.warn("refresh", format_args!("refresh token rejected"));
    });

    let warn = read_log(dir.path(), WARN_LOG);
    let line = warn.lines().next().expect("one warning line");

    assert!(line.starts_with(|c: char| c.is_ascii_digit()), "missing timestamp: {line}");
    assert!(line.contains("WARN"));
    assert!(line.contains("component=\"auth\""));
    assert!(line.contains("operation=\"refresh\""));
    assert!(!line.contains('\u{1b}'), "file output must not carry ANSI codes");
}

#[test]
fn test_level_filter_drops_lower_levels() {
    let dir = TempDir::new().unwrap();
    let config = test_config(dir.path()).with_level("warn");
    let subscriber = build_subscriber(&config).unwrap();

    tracing::subscriber::with_default(subscriber, || {
        LOG.info("startup", format_args!("filtered out"));
        LOG.warn("startup", format_args!("kept"));
    });

    assert!(read_log(dir.path(), INFO_LOG).is_empty());
    assert!(read_log(dir.path(), WARN_LOG).contains("kept"));
}

#[test]
fn test_files_are_appended_across_reopens() {
    let dir = TempDir::new().unwrap();

    for round in 0..2 {
        let subscriber = build_subscriber(&test_config(dir.path())).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            LOG.info("startup", format_args!("round {}", round));
        });
    }

    let info = read_log(dir.path(), INFO_LOG);
    assert!(info.contains("round 0"));
    assert!(info.contains("round 1"));
    assert_eq!(info.lines().count(), 2);
}

#[test]
fn test_creates_nested_directory() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("var").join("log").join("inkwell");

    build_subscriber(&test_config(&nested)).unwrap();

    for name in [INFO_LOG, WARN_LOG, ERROR_LOG] {
        assert!(nested.join(name).is_file(), "{name} should exist");
    }
}

#[test]
fn test_directory_creation_failure() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not-a-directory");
    fs::write(&blocker, "plain file").unwrap();

    let err = build_subscriber(&test_config(&blocker.join("logs"))).err().unwrap();

    assert!(matches!(err, LoggingError::CreateDirectory { .. }));
}

#[test]
fn test_file_open_failure() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(WARN_LOG)).unwrap();

    let err = build_subscriber(&test_config(dir.path())).err().unwrap();

    match err {
        LoggingError::OpenFile { path, .. } => assert_eq!(path, dir.path().join(WARN_LOG)),
        other => panic!("expected OpenFile, got {other:?}"),
    }
}

#[test]
fn test_concurrent_writers_do_not_interleave() {
    let dir = TempDir::new().unwrap();
    let dispatch = Dispatch::new(build_subscriber(&test_config(dir.path())).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let dispatch = dispatch.clone();
            thread::spawn(move || {
                dispatcher::with_default(&dispatch, || {
                    for n in 0..100 {
                        LOG.info("load", format_args!("worker {} line {} end", worker, n));
                    }
                });
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let info = read_log(dir.path(), INFO_LOG);
    let lines: Vec<&str> = info.lines().collect();
    assert_eq!(lines.len(), 800);
    for line in lines {
        assert_eq!(line.matches(" INFO ").count(), 1, "interleaved line: {line}");
        assert!(line.contains(" end"), "truncated line: {line}");
    }
}
