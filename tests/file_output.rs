use linelog::output::open_file;
use linelog::{Logger, OutputTarget, Severity};
use std::fs;
use tempfile::TempDir;

#[test]
fn logger_appends_lines_to_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");

    let mut logger = Logger::builder()
        .output(open_file(&path).unwrap())
        .build();
    logger.info("one").unwrap();
    logger.warn("two", Severity::Medium).unwrap();
    drop(logger);

    let mut logger = Logger::builder()
        .output(open_file(&path).unwrap())
        .build();
    logger.error("three", 3).unwrap();
    drop(logger);

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[INFO]: one\n[WARN (Medium)]: two\n[ERROR (3)]: three\n"
    );
}

#[test]
fn file_target_opens_sink() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sub").join("target.log");

    let sink = OutputTarget::File(path.clone()).open().unwrap();
    assert!(sink.is_some());
    assert!(path.exists());
}

#[test]
fn none_target_opens_nothing() {
    assert!(OutputTarget::None.open().unwrap().is_none());
}

#[test]
fn target_display() {
    assert_eq!(OutputTarget::Stdout.to_string(), "stdout");
    assert_eq!(OutputTarget::Stderr.to_string(), "stderr");
    assert_eq!(OutputTarget::None.to_string(), "none");
}
