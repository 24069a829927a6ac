use agency_logger::{Logger, LoggerError};
use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn no_enabled_output_is_invalid() {
    let err = Logger::builder()
        .name("agency-silent")
        .console(false)
        .init()
        .expect_err("no layers means nothing to write to");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}

#[test]
#[serial]
fn zero_max_files_is_invalid() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;

    let err = Logger::builder()
        .name("agency-zero-files")
        .path(tmp_dir.path())
        .max_files(0)
        .init()
        .expect_err("zero retained files");

    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    Ok(())
}

#[test]
#[serial]
fn empty_name_is_invalid() {
    let err = Logger::builder().name("").init().expect_err("empty name");
    assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
}
