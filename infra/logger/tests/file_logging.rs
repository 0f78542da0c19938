use ohm_logger::{LevelFilter, Logger};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn file_logging_writes_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("ohm-file-logging")
        .console(false)
        .level(LevelFilter::INFO)
        .path(&log_dir)
        .json()
        .init()?;

    tracing::info!(base_resistance = 22000.0, "resistance calculated");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let contents = fs::read_to_string(&log_file)?;
    let line = contents.lines().find(|line| line.contains("resistance calculated"));
    let line = line.expect("event should be written");
    let parsed: serde_json::Value = serde_json::from_str(line)?;
    assert_eq!(parsed["fields"]["message"], "resistance calculated");

    Ok(())
}
