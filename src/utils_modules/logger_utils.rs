use crate::common::*;

use crate::env_configuration::env_config::*;

#[doc = r#"
    Configures the global logger for the whole process.

    Log lines are written to daily-rotated files under `LOG_DIR_PATH` (the last
    seven files are kept) and duplicated to stdout. Logger construction happens
    once at startup; a failure here is fatal.

    # Panics
    Terminates the application when the logger cannot be initialized
"#]
pub fn set_global_logger() {
    let logger_handle = Logger::try_with_str("info")
        .unwrap_or_else(|e| {
            panic!("[logger_utils->set_global_logger] Invalid log specification: {:?}", e)
        })
        .log_to_file(FileSpec::default().directory(LOG_DIR_PATH.as_str()))
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(7),
        )
        .duplicate_to_stdout(Duplicate::All)
        .start()
        .unwrap_or_else(|e| {
            panic!("[logger_utils->set_global_logger] Failed to start the logger: {:?}", e)
        });

    /* The handle must outlive main so the file writer keeps flushing */
    std::mem::forget(logger_handle);
}
