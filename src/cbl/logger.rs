/* -------------------------------------------------------------------------- */
/*                                   Import                                   */
/* -------------------------------------------------------------------------- */

use std::{
    fmt,
    fs::{File, OpenOptions},
    io::Write,
    path::Path,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tokio::sync::RwLock;

use crate::operation::{Operation, Report};

/* -------------------------------------------------------------------------- */
/*                             Struct Declaration                             */
/* -------------------------------------------------------------------------- */
/// severity of a record, `Notice` is for expected outcomes worth tracing
/// such as a delete on an empty buffer or an overwritten item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Notice,
    Error,
}

/// append-only log shared by every part of one binary,
/// each record is tagged with the binary that wrote it
pub struct Logger {
    file: RwLock<File>,
    component: &'static str,
}

pub type SharedLogger = Arc<Logger>;

/* -------------------------------------------------------------------------- */
/*                            Struct Implementation                           */
/* -------------------------------------------------------------------------- */
impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Error => "ERROR",
        };
        // padded so the components line up in the file
        write!(f, "{name:<6}")
    }
}

impl Logger {
    pub fn new(path: impl AsRef<Path>, component: &'static str) -> Result<Self, std::io::Error> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Logger {
            file: RwLock::new(file),
            component,
        })
    }

    /// append one record: `[<unix seconds>] <LEVEL> <component> | <message>`
    pub async fn log(&self, level: Level, message: &str) -> Result<(), std::io::Error> {
        // a clock set before the epoch is logged as 0 rather than failing the write
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let record = format!("[{timestamp}] {level} {} | {message}\n", self.component);

        let mut file = self.file.write().await;
        file.write_all(record.as_bytes())?;
        file.flush()?;
        Ok(())
    }

    /// trace the outcome of an operation applied to the buffer,
    /// the empty notice and evictions get a record of their own
    pub async fn log_report(
        &self,
        operation: &Operation,
        report: &Report,
    ) -> Result<(), std::io::Error> {
        if report.empty_notice {
            return self
                .log(Level::Notice, &format!("{operation}: {}", report.message))
                .await;
        }
        self.log(Level::Info, &format!("{operation}: {}", report.message))
            .await?;
        if let Some(evicted) = report.evicted {
            self.log(
                Level::Notice,
                &format!("{evicted} was overwritten by {operation}"),
            )
            .await?;
        }
        Ok(())
    }
}

pub fn new_shared_logger(
    path: impl AsRef<Path>,
    component: &'static str,
) -> Result<SharedLogger, std::io::Error> {
    Ok(Arc::new(Logger::new(path, component)?))
}

/* -------------------------------------------------------------------------- */
/*                                    Macro                                   */
/* -------------------------------------------------------------------------- */
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        let _ = $logger.log($crate::logger::Level::Debug, &format!($($arg)*)).await;
    }
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        let _ = $logger.log($crate::logger::Level::Info, &format!($($arg)*)).await;
    }
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        let _ = $logger.log($crate::logger::Level::Error, &format!($($arg)*)).await;
    }
}

/* -------------------------------------------------------------------------- */
/*                                    Test                                    */
/* -------------------------------------------------------------------------- */
#[cfg(test)]
mod tests {
    use super::*;
    use crate::ring_buffer::RingBuffer;

    fn temp_log(name: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("cbl-{name}-{}.log", std::process::id()));
        let _ = std::fs::remove_file(&path);
        path
    }

    #[tokio::test]
    async fn records_carry_level_and_component() {
        let path = temp_log("records");
        let logger = new_shared_logger(&path, "driver").unwrap();
        log_info!(logger, "added {}", 15);
        log_error!(logger, "{}", "config could not be read");
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("] INFO   driver | added 15"));
        assert!(lines[1].ends_with("] ERROR  driver | config could not be read"));
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn reports_log_notices_and_evictions() {
        let path = temp_log("reports");
        let logger = Logger::new(&path, "shell").unwrap();
        let mut buffer = RingBuffer::new(1).unwrap();
        for operation in [Operation::Delete, Operation::Add(1), Operation::Add(2)] {
            let report = operation.apply(&mut buffer, ", ");
            logger.log_report(&operation, &report).await.unwrap();
        }
        drop(logger);

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].ends_with("NOTICE shell | Delete operation: Buffer is empty"));
        assert!(lines[1].ends_with("INFO   shell | Add 1: 1 has been added"));
        assert!(lines[3].ends_with("NOTICE shell | 1 was overwritten by Add 2"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Debug < Level::Notice);
        assert!(Level::Notice < Level::Error);
        assert_eq!(Level::Notice.to_string(), "NOTICE");
    }
}
