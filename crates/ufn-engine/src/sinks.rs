//! File-backed notification sink.
//!
//! Appends each record as one JSON line to the channel file. The consumer
//! tailing the file must tolerate duplicate lines (same `delta_digest`),
//! since the synchronizer resends after a failed cycle.

use std::io::Write;
use std::path::{Path, PathBuf};

use ufn_core::errors::{Result, UfnError, UfnErrorKind};
use ufn_core::notify::{NotificationRecord, NotificationSink};

/// Notification sink appending JSON lines to a channel file
pub struct JsonLineSink {
    path: PathBuf,
}

impl JsonLineSink {
    /// Create a sink for the given channel file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn delivery_error(&self, reason: String) -> UfnError {
        UfnError::new(UfnErrorKind::Delivery)
            .with_op("send_notification")
            .with_message(format!("{}: {}", self.path.display(), reason))
    }
}

impl NotificationSink for JsonLineSink {
    fn send(&self, record: &NotificationRecord) -> Result<()> {
        let line = serde_json::to_string(record)
            .map_err(|e| self.delivery_error(format!("failed to serialize record: {}", e)))?;

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.delivery_error(format!("failed to open channel: {}", e)))?;

        writeln!(file, "{}", line)
            .and_then(|_| file.flush())
            .map_err(|e| self.delivery_error(format!("failed to write record: {}", e)))?;

        tracing::debug!(
            count = record.count,
            delta_digest = %record.delta_digest,
            "Delivered notification record"
        );

        Ok(())
    }
}
