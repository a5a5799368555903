use crate::loggable::{DueLog, LogValue, Stage};

use super::logger::{LogLevel, Logger};

/// A logger that expands loggable values before delegating to another one.
///
/// Every call's arguments are driven through a processing pass tagged with
/// the configured stage hint. A zero-argument call is forwarded untouched,
/// while a line whose elements all process away is suppressed entirely.
pub struct ProcessingLogger<L> {
    inner: L,
    on: Option<Stage>,
}

impl<L: Logger> ProcessingLogger<L> {
    /// Wraps `inner` with no stage hint, so values process unconditionally.
    pub fn new(inner: L) -> Self {
        Self { inner, on: None }
    }

    /// Sets the stage hint forwarded to the processing pass.
    pub fn on(mut self, stage: Stage) -> Self {
        self.on = Some(stage);
        self
    }
}

impl<L: Logger> Logger for ProcessingLogger<L> {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        if line.is_empty() {
            self.inner.log(level, line);
            return;
        }

        let mut due = DueLog::new(line, self.on);
        due.process();
        let line = due.into_line();

        if !line.is_empty() {
            self.inner.log(level, line);
        }
    }
}
