use crate::loggable::LogValue;

use super::logger::{LogLevel, Logger};

/// A logger that suppresses everything.
pub struct SilentLogger;

impl Logger for SilentLogger {
    fn log(&self, _level: LogLevel, _line: Vec<LogValue>) {}
}
