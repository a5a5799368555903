use std::rc::Rc;

use crate::loggable::LogValue;

/// Severity of a logged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Basic logger interface.
///
/// A logger accepts the ordered values of one logging call. Implementations
/// are synchronous and must tolerate arbitrary value types, including an
/// empty line.
pub trait Logger {
    fn log(&self, level: LogLevel, line: Vec<LogValue>);

    fn error(&self, line: Vec<LogValue>) {
        self.log(LogLevel::Error, line);
    }

    fn warn(&self, line: Vec<LogValue>) {
        self.log(LogLevel::Warn, line);
    }

    fn info(&self, line: Vec<LogValue>) {
        self.log(LogLevel::Info, line);
    }

    fn debug(&self, line: Vec<LogValue>) {
        self.log(LogLevel::Debug, line);
    }

    fn trace(&self, line: Vec<LogValue>) {
        self.log(LogLevel::Trace, line);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        (**self).log(level, line);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        (**self).log(level, line);
    }
}

impl<L: Logger + ?Sized> Logger for Rc<L> {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        (**self).log(level, line);
    }
}
