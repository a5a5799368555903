//! A structured-logging value pipeline.
//!
//! Values carried by a logging call may describe their own log
//! representation through the [`Loggable`] trait; [`DueLog`] drives every
//! element of a log line to that representation before the line reaches a
//! transport. [`logline`] builds lines from interleaved text fragments and
//! values, joining whitespace-adjacent pieces into single strings at output
//! time, and [`log_defer`] postpones expensive representations until a
//! message is actually written.
//!
//! ```
//! use due_logger::{console_logger, logline, Logger};
//!
//! let logger = console_logger();
//! let user = "alice";
//! logger.info(logline(&["user ", " logged in"], vec![user.into()]).to_vec());
//! ```

pub mod loggable;
pub mod loggers;

pub use loggable::{
    log_defer, logline, DueLog, DueLogHandlers, LogLine, LogValue, Loggable, LoggableHandler,
    RawHandler, Stage, ToLog,
};
pub use loggers::{
    console_logger, render_line, ConsoleLogger, LogLevel, Logger, ProcessingLogger, ProxyLogger,
    SilentLogger,
};
