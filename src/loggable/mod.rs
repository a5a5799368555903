mod defer;
mod due_log;
mod logline;
mod types;

pub use defer::log_defer;
pub use due_log::{DueLog, DueLogHandlers, LoggableHandler, RawHandler};
pub use logline::{logline, LogLine};
pub use types::{LogValue, Loggable, Stage, ToLog};
