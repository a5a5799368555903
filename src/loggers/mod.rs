mod console;
mod logger;
mod processing;
mod proxy;
mod silent;

pub use console::{console_logger, render_line, ConsoleLogger};
pub use logger::{LogLevel, Logger};
pub use processing::ProcessingLogger;
pub use proxy::ProxyLogger;
pub use silent::SilentLogger;
