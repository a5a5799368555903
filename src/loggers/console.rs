use crate::loggable::{DueLog, LogValue, Stage};

use super::logger::{LogLevel, Logger};
use super::processing::ProcessingLogger;

/// Renders the elements of a processed log line, space-separated.
pub fn render_line(line: &[LogValue]) -> String {
    line.iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Terminal transport.
///
/// Runs the output-stage pass over the incoming line right before writing,
/// which is where deferred values and joined runs take their final shape.
/// Errors, warnings, and traces go to stderr, the rest to stdout.
pub struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        let mut due = DueLog::new(line, Some(Stage::Out));
        due.process();
        let text = render_line(due.line());

        match level {
            LogLevel::Error | LogLevel::Warn | LogLevel::Trace => eprintln!("{text}"),
            LogLevel::Info | LogLevel::Debug => println!("{text}"),
        }
    }
}

/// The full console pipeline: input-stage processing over the console
/// transport, so stage-aware values get both hooks.
pub fn console_logger() -> ProcessingLogger<ConsoleLogger> {
    ProcessingLogger::new(ConsoleLogger).on(Stage::In)
}
