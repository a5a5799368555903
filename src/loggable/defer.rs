use super::due_log::DueLog;
use super::types::{LogValue, Loggable, Stage, ToLog};

struct LogDefer<F> {
    produce: F,
}

impl<F: Fn() -> LogValue> Loggable for LogDefer<F> {
    fn to_log(&self, due: &mut DueLog) -> ToLog {
        match due.stage() {
            // Keep the placeholder until the message is actually written.
            Some(Stage::In) => ToLog::Keep,
            _ => ToLog::Replace((self.produce)()),
        }
    }
}

/// Creates a loggable value resolved only when the message is written.
///
/// The placeholder stays untouched at the input stage and expands to
/// `produce()` at the output stage or when no stage hint is set. The
/// producer runs at most once per qualifying pass and never on logger
/// input.
pub fn log_defer<F>(produce: F) -> LogValue
where
    F: Fn() -> LogValue + 'static,
{
    LogValue::loggable(LogDefer { produce })
}
