use std::rc::Rc;

use super::types::{LogValue, Loggable, Stage, ToLog};

/// Handler for raw (non-loggable) log line elements.
pub type RawHandler<'h> = &'h mut dyn FnMut(&mut DueLog, &LogValue) -> ToLog;

/// Handler for loggable log line elements.
pub type LoggableHandler<'h> = &'h mut dyn FnMut(&mut DueLog, &dyn Loggable) -> ToLog;

/// Custom element handlers for [`DueLog::process_with`].
///
/// Each handler receives the message being processed along with the element
/// under the cursor, and returns a [`ToLog`] outcome interpreted exactly like
/// a [`Loggable::to_log`] result. By default raw values are kept untouched
/// and loggable values are asked for their own representation.
#[derive(Default)]
pub struct DueLogHandlers<'h> {
    pub on_raw: Option<RawHandler<'h>>,
    pub on_loggable: Option<LoggableHandler<'h>>,
}

/// A log message due to be logged.
///
/// Holds the log line, the cursor over it, and the stage hint for one
/// processing pass. [`process`](DueLog::process) expands every loggable
/// element in place until the cursor reaches the end of the (possibly
/// resized) line.
pub struct DueLog {
    on: Option<Stage>,
    line: Vec<LogValue>,
    index: usize,
    // Bumped by replace_line so the processing loop can tell a wholesale
    // swap apart from in-place edits.
    generation: u64,
}

impl DueLog {
    pub fn new(line: Vec<LogValue>, on: Option<Stage>) -> Self {
        Self {
            on,
            line,
            index: 0,
            generation: 0,
        }
    }

    /// The stage hint for this pass, if any.
    pub fn stage(&self) -> Option<Stage> {
        self.on
    }

    pub fn line(&self) -> &[LogValue] {
        &self.line
    }

    /// Mutable access for in-place edits of the current line.
    pub fn line_mut(&mut self) -> &mut Vec<LogValue> {
        &mut self.line
    }

    /// Replaces the whole line.
    ///
    /// Unlike edits through [`line_mut`](DueLog::line_mut), a replacement
    /// makes the processing loop discard the pending element outcome and
    /// resume on the new line.
    pub fn replace_line(&mut self, line: Vec<LogValue>) {
        self.line = line;
        self.generation += 1;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Redirects the cursor to the next element to process.
    ///
    /// An index beyond the line length ends the pass; it is clamped back to
    /// the final line length once processing completes.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    pub fn into_line(self) -> Vec<LogValue> {
        self.line
    }

    /// Processes the log line with the default handlers.
    pub fn process(&mut self) {
        self.process_with(DueLogHandlers::default());
    }

    /// Processes the log line, driving every element to its final
    /// representation.
    ///
    /// Each step consults the element under the cursor. The outcome is
    /// interpreted in order:
    ///
    /// 1. If the callee moved the cursor, processing resumes there and the
    ///    outcome is discarded.
    /// 2. If the callee replaced the whole line, processing resumes at the
    ///    same position on the new line and the outcome is discarded.
    /// 3. [`ToLog::Keep`] advances past the element; [`ToLog::Replace`] and
    ///    [`ToLog::Expand`] substitute at the current position and process
    ///    the substitution next.
    ///
    /// There is no depth guard: a loggable that keeps returning a fresh
    /// loggable never terminates, which is its author's obligation to avoid.
    pub fn process_with(&mut self, mut handlers: DueLogHandlers<'_>) {
        self.index = self.index.min(self.line.len());

        while self.index < self.line.len() {
            let index = self.index;
            let generation = self.generation;
            let value = self.line[index].clone();

            let outcome = match value.as_loggable() {
                Some(loggable) => {
                    let loggable = Rc::clone(loggable);
                    match handlers.on_loggable.as_mut() {
                        Some(handle) => handle(self, &*loggable),
                        None => loggable.to_log(self),
                    }
                }
                None => match handlers.on_raw.as_mut() {
                    Some(handle) => handle(self, &value),
                    None => ToLog::Keep,
                },
            };

            if self.index != index {
                // Cursor redirected by the callee.
                continue;
            }
            if self.generation != generation {
                // Whole line swapped out; resume at the same position.
                continue;
            }

            match outcome {
                ToLog::Keep => self.index += 1,
                ToLog::Replace(replacement) => {
                    // Returning the loggable itself means "leave as-is".
                    let returned_self = match (replacement.as_loggable(), value.as_loggable()) {
                        (Some(new), Some(old)) => Rc::ptr_eq(new, old),
                        _ => false,
                    };

                    if returned_self {
                        self.index += 1;
                    } else if index < self.line.len() {
                        self.line[index] = replacement;
                    } else {
                        // The callee may have shrunk the line in place.
                        self.line.push(replacement);
                    }
                }
                ToLog::Expand(values) => {
                    let start = index.min(self.line.len());
                    let end = (index + 1).min(self.line.len());
                    self.line.splice(start..end, values);
                }
            }
        }

        self.index = self.index.min(self.line.len());
    }
}
