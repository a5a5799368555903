use std::ops::Deref;

use super::due_log::DueLog;
use super::types::{LogValue, Loggable, Stage, ToLog};

/// A run of adjacent pieces destined to become one string.
///
/// Resolution never mutates the group, so one instance may be processed by
/// any number of passes.
struct JoinGroup {
    members: Vec<LogValue>,
}

impl Loggable for JoinGroup {
    fn to_log(&self, due: &mut DueLog) -> ToLog {
        if due.stage() == Some(Stage::In) {
            // Input-stage consumers get to see the unresolved pieces.
            return ToLog::Keep;
        }

        let mut joined = DueLog::new(self.members.clone(), due.stage());
        joined.process();
        let members = joined.into_line();

        if members.is_empty() {
            return ToLog::Expand(Vec::new());
        }

        let text: String = members.iter().map(|member| member.to_string()).collect();

        ToLog::Replace(LogValue::Str(text))
    }
}

/// An ordered log line produced by [`logline`].
///
/// Can be handed to a logger either expanded ([`to_vec`](LogLine::to_vec))
/// or as a single element: the line is itself [`Loggable`] and expands to a
/// shallow copy of its elements, so both forms reach the transport
/// identically.
pub struct LogLine {
    items: Vec<LogValue>,
}

impl LogLine {
    pub fn items(&self) -> &[LogValue] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<LogValue> {
        self.items.clone()
    }
}

impl Deref for LogLine {
    type Target = [LogValue];

    fn deref(&self) -> &[LogValue] {
        &self.items
    }
}

impl IntoIterator for LogLine {
    type Item = LogValue;
    type IntoIter = std::vec::IntoIter<LogValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl Loggable for LogLine {
    fn to_log(&self, _due: &mut DueLog) -> ToLog {
        // A shallow copy, so the line itself is never materialized twice.
        ToLog::Expand(self.items.clone())
    }
}

impl From<LogLine> for LogValue {
    fn from(line: LogLine) -> Self {
        LogValue::loggable(line)
    }
}

/// Collapse whitespace runs to single spaces and trim the edges.
fn normalize_fragment(fragment: &str) -> String {
    fragment.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Closes the pending run: a single piece stays bare, two or more become
/// one join-group element.
fn flush_run(result: &mut Vec<LogValue>, run: &mut Vec<LogValue>) {
    if run.is_empty() {
        return;
    }

    let mut members = std::mem::take(run);

    if members.len() == 1 {
        result.push(members.remove(0));
    } else {
        result.push(LogValue::loggable(JoinGroup { members }));
    }
}

/// Adds one literal fragment, using its whitespace edges to decide whether
/// the neighboring pieces stay in the same run.
fn push_fragment(result: &mut Vec<LogValue>, run: &mut Vec<LogValue>, fragment: &str) {
    let text = normalize_fragment(fragment);

    if text.is_empty() {
        // Whitespace-only fragments separate; truly empty ones glue.
        if !fragment.is_empty() {
            flush_run(result, run);
        }
        return;
    }

    if fragment.starts_with(char::is_whitespace) {
        flush_run(result, run);
    }
    run.push(LogValue::Str(text));
    if fragment.ends_with(char::is_whitespace) {
        flush_run(result, run);
    }
}

/// Builds a log line from interleaved literal fragments and values.
///
/// `fragments` carries one more entry than `args` (missing trailing
/// fragments are treated as empty). The line is assembled by these rules:
///
/// 1. Fragments are trimmed and inner whitespace runs collapse to a single
///    space.
/// 2. A fragment edge without whitespace joins the neighboring pieces; the
///    joined run becomes a single string when the line is processed at the
///    output (or unconditional) stage.
/// 3. Pieces separated by whitespace stay discrete, values unstringified.
/// 4. An empty or whitespace-only template produces an empty line.
///
/// ```
/// use due_logger::{logline, DueLog, LogValue};
///
/// let line = logline(&["state: ", "", ""], vec![LogValue::from("on"), 7.into()]);
/// let mut due = DueLog::new(line.to_vec(), None);
/// due.process();
/// assert_eq!(
///     due.line(),
///     &[LogValue::from("state:"), LogValue::from("on7")],
/// );
/// ```
pub fn logline(fragments: &[&str], args: Vec<LogValue>) -> LogLine {
    let mut result = Vec::new();
    let mut run = Vec::new();

    push_fragment(&mut result, &mut run, fragments.first().copied().unwrap_or(""));

    for (i, arg) in args.into_iter().enumerate() {
        run.push(arg);
        push_fragment(
            &mut result,
            &mut run,
            fragments.get(i + 1).copied().unwrap_or(""),
        );
    }

    flush_run(&mut result, &mut run);

    LogLine { items: result }
}
