use std::fmt;
use std::rc::Rc;

use serde::Serialize;

use super::due_log::DueLog;

/// Logging stage a value is processed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Logger input, i.e. the log line passed to a logger method.
    In,
    /// Log output, i.e. right before the message is written.
    Out,
}

/// A value that may customize its own log representation.
///
/// `to_log` is called for each element of the processed log line in order.
/// It may change the message either by mutating the line through `due`, or
/// by returning a replacement representation. See [`ToLog`] for how the
/// returned outcome is applied.
pub trait Loggable {
    fn to_log(&self, due: &mut DueLog) -> ToLog;
}

/// Outcome of processing a single log line element.
#[derive(Debug, Clone)]
pub enum ToLog {
    /// Leave the element as-is and move on to the next one.
    Keep,
    /// Replace the element in place; the replacement is processed next.
    Replace(LogValue),
    /// Remove the element and splice these values in at its position.
    ///
    /// Processing continues from the first spliced value. An empty vector
    /// removes the element without replacement.
    Expand(Vec<LogValue>),
}

/// One element of a log line.
#[derive(Clone)]
pub enum LogValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// Structured payload.
    Json(serde_json::Value),
    /// Plain ordered sequence. Unlike [`ToLog::Expand`] results, a list
    /// sitting in a log line is a raw value and is never spliced.
    List(Vec<LogValue>),
    /// A value processed through its [`Loggable`] implementation.
    Loggable(Rc<dyn Loggable>),
}

impl LogValue {
    /// Wraps any [`Loggable`] implementation as a log line element.
    pub fn loggable<T: Loggable + 'static>(value: T) -> Self {
        LogValue::Loggable(Rc::new(value))
    }

    /// Converts any serializable data into a structured payload.
    ///
    /// Data that cannot be represented as JSON degrades to its error text
    /// rather than failing the logging call.
    pub fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => LogValue::Json(json),
            Err(err) => LogValue::Str(err.to_string()),
        }
    }

    pub fn is_loggable(&self) -> bool {
        self.as_loggable().is_some()
    }

    /// The capability check: yields the processing hook when this element
    /// carries one.
    pub fn as_loggable(&self) -> Option<&Rc<dyn Loggable>> {
        match self {
            LogValue::Loggable(loggable) => Some(loggable),
            _ => None,
        }
    }
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(text) => f.write_str(text),
            LogValue::Int(value) => write!(f, "{value}"),
            LogValue::Float(value) => write!(f, "{value}"),
            LogValue::Bool(value) => write!(f, "{value}"),
            LogValue::Json(value) => write!(f, "{value}"),
            LogValue::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            LogValue::Loggable(_) => f.write_str("<loggable>"),
        }
    }
}

impl fmt::Debug for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Str(text) => f.debug_tuple("Str").field(text).finish(),
            LogValue::Int(value) => f.debug_tuple("Int").field(value).finish(),
            LogValue::Float(value) => f.debug_tuple("Float").field(value).finish(),
            LogValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            LogValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
            LogValue::List(items) => f.debug_tuple("List").field(items).finish(),
            LogValue::Loggable(_) => f.write_str("Loggable(..)"),
        }
    }
}

impl PartialEq for LogValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (LogValue::Str(a), LogValue::Str(b)) => a == b,
            (LogValue::Int(a), LogValue::Int(b)) => a == b,
            (LogValue::Float(a), LogValue::Float(b)) => a == b,
            (LogValue::Bool(a), LogValue::Bool(b)) => a == b,
            (LogValue::Json(a), LogValue::Json(b)) => a == b,
            (LogValue::List(a), LogValue::List(b)) => a == b,
            // Loggables have no inherent representation; identity only.
            (LogValue::Loggable(a), LogValue::Loggable(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for LogValue {
    fn from(text: &str) -> Self {
        LogValue::Str(text.to_string())
    }
}

impl From<String> for LogValue {
    fn from(text: String) -> Self {
        LogValue::Str(text)
    }
}

impl From<i64> for LogValue {
    fn from(value: i64) -> Self {
        LogValue::Int(value)
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        LogValue::Int(value as i64)
    }
}

impl From<u32> for LogValue {
    fn from(value: u32) -> Self {
        LogValue::Int(value as i64)
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        LogValue::Float(value)
    }
}

impl From<bool> for LogValue {
    fn from(value: bool) -> Self {
        LogValue::Bool(value)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(value: serde_json::Value) -> Self {
        LogValue::Json(value)
    }
}

impl From<Vec<LogValue>> for LogValue {
    fn from(items: Vec<LogValue>) -> Self {
        LogValue::List(items)
    }
}
