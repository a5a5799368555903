use std::rc::Rc;

use crate::loggable::LogValue;

use super::logger::{LogLevel, Logger};

/// A logger that forwards every call to a lazily-resolved target.
///
/// The resolver runs on each call, so the active logger may change between
/// calls without the callers holding anything but the proxy.
pub struct ProxyLogger<F> {
    resolve: F,
}

impl<F: Fn() -> Rc<dyn Logger>> ProxyLogger<F> {
    pub fn new(resolve: F) -> Self {
        Self { resolve }
    }
}

impl<F: Fn() -> Rc<dyn Logger>> Logger for ProxyLogger<F> {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        (self.resolve)().log(level, line);
    }
}
