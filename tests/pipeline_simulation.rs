// tests/pipeline_simulation.rs
// Simulates full logging pipelines from call site to transport

use std::cell::RefCell;
use std::rc::Rc;

use due_logger::{
    console_logger, log_defer, logline, render_line, DueLog, LogLevel, LogValue, Loggable, Logger,
    ProcessingLogger, ProxyLogger, SilentLogger, Stage, ToLog,
};

// A transport that records every call it receives
#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(LogLevel, Vec<LogValue>)>>,
}

impl Recorder {
    fn take(&self) -> Vec<(LogLevel, Vec<LogValue>)> {
        self.calls.borrow_mut().drain(..).collect()
    }
}

impl Logger for Recorder {
    fn log(&self, level: LogLevel, line: Vec<LogValue>) {
        self.calls.borrow_mut().push((level, line));
    }
}

// A loggable that resolves only at one stage and passes through otherwise
struct StageGated {
    resolve_on: Stage,
    text: &'static str,
}

impl Loggable for StageGated {
    fn to_log(&self, due: &mut DueLog) -> ToLog {
        if due.stage() == Some(self.resolve_on) {
            ToLog::Replace(self.text.into())
        } else {
            ToLog::Keep
        }
    }
}

struct Vanishes;

impl Loggable for Vanishes {
    fn to_log(&self, _due: &mut DueLog) -> ToLog {
        ToLog::Expand(Vec::new())
    }
}

#[cfg(test)]
mod processing_logger_tests {
    use super::*;

    #[test]
    fn test_stage_specific_resolution() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder)).on(Stage::In);

        let resolved_in = LogValue::loggable(StageGated {
            resolve_on: Stage::In,
            text: "X",
        });
        let resolved_out = LogValue::loggable(StageGated {
            resolve_on: Stage::Out,
            text: "Y",
        });

        processing.info(vec![1.into(), resolved_in, resolved_out.clone(), 2.into()]);

        assert_eq!(
            recorder.take(),
            vec![(
                LogLevel::Info,
                vec![1.into(), "X".into(), resolved_out, 2.into()],
            )],
            "Input-stage values resolve, output-stage values pass through"
        );
    }

    #[test]
    fn test_empty_call_is_forwarded() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder));

        processing.info(Vec::new());

        assert_eq!(recorder.take(), vec![(LogLevel::Info, Vec::new())]);
    }

    #[test]
    fn test_line_processed_to_empty_is_suppressed() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder));

        processing.info(vec![LogValue::loggable(Vanishes)]);

        assert_eq!(
            recorder.take(),
            vec![],
            "A line whose elements all process away must not reach the transport"
        );
    }

    #[test]
    fn test_unconditional_stage_expands_deferred_values() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder));

        processing.warn(vec![log_defer(|| "resolved".into())]);

        assert_eq!(
            recorder.take(),
            vec![(LogLevel::Warn, vec!["resolved".into()])],
        );
    }

    #[test]
    fn test_input_stage_keeps_deferred_values_for_transport() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder)).on(Stage::In);

        processing.info(vec![log_defer(|| "resolved".into())]);

        let calls = recorder.take();
        assert_eq!(calls.len(), 1);
        assert!(
            calls[0].1[0].is_loggable(),
            "The deferred placeholder belongs to the output stage"
        );
    }

    #[test]
    fn test_explicit_and_automatic_line_expansion_match() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder));

        let mut explicit = vec![LogValue::from("(start)")];
        explicit.extend(logline(&["1 ", " 3"], vec![2.into()]).to_vec());
        explicit.push("(end)".into());
        processing.info(explicit);

        processing.info(vec![
            "(start)".into(),
            logline(&["1 ", " 3"], vec![2.into()]).into(),
            "(end)".into(),
        ]);

        let calls = recorder.take();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0], calls[1],
            "Expanded and single-element lines must log identically"
        );
        assert_eq!(
            calls[0].1,
            vec![
                "(start)".into(),
                "1".into(),
                2.into(),
                "3".into(),
                "(end)".into(),
            ],
        );
    }

    #[test]
    fn test_level_routing() {
        let recorder = Rc::new(Recorder::default());
        let processing = ProcessingLogger::new(Rc::clone(&recorder));

        processing.error(vec!["e".into()]);
        processing.warn(vec!["w".into()]);
        processing.info(vec!["i".into()]);
        processing.debug(vec!["d".into()]);
        processing.trace(vec!["t".into()]);

        let levels: Vec<LogLevel> = recorder
            .take()
            .into_iter()
            .map(|(level, _)| level)
            .collect();

        assert_eq!(
            levels,
            vec![
                LogLevel::Error,
                LogLevel::Warn,
                LogLevel::Info,
                LogLevel::Debug,
                LogLevel::Trace,
            ],
        );
    }
}

#[cfg(test)]
mod transport_tests {
    use super::*;

    #[test]
    fn test_render_line_output() {
        let rendered = render_line(&[
            1.into(),
            "a".into(),
            serde_json::json!({ "b": 2 }).into(),
        ]);

        assert_eq!(rendered, "1 a {\"b\":2}");
    }

    #[test]
    fn test_silent_logger_discards_everything() {
        let silent = SilentLogger;

        silent.error(vec!["unseen".into()]);
        silent.info(Vec::new());
    }

    #[test]
    fn test_proxy_resolves_target_on_each_call() {
        let first = Rc::new(Recorder::default());
        let second = Rc::new(Recorder::default());

        let current: Rc<RefCell<Rc<dyn Logger>>> =
            Rc::new(RefCell::new(Rc::clone(&first) as Rc<dyn Logger>));
        let proxy = ProxyLogger::new({
            let current = Rc::clone(&current);
            move || Rc::clone(&current.borrow())
        });

        proxy.info(vec!["one".into()]);
        *current.borrow_mut() = Rc::clone(&second) as Rc<dyn Logger>;
        proxy.info(vec!["two".into()]);

        assert_eq!(first.take(), vec![(LogLevel::Info, vec!["one".into()])]);
        assert_eq!(second.take(), vec![(LogLevel::Info, vec!["two".into()])]);
    }

    #[test]
    fn test_console_pipeline_smoke() {
        let logger = console_logger();

        logger.debug(logline(&["pipeline ", ""], vec!["ready".into()]).to_vec());
        logger.debug(vec![log_defer(|| "deferred".into())]);
    }
}
