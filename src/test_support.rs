use crate::logger::{Fields, LogField, Logger};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Level {
    Debug,
    Info,
    Warning,
}

/// Captures entries as `(level, "message [fields]")`.
#[derive(Default)]
pub(crate) struct RecordingLogger {
    entries: Mutex<Vec<(Level, String)>>,
}

impl RecordingLogger {
    pub(crate) fn entries(&self) -> Vec<(Level, String)> {
        self.entries.lock().expect("logger lock").clone()
    }

    pub(crate) fn messages(&self, level: Level) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(entry_level, _)| *entry_level == level)
            .map(|(_, message)| message)
            .collect()
    }

    fn record(&self, level: Level, message: &str, fields: &[LogField<'_>]) {
        let entry = if fields.is_empty() {
            message.to_string()
        } else {
            format!("{message} [{}]", Fields(fields))
        };
        self.entries.lock().expect("logger lock").push((level, entry));
    }
}

impl Logger for RecordingLogger {
    fn debug(&self, message: &str, fields: &[LogField<'_>]) {
        self.record(Level::Debug, message, fields);
    }

    fn info(&self, message: &str, fields: &[LogField<'_>]) {
        self.record(Level::Info, message, fields);
    }

    fn warning(&self, message: &str, fields: &[LogField<'_>]) {
        self.record(Level::Warning, message, fields);
    }
}
