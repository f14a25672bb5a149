use std::fmt::{self, Display};

/// A structured key/value pair attached to a log entry.
pub type LogField<'a> = (&'static str, &'a dyn Display);

/// Logging capability handed to the analyzer and the settings.
pub trait Logger: Send + Sync {
    fn debug(&self, message: &str, fields: &[LogField<'_>]);
    fn info(&self, message: &str, fields: &[LogField<'_>]);
    fn warning(&self, message: &str, fields: &[LogField<'_>]);
}

/// Forwards entries to `tracing` under the `cors_analyzer` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str, fields: &[LogField<'_>]) {
        tracing::debug!(target: "cors_analyzer", fields = %Fields(fields), "{message}");
    }

    fn info(&self, message: &str, fields: &[LogField<'_>]) {
        tracing::info!(target: "cors_analyzer", fields = %Fields(fields), "{message}");
    }

    fn warning(&self, message: &str, fields: &[LogField<'_>]) {
        tracing::warn!(target: "cors_analyzer", fields = %Fields(fields), "{message}");
    }
}

/// Discards every entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl Logger for NoopLogger {
    fn debug(&self, _message: &str, _fields: &[LogField<'_>]) {}

    fn info(&self, _message: &str, _fields: &[LogField<'_>]) {}

    fn warning(&self, _message: &str, _fields: &[LogField<'_>]) {}
}

/// Renders fields as space separated `key=value` pairs.
pub(crate) struct Fields<'a, 'b>(pub(crate) &'a [LogField<'b>]);

impl Display for Fields<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (key, value)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "logger_test.rs"]
mod logger_test;
