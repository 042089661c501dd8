//! Timing registry - measures named spans of work
//!
//! The composition root owns one registry and hands it to components via
//! context; nothing here is a global. Callers supply the current time in
//! milliseconds, so tests drive it with fixed values.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    started_ms: f64,
    duration_ms: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimingRegistry {
    spans: HashMap<String, Span>,
}

impl TimingRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or reopen) a named span.
    pub fn begin(&mut self, name: &str, now_ms: f64) {
        self.spans.insert(
            name.to_string(),
            Span { started_ms: now_ms, duration_ms: None },
        );
    }

    /// Close a span and return its duration. `None` if it was never begun.
    pub fn end(&mut self, name: &str, now_ms: f64) -> Option<f64> {
        let span = self.spans.get_mut(name)?;
        let duration = now_ms - span.started_ms;
        span.duration_ms = Some(duration);
        log::debug!("{name} took {duration:.2}ms");
        Some(duration)
    }

    pub fn duration_ms(&self, name: &str) -> Option<f64> {
        self.spans.get(name).and_then(|s| s.duration_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_a_span() {
        let mut reg = TimingRegistry::new();
        reg.begin("gallery-render", 100.0);
        assert_eq!(reg.end("gallery-render", 162.5), Some(62.5));
        assert_eq!(reg.duration_ms("gallery-render"), Some(62.5));
    }

    #[test]
    fn end_without_begin_is_none() {
        let mut reg = TimingRegistry::new();
        assert_eq!(reg.end("missing", 10.0), None);
    }

    #[test]
    fn reopening_resets_the_span() {
        let mut reg = TimingRegistry::new();
        reg.begin("t", 0.0);
        reg.end("t", 10.0);
        reg.begin("t", 100.0);
        assert_eq!(reg.duration_ms("t"), None);
        assert_eq!(reg.end("t", 130.0), Some(30.0));
    }
}
