//! Diagnostic sink implementations
//!
//! `StderrSink` is what the host driver wires in; `BufferSink` collects
//! findings in memory for assertions.

use std::io::Write;

use crate::features::sequoia::domain::Finding;
use crate::features::sequoia::ports::DiagnosticSink;

/// Writes one diagnostic line per finding to stderr
#[derive(Debug, Default)]
pub struct StderrSink;

impl StderrSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for StderrSink {
    fn report(&mut self, finding: &Finding) {
        // A failed stderr write is not worth failing the analysis over
        let _ = writeln!(std::io::stderr(), "{}", finding);
    }
}

/// Collects findings in memory
#[derive(Debug, Default)]
pub struct BufferSink {
    pub findings: Vec<Finding>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered diagnostic lines, one per finding
    pub fn lines(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.to_string()).collect()
    }
}

impl DiagnosticSink for BufferSink {
    fn report(&mut self, finding: &Finding) {
        self.findings.push(finding.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_collects_in_order() {
        let mut sink = BufferSink::new();
        sink.report(&Finding::new("a", "b", 0));
        sink.report(&Finding::new("c", "d", 2));

        assert_eq!(sink.findings.len(), 2);
        assert!(sink.lines()[1].contains("index `2`"));
    }
}
