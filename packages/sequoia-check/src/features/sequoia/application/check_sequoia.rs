use crate::features::sequoia::infrastructure::SequoiaChecker;
use crate::features::sequoia::ports::DiagnosticSink;
use crate::shared::models::Module;

/// Runs the sequoia rule over a module and routes findings to a sink.
pub struct CheckSequoiaUseCase {
    checker: SequoiaChecker,
}

impl CheckSequoiaUseCase {
    pub fn new() -> Self {
        Self {
            checker: SequoiaChecker::new(),
        }
    }

    /// Returns the number of findings reported
    pub fn execute(&self, module: &Module, sink: &mut dyn DiagnosticSink) -> usize {
        let findings = self.checker.check_module(module);
        for finding in &findings {
            sink.report(finding);
        }
        findings.len()
    }
}

impl Default for CheckSequoiaUseCase {
    fn default() -> Self {
        Self::new()
    }
}
