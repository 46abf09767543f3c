use crate::features::sequoia::domain::Finding;

/// Output port for confirmed findings.
///
/// Reporting is the rule's only side effect; the IR is never mutated.
pub trait DiagnosticSink {
    fn report(&mut self, finding: &Finding);
}
