//! The sequoia rule: driver, findings, reporting

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::CheckSequoiaUseCase;
pub use domain::Finding;
pub use infrastructure::{BufferSink, SequoiaChecker, StderrSink, RULE_DESCRIPTION, RULE_ID};
pub use ports::DiagnosticSink;
