mod checker;
mod reporter;

pub use checker::{SequoiaChecker, RULE_DESCRIPTION, RULE_ID};
pub use reporter::{BufferSink, StderrSink};
