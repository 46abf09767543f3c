mod reporter;

pub use reporter::DiagnosticSink;
