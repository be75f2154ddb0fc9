//! Diagnostic sinks.

/// Side channel that records why a resolution failed.
///
/// `scope` is the name of the capability being resolved. Sinks are
/// best-effort: the resolver neither waits on nor inspects them.
pub trait DiagnosticSink {
    fn warn(&self, scope: &str, message: &str);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&str, &str),
{
    fn warn(&self, scope: &str, message: &str) { self(scope, message) }
}

/// Forwards diagnostics to `tracing` at WARN level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn warn(&self, scope: &str, message: &str) {
        tracing::warn!(scope = %scope, "{message}");
    }
}
