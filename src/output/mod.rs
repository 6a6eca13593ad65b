//! Output formatting and diagnostics for mergepdf.
//!
//! User-facing messages go through [`OutputFormatter`]. Components that only
//! need to report problems, like the input resolver, depend on the
//! [`Diagnostics`] trait instead so they can be driven by a recording sink
//! in tests.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

/// Sink for non-fatal conditions noticed while processing inputs.
pub trait Diagnostics {
    /// Report a condition the user should see, e.g. a skipped input.
    fn warning(&self, message: &str);

    /// Report verbose progress. Ignored unless the sink cares.
    fn debug(&self, _message: &str) {}
}

/// A sink that drops everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn warning(&self, _message: &str) {}
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn warning(&self, message: &str) {
        (**self).warning(message);
    }

    fn debug(&self, message: &str) {
        (**self).debug(message);
    }
}
