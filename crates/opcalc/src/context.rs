//! Evaluation context configuration

/// Configuration for evaluation.
///
/// This is passed through all evaluation calls. It carries no state that
/// changes during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalContext {
    /// Whether to trace evaluation to stderr (for debugging)
    pub trace: bool,
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with tracing switched on or off.
    pub fn with_trace(trace: bool) -> Self {
        Self { trace }
    }

    /// Write a trace line to stderr if tracing is enabled.
    pub(crate) fn trace_step(&self, message: impl FnOnce() -> String) {
        if self.trace {
            eprintln!("trace: {}", message());
        }
    }
}
