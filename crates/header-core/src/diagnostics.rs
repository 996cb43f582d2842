//! Channel for non-fatal notices raised while configuring the rule

use crate::error::RULE_NAME;

/// Receiver for deprecation notices.
pub trait Diagnostics {
    fn deprecation(&mut self, message: &str);
}

/// Forwards notices to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn deprecation(&mut self, message: &str) {
        tracing::warn!(rule = RULE_NAME, "{}", message);
    }
}

/// Keeps notices in memory so callers can report them later.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CollectedDiagnostics {
    pub deprecations: Vec<String>,
}

impl Diagnostics for CollectedDiagnostics {
    fn deprecation(&mut self, message: &str) {
        self.deprecations.push(message.to_string());
    }
}
