//! Command implementations for header-cli

pub mod fix;

pub use fix::{FixOptions, FixSummary, run_fix};
