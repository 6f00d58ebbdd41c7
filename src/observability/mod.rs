//! Observability subsystem for iejoin
//!
//! Provides structured JSON logging for the join entry points.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on execution
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! Join trace events are emitted at TRACE severity and suppressed by the
//! default minimum severity (INFO); callers opt in with
//! `Logger::set_min_severity(Severity::Trace)`.

mod logger;

pub use logger::{Logger, Severity};
