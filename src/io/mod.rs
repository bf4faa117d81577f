//! I/O layer: writers for per-line results (plain text or JSON Lines)
//! and the JSON run-report sidecar.
pub mod writers;
pub use writers::lines::write_outcome;
pub use writers::report::{RunReport, write_run_report};
