//! Request middleware.
//!
//! Cross-cutting request lifecycle concerns: trace identifiers and timing.

pub mod timing;
pub mod trace;

pub use timing::{PROCESS_TIME_HEADER, ProcessTime};
pub use trace::Trace;
