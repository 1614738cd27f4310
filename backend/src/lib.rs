//! Fitness tracker backend library modules.
//!
//! Users and their workouts live in a process-scoped in-memory store behind
//! domain ports; the `inbound::http` adapter exposes them over a JSON API.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::{TRACE_ID_HEADER, TraceId};
pub use middleware::Trace;
