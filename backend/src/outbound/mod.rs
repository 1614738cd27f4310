//! Outbound adapters implementing the driven domain ports.
//!
//! - **memory**: process-scoped store for users and workouts.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business rules beyond the invariants the ports require.

pub mod memory;
