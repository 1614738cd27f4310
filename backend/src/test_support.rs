//! Test utilities for the backend crate.
//!
//! This module provides shared helpers for both unit tests (in `src/`) and
//! integration tests (in `tests/`). It is only compiled for tests or with the
//! `test-support` feature.

use std::sync::Arc;

use chrono::{DateTime, Local, Utc};
use mockable::Clock;

use crate::domain::{
    CatalogueService, ProgressService, UserService, WorkoutPlanService, WorkoutService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// Timestamp stamped by [`fixed_clock`]: 2026-01-01T09:00:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_767_258_000, 0).unwrap_or_default()
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    utc_now: DateTime<Utc>,
}

impl FixedClock {
    /// Freeze the clock at `utc_now`.
    pub fn new(utc_now: DateTime<Utc>) -> Self {
        Self { utc_now }
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

/// Clock frozen at [`fixture_timestamp`].
pub fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::new(fixture_timestamp()))
}

/// HTTP state wired to services over a fresh, empty in-memory store.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use fitness_backend::inbound::http::configure;
/// use fitness_backend::test_support::{fixed_clock, in_memory_state};
///
/// let app = App::new()
///     .app_data(web::Data::new(in_memory_state(fixed_clock())))
///     .configure(configure);
/// ```
pub fn in_memory_state(clock: Arc<dyn Clock>) -> HttpState {
    let store = Arc::new(InMemoryStore::new());
    let users = Arc::new(UserService::new(Arc::clone(&store), Arc::clone(&clock)));
    let workouts = Arc::new(WorkoutService::new(Arc::clone(&store), Arc::clone(&clock)));
    let catalogue = Arc::new(CatalogueService::new(Arc::clone(&store)));
    let plans = Arc::new(WorkoutPlanService::new(Arc::clone(&store), Arc::clone(&clock)));
    let progress = Arc::new(ProgressService::new(store, clock));
    HttpState {
        users: users.clone(),
        users_query: users,
        workouts: workouts.clone(),
        workouts_query: workouts,
        catalogue: catalogue.clone(),
        catalogue_query: catalogue,
        plans: plans.clone(),
        plans_query: plans,
        progress: progress.clone(),
        progress_query: progress,
    }
}
