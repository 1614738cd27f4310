//! Builders wiring domain services over the in-memory store into HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::{Clock, DefaultClock};

use fitness_backend::domain::{
    CatalogueService, ProgressService, UserService, WorkoutPlanService, WorkoutService,
};
use fitness_backend::inbound::http::state::HttpState;
use fitness_backend::outbound::memory::InMemoryStore;

/// Build HTTP state over a fresh store shared by every service.
pub(super) fn build_http_state() -> web::Data<HttpState> {
    let store = Arc::new(InMemoryStore::new());
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let users = Arc::new(UserService::new(Arc::clone(&store), Arc::clone(&clock)));
    let workouts = Arc::new(WorkoutService::new(Arc::clone(&store), Arc::clone(&clock)));
    let catalogue = Arc::new(CatalogueService::new(Arc::clone(&store)));
    let plans = Arc::new(WorkoutPlanService::new(Arc::clone(&store), Arc::clone(&clock)));
    let progress = Arc::new(ProgressService::new(store, clock));

    web::Data::new(HttpState {
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
    })
}
