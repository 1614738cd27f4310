//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CatalogueCommand, CatalogueQuery, ProgressCommand, ProgressQuery, UsersCommand, UsersQuery,
    WorkoutPlansCommand, WorkoutPlansQuery, WorkoutsCommand, WorkoutsQuery,
};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fitness_backend::domain::{
///     CatalogueService, ProgressService, UserService, WorkoutPlanService, WorkoutService,
/// };
/// use fitness_backend::inbound::http::state::HttpState;
/// use fitness_backend::outbound::memory::InMemoryStore;
/// use mockable::DefaultClock;
///
/// let store = Arc::new(InMemoryStore::new());
/// let users = Arc::new(UserService::new(store.clone(), Arc::new(DefaultClock)));
/// let workouts = Arc::new(WorkoutService::new(store.clone(), Arc::new(DefaultClock)));
/// let catalogue = Arc::new(CatalogueService::new(store.clone()));
/// let plans = Arc::new(WorkoutPlanService::new(store.clone(), Arc::new(DefaultClock)));
/// let progress = Arc::new(ProgressService::new(store, Arc::new(DefaultClock)));
/// let state = HttpState {
///     users: users.clone(),
///     users_query: users,
///     workouts: workouts.clone(),
///     workouts_query: workouts,
///     catalogue: catalogue.clone(),
///     catalogue_query: catalogue,
///     plans: plans.clone(),
///     plans_query: plans,
///     progress: progress.clone(),
///     progress_query: progress,
/// };
/// let _users = state.users_query.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub workouts: Arc<dyn WorkoutsCommand>,
    pub workouts_query: Arc<dyn WorkoutsQuery>,
    pub catalogue: Arc<dyn CatalogueCommand>,
    pub catalogue_query: Arc<dyn CatalogueQuery>,
    pub plans: Arc<dyn WorkoutPlansCommand>,
    pub plans_query: Arc<dyn WorkoutPlansQuery>,
    pub progress: Arc<dyn ProgressCommand>,
    pub progress_query: Arc<dyn ProgressQuery>,
}
