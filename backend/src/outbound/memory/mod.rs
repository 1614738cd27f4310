//! In-process store backing every repository port.
//!
//! All records live behind a single [`Mutex`]. Every operation takes the lock
//! once, so identifier assignment, email uniqueness, owner checks and plan
//! membership happen in the same critical section as the write they guard.
//! The guard is never held across an `.await`.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::error;

use crate::domain::ports::{
    CatalogueRepository, CatalogueRepositoryError, ProgressLogRepository,
    ProgressLogRepositoryError, UserRepository, UserRepositoryError, WorkoutPlanRepository,
    WorkoutPlanRepositoryError, WorkoutRepository, WorkoutRepositoryError,
};
use crate::domain::{
    CatalogueEntry, CatalogueExercise, CatalogueExerciseId, EmailAddress, PlanDetails,
    ProgressLog, ProgressLogDraft, ProgressLogId, User, UserChanges, UserDraft, UserId, Workout,
    WorkoutChanges, WorkoutDraft, WorkoutId, WorkoutPlan, WorkoutPlanDraft, WorkoutPlanId,
};

const POISONED: &str = "store lock poisoned";
const EXHAUSTED: &str = "identifier space exhausted";

#[derive(Debug)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    workouts: BTreeMap<WorkoutId, Workout>,
    catalogue: BTreeMap<CatalogueExerciseId, CatalogueExercise>,
    plans: BTreeMap<WorkoutPlanId, WorkoutPlan>,
    progress: BTreeMap<ProgressLogId, ProgressLog>,
    next_user_id: u64,
    next_workout_id: u64,
    next_catalogue_id: u64,
    next_plan_id: u64,
    next_progress_id: u64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            users: BTreeMap::new(),
            workouts: BTreeMap::new(),
            catalogue: BTreeMap::new(),
            plans: BTreeMap::new(),
            progress: BTreeMap::new(),
            next_user_id: 1,
            next_workout_id: 1,
            next_catalogue_id: 1,
            next_plan_id: 1,
            next_progress_id: 1,
        }
    }
}

impl StoreState {
    fn email_taken(&self, email: &EmailAddress, except: Option<UserId>) -> bool {
        self.users
            .values()
            .any(|user| user.email() == email && Some(user.id()) != except)
    }
}

/// Process-scoped, non-persistent store.
///
/// Identifiers start at 1 and are never reused, even after deletion.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use fitness_backend::outbound::memory::InMemoryStore;
///
/// let store = Arc::new(InMemoryStore::new());
/// let _users = Arc::clone(&store);
/// let _plans = Arc::clone(&store);
/// let _workouts = store;
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<E>(
        &self,
        poisoned: impl FnOnce(&'static str) -> E,
    ) -> Result<MutexGuard<'_, StoreState>, E> {
        self.state.lock().map_err(|_| {
            error!("{POISONED}");
            poisoned(POISONED)
        })
    }
}

fn take_id(next: &mut u64) -> Option<u64> {
    let id = *next;
    *next = id.checked_add(1)?;
    Some(id)
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, draft: UserDraft) -> Result<User, UserRepositoryError> {
        let mut state = self.lock(UserRepositoryError::query)?;
        if state.email_taken(&draft.email, None) {
            return Err(UserRepositoryError::email_taken(draft.email.as_ref()));
        }
        let id = take_id(&mut state.next_user_id)
            .map(UserId::new)
            .ok_or_else(|| UserRepositoryError::query(EXHAUSTED))?;
        let user = draft.into_user(id);
        state.users.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        let state = self.lock(UserRepositoryError::query)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let state = self.lock(UserRepositoryError::query)?;
        Ok(state.users.values().cloned().collect())
    }

    async fn update(
        &self,
        id: UserId,
        changes: UserChanges,
    ) -> Result<Option<User>, UserRepositoryError> {
        let mut state = self.lock(UserRepositoryError::query)?;
        if !state.users.contains_key(&id) {
            return Ok(None);
        }
        if let Some(email) = changes.email.as_ref() {
            if state.email_taken(email, Some(id)) {
                return Err(UserRepositoryError::email_taken(email.as_ref()));
            }
        }
        Ok(state.users.get_mut(&id).map(|user| {
            user.apply(changes);
            user.clone()
        }))
    }

    async fn delete(&self, id: UserId) -> Result<bool, UserRepositoryError> {
        let mut state = self.lock(UserRepositoryError::query)?;
        Ok(state.users.remove(&id).is_some())
    }
}

#[async_trait]
impl WorkoutRepository for InMemoryStore {
    async fn insert(&self, draft: WorkoutDraft) -> Result<Workout, WorkoutRepositoryError> {
        let mut state = self.lock(WorkoutRepositoryError::query)?;
        if !state.users.contains_key(&draft.user_id) {
            return Err(WorkoutRepositoryError::unknown_owner(draft.user_id.get()));
        }
        let id = take_id(&mut state.next_workout_id)
            .map(WorkoutId::new)
            .ok_or_else(|| WorkoutRepositoryError::query(EXHAUSTED))?;
        let workout = draft.into_workout(id);
        state.workouts.insert(id, workout.clone());
        Ok(workout)
    }

    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutRepositoryError> {
        let state = self.lock(WorkoutRepositoryError::query)?;
        Ok(state.workouts.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Workout>, WorkoutRepositoryError> {
        let state = self.lock(WorkoutRepositoryError::query)?;
        Ok(state.workouts.values().cloned().collect())
    }

    async fn list_by_owner(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Workout>, WorkoutRepositoryError> {
        let state = self.lock(WorkoutRepositoryError::query)?;
        if !state.users.contains_key(&user_id) {
            return Err(WorkoutRepositoryError::unknown_owner(user_id.get()));
        }
        Ok(state
            .workouts
            .values()
            .filter(|workout| workout.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: WorkoutId,
        changes: WorkoutChanges,
    ) -> Result<Option<Workout>, WorkoutRepositoryError> {
        let mut state = self.lock(WorkoutRepositoryError::query)?;
        Ok(state.workouts.get_mut(&id).map(|workout| {
            workout.apply(changes);
            workout.clone()
        }))
    }

    /// Also detaches the workout from every plan listing it.
    async fn delete(&self, id: WorkoutId) -> Result<bool, WorkoutRepositoryError> {
        let mut state = self.lock(WorkoutRepositoryError::query)?;
        if state.workouts.remove(&id).is_none() {
            return Ok(false);
        }
        for plan in state.plans.values_mut() {
            plan.detach(id);
        }
        Ok(true)
    }
}

#[async_trait]
impl CatalogueRepository for InMemoryStore {
    async fn insert(
        &self,
        entry: CatalogueEntry,
    ) -> Result<CatalogueExercise, CatalogueRepositoryError> {
        let mut state = self.lock(CatalogueRepositoryError::query)?;
        let id = take_id(&mut state.next_catalogue_id)
            .map(CatalogueExerciseId::new)
            .ok_or_else(|| CatalogueRepositoryError::query(EXHAUSTED))?;
        let exercise = entry.into_exercise(id);
        state.catalogue.insert(id, exercise.clone());
        Ok(exercise)
    }

    async fn find_by_id(
        &self,
        id: CatalogueExerciseId,
    ) -> Result<Option<CatalogueExercise>, CatalogueRepositoryError> {
        let state = self.lock(CatalogueRepositoryError::query)?;
        Ok(state.catalogue.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<CatalogueExercise>, CatalogueRepositoryError> {
        let state = self.lock(CatalogueRepositoryError::query)?;
        Ok(state.catalogue.values().cloned().collect())
    }

    async fn update(
        &self,
        id: CatalogueExerciseId,
        entry: CatalogueEntry,
    ) -> Result<Option<CatalogueExercise>, CatalogueRepositoryError> {
        let mut state = self.lock(CatalogueRepositoryError::query)?;
        Ok(state.catalogue.get_mut(&id).map(|exercise| {
            exercise.replace(entry);
            exercise.clone()
        }))
    }

    async fn delete(&self, id: CatalogueExerciseId) -> Result<bool, CatalogueRepositoryError> {
        let mut state = self.lock(CatalogueRepositoryError::query)?;
        Ok(state.catalogue.remove(&id).is_some())
    }
}

#[async_trait]
impl WorkoutPlanRepository for InMemoryStore {
    async fn insert(
        &self,
        draft: WorkoutPlanDraft,
    ) -> Result<WorkoutPlan, WorkoutPlanRepositoryError> {
        let mut state = self.lock(WorkoutPlanRepositoryError::query)?;
        if !state.users.contains_key(&draft.user_id) {
            return Err(WorkoutPlanRepositoryError::unknown_owner(draft.user_id.get()));
        }
        let id = take_id(&mut state.next_plan_id)
            .map(WorkoutPlanId::new)
            .ok_or_else(|| WorkoutPlanRepositoryError::query(EXHAUSTED))?;
        let plan = draft.into_plan(id);
        state.plans.insert(id, plan.clone());
        Ok(plan)
    }

    async fn find_by_id(
        &self,
        id: WorkoutPlanId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let state = self.lock(WorkoutPlanRepositoryError::query)?;
        Ok(state.plans.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let state = self.lock(WorkoutPlanRepositoryError::query)?;
        Ok(state.plans.values().cloned().collect())
    }

    async fn list_by_owner(
        &self,
        user_id: UserId,
    ) -> Result<Vec<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let state = self.lock(WorkoutPlanRepositoryError::query)?;
        if !state.users.contains_key(&user_id) {
            return Err(WorkoutPlanRepositoryError::unknown_owner(user_id.get()));
        }
        Ok(state
            .plans
            .values()
            .filter(|plan| plan.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: WorkoutPlanId,
        details: PlanDetails,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let mut state = self.lock(WorkoutPlanRepositoryError::query)?;
        Ok(state.plans.get_mut(&id).map(|plan| {
            plan.replace(details);
            plan.clone()
        }))
    }

    async fn delete(&self, id: WorkoutPlanId) -> Result<bool, WorkoutPlanRepositoryError> {
        let mut state = self.lock(WorkoutPlanRepositoryError::query)?;
        Ok(state.plans.remove(&id).is_some())
    }

    async fn add_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let mut state = self.lock(WorkoutPlanRepositoryError::query)?;
        if !state.plans.contains_key(&id) {
            return Ok(None);
        }
        if !state.workouts.contains_key(&workout) {
            return Err(WorkoutPlanRepositoryError::unknown_workout(workout.get()));
        }
        Ok(state.plans.get_mut(&id).map(|plan| {
            plan.attach(workout);
            plan.clone()
        }))
    }

    async fn remove_workout(
        &self,
        id: WorkoutPlanId,
        workout: WorkoutId,
    ) -> Result<Option<WorkoutPlan>, WorkoutPlanRepositoryError> {
        let mut state = self.lock(WorkoutPlanRepositoryError::query)?;
        Ok(state.plans.get_mut(&id).map(|plan| {
            plan.detach(workout);
            plan.clone()
        }))
    }
}

#[async_trait]
impl ProgressLogRepository for InMemoryStore {
    async fn insert(
        &self,
        draft: ProgressLogDraft,
    ) -> Result<ProgressLog, ProgressLogRepositoryError> {
        let mut state = self.lock(ProgressLogRepositoryError::query)?;
        if !state.users.contains_key(&draft.user_id) {
            return Err(ProgressLogRepositoryError::unknown_owner(draft.user_id.get()));
        }
        let id = take_id(&mut state.next_progress_id)
            .map(ProgressLogId::new)
            .ok_or_else(|| ProgressLogRepositoryError::query(EXHAUSTED))?;
        let log = draft.into_log(id);
        state.progress.insert(id, log.clone());
        Ok(log)
    }

    async fn find_by_id(
        &self,
        id: ProgressLogId,
    ) -> Result<Option<ProgressLog>, ProgressLogRepositoryError> {
        let state = self.lock(ProgressLogRepositoryError::query)?;
        Ok(state.progress.get(&id).cloned())
    }

    async fn list_by_owner(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ProgressLog>, ProgressLogRepositoryError> {
        let state = self.lock(ProgressLogRepositoryError::query)?;
        if !state.users.contains_key(&user_id) {
            return Err(ProgressLogRepositoryError::unknown_owner(user_id.get()));
        }
        let mut logs: Vec<_> = state
            .progress
            .values()
            .filter(|log| log.user_id() == user_id)
            .cloned()
            .collect();
        logs.sort_by_key(|log| (log.entry().log_date(), log.id()));
        Ok(logs)
    }

    async fn delete(&self, id: ProgressLogId) -> Result<bool, ProgressLogRepositoryError> {
        let mut state = self.lock(ProgressLogRepositoryError::query)?;
        Ok(state.progress.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests;
