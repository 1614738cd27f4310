//! HTTP inbound adapter exposing REST endpoints.

pub mod catalogue;
pub mod error;
pub mod health;
pub mod info;
pub mod plans;
pub mod progress;
pub mod state;
pub mod users;
pub mod workouts;

use actix_web::web;

pub use error::ApiResult;

/// Register extractor configuration and every API handler on `cfg`.
///
/// Callers provide [`state::HttpState`] and [`health::HealthState`] as app
/// data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use fitness_backend::inbound::http::configure;
/// use fitness_backend::inbound::http::health::HealthState;
///
/// let app = App::new()
///     .app_data(web::Data::new(HealthState::new()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(error::json_config())
        .app_data(error::path_config())
        .app_data(error::query_config())
        .service(info::api_info)
        .service(health::healthz)
        .service(health::ready)
        .service(users::register_user)
        .service(users::list_users)
        .service(users::get_user)
        .service(users::update_user)
        .service(users::delete_user)
        .service(users::user_stats)
        .service(workouts::create_workout)
        .service(workouts::list_workouts)
        .service(workouts::get_workout)
        .service(workouts::update_workout)
        .service(workouts::delete_workout)
        .service(catalogue::create_exercise)
        .service(catalogue::list_exercises)
        .service(catalogue::exercises_by_muscle_group)
        .service(catalogue::get_exercise)
        .service(catalogue::update_exercise)
        .service(catalogue::delete_exercise)
        .service(plans::create_plan)
        .service(plans::list_plans)
        .service(plans::get_plan)
        .service(plans::update_plan)
        .service(plans::delete_plan)
        .service(plans::add_plan_workout)
        .service(plans::remove_plan_workout)
        .service(progress::record_progress)
        .service(progress::list_progress)
        .service(progress::get_progress)
        .service(progress::delete_progress);
}
