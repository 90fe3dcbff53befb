pub mod profile;
pub mod students;

use axum::Router;

use crate::state::AppState;

pub fn api_router() -> Router<AppState> {
    students::routes().merge(profile::routes())
}
