use axum::{
    Router,
    routing::{delete, get, post, put},
};

use super::handlers::{
    create_student, delete_student, get_student, list_students, update_student,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_student))
        .route("/all-users", get(list_students))
        .route("/user/:id", get(get_student))
        .route("/edit/:id", put(update_student))
        .route("/delete/:id", delete(delete_student))
}
