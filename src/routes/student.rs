//! Student CRUD routes. Mount under the API prefix (e.g. /api/v1.0).

use crate::handlers::student::{create, delete as delete_handler, edit, list, show};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create))
        .route(
            "/students/:id",
            get(show).put(edit).delete(delete_handler),
        )
        .with_state(state)
}
