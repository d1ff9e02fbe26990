//! Student CRUD routes. Nested under `/api` by the server.

use crate::handlers::student::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list).post(create))
        .route(
            "/students/:id",
            get(read).put(update).patch(update).delete(delete_handler),
        )
        .with_state(state)
}
