//! Bug CRUD routes, nested under `/api/bugs` by `app`. Unsupported methods fall through to 404.

use crate::handlers::{create, delete as delete_handler, list, read, update};
use crate::routes::common::not_found;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn bug_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create).fallback(not_found))
        .route(
            "/:id",
            get(read).put(update).delete(delete_handler).fallback(not_found),
        )
        .with_state(state)
}
