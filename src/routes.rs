use crate::{
    routes::students::{get_index, post_delete, post_submit},
    state::RecordsState,
};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub mod students;

pub fn router(state: RecordsState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/submit", post(post_submit))
        .route("/delete/{id}", post(post_delete))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
