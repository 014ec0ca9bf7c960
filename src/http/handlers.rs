//! Static request handlers.

use axum::extract::State;

use crate::http::server::AppState;

/// `GET /check` — returns the configured fixed body with status 200.
pub async fn check(State(state): State<AppState>) -> String {
    state.check_body.to_string()
}
