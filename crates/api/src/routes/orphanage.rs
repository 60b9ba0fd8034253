//! Route definitions for the `/orphanages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::orphanage;
use crate::state::AppState;

/// Routes mounted at `/orphanages`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orphanage::list).post(orphanage::create))
        .route("/{id}", get(orphanage::get_by_id))
}
