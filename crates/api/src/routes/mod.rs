pub mod health;
pub mod orphanage;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET  /orphanages          -> list
/// POST /orphanages          -> create
/// GET  /orphanages/{id}     -> get_by_id
/// ```
///
/// `/health` and the `/uploads` static file service are mounted by the
/// entrypoint, next to the middleware stack.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/orphanages", orphanage::router())
}
