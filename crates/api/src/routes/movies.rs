//! Route definitions for the `/movies` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Request body cap for multipart movie forms: the 2 MiB cover plus
/// headroom for the text fields and multipart framing.
const MAX_FORM_BYTES: usize = 4 * 1024 * 1024;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET    /        -> list (supports ?search=&limit=&offset=)
/// POST   /        -> create (multipart)
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update (multipart)
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list).post(movies::create))
        .route(
            "/{id}",
            get(movies::get_by_id)
                .put(movies::update)
                .delete(movies::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_FORM_BYTES))
}
