pub mod categories;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /movies            list (GET), create (POST, multipart)
/// /movies/{id}       get, update (PUT, multipart), delete
/// /categories        list (read-only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/categories", categories::router())
}
