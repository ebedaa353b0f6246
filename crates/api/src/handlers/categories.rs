//! Handlers for the `/categories` resource.
//!
//! Categories are managed elsewhere; this module only exposes the
//! listing used to populate the create/edit movie forms.

use axum::extract::State;
use axum::Json;
use kinoteka_db::models::category::Category;
use kinoteka_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/v1/categories
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;
    Ok(Json(categories))
}
