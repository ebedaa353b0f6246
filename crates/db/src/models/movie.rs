//! Movie entity model and DTOs.

use kinoteka_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
///
/// `id` is the caller-supplied string key; `cover_image` is the
/// generated filename of the poster file in the images directory.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub category_id: DbId,
    pub synopsis: String,
    pub release_year: i32,
    pub cast_list: String,
    pub cover_image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new movie. Built by the API layer from the
/// multipart form after the cover file has been stored.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub id: String,
    pub title: String,
    pub category_id: DbId,
    pub synopsis: String,
    pub release_year: i32,
    pub cast_list: String,
    pub cover_image: String,
}

/// DTO for updating an existing movie. All fields are optional;
/// `cover_image` is set only when a replacement file was uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub category_id: Option<DbId>,
    pub synopsis: Option<String>,
    pub release_year: Option<i32>,
    pub cast_list: Option<String>,
    pub cover_image: Option<String>,
}
