//! Handlers for the `/movies` resource.
//!
//! Create and update accept a multipart form: the movie's text fields
//! plus a `cover` file field. The cover is validated and written to the
//! images directory before the row is touched; there is no transaction
//! spanning the two, so failures trigger best-effort file cleanup.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use kinoteka_core::covers;
use kinoteka_core::error::CoreError;
use kinoteka_core::movies as rules;
use kinoteka_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use kinoteka_db::repositories::MovieRepo;
use kinoteka_db::{clamp_limit, clamp_offset};

use crate::error::{AppError, AppResult};
use crate::query::PaginationParams;
use crate::response::Paginated;
use crate::state::AppState;

/// Query parameters specific to the movie listing.
#[derive(Debug, Deserialize)]
pub struct MovieSearchParams {
    /// Case-insensitive substring match against title or synopsis.
    pub search: Option<String>,
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<MovieSearchParams>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<Movie>>> {
    let limit = clamp_limit(page.limit);
    let offset = clamp_offset(page.offset);
    let search = params
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let movies = MovieRepo::list(&state.pool, search, limit, offset).await?;
    let total = MovieRepo::count(&state.pool, search).await?;

    Ok(Json(Paginated {
        data: movies,
        total,
        limit,
        offset,
    }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie", &id))?;
    Ok(Json(movie))
}

/// POST /api/v1/movies
///
/// Multipart form: `id`, `title`, `category_id`, `synopsis`,
/// `release_year`, `cast_list`, and a required `cover` file.
pub async fn create(
    State(state): State<AppState>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<Movie>)> {
    let form = read_form(multipart).await?;

    let id = require(form.id, "id")?;
    rules::validate_movie_id(&id)?;
    let title = require(form.title, "title")?;
    rules::validate_title(&title)?;
    let category_id = parse_category_id(&require(form.category_id, "category_id")?)?;
    let synopsis = require(form.synopsis, "synopsis")?;
    rules::validate_synopsis(&synopsis)?;
    let release_year = parse_release_year(&require(form.release_year, "release_year")?)?;
    let cast_list = require(form.cast_list, "cast_list")?;
    rules::validate_cast_list(&cast_list)?;

    let upload = form
        .cover
        .ok_or_else(|| CoreError::Validation("cover file is required".to_string()))?;
    let extension = covers::validate_cover(&upload.filename, &upload.bytes)?;

    // File first, row second (see module docs).
    let cover_image = state
        .covers
        .save(&extension, &upload.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store cover: {e}")))?;

    let input = CreateMovie {
        id,
        title,
        category_id,
        synopsis,
        release_year,
        cast_list,
        cover_image: cover_image.clone(),
    };

    match MovieRepo::create(&state.pool, &input).await {
        Ok(movie) => Ok((StatusCode::CREATED, Json(movie))),
        Err(e) => {
            // The row never existed; remove the orphaned file.
            if let Err(fs_err) = state.covers.delete(&cover_image).await {
                tracing::warn!(error = %fs_err, filename = %cover_image,
                    "Failed to clean up cover after insert failure");
            }
            Err(e.into())
        }
    }
}

/// PUT /api/v1/movies/{id}
///
/// Multipart form with the same fields as create, all optional. Without
/// a new `cover` the existing filename is preserved; with one, the new
/// file is written, the row updated, then the old file deleted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> AppResult<Json<Movie>> {
    let form = read_form(multipart).await?;

    let existing = MovieRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie", &id))?;

    if let Some(title) = &form.title {
        rules::validate_title(title)?;
    }
    if let Some(synopsis) = &form.synopsis {
        rules::validate_synopsis(synopsis)?;
    }
    if let Some(cast_list) = &form.cast_list {
        rules::validate_cast_list(cast_list)?;
    }
    let category_id = form
        .category_id
        .as_deref()
        .map(parse_category_id)
        .transpose()?;
    let release_year = form
        .release_year
        .as_deref()
        .map(parse_release_year)
        .transpose()?;

    let new_cover = match form.cover {
        Some(upload) => {
            let extension = covers::validate_cover(&upload.filename, &upload.bytes)?;
            let filename = state
                .covers
                .save(&extension, &upload.bytes)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to store cover: {e}")))?;
            Some(filename)
        }
        None => None,
    };

    let input = UpdateMovie {
        title: form.title,
        category_id,
        synopsis: form.synopsis,
        release_year,
        cast_list: form.cast_list,
        cover_image: new_cover.clone(),
    };

    match MovieRepo::update(&state.pool, &id, &input).await {
        Ok(Some(movie)) => {
            // Row now points at the new file; the old one is unreferenced.
            if new_cover.is_some() && movie.cover_image != existing.cover_image {
                if let Err(fs_err) = state.covers.delete(&existing.cover_image).await {
                    tracing::warn!(error = %fs_err, filename = %existing.cover_image,
                        "Failed to remove replaced cover");
                }
            }
            Ok(Json(movie))
        }
        Ok(None) => {
            discard_new_cover(&state, new_cover.as_deref()).await;
            Err(AppError::not_found("Movie", &id))
        }
        Err(e) => {
            discard_new_cover(&state, new_cover.as_deref()).await;
            Err(e.into())
        }
    }
}

/// DELETE /api/v1/movies/{id}
///
/// Removes the row, then its cover file. A cover that is already gone
/// is a silent no-op.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let movie = MovieRepo::find_by_id(&state.pool, &id)
        .await?
        .ok_or_else(|| AppError::not_found("Movie", &id))?;

    if !MovieRepo::delete(&state.pool, &id).await? {
        return Err(AppError::not_found("Movie", &id));
    }

    if let Err(fs_err) = state.covers.delete(&movie.cover_image).await {
        tracing::warn!(error = %fs_err, filename = %movie.cover_image,
            "Failed to remove cover of deleted movie");
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Multipart form parsing
// ---------------------------------------------------------------------------

/// A `cover` file field as received from the client.
struct CoverUpload {
    filename: String,
    bytes: Vec<u8>,
}

/// Text fields plus the optional cover file of a movie form.
/// Unknown fields are ignored.
#[derive(Default)]
struct MovieForm {
    id: Option<String>,
    title: Option<String>,
    category_id: Option<String>,
    synopsis: Option<String>,
    release_year: Option<String>,
    cast_list: Option<String>,
    cover: Option<CoverUpload>,
}

async fn read_form(mut multipart: Multipart) -> AppResult<MovieForm> {
    let mut form = MovieForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == "cover" {
            let filename = field.file_name().unwrap_or("cover").to_string();
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            form.cover = Some(CoverUpload {
                filename,
                bytes: bytes.to_vec(),
            });
            continue;
        }

        let value = field
            .text()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        match name.as_str() {
            "id" => form.id = Some(value),
            "title" => form.title = Some(value),
            "category_id" => form.category_id = Some(value),
            "synopsis" => form.synopsis = Some(value),
            "release_year" => form.release_year = Some(value),
            "cast_list" => form.cast_list = Some(value),
            _ => {}
        }
    }

    Ok(form)
}

fn require(value: Option<String>, name: &str) -> AppResult<String> {
    value.ok_or_else(|| CoreError::Validation(format!("{name} is required")).into())
}

fn parse_category_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| CoreError::Validation("category_id must be an integer".to_string()).into())
}

fn parse_release_year(raw: &str) -> AppResult<i32> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation("release_year must be an integer".to_string()))?;
    rules::validate_release_year(year)?;
    Ok(year)
}

async fn discard_new_cover(state: &AppState, filename: Option<&str>) {
    if let Some(filename) = filename {
        if let Err(fs_err) = state.covers.delete(filename).await {
            tracing::warn!(error = %fs_err, filename = %filename,
                "Failed to clean up cover after update failure");
        }
    }
}
