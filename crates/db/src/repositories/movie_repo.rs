//! Repository for the `movies` table.

use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, UpdateMovie};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, category_id, synopsis, release_year, cast_list, cover_image, \
     created_at, updated_at";

/// Provides CRUD operations for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    ///
    /// The caller-supplied `id` is the primary key; a duplicate surfaces
    /// as a unique-violation database error.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies
                (id, title, category_id, synopsis, release_year, cast_list, cover_image)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.id)
            .bind(&input.title)
            .bind(input.category_id)
            .bind(&input.synopsis)
            .bind(input.release_year)
            .bind(&input.cast_list)
            .bind(&input.cover_image)
            .fetch_one(pool)
            .await
    }

    /// Find a movie by its string key.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List movies, newest first, optionally filtered by a
    /// case-insensitive substring match on title or synopsis.
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        match search {
            Some(term) => {
                let pattern = format!("%{term}%");
                let query = format!(
                    "SELECT {COLUMNS} FROM movies
                     WHERE title ILIKE $1 OR synopsis ILIKE $1
                     ORDER BY created_at DESC
                     LIMIT $2 OFFSET $3"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(pattern)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM movies
                     ORDER BY created_at DESC
                     LIMIT $1 OFFSET $2"
                );
                sqlx::query_as::<_, Movie>(&query)
                    .bind(limit)
                    .bind(offset)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// Count movies matching the same filter as [`MovieRepo::list`].
    pub async fn count(pool: &PgPool, search: Option<&str>) -> Result<i64, sqlx::Error> {
        let row: (i64,) = match search {
            Some(term) => {
                let pattern = format!("%{term}%");
                sqlx::query_as(
                    "SELECT COUNT(*) FROM movies WHERE title ILIKE $1 OR synopsis ILIKE $1",
                )
                .bind(pattern)
                .fetch_one(pool)
                .await?
            }
            None => {
                sqlx::query_as("SELECT COUNT(*) FROM movies")
                    .fetch_one(pool)
                    .await?
            }
        };
        Ok(row.0)
    }

    /// Update a movie. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: &str,
        input: &UpdateMovie,
    ) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!(
            "UPDATE movies SET
                title = COALESCE($2, title),
                category_id = COALESCE($3, category_id),
                synopsis = COALESCE($4, synopsis),
                release_year = COALESCE($5, release_year),
                cast_list = COALESCE($6, cast_list),
                cover_image = COALESCE($7, cover_image),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.category_id)
            .bind(&input.synopsis)
            .bind(input.release_year)
            .bind(&input.cast_list)
            .bind(&input.cover_image)
            .fetch_optional(pool)
            .await
    }

    /// Delete a movie by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
