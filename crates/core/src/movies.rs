//! Validation rules for movie form fields.
//!
//! Each function checks one field and returns `CoreError::Validation`
//! with a message naming the offending field, so the API layer can
//! surface field-level errors directly.

use crate::error::CoreError;

/// Maximum length of a caller-supplied movie identifier.
pub const MAX_ID_LEN: usize = 255;

/// Maximum length of a movie title.
pub const MAX_TITLE_LEN: usize = 255;

/// Earliest acceptable release year (first motion picture).
pub const MIN_RELEASE_YEAR: i32 = 1888;

/// Latest acceptable release year.
pub const MAX_RELEASE_YEAR: i32 = 2100;

/// Validate the caller-supplied movie identifier.
pub fn validate_movie_id(id: &str) -> Result<(), CoreError> {
    if id.trim().is_empty() {
        return Err(CoreError::Validation("id must not be empty".to_string()));
    }
    if id.len() > MAX_ID_LEN {
        return Err(CoreError::Validation(format!(
            "id exceeds maximum length of {MAX_ID_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a movie title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "title must not be empty".to_string(),
        ));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title exceeds maximum length of {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a synopsis.
pub fn validate_synopsis(synopsis: &str) -> Result<(), CoreError> {
    if synopsis.trim().is_empty() {
        return Err(CoreError::Validation(
            "synopsis must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a cast list.
pub fn validate_cast_list(cast_list: &str) -> Result<(), CoreError> {
    if cast_list.trim().is_empty() {
        return Err(CoreError::Validation(
            "cast_list must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validate a release year.
pub fn validate_release_year(year: i32) -> Result<(), CoreError> {
    if !(MIN_RELEASE_YEAR..=MAX_RELEASE_YEAR).contains(&year) {
        return Err(CoreError::Validation(format!(
            "release_year must be between {MIN_RELEASE_YEAR} and {MAX_RELEASE_YEAR}"
        )));
    }
    Ok(())
}
