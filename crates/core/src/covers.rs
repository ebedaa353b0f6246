//! Cover-image upload rules.
//!
//! Decides which uploads are accepted (extension allow-list, size cap,
//! magic-byte sniffing) and how stored filenames are generated. Pure
//! functions only; the API layer owns the actual filesystem writes.

use uuid::Uuid;

use crate::error::CoreError;

/// Maximum accepted cover upload size (2 MiB).
pub const MAX_COVER_BYTES: usize = 2 * 1024 * 1024;

/// File extensions a cover upload may carry.
pub const ALLOWED_COVER_EXTENSIONS: [&str; 5] = ["jpeg", "jpg", "png", "gif", "svg"];

/// Extract and normalize the extension of an uploaded cover filename.
///
/// Returns the lowercased extension if it is on the allow-list.
pub fn cover_extension(filename: &str) -> Result<String, CoreError> {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if ext.is_empty() {
        return Err(CoreError::Validation(format!(
            "cover: filename '{filename}' has no extension"
        )));
    }
    if !ALLOWED_COVER_EXTENSIONS.contains(&ext.as_str()) {
        return Err(CoreError::Validation(format!(
            "cover: extension '{ext}' is not allowed. Allowed: {}",
            ALLOWED_COVER_EXTENSIONS.join(", ")
        )));
    }
    Ok(ext)
}

/// Validate an uploaded cover file, returning its normalized extension.
///
/// Checks, in order: non-empty content, size cap, extension allow-list,
/// and that the bytes actually look like the claimed format.
pub fn validate_cover(filename: &str, bytes: &[u8]) -> Result<String, CoreError> {
    if bytes.is_empty() {
        return Err(CoreError::Validation(
            "cover: uploaded file is empty".to_string(),
        ));
    }
    if bytes.len() > MAX_COVER_BYTES {
        return Err(CoreError::Validation(format!(
            "cover: file exceeds maximum size of {MAX_COVER_BYTES} bytes"
        )));
    }

    let ext = cover_extension(filename)?;

    if !content_matches(&ext, bytes) {
        return Err(CoreError::Validation(format!(
            "cover: file content does not match a '{ext}' image"
        )));
    }
    Ok(ext)
}

/// Generate the stored filename for a cover: `{uuid-v4}.{ext}`.
///
/// Random names make concurrent uploads collision-free without any
/// coordination on the images directory.
pub fn storage_filename(extension: &str) -> String {
    format!("{}.{extension}", Uuid::new_v4())
}

/// Check that the file content matches the format the extension claims.
fn content_matches(extension: &str, bytes: &[u8]) -> bool {
    use image::ImageFormat;

    match extension {
        "svg" => looks_like_svg(bytes),
        _ => {
            let Ok(format) = image::guess_format(bytes) else {
                return false;
            };
            matches!(
                (extension, format),
                ("jpg" | "jpeg", ImageFormat::Jpeg)
                    | ("png", ImageFormat::Png)
                    | ("gif", ImageFormat::Gif)
            )
        }
    }
}

/// SVG has no magic bytes; accept text that opens with an XML prolog or
/// an `<svg` element within the first kilobyte.
fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let Ok(text) = std::str::from_utf8(head) else {
        return false;
    };
    let trimmed = text.trim_start_matches('\u{feff}').trim_start();
    trimmed.starts_with("<svg") || (trimmed.starts_with("<?xml") && text.contains("<svg"))
}
