use reqwest::header::{HeaderMap, CONTENT_TYPE};

pub enum FileType {
    Image,
    Other,
}

/// Lowercase media type of `content_type`, parameters after `;` dropped.
pub fn normalize_content_type(content_type: &str) -> String {
    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Normalized `Content-Type` of the response, empty if missing.
pub fn content_type(headers: &HeaderMap) -> String {
    match headers.get(CONTENT_TYPE) {
        Some(value) => normalize_content_type(&String::from_utf8_lossy(value.as_bytes())),
        None => String::new(),
    }
}

/// Only the `image` prefix is checked, so `image/png` and `imagex/foo` both pass.
pub fn file_type(content_type: &str) -> FileType {
    if content_type.starts_with("image") {
        FileType::Image
    } else {
        FileType::Other
    }
}

pub fn process_headers(headers: &HeaderMap) -> (FileType, String) {
    let content_type = content_type(headers);
    (file_type(&content_type), content_type)
}
