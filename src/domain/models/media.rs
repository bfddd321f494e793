use serde::Serialize;

/// Classification of a stored momento, derived from its filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// Content types accepted by the upload endpoint.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "video/mp4",
    "video/webm",
    "video/ogg",
];

/// Extension-to-kind table used by the directory scan. Extensions are matched
/// lowercased, without the leading dot.
const MEDIA_EXTENSIONS: &[(&str, MediaKind)] = &[
    ("jpg", MediaKind::Image),
    ("jpeg", MediaKind::Image),
    ("png", MediaKind::Image),
    ("gif", MediaKind::Image),
    ("mp4", MediaKind::Video),
    ("webm", MediaKind::Video),
    ("ogg", MediaKind::Video),
];

pub fn is_allowed_media_type(content_type: &str) -> bool {
    ALLOWED_MEDIA_TYPES.contains(&content_type)
}

/// Media kind for a filename extension, or `None` for extensions the listing
/// should skip.
pub fn kind_for_extension(extension: &str) -> Option<MediaKind> {
    let extension = extension.to_ascii_lowercase();
    MEDIA_EXTENSIONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, kind)| *kind)
}

/// A momento found by scanning the storage directory.
#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub name: String,
    pub kind: MediaKind,
}
