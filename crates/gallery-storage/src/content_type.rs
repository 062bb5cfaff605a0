/// MIME type for a file extension (with or without the leading dot).
///
/// Unknown extensions map to `application/octet-stream`.
pub fn content_type_for_extension(extension: &str) -> &'static str {
    match extension.trim_start_matches('.').to_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        assert_eq!(content_type_for_extension(".jpg"), "image/jpeg");
        assert_eq!(content_type_for_extension(".JPEG"), "image/jpeg");
        assert_eq!(content_type_for_extension("png"), "image/png");
        assert_eq!(content_type_for_extension(".WebP"), "image/webp");
    }

    #[test]
    fn test_unknown_extension_is_octet_stream() {
        assert_eq!(content_type_for_extension(".gif"), "application/octet-stream");
        assert_eq!(content_type_for_extension(""), "application/octet-stream");
    }
}
