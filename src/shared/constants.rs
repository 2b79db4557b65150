/// Maximum accepted flood reports per submitter IP per calendar day
pub const DAILY_REPORT_LIMIT: i64 = 10;

/// Advisory message returned when the daily quota is already used up
pub const QUOTA_FULL_MESSAGE: &str =
    "Maaf, kuota laporan hari ini telah penuh (maksimal 10 laporan per IP)";

/// Message returned after a successful report submission
pub const REPORT_ACCEPTED_MESSAGE: &str = "Laporan berhasil dikirim!";

/// Maximum photo upload size in bytes (5 MB)
pub const MAX_PHOTO_SIZE: usize = 5 * 1024 * 1024;

/// Check whether an uploaded photo MIME type is accepted
pub fn is_photo_mime_type_allowed(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Map a photo MIME type to a file extension for the stored object key
pub fn photo_extension_for(content_type: &str) -> &'static str {
    match content_type {
        "image/jpeg" => "jpg",
        "image/png" => "png",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photo_mime_types() {
        assert!(is_photo_mime_type_allowed("image/jpeg"));
        assert!(is_photo_mime_type_allowed("image/png"));
        assert!(!is_photo_mime_type_allowed("application/pdf"));
        assert!(!is_photo_mime_type_allowed("video/mp4"));
    }

    #[test]
    fn test_photo_extension() {
        assert_eq!(photo_extension_for("image/jpeg"), "jpg");
        assert_eq!(photo_extension_for("image/svg+xml"), "bin");
    }
}
