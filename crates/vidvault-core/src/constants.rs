//! Fixed values shared across crates.

/// Multipart field carrying the uploaded video.
pub const UPLOAD_FIELD_NAME: &str = "video";

/// Path prefix under which stored files are retrievable.
pub const VIDEOS_PATH_PREFIX: &str = "/videos";

/// Default upload limit: 5 GiB.
pub const DEFAULT_MAX_UPLOAD_SIZE_BYTES: u64 = 5 * 1024 * 1024 * 1024;

/// Default listening port when `PORT` is unset.
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default storage root when `UPLOADS_DIR` is unset.
pub const DEFAULT_UPLOADS_DIR: &str = "/railway/data/uploads";

/// Retrieval URL path for a stored file.
pub fn video_url(name: &str) -> String {
    format!("{}/{}", VIDEOS_PATH_PREFIX, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_url() {
        assert_eq!(video_url("my-video.mp4"), "/videos/my-video.mp4");
    }

    #[test]
    fn test_default_limit_is_five_gib() {
        assert_eq!(DEFAULT_MAX_UPLOAD_SIZE_BYTES, 5_368_709_120);
    }
}
