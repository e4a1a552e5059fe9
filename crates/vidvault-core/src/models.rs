//! Response bodies returned by the HTTP API.

use serde::{Deserialize, Serialize};

use crate::constants::video_url;

/// Fixed payload for `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn up() -> Self {
        Self {
            status: "server is up and running successfully".to_string(),
        }
    }
}

/// One stored file as reported by `GET /videos`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VideoEntry {
    pub name: String,
    pub url: String,
}

impl VideoEntry {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let url = video_url(&name);
        Self { name, url }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub message: String,
    pub url: String,
}

impl UploadResponse {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: "Video uploaded successfully".to_string(),
            url: video_url(name),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_entry_url_matches_name() {
        let entry = VideoEntry::new("clip.webm");
        assert_eq!(entry.url, "/videos/clip.webm");
    }

    #[test]
    fn test_upload_response_shape() {
        let json = serde_json::to_value(UploadResponse::for_name("a-b.mp4")).unwrap();
        assert_eq!(json["message"], "Video uploaded successfully");
        assert_eq!(json["url"], "/videos/a-b.mp4");
    }
}
