use axum_test::multipart::{MultipartForm, Part};
use axum_test::{TestResponse, TestServer};

/// Multipart form carrying `bytes` under the `video` field with the given filename.
pub fn video_form(filename: &str, bytes: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "video",
        Part::bytes(bytes.to_vec())
            .file_name(filename.to_string())
            .mime_type("video/mp4"),
    )
}

/// Upload and return the response without asserting on it.
pub async fn upload(client: &TestServer, filename: &str, bytes: &[u8]) -> TestResponse {
    client
        .post("/upload")
        .multipart(video_form(filename, bytes))
        .await
}

/// Deterministic fake video payload.
pub fn fake_video(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}
