use quran_academy_api::utils::uploads::{
    MAX_UPLOAD_BYTES, save_upload, storage_filename, validate_content_type,
};

#[test]
fn test_validate_content_type_accepts_images() {
    for ct in ["image/png", "image/jpeg", "image/webp", "image/gif"] {
        assert!(validate_content_type(ct).is_ok());
    }
}

#[test]
fn test_validate_content_type_accepts_mp3() {
    assert!(validate_content_type("audio/mpeg").is_ok());
}

#[test]
fn test_validate_content_type_rejects_everything_else() {
    for ct in [
        "audio/wav",
        "application/pdf",
        "text/html",
        "video/mp4",
        "application/octet-stream",
    ] {
        let err = validate_content_type(ct).unwrap_err();
        assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    }
}

#[test]
fn test_storage_filename_sanitizes_and_prefixes() {
    let name = storage_filename("my photo (1).png");

    let (prefix, rest) = name.split_once('-').unwrap();
    assert!(prefix.parse::<i64>().is_ok());
    assert_eq!(rest, "my_photo__1_.png");
}

#[test]
fn test_storage_filename_keeps_safe_characters() {
    let name = storage_filename("lesson-audio_01.mp3");
    assert!(name.ends_with("-lesson-audio_01.mp3"));
}

#[test]
fn test_storage_filename_empty_original() {
    let name = storage_filename("");
    assert!(name.ends_with("-file"));
}

#[tokio::test]
async fn test_save_upload_writes_file_and_returns_public_path() {
    let dir = std::env::temp_dir().join(format!("uploads-test-{}", uuid::Uuid::new_v4()));

    let path = save_upload(&dir, "cover.png", "image/png", b"fake image bytes")
        .await
        .unwrap();

    assert!(path.starts_with("/uploads/"));
    assert!(path.ends_with("-cover.png"));

    let filename = path.strip_prefix("/uploads/").unwrap();
    let stored = tokio::fs::read(dir.join(filename)).await.unwrap();
    assert_eq!(stored, b"fake image bytes");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_save_upload_rejects_oversized_file() {
    let dir = std::env::temp_dir().join(format!("uploads-test-{}", uuid::Uuid::new_v4()));
    let data = vec![0u8; MAX_UPLOAD_BYTES + 1];

    let err = save_upload(&dir, "big.png", "image/png", &data)
        .await
        .unwrap_err();

    assert_eq!(err.status, axum::http::StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_save_upload_rejects_bad_content_type_before_writing() {
    let dir = std::env::temp_dir().join(format!("uploads-test-{}", uuid::Uuid::new_v4()));

    let err = save_upload(&dir, "doc.pdf", "application/pdf", b"%PDF")
        .await
        .unwrap_err();

    assert_eq!(err.status, axum::http::StatusCode::BAD_REQUEST);
    assert!(!dir.exists());
}
