use super::*;

use shared::domain::ImageRef;

fn write_snapshot(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("homepage.json");
    std::fs::write(&path, body).expect("write snapshot");
    path
}

#[tokio::test]
async fn reads_record_from_json_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_snapshot(
        &dir,
        r#"{ "aboutTitle": "Villa", "aboutImage": { "asset": { "_ref": "image-a-1x1-jpg" } } }"#,
    );

    let record = FileContentSource::new(&path)
        .fetch()
        .await
        .expect("fetch")
        .expect("record present");

    assert_eq!(record.title.as_deref(), Some("Villa"));
    assert_eq!(record.image_single, Some(ImageRef::new("image-a-1x1-jpg")));
}

#[tokio::test]
async fn json_null_means_no_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_snapshot(&dir, "null");

    let record = FileContentSource::new(path).fetch().await.expect("fetch");
    assert!(record.is_none());
}

#[tokio::test]
async fn missing_file_reports_its_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");

    let err = FileContentSource::new(&path)
        .fetch()
        .await
        .expect_err("missing file");

    match err {
        ContentError::Io { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_snapshot(&dir, "{ \"aboutImages\": 7 }");

    let err = FileContentSource::new(path).fetch().await.expect_err("bad json");
    assert!(matches!(err, ContentError::Decode(_)));
}

#[tokio::test]
async fn static_source_hands_back_its_record() {
    let record = ContentRecord {
        title: Some("Static".into()),
        ..ContentRecord::default()
    };

    let fetched = StaticContentSource::new(Some(record.clone()))
        .fetch()
        .await
        .expect("fetch");
    assert_eq!(fetched, Some(record));
    assert!(StaticContentSource::default().fetch().await.expect("fetch").is_none());
}
