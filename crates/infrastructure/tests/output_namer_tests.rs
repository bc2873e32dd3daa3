use fdns_sqlite_domain::DomainError;
use fdns_sqlite_infrastructure::output::resolve_output_path;
use std::path::Path;

#[tokio::test]
async fn test_first_candidate_when_nothing_exists() {
    let dir = tempfile::tempdir().unwrap();

    let path = resolve_output_path(Path::new("/data/fdns.json"), dir.path(), "sqlite3")
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("fdns.sqlite3"));
    assert!(!path.exists());
}

#[tokio::test]
async fn test_existing_file_gets_numbered_suffix() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("foo.sqlite3"), b"taken").unwrap();

    let path = resolve_output_path(Path::new("foo.json"), dir.path(), "sqlite3")
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("foo-1.sqlite3"));

    std::fs::write(dir.path().join("foo-1.sqlite3"), b"taken").unwrap();

    let path = resolve_output_path(Path::new("foo.json"), dir.path(), "sqlite3")
        .await
        .unwrap();
    assert_eq!(path, dir.path().join("foo-2.sqlite3"));
}

#[tokio::test]
async fn test_gap_in_suffixes_is_reused() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("foo.sqlite3"), b"taken").unwrap();
    std::fs::write(dir.path().join("foo-2.sqlite3"), b"taken").unwrap();

    let path = resolve_output_path(Path::new("foo.json"), dir.path(), "sqlite3")
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("foo-1.sqlite3"));
}

#[tokio::test]
async fn test_directory_counts_as_taken() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("foo.db")).unwrap();

    let path = resolve_output_path(Path::new("foo.json"), dir.path(), "db")
        .await
        .unwrap();

    assert_eq!(path, dir.path().join("foo-1.db"));
}

#[tokio::test]
async fn test_probe_error_is_surfaced() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file used as the output directory makes every probe fail
    // with something other than "not found".
    let not_a_dir = dir.path().join("plain-file");
    std::fs::write(&not_a_dir, b"").unwrap();

    let result = resolve_output_path(Path::new("foo.json"), &not_a_dir, "sqlite3").await;

    assert!(matches!(result, Err(DomainError::OutputProbe(_))));
}

#[tokio::test]
async fn test_input_without_file_name_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    let result = resolve_output_path(Path::new("/"), dir.path(), "sqlite3").await;

    assert!(matches!(result, Err(DomainError::InvalidInput(_))));
}
