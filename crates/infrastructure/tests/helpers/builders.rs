#![allow(dead_code)]
use fdns_sqlite_domain::config::DatabaseConfig;
use fdns_sqlite_infrastructure::database::create_store_pool;
use fdns_sqlite_infrastructure::repositories::SqliteRecordRepository;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

pub type StoredRow = (Option<String>, String, String, String);

/// Build one input line in the forward-DNS JSON shape.
pub fn fdns_line(timestamp: &str, name: &str, record_type: &str, value: &str) -> String {
    format!(
        r#"{{"timestamp":"{}","name":"{}","type":"{}","value":"{}"}}"#,
        timestamp, name, record_type, value
    )
}

/// `count` valid lines with distinct names.
pub fn fdns_lines(count: usize) -> String {
    (0..count)
        .map(|i| {
            let mut line = fdns_line(
                "1577836800",
                &format!("host{}.example.com", i),
                "a",
                &format!("10.0.{}.{}", i / 256, i % 256),
            );
            line.push('\n');
            line
        })
        .collect()
}

pub fn write_input(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Single-connection in-memory store, so every query sees the same database.
pub async fn memory_repository() -> SqliteRecordRepository {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    SqliteRecordRepository::new(pool)
}

pub async fn file_repository(path: &Path) -> SqliteRecordRepository {
    let pool = create_store_pool(path, &DatabaseConfig::default())
        .await
        .unwrap();
    SqliteRecordRepository::new(pool)
}

pub async fn fetch_rows(pool: &SqlitePool) -> Vec<StoredRow> {
    sqlx::query_as::<_, StoredRow>(
        "SELECT timestamp, name, type, value FROM records ORDER BY rowid",
    )
    .fetch_all(pool)
    .await
    .unwrap()
}
