//! SQLite-backed snapshot source

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use natmon_core::data::SnapshotSource;
use natmon_core::Monument;
use rusqlite::Connection;
use tracing::{debug, info};

use crate::DataError;

/// Snapshot source reading the monuments table from a SQLite file
///
/// A fresh connection is opened per fetch; there is no shared mutable state
/// between requests.
#[derive(Debug)]
pub struct SqliteStore {
    path: PathBuf,
    table: String,
    row_count: usize,
}

impl SqliteStore {
    /// Open the database, verify the table exists and count its rows
    pub async fn new<P: AsRef<Path>>(path: P, table: &str) -> Result<Self, DataError> {
        // The table name is interpolated into queries, so it must be a plain
        // identifier.
        if !is_valid_identifier(table) {
            return Err(DataError::InvalidTable(table.to_string()));
        }
        let path = path.as_ref().to_path_buf();
        let table = table.to_string();
        let row_count = {
            let path = path.clone();
            let table = table.clone();
            tokio::task::spawn_blocking(move || {
                let conn = Connection::open(&path)?;
                if !table_exists(&conn, &table)? {
                    return Err(DataError::MissingTable(table));
                }
                count_rows(&conn, &table)
            })
            .await??
        };
        info!(table = %table, rows = row_count, "opened monument database");
        Ok(Self {
            path,
            table,
            row_count,
        })
    }
}

fn is_valid_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool, DataError> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

fn count_rows(conn: &Connection, table: &str) -> Result<usize, DataError> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })?;
    Ok(count as usize)
}

/// Read every row, mapping NULL columns to the sentinel defaults
fn fetch_rows(path: &Path, table: &str) -> Result<Vec<Monument>, DataError> {
    let conn = Connection::open(path)?;
    let query = format!("SELECT name, agency, president, states, date, year, acres FROM {table}");
    let mut stmt = conn.prepare(&query)?;
    let rows = stmt.query_map([], |row| {
        Ok(Monument {
            name: row.get::<_, Option<String>>(0)?.unwrap_or_default(),
            agency: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            president: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            states: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            date: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            year: row.get::<_, Option<i64>>(5)?.unwrap_or(0) as i32,
            acres: row.get::<_, Option<f64>>(6)?.unwrap_or(0.0),
        })
    })?;
    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }
    Ok(records)
}

#[async_trait]
impl SnapshotSource for SqliteStore {
    async fn fetch_all(&self) -> anyhow::Result<Vec<Monument>> {
        let path = self.path.clone();
        let table = self.table.clone();
        let records = tokio::task::spawn_blocking(move || fetch_rows(&path, &table))
            .await
            .map_err(DataError::Join)??;
        debug!(rows = records.len(), "fetched monument snapshot");
        Ok(records)
    }

    async fn row_count(&self) -> anyhow::Result<usize> {
        Ok(self.row_count)
    }

    fn source_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seed_database(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("monuments.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE monuments (
                name TEXT, agency TEXT, president TEXT,
                states TEXT, date TEXT, year INTEGER, acres REAL
            );
            INSERT INTO monuments VALUES
                ('Devils Tower', 'NPS', 'Theodore Roosevelt', 'Wyoming', '9/24', 1906, 1347.0),
                ('Aniakchak', 'NPS', 'Jimmy Carter', 'Alaska', '12/1', 1978, 137176.0),
                ('Nameless', NULL, NULL, NULL, NULL, NULL, NULL);",
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn fetches_rows_with_null_defaults() {
        let dir = TempDir::new().unwrap();
        let path = seed_database(&dir);
        let store = SqliteStore::new(&path, "monuments").await.unwrap();
        assert_eq!(store.row_count().await.unwrap(), 3);

        let records = store.fetch_all().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].president, "Theodore Roosevelt");
        assert_eq!(records[0].year, 1906);

        let nameless = &records[2];
        assert_eq!(nameless.name, "Nameless");
        assert_eq!(nameless.president, "");
        assert_eq!(nameless.states, "");
        assert_eq!(nameless.year, 0);
        assert_eq!(nameless.acres, 0.0);
    }

    #[tokio::test]
    async fn source_name_is_the_file_name() {
        let dir = TempDir::new().unwrap();
        let path = seed_database(&dir);
        let store = SqliteStore::new(&path, "monuments").await.unwrap();
        assert_eq!(store.source_name(), "monuments.db");
    }

    #[tokio::test]
    async fn rejects_missing_table() {
        let dir = TempDir::new().unwrap();
        let path = seed_database(&dir);
        let err = SqliteStore::new(&path, "landmarks").await.unwrap_err();
        assert!(matches!(err, DataError::MissingTable(_)));
    }

    #[tokio::test]
    async fn rejects_non_identifier_table_names() {
        let dir = TempDir::new().unwrap();
        let path = seed_database(&dir);
        for bad in ["", "monuments; DROP TABLE monuments", "1monuments", "a b"] {
            let err = SqliteStore::new(&path, bad).await.unwrap_err();
            assert!(matches!(err, DataError::InvalidTable(_)), "{bad}");
        }
    }
}
