use rusqlite::{params, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Option<i64>,
    pub email: String,
    pub source: String,
    pub subscribed_at: String,
}

/// Append-only table of newsletter sign-ups. Each call opens its own
/// connection, so clones can be moved onto blocking threads freely.
#[derive(Clone, Debug)]
pub struct SubscriberLog {
    db_path: Arc<PathBuf>,
}

impl SubscriberLog {
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let db_path = PathBuf::from(path);
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    rusqlite::Error::InvalidPath(PathBuf::from(format!("{}: {e}", parent.display())))
                })?;
            }
        }

        let conn = Connection::open(&db_path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            CREATE TABLE IF NOT EXISTS subscribers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL,
                source TEXT NOT NULL,
                subscribed_at TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_subscribers_email ON subscribers(email);
            ",
        )?;

        Ok(Self {
            db_path: Arc::new(db_path),
        })
    }

    pub fn insert(&self, subscriber: &Subscriber) -> rusqlite::Result<i64> {
        let conn = Connection::open(&*self.db_path)?;
        conn.execute(
            "INSERT INTO subscribers (email, source, subscribed_at) VALUES (?1, ?2, ?3)",
            params![subscriber.email, subscriber.source, subscriber.subscribed_at],
        )?;
        Ok(conn.last_insert_rowid())
    }

    pub fn count(&self) -> rusqlite::Result<i64> {
        let conn = Connection::open(&*self.db_path)?;
        conn.query_row("SELECT COUNT(*) FROM subscribers", [], |row| row.get(0))
    }

    pub fn latest(&self) -> rusqlite::Result<Option<Subscriber>> {
        let conn = Connection::open(&*self.db_path)?;
        conn.query_row(
            "SELECT id, email, source, subscribed_at FROM subscribers ORDER BY id DESC LIMIT 1",
            [],
            map_row,
        )
        .optional()
    }
}

fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Subscriber> {
    Ok(Subscriber {
        id: row.get(0)?,
        email: row.get(1)?,
        source: row.get(2)?,
        subscribed_at: row.get(3)?,
    })
}
