// src/infrastructure/sqlite.rs
use crate::application::CardRepository;
use crate::domain::{Card, DomainError, FaceColor, FlagChanges, NewCard};
use anyhow::{Context, Result};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{params, Connection, OptionalExtension, Row, ToSql};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS cards (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    title        TEXT NOT NULL,
    description  TEXT NOT NULL,
    is_pinned    INTEGER NOT NULL DEFAULT 0,
    is_important INTEGER NOT NULL DEFAULT 0,
    face_color   TEXT NOT NULL DEFAULT 'purple',
    is_deleted   INTEGER NOT NULL DEFAULT 0
);
";

const CARD_COLUMNS: &str = "id, title, description, is_pinned, is_important, face_color, is_deleted";

impl ToSql for FaceColor {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_name()))
    }
}

impl FromSql for FaceColor {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let name = value.as_str()?;
        FaceColor::from_name(name).ok_or_else(|| {
            FromSqlError::Other(Box::new(DomainError::UnknownFaceColor(name.to_string())))
        })
    }
}

/// Card store backed by a single SQLite database file. The connection
/// is opened once at startup and held for the process lifetime.
pub struct SqliteCardRepository {
    conn: Connection,
    db_path: PathBuf,
}

impl SqliteCardRepository {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let path = PathBuf::from(db_path.as_ref());
        debug!(?path, "Opening card store");

        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open card store at {}", path.display()))?;
        conn.execute_batch(SCHEMA)
            .context("Failed to initialize card store schema")?;

        info!(?path, "Card store ready");
        Ok(Self {
            conn,
            db_path: path,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn fetch(&self, id: i64) -> Result<Option<Card>, DomainError> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id], row_to_card)
            .optional()
            .map_err(store_err)
    }
}

fn store_err(err: rusqlite::Error) -> DomainError {
    DomainError::StoreUnavailable(err.to_string())
}

fn row_to_card(row: &Row<'_>) -> rusqlite::Result<Card> {
    Ok(Card {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        is_pinned: row.get(3)?,
        is_important: row.get(4)?,
        face_color: row.get(5)?,
        is_deleted: row.get(6)?,
    })
}

impl CardRepository for SqliteCardRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_active(&mut self) -> Result<Vec<Card>, DomainError> {
        let sql = format!("SELECT {CARD_COLUMNS} FROM cards WHERE is_deleted = 0");
        let mut stmt = self.conn.prepare(&sql).map_err(store_err)?;
        let cards = stmt
            .query_map([], row_to_card)
            .map_err(store_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(store_err)?;
        Ok(cards)
    }

    // Each provided field gets its own assignment; absent fields never
    // appear in the statement, so the store cannot coerce them.
    #[instrument(level = "debug", skip(self))]
    fn update_flags(
        &mut self,
        id: i64,
        changes: FlagChanges,
    ) -> Result<Option<Card>, DomainError> {
        match (changes.is_pinned, changes.is_important) {
            (None, None) => {}
            (Some(pinned), None) => {
                self.conn
                    .execute(
                        "UPDATE cards SET is_pinned = ?1 WHERE id = ?2",
                        params![pinned, id],
                    )
                    .map_err(store_err)?;
            }
            (None, Some(important)) => {
                self.conn
                    .execute(
                        "UPDATE cards SET is_important = ?1 WHERE id = ?2",
                        params![important, id],
                    )
                    .map_err(store_err)?;
            }
            (Some(pinned), Some(important)) => {
                self.conn
                    .execute(
                        "UPDATE cards SET is_pinned = ?1, is_important = ?2 WHERE id = ?3",
                        params![pinned, important, id],
                    )
                    .map_err(store_err)?;
            }
        }
        self.fetch(id)
    }

    #[instrument(level = "debug", skip(self))]
    fn soft_delete(&mut self, id: i64) -> Result<Option<Card>, DomainError> {
        self.conn
            .execute("UPDATE cards SET is_deleted = 1 WHERE id = ?1", params![id])
            .map_err(store_err)?;
        self.fetch(id)
    }

    fn count_cards(&mut self) -> Result<u64, DomainError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM cards", [], |row| row.get(0))
            .map_err(store_err)?;
        Ok(count as u64)
    }

    fn count_active(&mut self) -> Result<u64, DomainError> {
        let count: i64 = self
            .conn
            .query_row(
                "SELECT COUNT(*) FROM cards WHERE is_deleted = 0",
                [],
                |row| row.get(0),
            )
            .map_err(store_err)?;
        Ok(count as u64)
    }

    #[instrument(level = "debug", skip(self))]
    fn restore_deleted(&mut self) -> Result<u64, DomainError> {
        let restored = self
            .conn
            .execute("UPDATE cards SET is_deleted = 0 WHERE is_deleted = 1", [])
            .map_err(store_err)?;
        Ok(restored as u64)
    }

    fn create_cards(&mut self, cards: &[NewCard]) -> Result<(), DomainError> {
        let tx = self.conn.transaction().map_err(store_err)?;
        for card in cards {
            tx.execute(
                "INSERT INTO cards (title, description, face_color) VALUES (?1, ?2, ?3)",
                params![card.title, card.description, card.face_color],
            )
            .map_err(store_err)?;
        }
        tx.commit().map_err(store_err)
    }
}
