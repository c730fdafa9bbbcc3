//! State repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide get/set of the full `AppState` aggregate under a fixed key.
//! - Keep SQL and JSON codec details inside the persistence boundary.
//!
//! # Invariants
//! - Saves replace the whole aggregate payload in a single statement.
//! - Reads never return a partially decoded aggregate.

use crate::db::DbError;
use crate::model::now_epoch_ms;
use crate::model::state::AppState;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fixed key the aggregate is stored under.
pub const STATE_KEY: &str = "mindnotes-state";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for aggregate persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// The stored payload could not be decoded into an `AppState`.
    InvalidPayload(String),
    /// The in-memory aggregate could not be encoded for storage.
    Encode(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidPayload(message) => {
                write!(f, "invalid persisted state payload: {message}")
            }
            Self::Encode(err) => write!(f, "failed to encode state payload: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidPayload(_) => None,
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value persistence contract for the application aggregate.
pub trait StateRepository {
    /// Loads the stored aggregate; `None` when the key is absent.
    fn load(&self) -> RepoResult<Option<AppState>>;
    /// Replaces the stored aggregate wholesale.
    fn save(&self, state: &AppState) -> RepoResult<()>;
}

/// SQLite-backed aggregate store.
pub struct SqliteStateRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStateRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StateRepository for SqliteStateRepository<'_> {
    fn load(&self) -> RepoResult<Option<AppState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM app_state WHERE key = ?1;",
                [STATE_KEY],
                |row| row.get(0),
            )
            .optional()?;

        match payload {
            Some(text) => {
                let state = serde_json::from_str(&text)
                    .map_err(|err| RepoError::InvalidPayload(err.to_string()))?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save(&self, state: &AppState) -> RepoResult<()> {
        let payload = serde_json::to_string(state).map_err(RepoError::Encode)?;

        self.conn.execute(
            "INSERT INTO app_state (key, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at;",
            params![STATE_KEY, payload, now_epoch_ms()],
        )?;

        Ok(())
    }
}
