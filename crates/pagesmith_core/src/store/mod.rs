//! Template persistence: saved-template list in a key-value store.
//!
//! # Responsibility
//! - Load and save the whole saved-template list as one JSON text value
//!   under a single fixed key.
//! - Keep SQL details behind the store trait.
//!
//! # Invariants
//! - A missing key loads as an empty list; a corrupt value is logged and
//!   loads as an empty list instead of failing.
//! - Saves overwrite the stored value wholesale; the list is never
//!   appended to at the storage layer.

use crate::db::DbError;
use crate::model::template::{generate_template_id, Template};
use log::{error, info, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized template list.
pub const SAVED_TEMPLATES_KEY: &str = "saved_templates";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error surfaced to callers for user notification. Never retried
/// internally.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialization(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization(err) => write!(f, "template serialization failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// Store interface for the saved-template list.
pub trait TemplateStore {
    fn load(&self) -> StoreResult<Vec<Template>>;
    fn save(&self, templates: &[Template]) -> StoreResult<()>;
}

/// SQLite-backed template store over the `kv` table.
pub struct SqliteTemplateStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTemplateStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TemplateStore for SqliteTemplateStore<'_> {
    fn load(&self) -> StoreResult<Vec<Template>> {
        let value: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1;",
                [SAVED_TEMPLATES_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let Some(value) = value else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&value) {
            Ok(templates) => Ok(templates),
            Err(err) => {
                // Corrupt stored state must not take the editor down.
                warn!(
                    "event=templates_load module=store status=corrupt error={err}; \
                     treating as empty list"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, templates: &[Template]) -> StoreResult<()> {
        let value = serde_json::to_string(templates)?;
        let result = self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![SAVED_TEMPLATES_KEY, value],
        );

        match result {
            Ok(_) => {
                info!(
                    "event=templates_save module=store status=ok count={}",
                    templates.len()
                );
                Ok(())
            }
            Err(err) => {
                error!("event=templates_save module=store status=error error={err}");
                Err(err.into())
            }
        }
    }
}

/// Saves a copy of `document` under `name`: the copy gets a freshly
/// generated template id, is appended to the loaded list, and the whole
/// list is written back. Returns the saved copy.
pub fn save_template_as<S: TemplateStore>(
    store: &S,
    document: &Template,
    name: &str,
) -> StoreResult<Template> {
    let mut saved = store.load()?;

    let mut copy = document.clone();
    copy.id = generate_template_id();
    copy.name = name.to_string();

    saved.push(copy.clone());
    store.save(&saved)?;
    Ok(copy)
}
