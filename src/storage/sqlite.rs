//! SQLite-backed conversation repository
//!
//! Conversations are stored whole as JSON blobs keyed by id. The schema is
//! created on open, so pointing at a fresh file just works.

use std::sync::Arc;

use async_trait::async_trait;
use sqlite::{Connection, ConnectionThreadSafe, State};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::features::conversation::Conversation;

use super::{ConversationRepository, StorageError};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS conversations (
    id TEXT PRIMARY KEY,
    data TEXT NOT NULL
)";

/// Durable repository storing serialized conversations in SQLite.
#[derive(Clone)]
pub struct SqliteConversationRepository {
    conn: Arc<Mutex<ConnectionThreadSafe>>,
}

impl SqliteConversationRepository {
    /// Open (or create) the database at `path` and ensure the schema exists.
    /// Pass `":memory:"` for a throwaway database.
    pub fn open(path: &str) -> Result<Self, StorageError> {
        let conn = Connection::open_thread_safe(path)?;
        conn.execute(SCHEMA)?;
        Ok(SqliteConversationRepository {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl ConversationRepository for SqliteConversationRepository {
    async fn save(&self, conversation: &Conversation) -> Result<(), StorageError> {
        let data = serde_json::to_string(conversation)?;
        let conn = self.conn.lock().await;
        let mut statement =
            conn.prepare("INSERT OR REPLACE INTO conversations (id, data) VALUES (?, ?)")?;
        statement.bind((1, conversation.id().to_string().as_str()))?;
        statement.bind((2, data.as_str()))?;
        while statement.next()? != State::Done {}
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Conversation>, StorageError> {
        let conn = self.conn.lock().await;
        let mut statement = conn.prepare("SELECT data FROM conversations WHERE id = ?")?;
        statement.bind((1, id.to_string().as_str()))?;

        if statement.next()? == State::Row {
            let data = statement.read::<String, _>(0)?;
            let conversation = serde_json::from_str(&data)?;
            Ok(Some(conversation))
        } else {
            Ok(None)
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StorageError> {
        let conn = self.conn.lock().await;
        let mut statement = conn.prepare("DELETE FROM conversations WHERE id = ?")?;
        statement.bind((1, id.to_string().as_str()))?;
        while statement.next()? != State::Done {}

        let mut count = conn.prepare("SELECT changes()")?;
        if count.next()? == State::Row {
            Ok(count.read::<i64, _>(0)? > 0)
        } else {
            Ok(false)
        }
    }

    async fn exists(&self, id: Uuid) -> Result<bool, StorageError> {
        let conn = self.conn.lock().await;
        let mut statement = conn.prepare("SELECT 1 FROM conversations WHERE id = ?")?;
        statement.bind((1, id.to_string().as_str()))?;
        Ok(statement.next()? == State::Row)
    }
}
