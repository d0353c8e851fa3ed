use crate::domain::error::DomainError;
use crate::domain::ports::search_store::SavedSearchStore;
use rusqlite::{params, Connection};
use std::sync::Mutex;

pub struct SqliteSearchStore {
    conn: Mutex<Connection>,
}

impl SqliteSearchStore {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

impl SavedSearchStore for SqliteSearchStore {
    fn list(&self) -> Result<Vec<String>, DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let mut stmt = conn
            .prepare("SELECT term FROM saved_searches ORDER BY created_at, term")
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let terms = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(terms)
    }

    fn add(&self, term: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        conn.execute(
            "INSERT OR IGNORE INTO saved_searches (term, created_at) VALUES (?1, ?2)",
            params![term, chrono::Utc::now().to_rfc3339()],
        )
        .map_err(|e| DomainError::Database(format!("Failed to save search: {e}")))?;
        Ok(())
    }

    fn remove(&self, term: &str) -> Result<(), DomainError> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = conn
            .execute("DELETE FROM saved_searches WHERE term = ?1", params![term])
            .map_err(|e| DomainError::Database(format!("Failed to remove search: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Saved search not found: {term}")));
        }
        Ok(())
    }
}
