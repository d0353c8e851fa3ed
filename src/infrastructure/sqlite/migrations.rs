use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS saved_searches (
            term TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_saved_searches_created ON saved_searches(created_at);
        ",
    )
    .map_err(|e| format!("Migration failed: {e}"))
}
