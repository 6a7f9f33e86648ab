use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS messages (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            body       TEXT NOT NULL,
            posted_at  TEXT NOT NULL
        );
        ",
    )?;

    info!("Store migrations complete");
    Ok(())
}
