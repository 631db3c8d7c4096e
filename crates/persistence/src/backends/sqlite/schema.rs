//! SQLite schema definitions and migrations.

use rusqlite::Connection;

use crate::error::{BackendError, StorageError, StorageResult};

/// Current schema version.
pub const SCHEMA_VERSION: i32 = 2;

fn migration_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::MigrationError { message })
}

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> StorageResult<()> {
    let current_version = get_schema_version(conn)?;

    if current_version == 0 {
        create_schema_v1(conn)?;
        set_schema_version(conn, 1)?;
        migrate_schema(conn, 1)?;
        tracing::info!(version = SCHEMA_VERSION, "Created movie catalog schema");
    } else if current_version < SCHEMA_VERSION {
        migrate_schema(conn, current_version)?;
        tracing::info!(
            from = current_version,
            to = SCHEMA_VERSION,
            "Migrated movie catalog schema"
        );
    } else if current_version > SCHEMA_VERSION {
        return Err(migration_error(format!(
            "database schema version {} is newer than supported version {}",
            current_version, SCHEMA_VERSION
        )));
    }

    Ok(())
}

/// Get the current schema version.
fn get_schema_version(conn: &Connection) -> StorageResult<i32> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER NOT NULL
        )",
        [],
    )
    .map_err(|e| migration_error(format!("Failed to create schema_version table: {}", e)))?;

    let version: Option<i32> = conn
        .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
            row.get(0)
        })
        .ok();

    Ok(version.unwrap_or(0))
}

/// Set the schema version.
fn set_schema_version(conn: &Connection, version: i32) -> StorageResult<()> {
    conn.execute("DELETE FROM schema_version", [])
        .map_err(|e| migration_error(format!("Failed to clear schema_version: {}", e)))?;

    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])
        .map_err(|e| migration_error(format!("Failed to set schema_version: {}", e)))?;

    Ok(())
}

/// Create the version 1 schema.
///
/// `seq` preserves creation order; `id` is the public identifier.
fn create_schema_v1(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS movies (
            seq INTEGER PRIMARY KEY AUTOINCREMENT,
            id TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            director TEXT NOT NULL,
            genre TEXT NOT NULL,
            year INTEGER NOT NULL,
            version INTEGER NOT NULL DEFAULT 1,
            last_updated TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_movies_title ON movies (title, id);
        CREATE INDEX IF NOT EXISTS idx_movies_year ON movies (year, title);",
    )
    .map_err(|e| migration_error(format!("Failed to create movies table: {}", e)))
}

/// Run schema migrations from `from_version` to the current version.
fn migrate_schema(conn: &Connection, from_version: i32) -> StorageResult<()> {
    let mut version = from_version;

    while version < SCHEMA_VERSION {
        match version {
            1 => migrate_v1_to_v2(conn)?,
            _ => {
                return Err(migration_error(format!(
                    "Unknown schema version: {}",
                    version
                )));
            }
        }
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

/// Migrate from schema version 1 to version 2.
///
/// Adds lowercased copies of the text columns for substring search and
/// fills them for rows written before the migration. SQLite folds only
/// ASCII letters, so the copies are computed here with Unicode rules.
fn migrate_v1_to_v2(conn: &Connection) -> StorageResult<()> {
    for column in ["title_folded", "director_folded", "genre_folded"] {
        conn.execute(
            &format!(
                "ALTER TABLE movies ADD COLUMN {} TEXT NOT NULL DEFAULT ''",
                column
            ),
            [],
        )
        .map_err(|e| migration_error(format!("Failed to add {}: {}", column, e)))?;
    }

    let rows: Vec<(i64, String, String, String)> = {
        let mut stmt = conn
            .prepare("SELECT seq, title, director, genre FROM movies")
            .map_err(|e| migration_error(format!("Failed to read movies: {}", e)))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
            .map_err(|e| migration_error(format!("Failed to read movies: {}", e)))?;
        rows
    };

    for (seq, title, director, genre) in rows {
        conn.execute(
            "UPDATE movies SET title_folded = ?1, director_folded = ?2, genre_folded = ?3
             WHERE seq = ?4",
            rusqlite::params![
                title.to_lowercase(),
                director.to_lowercase(),
                genre.to_lowercase(),
                seq
            ],
        )
        .map_err(|e| migration_error(format!("Failed to fold movie {}: {}", seq, e)))?;
    }

    Ok(())
}
