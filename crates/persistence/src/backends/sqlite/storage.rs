//! MovieStorage trait implementation for SQLite.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::types::Value as SqlValue;
use rusqlite::{Connection, OptionalExtension, params, params_from_iter};

use crate::core::MovieStorage;
use crate::error::{BackendError, RecordError, StorageError, StorageResult};
use crate::types::{FindOptions, MovieFilter, MovieRecord, NewMovie, SortOrder, TextField};

use super::SqliteBackend;

fn internal_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::Internal {
        backend_name: "sqlite".to_string(),
        message,
        source: None,
    })
}

fn query_error(message: String) -> StorageError {
    StorageError::Backend(BackendError::QueryError { message })
}

const SELECT_COLUMNS: &str = "id, title, director, genre, year, version, last_updated";

/// A row as stored, before range and format checks.
struct RawMovieRow {
    id: String,
    title: String,
    director: String,
    genre: String,
    year: i64,
    version: i64,
    last_updated: String,
}

impl RawMovieRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            director: row.get(2)?,
            genre: row.get(3)?,
            year: row.get(4)?,
            version: row.get(5)?,
            last_updated: row.get(6)?,
        })
    }

    fn into_record(self) -> StorageResult<MovieRecord> {
        let corrupt = |id: &str, message: String| {
            StorageError::Record(RecordError::Corrupt {
                id: id.to_string(),
                message,
            })
        };

        let year = i32::try_from(self.year)
            .map_err(|_| corrupt(&self.id, format!("year {} out of range", self.year)))?;
        let version = u32::try_from(self.version)
            .map_err(|_| corrupt(&self.id, format!("version {} out of range", self.version)))?;
        let last_updated = DateTime::parse_from_rfc3339(&self.last_updated)
            .map_err(|e| corrupt(&self.id, format!("invalid last_updated: {}", e)))?
            .with_timezone(&Utc);

        Ok(MovieRecord::from_storage(
            self.id,
            NewMovie {
                title: self.title,
                director: self.director,
                genre: self.genre,
                year,
            },
            version,
            last_updated,
        ))
    }
}

/// Escapes `LIKE` wildcards so the term matches literally under `ESCAPE '\'`.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Column holding the lowercased copy of `field`.
fn folded_column(field: TextField) -> &'static str {
    match field {
        TextField::Title => "title_folded",
        TextField::Director => "director_folded",
        TextField::Genre => "genre_folded",
    }
}

/// Builds the WHERE clause shared by `find_matching` and `count`.
///
/// Substring matches run against the folded columns with a folded term,
/// since `LIKE` ignores case for ASCII letters only.
fn where_clause(filter: &MovieFilter) -> (String, Vec<SqlValue>) {
    match filter {
        MovieFilter::All => (String::new(), Vec::new()),
        MovieFilter::Contains(field, term) => (
            format!(
                " WHERE {} LIKE '%' || ? || '%' ESCAPE '\\'",
                folded_column(*field)
            ),
            vec![SqlValue::Text(escape_like(&term.to_lowercase()))],
        ),
        MovieFilter::TextEquals(field, value) => (
            format!(" WHERE {} = ?", field.as_str()),
            vec![SqlValue::Text(value.clone())],
        ),
        MovieFilter::YearEquals(year) => (
            " WHERE year = ?".to_string(),
            vec![SqlValue::Integer(i64::from(*year))],
        ),
    }
}

fn order_clause(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Insertion => " ORDER BY seq",
        SortOrder::TitleAscending => " ORDER BY title, id",
    }
}

fn to_sql_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn read_by_id(conn: &Connection, id: &str) -> StorageResult<Option<MovieRecord>> {
    let raw = conn
        .query_row(
            &format!("SELECT {} FROM movies WHERE id = ?1", SELECT_COLUMNS),
            params![id],
            RawMovieRow::from_row,
        )
        .optional()
        .map_err(|e| internal_error(format!("Failed to read movie: {}", e)))?;

    raw.map(RawMovieRow::into_record).transpose()
}

#[async_trait]
impl MovieStorage for SqliteBackend {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }

    async fn create(&self, movie: NewMovie) -> StorageResult<MovieRecord> {
        let conn = self.get_connection()?;
        let record = MovieRecord::new(uuid::Uuid::new_v4().to_string(), movie);

        conn.execute(
            "INSERT INTO movies (id, title, director, genre, year, version, last_updated,
                                 title_folded, director_folded, genre_folded)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                record.id(),
                record.title(),
                record.director(),
                record.genre(),
                record.year(),
                record.version(),
                record.last_updated().to_rfc3339(),
                record.title().to_lowercase(),
                record.director().to_lowercase(),
                record.genre().to_lowercase()
            ],
        )
        .map_err(|e| internal_error(format!("Failed to insert movie: {}", e)))?;

        tracing::trace!(id = %record.id(), "Inserted movie");
        Ok(record)
    }

    async fn read(&self, id: &str) -> StorageResult<Option<MovieRecord>> {
        let conn = self.get_connection()?;
        read_by_id(&conn, id)
    }

    async fn update(&self, id: &str, movie: NewMovie) -> StorageResult<Option<MovieRecord>> {
        let conn = self.get_connection()?;
        let now = Utc::now().to_rfc3339();

        let changed = conn
            .execute(
                "UPDATE movies
                 SET title = ?1, director = ?2, genre = ?3, year = ?4,
                     version = version + 1, last_updated = ?5,
                     title_folded = ?6, director_folded = ?7, genre_folded = ?8
                 WHERE id = ?9",
                params![
                    movie.title,
                    movie.director,
                    movie.genre,
                    movie.year,
                    now,
                    movie.title.to_lowercase(),
                    movie.director.to_lowercase(),
                    movie.genre.to_lowercase(),
                    id
                ],
            )
            .map_err(|e| internal_error(format!("Failed to update movie: {}", e)))?;

        if changed == 0 {
            return Ok(None);
        }

        read_by_id(&conn, id)
    }

    async fn delete(&self, id: &str) -> StorageResult<Option<MovieRecord>> {
        let conn = self.get_connection()?;

        let Some(existing) = read_by_id(&conn, id)? else {
            return Ok(None);
        };

        conn.execute("DELETE FROM movies WHERE id = ?1", params![id])
            .map_err(|e| internal_error(format!("Failed to delete movie: {}", e)))?;

        Ok(Some(existing))
    }

    async fn find_matching(
        &self,
        filter: &MovieFilter,
        options: &FindOptions,
    ) -> StorageResult<Vec<MovieRecord>> {
        let conn = self.get_connection()?;
        let (where_sql, mut values) = where_clause(filter);

        let sql = format!(
            "SELECT {} FROM movies{}{} LIMIT ? OFFSET ?",
            SELECT_COLUMNS,
            where_sql,
            order_clause(options.sort)
        );
        // A negative LIMIT means no limit in SQLite.
        values.push(SqlValue::Integer(options.limit.map(to_sql_int).unwrap_or(-1)));
        values.push(SqlValue::Integer(to_sql_int(options.skip)));

        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| query_error(format!("Failed to prepare movie query: {}", e)))?;

        let rows = stmt
            .query_map(params_from_iter(values), RawMovieRow::from_row)
            .map_err(|e| query_error(format!("Failed to run movie query: {}", e)))?;

        let mut movies = Vec::new();
        for row in rows {
            let raw = row.map_err(|e| internal_error(format!("Failed to read row: {}", e)))?;
            movies.push(raw.into_record()?);
        }

        Ok(movies)
    }

    async fn count(&self, filter: &MovieFilter) -> StorageResult<u64> {
        let conn = self.get_connection()?;
        let (where_sql, values) = where_clause(filter);

        let count: i64 = conn
            .query_row(
                &format!("SELECT COUNT(*) FROM movies{}", where_sql),
                params_from_iter(values),
                |row| row.get(0),
            )
            .map_err(|e| query_error(format!("Failed to count movies: {}", e)))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn health_check(&self) -> StorageResult<()> {
        let conn = self.get_connection()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))
            .map_err(|e| internal_error(format!("Health check failed: {}", e)))
    }
}
