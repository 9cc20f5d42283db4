use crate::error::AppError;
use crate::models::{Event, EventChanges, NewEvent};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, AppError> {
    let connect_options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(connect_options)
        .await
        .map_err(AppError::from)
}

/// Creates the `events` table when absent. Run once before serving.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS events (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            date TEXT NOT NULL,
            location TEXT NOT NULL
        );",
    )
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list_events(pool: &SqlitePool) -> Result<Vec<Event>, AppError> {
    sqlx::query_as("SELECT id, name, date, location FROM events ORDER BY id ASC")
        .fetch_all(pool)
        .await
        .map_err(AppError::from)
}

pub async fn find_event(pool: &SqlitePool, id: i64) -> Result<Option<Event>, AppError> {
    sqlx::query_as("SELECT id, name, date, location FROM events WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
        .map_err(AppError::from)
}

pub async fn create_event(pool: &SqlitePool, new_event: &NewEvent) -> Result<Event, AppError> {
    let event = sqlx::query_as(
        "INSERT INTO events (name, date, location) VALUES (?, ?, ?) RETURNING id, name, date, location",
    )
    .bind(&new_event.name)
    .bind(&new_event.date)
    .bind(&new_event.location)
    .fetch_one(pool)
    .await?;
    Ok(event)
}

/// Applies every supplied field in one statement. `None` when the row is gone.
pub async fn update_event(
    pool: &SqlitePool,
    id: i64,
    changes: &EventChanges,
) -> Result<Option<Event>, AppError> {
    sqlx::query_as(
        "UPDATE events
         SET name = COALESCE(?, name),
             date = COALESCE(?, date),
             location = COALESCE(?, location)
         WHERE id = ?
         RETURNING id, name, date, location",
    )
    .bind(&changes.name)
    .bind(&changes.date)
    .bind(&changes.location)
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(AppError::from)
}

/// Returns `false` if there was nothing to delete.
pub async fn delete_event(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let deleted = sqlx::query("DELETE FROM events WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(deleted > 0)
}

#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    init_schema(&pool).await.unwrap();
    pool
}
