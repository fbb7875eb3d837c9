//! SQLite persistence: migrations, the resume cursor, event writes and reads.

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::info;

use crate::errors::Result;
use crate::events::{CondominiumEvent, EventRecord, SubjectKind};

const SELECT_EVENTS: &str = r#"
    SELECT id, event_id, event_type, subject_kind, subject, actor, amount,
           ledger, timestamp, contract_id, tx_hash, created_at
    FROM   events
"#;

/// Open a pool on `database_url` and apply pending migrations.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool> {
    let url = if database_url.starts_with("sqlite:") {
        database_url.to_string()
    } else {
        format!("sqlite:{database_url}")
    };
    // Create the database file on first start.
    let url = if url.contains('?') || url.contains(":memory:") {
        url
    } else {
        format!("{url}?mode=rwc")
    };

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await?;

    migrate(&pool).await?;
    Ok(pool)
}

pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied successfully");
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Cursor
// ─────────────────────────────────────────────────────────

/// Last ledger seen, `0` before the first poll.
pub async fn get_last_ledger(pool: &SqlitePool) -> Result<i64> {
    let row: Option<(i64,)> =
        sqlx::query_as("SELECT last_ledger FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|(v,)| v).unwrap_or(0))
}

/// Pagination cursor left by the previous poll, if it stopped mid-range.
pub async fn get_cursor_string(pool: &SqlitePool) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT last_cursor FROM indexer_cursor WHERE id = 1")
            .fetch_optional(pool)
            .await?;
    Ok(row.and_then(|(v,)| v))
}

pub async fn save_cursor(
    pool: &SqlitePool,
    last_ledger: i64,
    last_cursor: Option<&str>,
) -> Result<()> {
    sqlx::query("UPDATE indexer_cursor SET last_ledger = ?1, last_cursor = ?2 WHERE id = 1")
        .bind(last_ledger)
        .bind(last_cursor)
        .execute(pool)
        .await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────
// Writes
// ─────────────────────────────────────────────────────────

/// Store a batch of events in one transaction. Events whose `event_id` is
/// already stored are skipped, so replaying a page is harmless.
///
/// Returns the number of rows actually inserted.
pub async fn insert_events(pool: &SqlitePool, events: &[CondominiumEvent]) -> Result<usize> {
    let mut tx = pool.begin().await?;
    let mut count = 0usize;
    for ev in events {
        let rows_affected = sqlx::query(
            r#"
            INSERT OR IGNORE INTO events
                (event_id, event_type, subject_kind, subject, actor, amount,
                 ledger, timestamp, contract_id, tx_hash)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
        )
        .bind(&ev.event_id)
        .bind(&ev.event_type)
        .bind(&ev.subject_kind)
        .bind(&ev.subject)
        .bind(&ev.actor)
        .bind(&ev.amount)
        .bind(ev.ledger)
        .bind(ev.timestamp)
        .bind(&ev.contract_id)
        .bind(&ev.tx_hash)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        count += rows_affected as usize;
    }
    tx.commit().await?;
    Ok(count)
}

// ─────────────────────────────────────────────────────────
// Reads
// ─────────────────────────────────────────────────────────

/// All events, oldest first, optionally restricted to one `event_type`.
pub async fn get_all_events(
    pool: &SqlitePool,
    event_type: Option<&str>,
) -> Result<Vec<EventRecord>> {
    let rows = match event_type {
        Some(event_type) => {
            sqlx::query_as::<_, EventRecord>(&format!(
                "{SELECT_EVENTS} WHERE event_type = ?1 ORDER BY ledger ASC, id ASC"
            ))
            .bind(event_type)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, EventRecord>(&format!(
                "{SELECT_EVENTS} ORDER BY ledger ASC, id ASC"
            ))
            .fetch_all(pool)
            .await?
        }
    };
    Ok(rows)
}

/// Events about one subject, oldest first.
pub async fn get_events_for_subject(
    pool: &SqlitePool,
    kind: SubjectKind,
    subject: &str,
) -> Result<Vec<EventRecord>> {
    let rows = sqlx::query_as::<_, EventRecord>(&format!(
        "{SELECT_EVENTS} WHERE subject_kind = ?1 AND subject = ?2 ORDER BY ledger ASC, id ASC"
    ))
    .bind(kind.as_str())
    .bind(subject)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
