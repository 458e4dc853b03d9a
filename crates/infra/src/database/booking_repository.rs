//! SQLite-backed booking repository.
//!
//! Holds the one write path of the system: `insert_if_free` runs the
//! read-check-write sequence inside a single `BEGIN IMMEDIATE`
//! transaction, re-verifying capacity against the live booking count so
//! two concurrent requests cannot both take the last place.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gymbook_core::BookingRepository as BookingRepositoryPort;
use gymbook_domain::{
    Activity, ActivityType, Booking, ClientBooking, GymbookError, Result as DomainResult,
};
use rusqlite::{params, Connection, TransactionBehavior};
use std::str::FromStr;
use tokio::task;
use tracing::debug;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::timestamp_to_datetime;

/// Async booking repository backed by SQLite.
pub struct SqlBookingRepository {
    db: Arc<DbManager>,
}

impl SqlBookingRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepositoryPort for SqlBookingRepository {
    async fn exists(&self, activity_id: i64, client_id: i64) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let count: i64 = conn
                .query_row(BOOKING_EXISTS_SQL, params![activity_id, client_id], |row| row.get(0))
                .map_err(map_sql_error)?;
            Ok(count > 0)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count_for_client_between(
        &self,
        client_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<u64> {
            let conn = db.get_connection()?;
            let count: i64 = conn
                .query_row(
                    COUNT_IN_RANGE_SQL,
                    params![client_id, start.timestamp(), end.timestamp()],
                    |row| row.get(0),
                )
                .map_err(map_sql_error)?;
            Ok(count.max(0) as u64)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_for_client(&self, client_id: i64) -> DomainResult<Vec<ClientBooking>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Vec<ClientBooking>> {
            let conn = db.get_connection()?;
            query_client_bookings(&conn, client_id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn insert_if_free(
        &self,
        activity_id: i64,
        client_id: i64,
    ) -> DomainResult<Option<Booking>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Option<Booking>> {
            let mut conn = db.get_connection()?;
            insert_with_capacity_recheck(&mut conn, activity_id, client_id)
        })
        .await
        .map_err(map_join_error)?
    }
}

const BOOKING_EXISTS_SQL: &str =
    "SELECT COUNT(*) FROM bookings WHERE activity_id = ?1 AND client_id = ?2";

// Week-limit counting compares activity *start* timestamps, inclusive on
// both bounds.
const COUNT_IN_RANGE_SQL: &str = "SELECT COUNT(*)
    FROM bookings b
    JOIN activities a ON a.id = b.activity_id
    WHERE b.client_id = ?1 AND a.date_start >= ?2 AND a.date_start <= ?3";

const CLIENT_BOOKINGS_SQL: &str = "SELECT b.id, b.client_id,
        a.id, a.type, a.max_participants, a.date_start, a.date_end,
        (SELECT COUNT(*) FROM bookings b2 WHERE b2.activity_id = a.id) AS clients_signed
    FROM bookings b
    JOIN activities a ON a.id = b.activity_id
    WHERE b.client_id = ?1
    ORDER BY b.id";

fn query_client_bookings(conn: &Connection, client_id: i64) -> DomainResult<Vec<ClientBooking>> {
    let mut stmt = conn.prepare(CLIENT_BOOKINGS_SQL).map_err(map_sql_error)?;

    let rows = stmt
        .query_map([client_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                row.get::<_, i64>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, i64>(5)?,
                row.get::<_, i64>(6)?,
                row.get::<_, i64>(7)?,
            ))
        })
        .map_err(map_sql_error)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(map_sql_error)?;

    rows.into_iter()
        .map(|(id, client_id, activity_id, type_str, max, start, end, signed)| {
            let activity_type = ActivityType::from_str(&type_str).map_err(|()| {
                GymbookError::Database(format!("unknown activity type in storage: {type_str}"))
            })?;
            Ok(ClientBooking {
                id,
                client_id,
                activity: Activity {
                    id: activity_id,
                    activity_type,
                    max_participants: max,
                    date_start: timestamp_to_datetime(start)?,
                    date_end: timestamp_to_datetime(end)?,
                    // The overview never serializes playlists; skip them.
                    play_list: Vec::new(),
                    clients_signed: signed,
                },
            })
        })
        .collect()
}

fn insert_with_capacity_recheck(
    conn: &mut Connection,
    activity_id: i64,
    client_id: i64,
) -> DomainResult<Option<Booking>> {
    let tx = conn
        .transaction_with_behavior(TransactionBehavior::Immediate)
        .map_err(map_sql_error)?;

    let max_participants: i64 = tx
        .query_row(
            "SELECT max_participants FROM activities WHERE id = ?1",
            params![activity_id],
            |row| row.get(0),
        )
        .map_err(map_sql_error)?;

    let clients_signed: i64 = tx
        .query_row(
            "SELECT COUNT(*) FROM bookings WHERE activity_id = ?1",
            params![activity_id],
            |row| row.get(0),
        )
        .map_err(map_sql_error)?;

    if clients_signed >= max_participants {
        debug!(activity_id, clients_signed, max_participants, "capacity gone at commit time");
        return Ok(None);
    }

    tx.execute(
        "INSERT INTO bookings (activity_id, client_id) VALUES (?1, ?2)",
        params![activity_id, client_id],
    )
    .map_err(map_sql_error)?;
    let id = tx.last_insert_rowid();

    tx.commit().map_err(map_sql_error)?;

    Ok(Some(Booking { id, activity_id, client_id }))
}
