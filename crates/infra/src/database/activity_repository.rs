//! SQLite-backed activity repository.
//!
//! Implements the `ActivityRepository` port used by the booking and
//! listing services. The availability predicate is compiled in exactly
//! one place ([`FilterSql`]) and shared by the page query and the count
//! query, so a listing and its `total-items` can never be computed from
//! different filters. The `clients_signed` column is always a live
//! subquery over the bookings table.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use gymbook_core::{ActivityFilter, ActivityRepository as ActivityRepositoryPort, PageRequest, SortOrder};
use gymbook_domain::{Activity, ActivityType, GymbookError, Result as DomainResult, Song};
use rusqlite::{Connection, Row, ToSql};
use tokio::task;

use super::manager::{map_join_error, map_sql_error, DbManager};
use super::timestamp_to_datetime;

/// Async activity repository backed by SQLite.
pub struct SqlActivityRepository {
    db: Arc<DbManager>,
}

impl SqlActivityRepository {
    /// Construct a repository backed by the shared database manager.
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ActivityRepositoryPort for SqlActivityRepository {
    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Activity>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Option<Activity>> {
            let conn = db.get_connection()?;
            find_activity(&conn, id)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn find_page(
        &self,
        filter: ActivityFilter,
        order: SortOrder,
        page: PageRequest,
    ) -> DomainResult<Vec<Activity>> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<Vec<Activity>> {
            let conn = db.get_connection()?;
            query_page(&conn, filter, order, page)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn count(&self, filter: ActivityFilter) -> DomainResult<u64> {
        let db = Arc::clone(&self.db);
        task::spawn_blocking(move || -> DomainResult<u64> {
            let conn = db.get_connection()?;
            count_activities(&conn, filter)
        })
        .await
        .map_err(map_join_error)?
    }
}

/// Columns shared by every activity query. `clients_signed` is derived
/// from the bookings table on every read.
const ACTIVITY_COLUMNS: &str = "a.id, a.type, a.max_participants, a.date_start, a.date_end,
    (SELECT COUNT(*) FROM bookings b WHERE b.activity_id = a.id) AS clients_signed";

const FREE_PLACES_PREDICATE: &str =
    "(SELECT COUNT(*) FROM bookings b WHERE b.activity_id = a.id) < a.max_participants";

const SONGS_FOR_ACTIVITY: &str =
    "SELECT id, name, duration_seconds FROM songs WHERE activity_id = ?1 ORDER BY id";

/// Intermediate row before timestamps and the type string are validated.
struct ActivityRow {
    id: i64,
    activity_type: String,
    max_participants: i64,
    date_start: i64,
    date_end: i64,
    clients_signed: i64,
}

/// Compiled WHERE fragment for an [`ActivityFilter`].
///
/// Built in exactly one place so the page query and the count query can
/// never apply different predicates.
struct FilterSql {
    clause: String,
    type_param: Option<&'static str>,
}

impl FilterSql {
    fn compile(filter: &ActivityFilter) -> Self {
        let mut conditions: Vec<&str> = Vec::new();
        let type_param = filter.activity_type.map(ActivityType::as_str);

        if type_param.is_some() {
            conditions.push("a.type = ?");
        }
        if filter.only_free {
            conditions.push(FREE_PLACES_PREDICATE);
        }

        let clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        Self { clause, type_param }
    }

    /// Bind parameters in the same order `compile` emitted placeholders.
    fn params(&self) -> Vec<&dyn ToSql> {
        let mut params: Vec<&dyn ToSql> = Vec::new();
        if let Some(ref activity_type) = self.type_param {
            params.push(activity_type);
        }
        params
    }
}

fn find_activity(conn: &Connection, id: i64) -> DomainResult<Option<Activity>> {
    let sql = format!("SELECT {ACTIVITY_COLUMNS} FROM activities a WHERE a.id = ?1");
    let mut stmt = conn.prepare(&sql).map_err(map_sql_error)?;

    let mut rows = stmt
        .query_map([id], map_activity_row)
        .map_err(map_sql_error)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(map_sql_error)?;

    match rows.pop() {
        Some(row) => Ok(Some(into_activity(conn, row)?)),
        None => Ok(None),
    }
}

fn query_page(
    conn: &Connection,
    filter: ActivityFilter,
    order: SortOrder,
    page: PageRequest,
) -> DomainResult<Vec<Activity>> {
    let filter_sql = FilterSql::compile(&filter);

    let direction = match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };
    let sql = format!(
        "SELECT {ACTIVITY_COLUMNS} FROM activities a {} ORDER BY a.date_start {direction}, a.id {direction} LIMIT ? OFFSET ?",
        filter_sql.clause
    );

    let limit = i64::from(page.page_size);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    let mut params = filter_sql.params();
    params.push(&limit);
    params.push(&offset);

    let mut stmt = conn.prepare(&sql).map_err(map_sql_error)?;
    let rows = stmt
        .query_map(params.as_slice(), map_activity_row)
        .map_err(map_sql_error)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(map_sql_error)?;

    rows.into_iter().map(|row| into_activity(conn, row)).collect()
}

fn count_activities(conn: &Connection, filter: ActivityFilter) -> DomainResult<u64> {
    let filter_sql = FilterSql::compile(&filter);

    let sql = format!("SELECT COUNT(*) FROM activities a {}", filter_sql.clause);
    let count: i64 = conn
        .query_row(&sql, filter_sql.params().as_slice(), |row| row.get(0))
        .map_err(map_sql_error)?;

    Ok(count.max(0) as u64)
}

fn map_activity_row(row: &Row<'_>) -> rusqlite::Result<ActivityRow> {
    Ok(ActivityRow {
        id: row.get(0)?,
        activity_type: row.get(1)?,
        max_participants: row.get(2)?,
        date_start: row.get(3)?,
        date_end: row.get(4)?,
        clients_signed: row.get(5)?,
    })
}

fn into_activity(conn: &Connection, row: ActivityRow) -> DomainResult<Activity> {
    let activity_type = ActivityType::from_str(&row.activity_type).map_err(|()| {
        GymbookError::Database(format!("unknown activity type in storage: {}", row.activity_type))
    })?;

    Ok(Activity {
        id: row.id,
        activity_type,
        max_participants: row.max_participants,
        date_start: timestamp_to_datetime(row.date_start)?,
        date_end: timestamp_to_datetime(row.date_end)?,
        play_list: load_songs(conn, row.id)?,
        clients_signed: row.clients_signed,
    })
}

fn load_songs(conn: &Connection, activity_id: i64) -> DomainResult<Vec<Song>> {
    let mut stmt = conn.prepare(SONGS_FOR_ACTIVITY).map_err(map_sql_error)?;
    let songs = stmt
        .query_map([activity_id], |row| {
            Ok(Song { id: row.get(0)?, name: row.get(1)?, duration_seconds: row.get(2)? })
        })
        .map_err(map_sql_error)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(map_sql_error)?;
    Ok(songs)
}
