//! Demo seed data and shared test insert helpers.
//!
//! `seed_demo_data` fills an empty database with a small gym worth of
//! clients, activities, playlists and historical bookings so the API has
//! something to serve out of the box. Seeding is idempotent: a database
//! that already holds clients is left untouched.

use chrono::{Duration, Utc};
use gymbook_domain::Result as DomainResult;
use rusqlite::{params, Connection};
use tracing::info;

use crate::database::manager::{map_sql_error, DbManager};

/// Populate an empty database with demo data.
pub fn seed_demo_data(db: &DbManager) -> DomainResult<()> {
    let conn = db.get_connection()?;

    let existing: i64 = conn
        .query_row("SELECT COUNT(*) FROM clients", [], |row| row.get(0))
        .map_err(map_sql_error)?;
    if existing > 0 {
        info!("Database already seeded, skipping demo data");
        return Ok(());
    }

    let miguel = insert_client(&conn, "Miguel Goyena", "miguel.goyena@example.com", "premium")?;
    let ana = insert_client(&conn, "Ana García", "ana.garcia@example.com", "standard")?;
    let carlos = insert_client(&conn, "Carlos López", "carlos.lopez@example.com", "standard")?;

    let now = Utc::now();
    let tomorrow = now + Duration::days(1);
    let in_three_days = now + Duration::days(3);
    let last_month = now - Duration::days(30);
    let last_year = now - Duration::days(400);

    // Upcoming activities with free places.
    let body_pump = insert_activity(
        &conn,
        "BodyPump",
        25,
        tomorrow.timestamp(),
        (tomorrow + Duration::minutes(55)).timestamp(),
    )?;
    insert_song(&conn, body_pump, "Pump It Up", 245)?;
    insert_song(&conn, body_pump, "Eye of the Tiger", 280)?;

    let spinning = insert_activity(
        &conn,
        "Spinning",
        20,
        in_three_days.timestamp(),
        (in_three_days + Duration::minutes(45)).timestamp(),
    )?;
    insert_song(&conn, spinning, "Around the World", 230)?;

    insert_activity(
        &conn,
        "Core",
        15,
        (now + Duration::days(5)).timestamp(),
        (now + Duration::days(5) + Duration::minutes(30)).timestamp(),
    )?;

    // An already-full activity, for exercising the onlyfree filter.
    let full = insert_activity(
        &conn,
        "Spinning",
        1,
        (now + Duration::days(2)).timestamp(),
        (now + Duration::days(2) + Duration::minutes(45)).timestamp(),
    )?;
    insert_booking(&conn, full, miguel)?;

    insert_booking(&conn, body_pump, ana)?;
    insert_booking(&conn, spinning, miguel)?;

    // Historical activities so client statistics have something to count.
    let past_pump = insert_activity(
        &conn,
        "BodyPump",
        25,
        last_month.timestamp(),
        (last_month + Duration::minutes(55)).timestamp(),
    )?;
    let past_core = insert_activity(
        &conn,
        "Core",
        15,
        (last_month + Duration::days(2)).timestamp(),
        (last_month + Duration::days(2) + Duration::minutes(30)).timestamp(),
    )?;
    let old_spinning = insert_activity(
        &conn,
        "Spinning",
        20,
        last_year.timestamp(),
        (last_year + Duration::minutes(45)).timestamp(),
    )?;
    insert_booking(&conn, past_pump, miguel)?;
    insert_booking(&conn, past_pump, carlos)?;
    insert_booking(&conn, past_core, miguel)?;
    insert_booking(&conn, old_spinning, miguel)?;

    info!("Demo data seeded");
    Ok(())
}

fn insert_client(conn: &Connection, name: &str, email: &str, client_type: &str) -> DomainResult<i64> {
    conn.execute(
        "INSERT INTO clients (name, email, type) VALUES (?1, ?2, ?3)",
        params![name, email, client_type],
    )
    .map_err(map_sql_error)?;
    Ok(conn.last_insert_rowid())
}

fn insert_activity(
    conn: &Connection,
    activity_type: &str,
    max_participants: i64,
    date_start: i64,
    date_end: i64,
) -> DomainResult<i64> {
    conn.execute(
        "INSERT INTO activities (type, max_participants, date_start, date_end)
         VALUES (?1, ?2, ?3, ?4)",
        params![activity_type, max_participants, date_start, date_end],
    )
    .map_err(map_sql_error)?;
    Ok(conn.last_insert_rowid())
}

fn insert_song(
    conn: &Connection,
    activity_id: i64,
    name: &str,
    duration_seconds: i64,
) -> DomainResult<i64> {
    conn.execute(
        "INSERT INTO songs (activity_id, name, duration_seconds) VALUES (?1, ?2, ?3)",
        params![activity_id, name, duration_seconds],
    )
    .map_err(map_sql_error)?;
    Ok(conn.last_insert_rowid())
}

fn insert_booking(conn: &Connection, activity_id: i64, client_id: i64) -> DomainResult<i64> {
    conn.execute(
        "INSERT INTO bookings (activity_id, client_id) VALUES (?1, ?2)",
        params![activity_id, client_id],
    )
    .map_err(map_sql_error)?;
    Ok(conn.last_insert_rowid())
}

/// Row insert helpers shared by repository and HTTP tests.
///
/// These panic on failure, which keeps test setup terse; they are not
/// for use in request paths.
pub mod testing {
    use rusqlite::{params, Connection};

    pub fn insert_client(conn: &Connection, name: &str, email: &str, client_type: &str) -> i64 {
        conn.execute(
            "INSERT INTO clients (name, email, type) VALUES (?1, ?2, ?3)",
            params![name, email, client_type],
        )
        .expect("client inserted");
        conn.last_insert_rowid()
    }

    pub fn insert_activity(
        conn: &Connection,
        activity_type: &str,
        max_participants: i64,
        date_start: i64,
        date_end: i64,
    ) -> i64 {
        conn.execute(
            "INSERT INTO activities (type, max_participants, date_start, date_end)
             VALUES (?1, ?2, ?3, ?4)",
            params![activity_type, max_participants, date_start, date_end],
        )
        .expect("activity inserted");
        conn.last_insert_rowid()
    }

    pub fn insert_song(
        conn: &Connection,
        activity_id: i64,
        name: &str,
        duration_seconds: i64,
    ) -> i64 {
        conn.execute(
            "INSERT INTO songs (activity_id, name, duration_seconds) VALUES (?1, ?2, ?3)",
            params![activity_id, name, duration_seconds],
        )
        .expect("song inserted");
        conn.last_insert_rowid()
    }

    pub fn insert_booking(conn: &Connection, activity_id: i64, client_id: i64) -> i64 {
        conn.execute(
            "INSERT INTO bookings (activity_id, client_id) VALUES (?1, ?2)",
            params![activity_id, client_id],
        )
        .expect("booking inserted");
        conn.last_insert_rowid()
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn seeding_twice_does_not_duplicate_rows() {
        let temp_dir = TempDir::new().expect("tempdir created");
        let manager =
            DbManager::new(&temp_dir.path().join("seed.db"), 2).expect("db manager created");
        manager.run_migrations().expect("migrations run");

        seed_demo_data(&manager).expect("first seed");
        seed_demo_data(&manager).expect("second seed");

        let conn = manager.get_connection().expect("connection");
        let clients: i64 =
            conn.query_row("SELECT COUNT(*) FROM clients", [], |row| row.get(0)).expect("count");
        assert_eq!(clients, 3);
    }

    #[test]
    fn seed_produces_a_full_activity() {
        let temp_dir = TempDir::new().expect("tempdir created");
        let manager =
            DbManager::new(&temp_dir.path().join("seed.db"), 2).expect("db manager created");
        manager.run_migrations().expect("migrations run");
        seed_demo_data(&manager).expect("seed");

        let conn = manager.get_connection().expect("connection");
        let full: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM activities a
                 WHERE (SELECT COUNT(*) FROM bookings b WHERE b.activity_id = a.id)
                       >= a.max_participants",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(full, 1);
    }
}
