use crate::db::pool::{DbPool, fetch_err, write_err};
use crate::errors::{AppError, AppResult};
use crate::models::attendance_event::AttendanceEvent;
use crate::models::class_config::ClassConfig;
use crate::models::roll_entry::RollEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

// ---------------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------------

pub fn map_class_row(row: &Row) -> Result<ClassConfig> {
    Ok(ClassConfig {
        class_name: row.get("class_name")?,
        code: row.get("code")?,
        daily_limit: row.get("daily_limit")?,
        is_open: row.get::<_, i64>("is_open")? != 0,
    })
}

pub fn map_event_row(row: &Row) -> Result<AttendanceEvent> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(AttendanceEvent {
        class_name: row.get("class_name")?,
        roll_number: row.get("roll_number")?,
        name: row.get("name")?,
        date,
    })
}

fn map_roll_row(row: &Row) -> Result<RollEntry> {
    Ok(RollEntry {
        class_name: row.get("class_name")?,
        roll_number: row.get("roll_number")?,
        name: row.get("name")?,
    })
}

// ---------------------------------------------------------------------------
// classroom_settings
// ---------------------------------------------------------------------------

pub fn list_classes(pool: &mut DbPool) -> AppResult<Vec<ClassConfig>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM classroom_settings ORDER BY class_name ASC")
        .map_err(fetch_err)?;

    let rows = stmt
        .query_map([], map_class_row)
        .and_then(|it| it.collect::<Result<Vec<_>>>())
        .map_err(fetch_err)?;

    Ok(rows)
}

pub fn get_class(pool: &mut DbPool, class_name: &str) -> AppResult<Option<ClassConfig>> {
    pool.conn
        .query_row(
            "SELECT * FROM classroom_settings WHERE class_name = ?1",
            [class_name],
            map_class_row,
        )
        .optional()
        .map_err(fetch_err)
}

pub fn insert_class(conn: &Connection, config: &ClassConfig) -> AppResult<()> {
    config.validate()?;

    let exists: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM classroom_settings WHERE class_name = ?1",
            [&config.class_name],
            |r| r.get(0),
        )
        .optional()
        .map_err(fetch_err)?;
    if exists.is_some() {
        return Err(AppError::Validation(format!(
            "class '{}' already exists",
            config.class_name
        )));
    }

    conn.execute(
        "INSERT INTO classroom_settings (class_name, code, daily_limit, is_open)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            config.class_name,
            config.code,
            config.daily_limit,
            config.is_open as i64,
        ],
    )
    .map_err(write_err)?;
    Ok(())
}

/// Update code and daily limit; `is_open` is deliberately untouched here.
pub fn update_class_settings(
    conn: &Connection,
    class_name: &str,
    code: &str,
    daily_limit: i64,
) -> AppResult<()> {
    let changed = conn
        .execute(
            "UPDATE classroom_settings SET code = ?1, daily_limit = ?2 WHERE class_name = ?3",
            params![code, daily_limit, class_name],
        )
        .map_err(write_err)?;

    if changed == 0 {
        return Err(AppError::Validation(format!(
            "unknown class '{}'",
            class_name
        )));
    }
    Ok(())
}

/// Open the attendance window for one class, atomically.
///
/// The conflict check, the close-others sweep and the target update run in a
/// single transaction, so two racing `open` calls cannot both observe "no
/// other class open". The partial unique index on `is_open` backstops the
/// invariant at the store level.
pub fn open_exclusive(pool: &mut DbPool, class_name: &str) -> AppResult<()> {
    let tx = pool.conn.transaction().map_err(write_err)?;

    let exists: Option<i64> = tx
        .query_row(
            "SELECT 1 FROM classroom_settings WHERE class_name = ?1",
            [class_name],
            |r| r.get(0),
        )
        .optional()
        .map_err(fetch_err)?;
    if exists.is_none() {
        return Err(AppError::Validation(format!(
            "unknown class '{}'",
            class_name
        )));
    }

    let open_others: Vec<String> = {
        let mut stmt = tx
            .prepare(
                "SELECT class_name FROM classroom_settings
                 WHERE is_open = 1 AND class_name != ?1
                 ORDER BY class_name ASC",
            )
            .map_err(fetch_err)?;
        stmt.query_map([class_name], |row| row.get(0))
            .and_then(|it| it.collect::<Result<Vec<_>>>())
            .map_err(fetch_err)?
    };

    if !open_others.is_empty() {
        // Dropping the transaction rolls back; nothing was written yet.
        return Err(AppError::Conflict { open: open_others });
    }

    tx.execute(
        "UPDATE classroom_settings SET is_open = 0 WHERE is_open = 1 AND class_name != ?1",
        [class_name],
    )
    .map_err(write_err)?;
    tx.execute(
        "UPDATE classroom_settings SET is_open = 1 WHERE class_name = ?1",
        [class_name],
    )
    .map_err(write_err)?;

    tx.commit().map_err(write_err)?;
    Ok(())
}

/// Close the attendance window. Idempotent; returns whether it was open.
pub fn close_class(pool: &mut DbPool, class_name: &str) -> AppResult<bool> {
    let exists: Option<i64> = pool
        .conn
        .query_row(
            "SELECT 1 FROM classroom_settings WHERE class_name = ?1",
            [class_name],
            |r| r.get(0),
        )
        .optional()
        .map_err(fetch_err)?;
    if exists.is_none() {
        return Err(AppError::Validation(format!(
            "unknown class '{}'",
            class_name
        )));
    }

    let changed = pool
        .conn
        .execute(
            "UPDATE classroom_settings SET is_open = 0 WHERE class_name = ?1 AND is_open = 1",
            [class_name],
        )
        .map_err(write_err)?;

    Ok(changed > 0)
}

/// Delete a class and everything that hangs off it, in one transaction.
pub fn delete_class(pool: &mut DbPool, class_name: &str) -> AppResult<()> {
    let tx = pool.conn.transaction().map_err(write_err)?;

    // Dependency order mirrors creation: events, roll registry, settings.
    tx.execute("DELETE FROM attendance WHERE class_name = ?1", [class_name])
        .map_err(write_err)?;
    tx.execute("DELETE FROM roll_map WHERE class_name = ?1", [class_name])
        .map_err(write_err)?;
    let changed = tx
        .execute(
            "DELETE FROM classroom_settings WHERE class_name = ?1",
            [class_name],
        )
        .map_err(write_err)?;

    if changed == 0 {
        return Err(AppError::Validation(format!(
            "unknown class '{}'",
            class_name
        )));
    }

    tx.commit().map_err(write_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// attendance
// ---------------------------------------------------------------------------

pub fn load_events_for_class(
    pool: &mut DbPool,
    class_name: &str,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = pool
        .conn
        .prepare(
            "SELECT * FROM attendance
             WHERE class_name = ?1
             ORDER BY date ASC, roll_number ASC",
        )
        .map_err(fetch_err)?;

    let rows = stmt
        .query_map([class_name], map_event_row)
        .and_then(|it| it.collect::<Result<Vec<_>>>())
        .map_err(fetch_err)?;

    Ok(rows)
}

pub fn load_events_for_student(
    pool: &mut DbPool,
    class_name: &str,
    roll_number: &str,
) -> AppResult<Vec<AttendanceEvent>> {
    let mut stmt = pool
        .conn
        .prepare(
            "SELECT * FROM attendance
             WHERE class_name = ?1 AND roll_number = ?2
             ORDER BY date ASC",
        )
        .map_err(fetch_err)?;

    let rows = stmt
        .query_map(params![class_name, roll_number], map_event_row)
        .and_then(|it| it.collect::<Result<Vec<_>>>())
        .map_err(fetch_err)?;

    Ok(rows)
}

/// Insert one presence event. Returns false when the (class, roll, date)
/// triple already exists — duplicates are idempotent by design.
pub fn insert_event(conn: &Connection, ev: &AttendanceEvent) -> AppResult<bool> {
    let inserted = conn
        .execute(
            "INSERT OR IGNORE INTO attendance (class_name, roll_number, name, date)
             VALUES (?1, ?2, ?3, ?4)",
            params![ev.class_name, ev.roll_number, ev.name, ev.date_str()],
        )
        .map_err(write_err)?;

    Ok(inserted > 0)
}

/// Number of submissions already recorded for a class on a given date.
pub fn count_events_for_date(
    conn: &Connection,
    class_name: &str,
    date: NaiveDate,
) -> AppResult<i64> {
    conn.query_row(
        "SELECT COUNT(*) FROM attendance WHERE class_name = ?1 AND date = ?2",
        params![class_name, date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )
    .map_err(fetch_err)
}

// ---------------------------------------------------------------------------
// roll_map
// ---------------------------------------------------------------------------

pub fn upsert_roll_entry(conn: &Connection, entry: &RollEntry) -> AppResult<()> {
    conn.execute(
        "INSERT INTO roll_map (class_name, roll_number, name)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(class_name, roll_number) DO UPDATE SET
           name = excluded.name",
        params![entry.class_name, entry.roll_number, entry.name],
    )
    .map_err(write_err)?;
    Ok(())
}

pub fn list_roll_entries(pool: &mut DbPool, class_name: &str) -> AppResult<Vec<RollEntry>> {
    let mut stmt = pool
        .conn
        .prepare(
            "SELECT * FROM roll_map
             WHERE class_name = ?1
             ORDER BY roll_number ASC",
        )
        .map_err(fetch_err)?;

    let rows = stmt
        .query_map([class_name], map_roll_row)
        .and_then(|it| it.collect::<Result<Vec<_>>>())
        .map_err(fetch_err)?;

    Ok(rows)
}
