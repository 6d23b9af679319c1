use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name = ?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the three store tables with the modern schema.
///
/// `classroom_settings.is_open` carries a partial unique index so the store
/// itself rejects a second open row, whatever the writer did.
fn create_store_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS classroom_settings (
            class_name  TEXT PRIMARY KEY,
            code        TEXT NOT NULL,
            daily_limit INTEGER NOT NULL CHECK(daily_limit >= 1),
            is_open     INTEGER NOT NULL DEFAULT 0 CHECK(is_open IN (0, 1))
        );

        CREATE TABLE IF NOT EXISTS attendance (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            class_name  TEXT NOT NULL,
            roll_number TEXT NOT NULL,
            name        TEXT NOT NULL,
            date        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS roll_map (
            class_name  TEXT NOT NULL,
            roll_number TEXT NOT NULL,
            name        TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_attendance_event
            ON attendance(class_name, roll_number, date);
        CREATE INDEX IF NOT EXISTS idx_attendance_class
            ON attendance(class_name);
        CREATE UNIQUE INDEX IF NOT EXISTS idx_roll_map_entry
            ON roll_map(class_name, roll_number);
        "#,
    )?;
    Ok(())
}

/// Enforce "at most one open class" at the store level.
///
/// Versioned migration, recorded in the `log` table so it runs once even on
/// databases created before the guard existed.
fn migrate_single_open_guard(conn: &Connection) -> Result<()> {
    let version = "20250506_0001_single_open_guard";

    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(());
    }

    // A legacy pair of unguarded writes can have left two open rows behind;
    // close everything before the index can be created.
    let healed = conn.execute(
        "UPDATE classroom_settings SET is_open = 0
         WHERE is_open = 1
           AND (SELECT COUNT(*) FROM classroom_settings WHERE is_open = 1) > 1",
        [],
    )?;
    if healed > 0 {
        success(format!("Closed {} conflicting open class(es).", healed));
    }

    conn.execute_batch(
        r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_settings_single_open
            ON classroom_settings(is_open) WHERE is_open = 1;
        "#,
    )?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added single-open guard index')",
        [version],
    )?;

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked from db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure store tables
    let fresh = !table_exists(conn, "classroom_settings")?;
    create_store_tables(conn)?;
    if fresh {
        success("Created store tables (modern schema).");
    }

    // 3) Single-open guard
    migrate_single_open_guard(conn)?;

    Ok(())
}
