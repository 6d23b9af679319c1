use crate::db::log::oplog;
use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
///
/// Schema creation and upgrades all live in the migration engine; this
/// also leaves an audit line in the operation log once the schema is ready.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    oplog(conn, "init", "", "Database initialized")?;
    Ok(())
}
