use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{CloseOutcome, SessionGate};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle `open` and `close` — the two session gate transitions.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::from_config(cfg)?;

    match cmd {
        Commands::Open { class } => {
            SessionGate::open(&mut pool, class)?;
            success(format!("Attendance for '{}' is now OPEN.", class));
        }
        Commands::Close { class } => match SessionGate::close(&mut pool, class)? {
            CloseOutcome::Closed => {
                success(format!("Attendance for '{}' is now CLOSED.", class));
            }
            CloseOutcome::AlreadyClosed => {
                info(format!("Attendance for '{}' was already closed.", class));
            }
        },
        _ => {}
    }

    Ok(())
}
