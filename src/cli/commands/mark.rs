use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mark::{MarkLogic, MarkOutcome};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        class,
        roll,
        name,
        code,
        date: date_arg,
    } = cmd
    {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today_eastern(),
        };

        let mut pool = DbPool::from_config(cfg)?;

        match MarkLogic::submit(&mut pool, class, roll, name, code, day)? {
            MarkOutcome::Recorded => {
                success(format!(
                    "{} ({}) marked present in '{}' on {}.",
                    name, roll, class, day
                ));
            }
            MarkOutcome::AlreadyMarked => {
                info(format!(
                    "{} ({}) was already marked present on {}.",
                    name, roll, day
                ));
            }
        }
    }

    Ok(())
}
