use crate::archive::{LocalArchive, PushOutcome};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::publish::PublishLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Push {
        class,
        date: date_arg,
    } = cmd
    {
        let day = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today_eastern(),
        };

        let mut pool = DbPool::from_config(cfg)?;
        let store = LocalArchive::new(&cfg.archive_dir);

        match PublishLogic::push(&mut pool, &store, class, day, &cfg.archive_branch)? {
            PushOutcome::Created => success("Created new archive file."),
            PushOutcome::Updated => success("Updated archive file."),
        }
    }

    Ok(())
}
