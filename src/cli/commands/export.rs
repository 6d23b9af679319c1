use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        class,
        format,
        file,
        force,
    } = cmd
    {
        let mut pool = DbPool::from_config(cfg)?;
        ExportLogic::export(&mut pool, class, format, file, *force)?;
    }
    Ok(())
}
