use crate::cli::parser::{ClassAction, Commands};
use crate::config::Config;
use crate::core::session::SessionGate;
use crate::db::log::oplog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::class_config::ClassConfig;
use crate::ui::messages::{success, warning};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Class { action } = cmd else {
        return Ok(());
    };

    let mut pool = DbPool::from_config(cfg)?;

    match action {
        ClassAction::Add { name, code, limit } => {
            let config = ClassConfig::new(
                name,
                code.as_deref().unwrap_or(cfg.default_class_code.as_str()),
                limit.unwrap_or(cfg.default_daily_limit),
            );
            queries::insert_class(&pool.conn, &config)?;

            let _ = oplog(&pool.conn, "class_add", name, "Class created");
            success(format!("Class '{}' added.", config.class_name));
        }

        ClassAction::Del { name, confirm } => {
            // Destructive: takes every attendance row and roll entry with it.
            if confirm.as_deref() != Some("DELETE") {
                warning("Pass --confirm DELETE to confirm deletion.");
                return Ok(());
            }

            queries::delete_class(&mut pool, name)?;

            let _ = oplog(&pool.conn, "class_del", name, "Class deleted");
            success(format!("Class '{}' deleted.", name));
        }

        ClassAction::List => {
            let classes = queries::list_classes(&mut pool)?;

            if classes.is_empty() {
                warning("No classes available.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::fitted("class", classes.iter().map(|c| c.class_name.len())),
                Column::fitted("code", classes.iter().map(|c| c.code.len())),
                Column::fitted("limit", classes.iter().map(|c| c.daily_limit.to_string().len())),
                Column::fitted("status", std::iter::once("Closed".len())),
            ]);
            for c in &classes {
                table.add_row(vec![
                    c.class_name.clone(),
                    c.code.clone(),
                    c.daily_limit.to_string(),
                    if c.is_open { "Open" } else { "Closed" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        ClassAction::Roster { name } => {
            if queries::get_class(&mut pool, name)?.is_none() {
                return Err(AppError::Validation(format!("unknown class '{}'", name)));
            }
            let entries = queries::list_roll_entries(&mut pool, name)?;

            if entries.is_empty() {
                warning(format!("No students registered for '{}'.", name));
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::fitted("roll", entries.iter().map(|e| e.roll_number.len())),
                Column::fitted("name", entries.iter().map(|e| e.name.len())),
            ]);
            for e in &entries {
                table.add_row(vec![e.roll_number.clone(), e.name.clone()]);
            }
            print!("{}", table.render());
        }

        ClassAction::Set { name, code, limit } => {
            SessionGate::configure(&mut pool, name, code, *limit)?;
            success(format!("Class '{}' settings updated.", name));
        }
    }

    Ok(())
}
