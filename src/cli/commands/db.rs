use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // Single shared connection across the requested actions
        let mut pool: Option<DbPool> = None;

        fn get_pool<'a>(pool: &'a mut Option<DbPool>, cfg: &Config) -> AppResult<&'a mut DbPool> {
            if pool.is_none() {
                *pool = Some(DbPool::from_config(cfg)?);
            }
            Ok(pool.as_mut().unwrap())
        }

        //
        // 1) MIGRATE
        //
        if *migrate {
            let pool = get_pool(&mut pool, cfg)?;
            println!("{}", Cyan.paint("▶ Running migrations…"));
            run_pending_migrations(&pool.conn)?;
            println!("{}\n", Green.paint("✔ Migration completed."));
        }

        //
        // 2) INFO
        //
        if *info {
            let pool = get_pool(&mut pool, cfg)?;
            stats::print_db_info(pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            let pool = get_pool(&mut pool, cfg)?;

            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{} {}\n", Red.paint("✘ Integrity check failed:"), integrity);
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            let pool = get_pool(&mut pool, cfg)?;
            println!("{}", Cyan.paint("▶ Running VACUUM…"));

            pool.conn.execute_batch("VACUUM;")?;

            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }
    }

    Ok(())
}
