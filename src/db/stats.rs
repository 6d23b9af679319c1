use crate::db::pool::DbPool;
use ansi_term::Colour::{Cyan, Green, Yellow};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{} {}", Cyan.paint("• File:"), Yellow.paint(db_path));
    println!("{} {:.2} MB", Cyan.paint("• Size:"), file_mb);

    //
    // 2) COUNTS
    //
    let classes: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM classroom_settings", [], |row| {
            row.get(0)
        })?;
    let events: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM attendance", [], |row| row.get(0))?;
    let students: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM roll_map", [], |row| row.get(0))?;

    println!(
        "{} {}",
        Cyan.paint("• Classes:"),
        Green.paint(classes.to_string())
    );
    println!(
        "{} {}",
        Cyan.paint("• Attendance events:"),
        Green.paint(events.to_string())
    );
    println!(
        "{} {}",
        Cyan.paint("• Registered students:"),
        Green.paint(students.to_string())
    );

    //
    // 3) OPEN SESSION
    //
    let open: Option<String> = pool
        .conn
        .query_row(
            "SELECT class_name FROM classroom_settings WHERE is_open = 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    match open {
        Some(name) => println!("{} {}", Cyan.paint("• Open session:"), Green.paint(name)),
        None => println!("{} --", Cyan.paint("• Open session:")),
    }

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM attendance ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("{}", Cyan.paint("• Date range:"));
    println!("    from: {}", first_date.unwrap_or_else(|| "--".into()));
    println!("    to:   {}", last_date.unwrap_or_else(|| "--".into()));

    println!();
    Ok(())
}
