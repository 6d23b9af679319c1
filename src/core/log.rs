use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI colour per operation kind.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "class_add" | "mark" => Colour::Green,
        "class_del" => Colour::Red,
        "settings" => Colour::Yellow,
        "open" => Colour::Cyan,
        "close" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "push" | "export" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok((id, date, operation, target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap();
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| {
                if target.is_empty() {
                    op.len()
                } else {
                    op.len() + target.len() + 3
                }
            })
            .max()
            .unwrap()
            .min(60);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let color = color_for_operation(&operation);

            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            // Pad on the plain string; the colour codes would skew widths.
            let padding = " ".repeat(op_w.saturating_sub(op_target.len()));
            let shown = if target.is_empty() {
                color.paint(operation.as_str()).to_string()
            } else {
                format!("{} ({})", color.paint(operation.as_str()), target)
            };

            println!(
                "{:>id_w$}: {} | {}{} => {}",
                id,
                date,
                shown,
                padding,
                message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
