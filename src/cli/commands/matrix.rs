use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matrix::build_matrix;
use crate::db::pool::DbPool;
use crate::db::queries::{load_events_for_class, load_events_for_student};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Matrix { class, roll } = cmd {
        let mut pool = DbPool::from_config(cfg)?;

        let events = match roll {
            Some(r) => load_events_for_student(&mut pool, class, r)?,
            None => load_events_for_class(&mut pool, class)?,
        };

        let matrix = build_matrix(&events);
        if matrix.is_empty() {
            warning(format!("No attendance data for '{}'.", class));
            return Ok(());
        }

        let date_headers: Vec<String> = matrix
            .dates()
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();

        let mut columns = vec![
            Column::fitted("roll", matrix.rows().iter().map(|r| r.roll_number.len())),
            Column::fitted("name", matrix.rows().iter().map(|r| r.name.len())),
        ];
        for h in &date_headers {
            columns.push(Column::fitted(h, std::iter::once(1)));
        }

        let mut table = Table::new(columns);
        for row in matrix.rows() {
            let mut cells = vec![row.roll_number.clone(), row.name.clone()];
            cells.extend(row.marks.iter().map(|m| m.as_char().to_string()));
            table.add_row(cells);
        }

        println!("📅 Attendance matrix for '{}':\n", class);
        print!("{}", table.render());
    }

    Ok(())
}
