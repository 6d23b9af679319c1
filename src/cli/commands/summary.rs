use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::matrix::build_matrix;
use crate::core::stats;
use crate::db::pool::DbPool;
use crate::db::queries::load_events_for_class;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use crate::utils::table::{Column, Table};

/// Parse `LO:HI` into an inclusive percentage window.
fn parse_percent_range(r: &str) -> AppResult<(f64, f64)> {
    let (lo, hi) = r
        .split_once(':')
        .ok_or_else(|| AppError::Validation(format!("range must be LO:HI, got '{r}'")))?;
    let lo: f64 = lo
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid range bound '{lo}'")))?;
    let hi: f64 = hi
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid range bound '{hi}'")))?;
    if lo > hi {
        return Err(AppError::Validation(format!(
            "range is empty: {lo} > {hi}"
        )));
    }
    Ok((lo, hi))
}

fn print_rows(rows: &[stats::StudentSummary]) {
    let mut table = Table::new(vec![
        Column::fitted("roll", rows.iter().map(|s| s.roll_number.len())),
        Column::fitted("name", rows.iter().map(|s| s.name.len())),
        Column::fitted("present", rows.iter().map(|s| s.present_count.to_string().len())),
        Column::fitted("percent", rows.iter().map(|s| format!("{:.2}", s.percent).len())),
    ]);
    for s in rows {
        table.add_row(vec![
            s.roll_number.clone(),
            s.name.clone(),
            s.present_count.to_string(),
            format!("{:.2}", s.percent),
        ]);
    }
    print!("{}", table.render());
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        class,
        top,
        bottom,
        range,
    } = cmd
    {
        let mut pool = DbPool::from_config(cfg)?;

        let events = load_events_for_class(&mut pool, class)?;
        let matrix = build_matrix(&events);

        if matrix.is_empty() {
            warning(format!("No attendance data for '{}'.", class));
            return Ok(());
        }

        let summaries = stats::summarize(&matrix);

        if let Some(n) = top {
            println!("🏅 Top {} students of '{}':\n", n, class);
            print_rows(&stats::top_n(&summaries, *n));
            return Ok(());
        }
        if let Some(n) = bottom {
            println!("📉 Bottom {} students of '{}':\n", n, class);
            print_rows(&stats::bottom_n(&summaries, *n));
            return Ok(());
        }
        if let Some(r) = range {
            let (lo, hi) = parse_percent_range(r)?;
            let filtered = stats::filter_range(&summaries, lo, hi);
            println!(
                "🔎 {} student(s) of '{}' with attendance between {}% and {}%:\n",
                filtered.len(),
                class,
                lo,
                hi
            );
            print_rows(&filtered);
            return Ok(());
        }

        println!("📊 Attendance summary for '{}':\n", class);
        print_rows(&summaries);

        let totals = stats::aggregate_totals(&matrix);
        println!(
            "\nPresent cells: {} / {} ({:.2}% presence)",
            totals.present,
            totals.cells(),
            totals.present_ratio()
        );
    }

    Ok(())
}
