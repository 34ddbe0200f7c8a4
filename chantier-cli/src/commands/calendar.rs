use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;

use chantier_core::{MonthCursor, ProjectStore, calendar, dates};

use crate::render::Render;

pub fn run(store: &mut ProjectStore, id: i64, month: Option<&str>) -> Result<()> {
    store.select(Some(id))?;

    let today = Local::now().date_naive();
    let cursor = match month {
        Some(m) => parse_month(m)?,
        None => MonthCursor::new(today.year(), today.month0()),
    };

    let days = calendar::project_month(store.selected(), cursor.year, cursor.month0, today);

    let project = store.selected().expect("selected above");
    println!(
        "{} — {}-{:02}",
        project.title.bold(),
        cursor.year,
        cursor.month0 + 1
    );
    println!();
    println!("{}", "Dim Lun Mar Mer Jeu Ven Sam".dimmed());

    for week in days.chunks(7) {
        let mut line = String::new();
        for day in week {
            let cell = format!("{:>3}", day.date.day());
            let cell = if day.is_today {
                cell.reversed().to_string()
            } else if !day.is_current_month {
                cell.dimmed().to_string()
            } else if day.periods.is_empty() {
                cell
            } else {
                cell.bold().to_string()
            };

            line.push_str(&cell);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }

    println!();

    let mut shown = false;
    for day in &days {
        if !day.is_current_month {
            continue;
        }
        for period in &day.periods {
            println!(
                "{}  {}",
                dates::format_date_fr(day.date).dimmed(),
                period.render()
            );
            shown = true;
        }
    }

    if !shown {
        println!("{}", "Aucune tâche en cours ce mois-ci.".dimmed());
    }

    Ok(())
}

/// Parse a `YYYY-MM` month argument into a cursor (user-facing months are
/// 1-based, the core contract is 0-based).
fn parse_month(s: &str) -> Result<MonthCursor> {
    let (year, month) = s.split_once('-').context("expected YYYY-MM")?;
    let year: i32 = year.parse().with_context(|| format!("invalid year in '{s}'"))?;
    let month: u32 = month.parse().with_context(|| format!("invalid month in '{s}'"))?;

    if !(1..=12).contains(&month) {
        bail!("month out of range: {}", month);
    }

    Ok(MonthCursor::new(year, month - 1))
}
