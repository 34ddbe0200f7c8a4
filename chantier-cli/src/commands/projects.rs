use anyhow::Result;
use owo_colors::OwoColorize;

use chantier_core::{ProjectStore, dates};

use crate::render::Render;

pub fn run(store: &ProjectStore, page: usize, limit: usize, query: Option<&str>) -> Result<()> {
    let result = match query {
        Some(q) => store.search(q, page, limit),
        None => store.list(page, limit),
    };

    if result.projects.is_empty() {
        println!("Aucun projet (page {}).", page);
        return Ok(());
    }

    for project in &result.projects {
        println!("{}", project.render());
        println!(
            "   {}  {} collaborateur(s), {} tâche(s)",
            format!(
                "{} → {}",
                dates::format_date_fr(project.start_date),
                dates::format_date_fr(project.end_date)
            )
            .dimmed(),
            project.collaborators.len(),
            project.total_tasks()
        );
    }

    let pages = result.total.div_ceil(limit.max(1)).max(1);
    println!();
    println!(
        "{}",
        format!("page {}/{} · {} projet(s)", page, pages, result.total).dimmed()
    );

    Ok(())
}
