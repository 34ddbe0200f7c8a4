use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use chantier_core::{ProjectStore, dates};

use crate::render::Render;

pub fn run(store: &ProjectStore, id: i64) -> Result<()> {
    let Some(project) = store.get(id) else {
        bail!("Projet non trouvé: {}", id);
    };

    println!("{}", project.render());
    if !project.description.is_empty() {
        println!("   {}", project.description.dimmed());
    }
    println!();

    if project.collaborators.is_empty() {
        println!("{}", "Aucun collaborateur.".dimmed());
        return Ok(());
    }

    for collaborator in &project.collaborators {
        println!(
            "{} {} {}",
            collaborator.first_name.bold(),
            collaborator.last_name.bold(),
            format!("<{}>", collaborator.email).dimmed()
        );

        for task in &collaborator.tasks {
            println!(
                "   {}  {} {}",
                task.status.render(),
                task.title,
                format!(
                    "{} → {}",
                    dates::format_date_fr(task.start_date),
                    dates::format_date_fr(task.end_date)
                )
                .dimmed()
            );
        }

        println!();
    }

    Ok(())
}
