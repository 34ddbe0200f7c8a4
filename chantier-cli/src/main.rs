mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chantier_core::{Project, ProjectStore};

#[derive(Parser)]
#[command(name = "chantier")]
#[command(about = "Browse chantier projects and their task calendar")]
struct Cli {
    /// Load projects from a JSON file instead of the built-in demo data
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects, paginated
    Projects {
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Filter by title or author
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a project's collaborators and tasks
    Show { id: i64 },
    /// Render the month calendar of a project's in-progress tasks
    Calendar {
        id: i64,

        /// Month to display (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();

    let cli = Cli::parse();
    let mut store = load_store(cli.data.as_deref())?;

    match cli.command {
        Commands::Projects { page, limit, query } => {
            commands::projects::run(&store, page, limit, query.as_deref())
        }
        Commands::Show { id } => commands::show::run(&store, id),
        Commands::Calendar { id, month } => commands::calendar::run(&mut store, id, month.as_deref()),
    }
}

fn load_store(data: Option<&Path>) -> Result<ProjectStore> {
    match data {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading projects from file");
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let projects: Vec<Project> = serde_json::from_str(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;

            Ok(ProjectStore::with_projects(projects))
        }
        None => Ok(ProjectStore::with_sample_data()),
    }
}
