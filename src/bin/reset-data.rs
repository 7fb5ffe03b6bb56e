//! Restore the planner document to its seeded defaults.
//!
//! Usage: reset-data [--data-file PATH] --force
//!   --data-file PATH : Document to reset (defaults to $DATA_FILE, then data.json)
//!   --force          : Required; the current contents are discarded

use std::path::PathBuf;

use clap::Parser;
use content_planner_api::{config::Config, db::DocumentStore};

#[derive(Parser)]
#[command(name = "reset-data", about = "Reset the content planner document to its defaults")]
struct Args {
    /// Document to reset (overrides DATA_FILE)
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Confirm that existing data should be discarded
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let data_file = match args.data_file {
        Some(path) => path,
        None => Config::from_env()?.data_file,
    };

    if !args.force {
        anyhow::bail!(
            "refusing to reset {} without --force",
            data_file.display()
        );
    }

    let store = DocumentStore::new(data_file);
    let doc = store.reset().await?;

    tracing::info!(
        "Reset {}: {} objectives, {} content ideas",
        store.path().display(),
        doc.strategic_objectives.values().map(Vec::len).sum::<usize>(),
        doc.content_ideas.values().map(Vec::len).sum::<usize>(),
    );

    Ok(())
}
