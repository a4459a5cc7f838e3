mod ops;
mod store;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use store::Store;

#[derive(Parser)]
#[command(name = "task-tracker")]
#[command(about = "Task tracker CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add { name: String },
    /// Rename an existing task
    Update { id: u64, name: String },
    /// Set a task's status (todo, in-progress, done)
    Mark { id: u64, status: String },
    /// Delete a task
    Delete { id: u64 },
    /// List tasks, optionally filtered by status
    List {
        #[arg(default_value = "all")]
        status: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();
    let work_dir = env::current_dir()?;
    let store = Store::new(work_dir);

    match cli.command {
        Commands::Add { name } => ops::add(&store, &name)?,
        Commands::Update { id, name } => ops::update(&store, id, &name)?,
        Commands::Mark { id, status } => ops::update_status(&store, id, &status)?,
        Commands::Delete { id } => ops::delete(&store, id)?,
        Commands::List { status } => {
            for task in ops::list(&store, &status)? {
                println!("- [{}] {} ({})", task.id, task.name, task.status);
            }
        }
    }
    Ok(())
}
