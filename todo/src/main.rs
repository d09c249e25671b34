use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use todo::exit_codes;
use todo::io::config::{TodoConfig, load_config};
use todo::io::task_store::TaskStore;
use todo::logging;
use todo::ops::{add_task, list_tasks, remove_task, toggle_task};
use todo::render;
use todo::task::TaskId;

#[derive(Parser)]
#[command(name = "todo", version, about = "A simple command-line todo app.")]
struct Cli {
    /// TOML config file. Defaults apply when omitted or missing.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Task store file. Overrides `store_path` from the config.
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a new task.
    Add {
        /// Name of the task to add.
        task_name: String,
    },
    /// List all tasks.
    List,
    /// Remove a task by ID.
    Remove {
        /// ID of the task to remove.
        task_id: TaskId,
    },
    /// Mark a task as completed or pending.
    Toggle {
        /// ID of the task to toggle.
        task_id: TaskId,
    },
}

fn main() {
    logging::init();
    let code = match run(Cli::parse()) {
        Ok(()) => exit_codes::OK,
        Err(err) => {
            eprintln!("error: {err:#}");
            exit_codes::FAILURE
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    debug!(store = %config.store_path.display(), policy = ?config.id_policy, "config resolved");
    let store = TaskStore::new(config.store_path);

    let message = match cli.command {
        Command::Add { task_name } => {
            let task = add_task(&store, config.id_policy, &task_name).context("add task")?;
            render::added(&task)
        }
        Command::List => render::task_list(&list_tasks(&store).context("list tasks")?),
        Command::Remove { task_id } => {
            render::removed(&remove_task(&store, task_id).context("remove task")?)
        }
        Command::Toggle { task_id } => {
            render::toggled(&toggle_task(&store, task_id).context("toggle task")?)
        }
    };
    println!("{message}");
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<TodoConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config(path).context("load config")?,
        None => TodoConfig::default(),
    };
    if let Some(file) = &cli.file {
        config.store_path = file.clone();
        config.validate().context("invalid --file")?;
    }
    Ok(config)
}
