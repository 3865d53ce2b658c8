use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

/// TaskMaster - a task-dependency runner
#[derive(Parser)]
#[command(name = "taskmaster")]
#[command(about = "Run named tasks with their prerequisites resolved first")]
#[command(version)]
struct Cli {
    /// Path to the cookbook file that defines the tasks
    #[arg(short, long, default_value = "taskmaster.yml")]
    cookbook: PathBuf,

    /// Path of the execution log, truncated on every run
    #[arg(long, default_value = "taskmaster_log.txt")]
    log: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one or more tasks, prerequisites first
    Run {
        /// Task names, executed in the given order
        #[arg(required = true)]
        tasks: Vec<String>,
    },
    /// List the tasks defined in the cookbook
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cookbook = config::load_cookbook(&cli.cookbook)?;

    // Execute command (CLI layer only handles declaration and presentation)
    match cli.command {
        Commands::Run { tasks } => commands::run::execute(&cookbook, &cli.log, &tasks),
        Commands::List => commands::list::execute(&cookbook),
    }
}
