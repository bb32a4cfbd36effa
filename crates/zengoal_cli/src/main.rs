//! Command-line shell for the zengoal tracker.
//!
//! # Responsibility
//! - Compose storage, logging, and the goal service for one command run.
//! - Map subcommands one-to-one onto goal lifecycle operations.
//! - Render the list and overall progress.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;
use zengoal_core::{default_log_level, init_logging, GoalService, KvStorage};

#[derive(Parser)]
#[command(name = "zengoal", version)]
#[command(about = "Local-first personal goal tracker")]
struct Cli {
    /// Data directory holding the goal database and logs.
    #[arg(long, default_value = ".zengoal")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a new goal; it appears at the top of the list.
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        notes: String,
    },
    /// Show all goals, newest first, with overall progress.
    List,
    /// Toggle a goal's completion flag.
    Done { id: Uuid },
    /// Replace a goal's notes.
    Notes { id: Uuid, notes: String },
    /// Delete a goal permanently.
    Rm { id: Uuid },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let data_dir = resolve_data_dir(cli.data_dir)?;
    std::fs::create_dir_all(&data_dir)
        .map_err(|err| format!("cannot create data directory `{}`: {err}", data_dir.display()))?;

    // Logging is best-effort: a failed init must not block the tracker.
    if let Some(log_dir) = data_dir.join("logs").to_str() {
        if let Err(message) = init_logging(default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {message}");
        }
    }

    let storage =
        KvStorage::open(data_dir.join("goals.db")).map_err(|err| err.to_string())?;
    let mut service = GoalService::new(storage);

    match cli.command {
        Command::Add { title, notes } => {
            let id = service
                .add_goal(&title, &notes)
                .map_err(|err| err.to_string())?;
            println!("added {id}");
        }
        Command::List => print_goals(&service),
        Command::Done { id } => {
            let completed = service.toggle_completed(id).map_err(|err| err.to_string())?;
            println!("{id} {}", if completed { "completed" } else { "reopened" });
        }
        Command::Notes { id, notes } => {
            service
                .update_notes(id, &notes)
                .map_err(|err| err.to_string())?;
            println!("updated notes for {id}");
        }
        Command::Rm { id } => {
            service.remove_goal(id).map_err(|err| err.to_string())?;
            println!("removed {id}");
        }
    }

    Ok(())
}

fn print_goals(service: &GoalService) {
    let goals = service.goals();
    if goals.is_empty() {
        println!("No goals yet. Add one with `zengoal add <title>`.");
        return;
    }

    println!(
        "Progress: {:.0}% ({}/{} done)",
        service.progress_percent(),
        service.completed_count(),
        goals.len()
    );
    for goal in goals {
        let marker = if goal.is_completed { "x" } else { " " };
        println!("[{marker}] {}  {}", goal.id, goal.title);
        if !goal.notes.is_empty() {
            println!("      {}", goal.notes);
        }
    }
}

fn resolve_data_dir(data_dir: PathBuf) -> Result<PathBuf, String> {
    if data_dir.is_absolute() {
        return Ok(data_dir);
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(data_dir))
        .map_err(|err| format!("cannot resolve current directory: {err}"))
}
