//! Terminal front end for tasklight.
//!
//! # Responsibility
//! - Map subcommands onto core store/form/sweep operations.
//! - Redraw the list and progress summary after every mutation.
//!
//! # Invariants
//! - Every invocation runs one deadline sweep after loading the store,
//!   so reminders fire at startup and not only under `watch`.

use clap::{Parser, Subcommand};
use log::warn;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use tasklight_core::db::open_db;
use tasklight_core::{
    filter_tasks, format_task_line, init_logging, now_epoch_ms, progress, AlertNotifier,
    CategoryPreset, ConsoleNotifier, Sweeper, TaskForm, TaskId, TaskStore, SWEEP_INTERVAL,
};

#[derive(Parser)]
#[command(name = "tasklight")]
#[command(about = "Local task list with deadline reminders", version)]
struct Cli {
    /// Database file; defaults to the per-user data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add a task.
    Add {
        title: String,
        /// Preset (work/personal/others) or free-form category text.
        #[arg(long, default_value = "work")]
        category: String,
        /// Deadline as `YYYY-MM-DD HH:MM` (local time).
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Show the task list and progress summary.
    List {
        /// Case-insensitive substring match on title or category.
        #[arg(long)]
        filter: Option<String>,
    },
    /// Edit a task's title, category or deadline.
    Edit {
        /// Task ID, or a unique ID prefix.
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// New deadline; pass an empty string to remove it.
        #[arg(long)]
        deadline: Option<String>,
    },
    /// Mark a task completed.
    Done { id: String },
    /// Mark a task not completed.
    Undone { id: String },
    /// Delete a task (asks for confirmation).
    Rm {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Toggle the persisted dark-mode preference.
    Dark,
    /// Run one deadline sweep tick.
    Sweep,
    /// Poll deadlines every 30 seconds until interrupted.
    Watch,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let data_dir = data_dir();
    let log_dir = data_dir.join("logs");
    if let Some(log_dir) = log_dir.to_str() {
        // Logging failure must not block the task list itself.
        if let Err(err) = init_logging(tasklight_core::default_log_level(), log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let db_path = cli.db.unwrap_or_else(|| data_dir.join("tasklight.sqlite3"));
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = open_db(&db_path)?;
    let mut store = TaskStore::load(conn)?;

    let sweeper = Sweeper::new(ConsoleNotifier, AlertNotifier);
    // Startup sweep: reminders whose deadline elapsed while the app was
    // not running fire on the next invocation.
    sweeper.tick(&mut store, now_epoch_ms())?;

    match cli.command {
        Command::Add {
            title,
            category,
            deadline,
        } => {
            let mut form = TaskForm::create();
            form.set_title(title);
            apply_category(&mut form, &category);
            form.set_deadline(deadline.unwrap_or_default());
            let fields = form.submit()?;
            let id = store.add(fields)?;
            println!("added {id}");
            render(&store, "");
        }
        Command::List { filter } => {
            render(&store, filter.as_deref().unwrap_or(""));
        }
        Command::Edit {
            id,
            title,
            category,
            deadline,
        } => {
            let id = resolve_id(&store, &id)?;
            let task = store
                .get(id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            let mut form = TaskForm::edit_from(task);
            if let Some(title) = title {
                form.set_title(title);
            }
            if let Some(category) = category {
                apply_category(&mut form, &category);
            }
            if let Some(deadline) = deadline {
                form.set_deadline(deadline);
            }
            let fields = form.submit()?;
            store.replace(id, fields)?;
            println!("updated {id}");
            render(&store, "");
        }
        Command::Done { id } => {
            let id = resolve_id(&store, &id)?;
            store.set_completed(id, true)?;
            render(&store, "");
        }
        Command::Undone { id } => {
            let id = resolve_id(&store, &id)?;
            store.set_completed(id, false)?;
            render(&store, "");
        }
        Command::Rm { id, yes } => {
            let id = resolve_id(&store, &id)?;
            let title = store
                .get(id)
                .map(|task| task.title.clone())
                .ok_or_else(|| format!("task not found: {id}"))?;
            if yes || confirm(&format!("Delete task \"{title}\"? [y/N] "))? {
                store.remove(id)?;
                println!("deleted {id}");
                render(&store, "");
            } else {
                println!("kept {id}");
            }
        }
        Command::Dark => {
            let enabled = !store.dark_mode();
            store.set_dark_mode(enabled)?;
            println!("dark mode {}", if enabled { "on" } else { "off" });
        }
        Command::Sweep => {
            // Startup sweep above already ran the tick for this clock
            // reading; report the current pending state instead.
            let pending = store
                .tasks()
                .iter()
                .filter(|task| task.reminder_pending())
                .count();
            println!("sweep done; {pending} reminder(s) pending");
        }
        Command::Watch => loop {
            std::thread::sleep(SWEEP_INTERVAL);
            if let Err(err) = sweeper.tick(&mut store, now_epoch_ms()) {
                // Keep polling; a failed persist on one tick is retried
                // naturally on the next.
                warn!("event=sweep_tick module=cli status=error error={err}");
                eprintln!("sweep failed: {err}");
            }
        },
    }

    Ok(())
}

/// Routes category text through the form's preset-vs-free-form split.
fn apply_category(form: &mut TaskForm, category: &str) {
    match CategoryPreset::parse(category) {
        Some(CategoryPreset::Others) | None => {
            form.set_category(CategoryPreset::Others);
            form.set_custom_category(category);
        }
        Some(preset) => form.set_category(preset),
    }
}

/// Resolves a full task ID or a unique ID prefix.
fn resolve_id(store: &TaskStore, text: &str) -> Result<TaskId, Box<dyn Error>> {
    let needle = text.trim().to_ascii_lowercase();
    if needle.is_empty() {
        return Err("empty task id".into());
    }

    let matches: Vec<TaskId> = store
        .tasks()
        .iter()
        .filter(|task| task.id.to_string().starts_with(&needle))
        .map(|task| task.id)
        .collect();

    match matches.as_slice() {
        [id] => Ok(*id),
        [] => Err(format!("no task matches id `{text}`").into()),
        _ => Err(format!("id `{text}` is ambiguous; use more characters").into()),
    }
}

fn confirm(prompt: &str) -> Result<bool, Box<dyn Error>> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}

/// Redraws the (optionally filtered) list plus the progress summary.
fn render(store: &TaskStore, filter: &str) {
    for task in filter_tasks(store.tasks(), filter) {
        println!("{}", format_task_line(task));
    }
    println!("{}", progress(store.tasks()).summary());
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("tasklight")
}
