//! Command-line front for the devhub core.
//!
//! # Responsibility
//! - Map user intents onto store/form/filter operations.
//! - Keep rendering and side effects (clipboard) out of the core crate.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use devhub_core::catalog::{
    self, resource_categories, search_errors, search_resources, search_snippets,
};
use devhub_core::{
    default_log_level, derive_preview, filter_notes, filter_tasks, init_logging, note_categories,
    NoteForm, NoteStore, Priority, RecordStore, SqliteKvStore, TaskForm, TaskSelector, TaskStore,
    NOTES_KEY, TASKS_KEY,
};

#[derive(Parser)]
#[command(
    name = "devhub",
    version,
    about = "Local-first developer hub: tasks, notes and reference catalogs"
)]
struct Cli {
    /// Database file. Defaults to the platform data directory.
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Level for the diagnostics file log.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Manage the personal task list.
    #[command(subcommand)]
    Task(TaskCommand),
    /// Manage the personal notes collection.
    #[command(subcommand)]
    Note(NoteCommand),
    /// Browse the static reference catalogs.
    #[command(subcommand)]
    Catalog(CatalogCommand),
    /// Copy a CDN resource URL to the system clipboard.
    Copy {
        /// Resource name, matched case-insensitively.
        name: String,
    },
}

#[derive(Subcommand)]
enum TaskCommand {
    /// Create a task.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Deadline, e.g. 2026-08-20T17:00 or a bare date.
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List tasks for one status selector.
    List {
        /// all | today | upcoming | overdue | completed
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Edit the editable fields of a task.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        /// New deadline; pass an empty string to clear it.
        #[arg(long)]
        deadline: Option<String>,
        #[arg(long)]
        priority: Option<String>,
    },
    /// Toggle completion.
    Done { id: String },
    /// Hide from views while keeping the record in storage.
    Archive { id: String },
    /// Delete permanently.
    Rm { id: String },
}

#[derive(Subcommand)]
enum NoteCommand {
    /// Create a note.
    Add {
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
        /// Comma-separated tags, e.g. "git, stash, cli".
        #[arg(long, default_value = "")]
        tags: String,
    },
    /// Search notes by free text and category.
    List {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Edit the editable fields of a note.
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete permanently.
    Rm { id: String },
    /// Show the live category selector set.
    Categories,
}

#[derive(Subcommand)]
enum CatalogCommand {
    /// CDN links and helpful sites.
    Resources {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Copy-pastable code snippets.
    Snippets {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Common errors with fix checklists.
    Errors {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value = "all")]
        category: String,
    },
    /// Keyboard shortcut tables.
    Shortcuts,
    /// Git command tables.
    Git,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let data_dir = match &cli.db {
        Some(path) => path.parent().map(PathBuf::from).unwrap_or_default(),
        None => default_data_dir(),
    };
    let db_path = cli
        .db
        .clone()
        .unwrap_or_else(|| data_dir.join("devhub.db"));

    setup_logging(cli.log_level.as_deref(), &data_dir);

    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    match cli.command {
        Command::Task(command) => {
            let mut store: TaskStore<SqliteKvStore> =
                RecordStore::load(SqliteKvStore::open(&db_path)?, TASKS_KEY);
            run_task(command, &mut store)
        }
        Command::Note(command) => {
            let mut store: NoteStore<SqliteKvStore> =
                RecordStore::load(SqliteKvStore::open(&db_path)?, NOTES_KEY);
            run_note(command, &mut store)
        }
        Command::Catalog(command) => {
            run_catalog(command);
            Ok(())
        }
        Command::Copy { name } => {
            copy_resource_url(&name);
            Ok(())
        }
    }
}

fn run_task(
    command: TaskCommand,
    store: &mut TaskStore<SqliteKvStore>,
) -> Result<(), Box<dyn Error>> {
    match command {
        TaskCommand::Add {
            title,
            description,
            deadline,
            priority,
        } => {
            let mut form = TaskForm::open();
            form.title = title;
            form.description = description;
            form.deadline = deadline.unwrap_or_default();
            form.priority = parse_priority(&priority)?;
            let id = form.submit(store, Utc::now())?;
            println!("added task {id}");
        }
        TaskCommand::List { filter } => {
            let selector = TaskSelector::parse(&filter)
                .ok_or_else(|| format!("unknown filter `{filter}`"))?;
            let visible = filter_tasks(store.records(), selector, Utc::now());
            if visible.is_empty() {
                println!("no tasks under `{}`", selector.as_str());
            }
            for task in visible {
                let check = if task.completed { "x" } else { " " };
                let deadline = task.deadline.as_deref().unwrap_or("-");
                println!(
                    "[{check}] {}  {}  ({}, due {deadline})",
                    task.id,
                    task.title,
                    task.priority.as_str()
                );
                if !task.description.is_empty() {
                    println!("      {}", task.description);
                }
            }
        }
        TaskCommand::Edit {
            id,
            title,
            description,
            deadline,
            priority,
        } => {
            let Some(task) = store.get(&id) else {
                println!("no such task: {id}");
                return Ok(());
            };
            let mut form = TaskForm::open_edit(task);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(description) = description {
                form.description = description;
            }
            if let Some(deadline) = deadline {
                form.deadline = deadline;
            }
            if let Some(priority) = priority {
                form.priority = parse_priority(&priority)?;
            }
            form.submit(store, Utc::now())?;
            println!("updated task {id}");
        }
        TaskCommand::Done { id } => {
            if store.toggle_completed(&id)? {
                println!("toggled task {id}");
            } else {
                println!("no such task: {id}");
            }
        }
        TaskCommand::Archive { id } => {
            if store.archive(&id)? {
                println!("archived task {id}");
            } else {
                println!("no such task: {id}");
            }
        }
        TaskCommand::Rm { id } => {
            if store.remove(&id)? {
                println!("removed task {id}");
            } else {
                println!("no such task: {id}");
            }
        }
    }
    Ok(())
}

fn run_note(
    command: NoteCommand,
    store: &mut NoteStore<SqliteKvStore>,
) -> Result<(), Box<dyn Error>> {
    match command {
        NoteCommand::Add {
            title,
            content,
            category,
            tags,
        } => {
            let mut form = NoteForm::open();
            form.title = title;
            form.content = content;
            form.category = category;
            form.tags = tags;
            let id = form.submit(store, Utc::now())?;
            println!("added note {id}");
        }
        NoteCommand::List { query, category } => {
            let visible = filter_notes(store.records(), &query, &category);
            if visible.is_empty() {
                println!("no matching notes");
            }
            for note in visible {
                let category = if note.category.is_empty() {
                    "-"
                } else {
                    note.category.as_str()
                };
                println!("{}  {}  [{category}]", note.id, note.title);
                if let Some(preview) = derive_preview(&note.content) {
                    println!("      {preview}");
                }
                if !note.tags.is_empty() {
                    println!("      tags: {}", note.tags.join(", "));
                }
            }
        }
        NoteCommand::Edit {
            id,
            title,
            content,
            category,
            tags,
        } => {
            let Some(note) = store.get(&id) else {
                println!("no such note: {id}");
                return Ok(());
            };
            let mut form = NoteForm::open_edit(note);
            if let Some(title) = title {
                form.title = title;
            }
            if let Some(content) = content {
                form.content = content;
            }
            if let Some(category) = category {
                form.category = category;
            }
            if let Some(tags) = tags {
                form.tags = tags;
            }
            form.submit(store, Utc::now())?;
            println!("updated note {id}");
        }
        NoteCommand::Rm { id } => {
            if store.remove(&id)? {
                println!("removed note {id}");
            } else {
                println!("no such note: {id}");
            }
        }
        NoteCommand::Categories => {
            for category in note_categories(store.records()) {
                println!("{category}");
            }
        }
    }
    Ok(())
}

fn run_catalog(command: CatalogCommand) {
    match command {
        CatalogCommand::Resources { query, category } => {
            for (name, count) in resource_categories() {
                print!("{name}({count}) ");
            }
            println!();
            for resource in search_resources(&query, &category) {
                let star = if resource.popular { "*" } else { " " };
                let version = resource.version.unwrap_or("-");
                println!("{star} {}  {}", resource.name, resource.description);
                println!("      {}  [{} {version}]", resource.url, resource.category);
            }
        }
        CatalogCommand::Snippets { query, category } => {
            for snippet in search_snippets(&query, &category) {
                println!("--- {} ({})", snippet.title, snippet.language);
                println!("{}", snippet.description);
                println!("{}", snippet.code);
            }
        }
        CatalogCommand::Errors { query, category } => {
            for entry in search_errors(&query, &category) {
                println!("--- {} [{}]", entry.title, entry.category);
                println!("{}", entry.error);
                println!("{}", entry.solution);
            }
        }
        CatalogCommand::Shortcuts => {
            for group in catalog::SHORTCUT_GROUPS {
                println!("--- {}", group.title);
                for (keys, action) in group.items {
                    println!("{keys:24} {action}");
                }
            }
        }
        CatalogCommand::Git => {
            for group in catalog::GIT_COMMAND_GROUPS {
                println!("--- {}", group.title);
                for (command, description) in group.commands {
                    println!("{command:40} {description}");
                }
            }
        }
    }
}

/// Copies a resource URL to the clipboard. Fire-and-forget: a failure is
/// reported and nothing else changes.
fn copy_resource_url(name: &str) {
    let needle = name.to_lowercase();
    let Some(resource) = catalog::CDN_RESOURCES
        .iter()
        .find(|resource| resource.name.to_lowercase().contains(&needle))
    else {
        println!("no resource matching `{name}`");
        return;
    };

    if cli_clipboard::set_contents(resource.url.to_string()).is_ok() {
        println!("copied {} to clipboard", resource.url);
    } else {
        eprintln!("could not access the clipboard; url: {}", resource.url);
    }
}

fn parse_priority(value: &str) -> Result<Priority, String> {
    Priority::parse(value).ok_or_else(|| format!("unknown priority `{value}`; expected low|medium|high"))
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("devhub"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn setup_logging(level: Option<&str>, data_dir: &Path) {
    let level = level.unwrap_or_else(|| default_log_level());
    let log_dir = data_dir.join("logs");
    let Some(log_dir) = log_dir.to_str() else {
        return;
    };
    // Diagnostics are best-effort; the hub stays usable without a log file.
    if let Err(err) = init_logging(level, log_dir) {
        eprintln!("logging disabled: {err}");
    }
}
