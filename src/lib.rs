// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod util;

use crate::application::{NoteService, NotesController};
use crate::cli::args::{Args, Command, ThemeMode};
use crate::constants::{BASE_URL_ENV_VAR, DARK_MODE_CLASS};
use crate::domain::{CreateNoteData, UpdateNoteData};
use crate::infrastructure::color_scheme::host_prefers_dark;
use crate::infrastructure::{Config, FileStorage, HttpNoteService};
use crate::ports::TerminalPresenter;
use crate::state::{AppState, DarkMode, DocumentRoot, Page};
use anyhow::{Context, Result};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{debug, info};

pub async fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notepad with arguments");

    let config = Config::load_or_default(args.config.as_deref())?;
    let env_url = std::env::var(BASE_URL_ENV_VAR).ok();
    let base_url = resolve_base_url(args.base_url.as_deref(), env_url.as_deref(), &config);
    info!(%base_url, "Using notes API");

    // Initialize state
    let storage_path = config.storage_path()?;
    let storage = FileStorage::open(&storage_path)
        .with_context(|| format!("Failed to open local storage {}", storage_path.display()))?;
    let root = DocumentRoot::new();
    let dark_mode = DarkMode::init(Arc::new(storage), Arc::new(root.clone()), host_prefers_dark());
    let state = AppState::new(dark_mode);

    // Initialize client
    let service = HttpNoteService::new(&base_url);
    let controller = NotesController::new(&service, state);

    let colored = std::io::stdout().is_terminal();
    let output = execute(args.command, &controller, &root, colored).await?;
    println!("{output}");

    Ok(())
}

/// Base URL precedence: command-line flag, environment, config file
pub fn resolve_base_url(flag: Option<&str>, env: Option<&str>, config: &Config) -> String {
    flag.or(env)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(config.api.base_url.as_str())
        .to_string()
}

/// Run one command against the controller and render its result
pub async fn execute<S: NoteService>(
    command: Command,
    controller: &NotesController<'_, S>,
    root: &DocumentRoot,
    colored: bool,
) -> Result<String> {
    let state: &AppState = controller.state();
    let presenter = |root: &DocumentRoot| {
        if colored {
            TerminalPresenter::new(root.has_class(DARK_MODE_CLASS))
        } else {
            TerminalPresenter::plain()
        }
    };

    match command {
        Command::Intro => {
            state.current_page.set(Page::Intro);
            Ok(presenter(root).render_page(Page::Intro))
        }
        Command::List { search, json } => {
            state.current_page.set(Page::Notes);
            state.search_query.set(search.unwrap_or_default());
            controller.load_notes().await?;
            let notes = controller.visible_notes();
            debug!(count = notes.len(), "Listing notes");
            if json {
                return Ok(serde_json::to_string_pretty(&notes)?);
            }
            let presenter = presenter(root);
            Ok(format!(
                "{}\n{}",
                presenter.render_page(Page::Notes),
                presenter.render_list(&notes)
            ))
        }
        Command::Create {
            title,
            content,
            json,
        } => {
            state.current_page.set(Page::Notes);
            let note = controller.add_note(&CreateNoteData { title, content }).await?;
            if json {
                return Ok(serde_json::to_string_pretty(&note)?);
            }
            Ok(presenter(root).render_note(&note))
        }
        Command::Update {
            note_id,
            title,
            content,
            json,
        } => {
            state.current_page.set(Page::Notes);
            let note = controller
                .edit_note(note_id, &UpdateNoteData { title, content })
                .await?;
            if json {
                return Ok(serde_json::to_string_pretty(&note)?);
            }
            Ok(presenter(root).render_note(&note))
        }
        Command::Delete { note_id } => {
            state.current_page.set(Page::Notes);
            controller.remove_note(note_id).await?;
            Ok(format!("Deleted note {note_id}"))
        }
        Command::Theme { mode } => {
            match mode {
                Some(ThemeMode::Dark) => state.dark_mode.set(true),
                Some(ThemeMode::Light) => state.dark_mode.set(false),
                Some(ThemeMode::Toggle) => state.dark_mode.toggle(),
                None => {}
            }
            let label = if state.dark_mode.get() { "dark" } else { "light" };
            Ok(format!("Theme: {label}"))
        }
    }
}
