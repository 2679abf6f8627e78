// src/util/testing.rs

use anyhow::Result;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteService;
use crate::domain::{CreateNoteData, Note, NoteServiceError, UpdateNoteData};

const MOCK_CREATED_AT: &str = "2024-01-01T00:00:00Z";

#[derive(Debug, Clone, Copy)]
enum Failure {
    ListNotFound,
    Status(u16),
}

/// Build a note with a fixed creation timestamp
pub fn sample_note(id: i64, title: &str, content: &str) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        created_at: MOCK_CREATED_AT.to_string(),
    }
}

/// In-memory stand-in for the remote notes API
///
/// Behaves like a well-behaved server: ids are assigned on create, unknown ids
/// answer 404 on update and delete. Failures can be forced with the builder.
///
/// # Examples
///
/// ```
/// use notepad::util::testing::{sample_note, MockNoteService};
///
/// let mock = MockNoteService::builder()
///     .with_note(sample_note(1, "Groceries", "milk"))
///     .with_failure_status(503)
///     .build();
/// ```
pub struct MockNoteService {
    notes: Mutex<Vec<Note>>,
    failure: Option<Failure>,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }

    /// Current server-side notes
    pub fn notes(&self) -> Vec<Note> {
        self.notes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn forced_failure(&self, operation: &'static str) -> Option<NoteServiceError> {
        match self.failure? {
            Failure::Status(status) => Some(status_error(operation, status)),
            Failure::ListNotFound => None,
        }
    }
}

fn status_error(operation: &'static str, status: u16) -> NoteServiceError {
    let status_text = reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or_default()
        .to_string();
    NoteServiceError::Request {
        operation,
        status,
        status_text,
    }
}

impl NoteService for MockNoteService {
    async fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        if let Some(Failure::ListNotFound) = self.failure {
            return Err(NoteServiceError::Configuration);
        }
        if let Some(err) = self.forced_failure("fetch notes") {
            return Err(err);
        }
        Ok(self.notes())
    }

    async fn create_note(&self, data: &CreateNoteData) -> Result<Note, NoteServiceError> {
        if let Some(err) = self.forced_failure("create note") {
            return Err(err);
        }
        let mut notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let note = sample_note(id, &data.title, &data.content);
        notes.push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: i64, data: &UpdateNoteData) -> Result<Note, NoteServiceError> {
        if let Some(err) = self.forced_failure("update note") {
            return Err(err);
        }
        let mut notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        let slot = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| status_error("update note", 404))?;
        slot.title = data.title.clone();
        slot.content = data.content.clone();
        Ok(slot.clone())
    }

    async fn delete_note(&self, id: i64) -> Result<(), NoteServiceError> {
        if let Some(err) = self.forced_failure("delete note") {
            return Err(err);
        }
        let mut notes = self.notes.lock().unwrap_or_else(PoisonError::into_inner);
        let before = notes.len();
        notes.retain(|n| n.id != id);
        if notes.len() == before {
            return Err(status_error("delete note", 404));
        }
        Ok(())
    }
}

/// Builder for MockNoteService
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteServiceBuilder {
    notes: Vec<Note>,
    failure: Option<Failure>,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            failure: None,
        }
    }

    /// Seed the server with a note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make list_notes answer as if the endpoint does not exist
    pub fn with_list_not_found(mut self) -> Self {
        self.failure = Some(Failure::ListNotFound);
        self
    }

    /// Make every operation fail with the given HTTP status
    pub fn with_failure_status(mut self, status: u16) -> Self {
        self.failure = Some(Failure::Status(status));
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            notes: Mutex::new(self.notes),
            failure: self.failure,
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio", "axum"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
