// src/state/app_state.rs
use crate::domain::Note;
use crate::state::{DarkMode, Observable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    #[default]
    Intro,
    Notes,
}

/// Shared client state. Each field is an independent observable; nothing here
/// couples one container to another.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub current_page: Observable<Page>,
    pub dark_mode: DarkMode,
    pub notes: Observable<Vec<Note>>,
    pub loading: Observable<bool>,
    pub error: Observable<Option<String>>,
    pub search_query: Observable<String>,
}

impl AppState {
    pub fn new(dark_mode: DarkMode) -> Self {
        Self {
            dark_mode,
            ..Self::default()
        }
    }
}
