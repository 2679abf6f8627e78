// src/state/mod.rs
pub mod app_state;
pub mod dark_mode;
pub mod observable;

pub use app_state::{AppState, Page};
pub use dark_mode::{DarkMode, DocumentRoot, StyleTarget};
pub use observable::{Observable, Subscription};
