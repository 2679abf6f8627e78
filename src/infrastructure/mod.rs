// src/infrastructure/mod.rs
pub mod color_scheme;
pub mod config;
pub mod http;
pub mod storage;

pub use config::Config;
pub use http::HttpNoteService;
pub use storage::{FileStorage, KeyValueStore, MemoryStorage};
