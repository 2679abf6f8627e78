// src/domain/mod.rs
pub mod error;
pub mod note;

pub use error::{NoteServiceError, StorageError};
pub use note::{CreateNoteData, Note, UpdateNoteData};
