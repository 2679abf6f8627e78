// src/application/mod.rs
pub mod note_service;
pub mod notes_controller;

pub use note_service::NoteService;
pub use notes_controller::NotesController;
