// src/application/note_service.rs
use crate::domain::{CreateNoteData, Note, NoteServiceError, UpdateNoteData};
use std::future::Future;

/// CRUD access to the remote notes collection.
///
/// Every call is attempted once; failures are returned to the caller unchanged.
pub trait NoteService: Send + Sync {
    fn list_notes(&self) -> impl Future<Output = Result<Vec<Note>, NoteServiceError>> + Send;

    fn create_note(
        &self,
        data: &CreateNoteData,
    ) -> impl Future<Output = Result<Note, NoteServiceError>> + Send;

    /// Replace title and content of the note with `id`
    fn update_note(
        &self,
        id: i64,
        data: &UpdateNoteData,
    ) -> impl Future<Output = Result<Note, NoteServiceError>> + Send;

    fn delete_note(&self, id: i64) -> impl Future<Output = Result<(), NoteServiceError>> + Send;
}
