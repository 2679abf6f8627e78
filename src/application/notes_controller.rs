// src/application/notes_controller.rs
use crate::application::NoteService;
use crate::domain::{CreateNoteData, Note, NoteServiceError, UpdateNoteData};
use crate::state::AppState;
use std::future::Future;
use tracing::{debug, warn};

/// Drives a [`NoteService`] and mirrors every call into [`AppState`]:
/// `loading` is raised for the duration of the call, `error` is cleared before
/// and set from the failure message after, and `notes` follows the results.
pub struct NotesController<'a, S: NoteService> {
    service: &'a S,
    state: AppState,
}

impl<'a, S: NoteService> NotesController<'a, S> {
    pub fn new(service: &'a S, state: AppState) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Fetch all notes and replace the `notes` container with them
    pub async fn load_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        let notes = self.track(self.service.list_notes()).await?;
        debug!(count = notes.len(), "Loaded notes");
        self.state.notes.set(notes.clone());
        Ok(notes)
    }

    pub async fn add_note(&self, data: &CreateNoteData) -> Result<Note, NoteServiceError> {
        let note = self.track(self.service.create_note(data)).await?;
        let created = note.clone();
        self.state.notes.update(|notes| {
            let mut next = notes.clone();
            next.push(created);
            next
        });
        Ok(note)
    }

    pub async fn edit_note(
        &self,
        id: i64,
        data: &UpdateNoteData,
    ) -> Result<Note, NoteServiceError> {
        let note = self.track(self.service.update_note(id, data)).await?;
        let updated = note.clone();
        self.state.notes.update(|notes| {
            let mut next = notes.clone();
            match next.iter_mut().find(|n| n.id == id) {
                Some(slot) => *slot = updated,
                None => next.push(updated),
            }
            next
        });
        Ok(note)
    }

    pub async fn remove_note(&self, id: i64) -> Result<(), NoteServiceError> {
        self.track(self.service.delete_note(id)).await?;
        self.state
            .notes
            .update(|notes| notes.iter().filter(|n| n.id != id).cloned().collect());
        Ok(())
    }

    /// Notes matching the current search query
    pub fn visible_notes(&self) -> Vec<Note> {
        let query = self.state.search_query.get();
        self.state
            .notes
            .get()
            .into_iter()
            .filter(|n| n.matches(&query))
            .collect()
    }

    async fn track<T, F>(&self, call: F) -> Result<T, NoteServiceError>
    where
        F: Future<Output = Result<T, NoteServiceError>>,
    {
        self.state.loading.set(true);
        self.state.error.set(None);

        let result = call.await;
        if let Err(e) = &result {
            warn!(error = %e, "Notes API call failed");
            self.state.error.set(Some(e.to_string()));
        }

        self.state.loading.set(false);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::testing::{sample_note, MockNoteService};
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn given_notes_when_loading_then_fills_container_and_toggles_loading() {
        // Arrange
        let service = MockNoteService::builder()
            .with_note(sample_note(1, "First", "one"))
            .with_note(sample_note(2, "Second", "two"))
            .build();
        let state = AppState::default();
        let loading_seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&loading_seen);
        let _sub = state.loading.subscribe(move |v| sink.lock().unwrap().push(*v));
        let controller = NotesController::new(&service, state.clone());

        // Act
        let notes = controller.load_notes().await.expect("load should succeed");

        // Assert
        assert_eq!(notes.len(), 2);
        assert_eq!(state.notes.get().len(), 2);
        assert_eq!(*loading_seen.lock().unwrap(), vec![false, true, false]);
        assert_eq!(state.error.get(), None);
    }

    #[tokio::test]
    async fn given_failing_list_when_loading_then_sets_error_and_clears_loading() {
        // Arrange
        let service = MockNoteService::builder().with_list_not_found().build();
        let state = AppState::default();
        let controller = NotesController::new(&service, state.clone());

        // Act
        let result = controller.load_notes().await;

        // Assert
        assert!(matches!(result, Err(NoteServiceError::Configuration)));
        assert!(!state.loading.get());
        let message = state.error.get().expect("error message should be set");
        assert!(message.contains("endpoint not found"));
    }

    #[tokio::test]
    async fn given_previous_error_when_next_call_succeeds_then_error_is_cleared() {
        let service = MockNoteService::builder().build();
        let state = AppState::default();
        state.error.set(Some("stale".to_string()));
        let controller = NotesController::new(&service, state.clone());

        controller.load_notes().await.expect("load should succeed");

        assert_eq!(state.error.get(), None);
    }

    #[tokio::test]
    async fn given_new_note_when_adding_then_appends_server_note() {
        // Arrange
        let service = MockNoteService::builder().build();
        let state = AppState::default();
        let controller = NotesController::new(&service, state.clone());
        let data = CreateNoteData {
            title: "A".to_string(),
            content: "B".to_string(),
        };

        // Act
        let note = controller.add_note(&data).await.expect("create should succeed");

        // Assert
        assert_eq!(state.notes.get(), vec![note]);
    }

    #[tokio::test]
    async fn given_existing_note_when_editing_then_replaces_in_place() {
        // Arrange
        let service = MockNoteService::builder()
            .with_note(sample_note(1, "Old", "old"))
            .with_note(sample_note(2, "Other", "other"))
            .build();
        let state = AppState::default();
        let controller = NotesController::new(&service, state.clone());
        controller.load_notes().await.unwrap();
        let data = UpdateNoteData {
            title: "New".to_string(),
            content: "new".to_string(),
        };

        // Act
        controller.edit_note(1, &data).await.expect("update should succeed");

        // Assert
        let notes = state.notes.get();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].id, 1);
        assert_eq!(notes[0].title, "New");
        assert_eq!(notes[1].title, "Other");
    }

    #[tokio::test]
    async fn given_existing_note_when_removing_then_drops_it_from_container() {
        let service = MockNoteService::builder()
            .with_note(sample_note(1, "Keep", ""))
            .with_note(sample_note(5, "Drop", ""))
            .build();
        let state = AppState::default();
        let controller = NotesController::new(&service, state.clone());
        controller.load_notes().await.unwrap();

        controller.remove_note(5).await.expect("delete should succeed");

        let ids: Vec<i64> = state.notes.get().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[tokio::test]
    async fn given_failed_delete_when_removing_then_keeps_notes() {
        let service = MockNoteService::builder()
            .with_note(sample_note(5, "Stay", ""))
            .with_failure_status(500)
            .build();
        let state = AppState::default();
        state.notes.set(vec![sample_note(5, "Stay", "")]);
        let controller = NotesController::new(&service, state.clone());

        let result = controller.remove_note(5).await;

        assert_eq!(result.unwrap_err().status(), Some(500));
        assert_eq!(state.notes.get().len(), 1);
    }

    #[tokio::test]
    async fn given_search_query_when_listing_visible_then_filters_notes() {
        let service = MockNoteService::builder()
            .with_note(sample_note(1, "Shopping list", "milk"))
            .with_note(sample_note(2, "Ideas", "a crate for notes"))
            .build();
        let state = AppState::default();
        let controller = NotesController::new(&service, state.clone());
        controller.load_notes().await.unwrap();

        state.search_query.set("CRATE".to_string());

        let visible = controller.visible_notes();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);
    }
}
