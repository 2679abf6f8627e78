// src/infrastructure/http.rs
//! HTTP implementation of [`NoteService`] against a JSON notes resource.

use crate::application::NoteService;
use crate::domain::{CreateNoteData, Note, NoteServiceError, UpdateNoteData};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct HttpNoteService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

// Anything returned by `send` failed below the HTTP layer.
async fn send(request: reqwest::RequestBuilder) -> Result<Response, NoteServiceError> {
    request.send().await.map_err(NoteServiceError::Connectivity)
}

fn request_error(operation: &'static str, status: StatusCode) -> NoteServiceError {
    NoteServiceError::Request {
        operation,
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
    }
}

// A body cut off mid-transfer is a transport failure, not a decode failure.
async fn read_json<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, NoteServiceError> {
    let body = response
        .bytes()
        .await
        .map_err(NoteServiceError::Connectivity)?;
    serde_json::from_slice(&body)
        .map_err(|source| NoteServiceError::Decode { operation, source })
}

impl NoteService for HttpNoteService {
    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn list_notes(&self) -> Result<Vec<Note>, NoteServiceError> {
        let response = send(self.client.get(self.collection_url())).await?;
        let status = response.status();
        debug!(%status, "List notes response");

        if !status.is_success() {
            if status == StatusCode::NOT_FOUND {
                return Err(NoteServiceError::Configuration);
            }
            return Err(request_error("fetch notes", status));
        }

        read_json("fetch notes", response).await
    }

    #[instrument(level = "debug", skip(self, data), fields(base_url = %self.base_url))]
    async fn create_note(&self, data: &CreateNoteData) -> Result<Note, NoteServiceError> {
        let response = send(self.client.post(self.collection_url()).json(data)).await?;
        let status = response.status();
        debug!(%status, "Create note response");

        if !status.is_success() {
            return Err(request_error("create note", status));
        }

        let note: Note = read_json("create note", response).await?;
        info!(note_id = note.id, "Created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self, data), fields(base_url = %self.base_url))]
    async fn update_note(&self, id: i64, data: &UpdateNoteData) -> Result<Note, NoteServiceError> {
        let response = send(self.client.put(self.note_url(id)).json(data)).await?;
        let status = response.status();
        debug!(%status, "Update note response");

        if !status.is_success() {
            return Err(request_error("update note", status));
        }

        let note: Note = read_json("update note", response).await?;
        info!(note_id = note.id, "Updated note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self), fields(base_url = %self.base_url))]
    async fn delete_note(&self, id: i64) -> Result<(), NoteServiceError> {
        let response = send(self.client.delete(self.note_url(id))).await?;
        let status = response.status();
        debug!(%status, "Delete note response");

        if !status.is_success() {
            return Err(request_error("delete note", status));
        }

        info!(note_id = id, "Deleted note");
        Ok(())
    }
}
