use std::sync::Arc;

use anyhow::Result;
use reqwest::{Client, StatusCode};
use shared::{
    domain::{ContactField, ContactFields, FieldErrors, SubmissionStatus},
    protocol::{ContactMessage, ContactRequest, HealthResponse},
};
use thiserror::Error;
use tokio::sync::{broadcast, Mutex};
use tracing::{info, warn};

pub mod config;
pub mod validation;


pub const SUCCESS_MESSAGE: &str = "Thank you for your message! I'll get back to you soon.";
pub const ERROR_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// Why a submission attempt failed. Every variant collapses into the same
/// generic user-facing status; the distinction only reaches the logs.
#[derive(Debug, Error)]
enum SubmitError {
    #[error("failed to reach contact endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("contact endpoint returned status {0}")]
    UnexpectedStatus(StatusCode),
    #[error("contact endpoint returned an undecodable body: {0}")]
    InvalidBody(reqwest::Error),
}

/// Observable state of the contact form. `errors` holds an entry per field
/// only while that field fails validation; `submitting` is true exactly for
/// the duration of the in-flight network call and gates the UI.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub fields: ContactFields,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
    pub submitting: bool,
}

#[derive(Debug, Clone)]
pub enum FormEvent {
    FieldsChanged(ContactFields),
    ErrorsChanged(FieldErrors),
    StatusChanged(SubmissionStatus),
    SubmittingChanged(bool),
}

/// Owns the contact-form state and the submission workflow: field edits,
/// validation on submit, one best-effort POST to the configured backend,
/// and reconciliation of the resulting status.
pub struct ContactFormController {
    http: Client,
    backend_url: String,
    inner: Mutex<FormState>,
    events: broadcast::Sender<FormEvent>,
}

impl ContactFormController {
    pub fn new(backend_url: impl Into<String>) -> Arc<Self> {
        let (events, _) = broadcast::channel(64);
        Arc::new(Self {
            http: Client::new(),
            backend_url: backend_url.into(),
            inner: Mutex::new(FormState::default()),
            events,
        })
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<FormEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> FormState {
        self.inner.lock().await.clone()
    }

    /// Records an edit to one field. The field's stale validation error is
    /// dropped so it is not shown while the user is typing, and any
    /// previously shown submission status is reset to idle.
    pub async fn update_field(&self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        let mut guard = self.inner.lock().await;
        guard.fields.set(field, value);
        if guard.errors.remove(&field).is_some() {
            let _ = self
                .events
                .send(FormEvent::ErrorsChanged(guard.errors.clone()));
        }
        if !guard.status.is_idle() {
            guard.status = SubmissionStatus::Idle;
            let _ = self
                .events
                .send(FormEvent::StatusChanged(SubmissionStatus::Idle));
        }
        let _ = self
            .events
            .send(FormEvent::FieldsChanged(guard.fields.clone()));
    }

    /// Validates the current snapshot and, if clean, posts it to the
    /// backend. Validation failure stores the per-field errors and never
    /// touches the network. On success the form is cleared; on any
    /// submission failure the user's input is preserved for retry. The
    /// submitting flag is cleared on every exit path of the network phase.
    pub async fn submit(&self) -> SubmissionStatus {
        let payload = {
            let mut guard = self.inner.lock().await;
            if guard.submitting {
                info!("contact: submit ignored while a submission is in flight");
                return guard.status.clone();
            }

            let errors = validation::validate(&guard.fields);
            guard.errors = errors;
            let _ = self
                .events
                .send(FormEvent::ErrorsChanged(guard.errors.clone()));
            if !guard.errors.is_empty() {
                info!(
                    error_count = guard.errors.len(),
                    "contact: submit blocked by validation"
                );
                return guard.status.clone();
            }

            guard.submitting = true;
            guard.status = SubmissionStatus::Idle;
            let _ = self.events.send(FormEvent::SubmittingChanged(true));
            // Snapshot under the lock: edits made while the request is in
            // flight must not leak into the payload already being sent.
            ContactRequest::from(guard.fields.clone())
        };

        let result = self.post_contact(&payload).await;

        // Single reconciliation point: every outcome of the network phase
        // passes through here, so `submitting` cannot be left set.
        let mut guard = self.inner.lock().await;
        match result {
            Ok(stored) => {
                info!(message_id = %stored.id, "contact: submission accepted");
                guard.status = SubmissionStatus::Success(SUCCESS_MESSAGE.to_string());
                guard.fields = ContactFields::default();
                let _ = self
                    .events
                    .send(FormEvent::FieldsChanged(guard.fields.clone()));
            }
            Err(err) => {
                warn!("contact: submission failed: {err}");
                guard.status = SubmissionStatus::Error(ERROR_MESSAGE.to_string());
            }
        }
        guard.submitting = false;
        let _ = self.events.send(FormEvent::SubmittingChanged(false));
        let _ = self
            .events
            .send(FormEvent::StatusChanged(guard.status.clone()));
        guard.status.clone()
    }

    async fn post_contact(&self, payload: &ContactRequest) -> Result<ContactMessage, SubmitError> {
        let response = self
            .http
            .post(format!("{}/api/contact", self.backend_url))
            .json(payload)
            .send()
            .await?;

        // Only an exact 200 counts as success; everything else is the same
        // generic failure to the user.
        if response.status() != StatusCode::OK {
            return Err(SubmitError::UnexpectedStatus(response.status()));
        }

        response.json().await.map_err(SubmitError::InvalidBody)
    }

    /// GET `{backend_url}/api/` and return the backend's health message.
    pub async fn health_check(&self) -> Result<String> {
        let response: HealthResponse = self
            .http
            .get(format!("{}/api/", self.backend_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(response.message)
    }

    /// GET `{backend_url}/api/contact` and return the stored messages.
    pub async fn list_messages(&self) -> Result<Vec<ContactMessage>> {
        let messages: Vec<ContactMessage> = self
            .http
            .get(format!("{}/api/contact", self.backend_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(messages)
    }
}
