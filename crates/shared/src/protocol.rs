use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ContactFields;

/// Body posted to `POST /api/contact`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl From<ContactFields> for ContactRequest {
    fn from(fields: ContactFields) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            subject: fields.subject,
            message: fields.message,
        }
    }
}

/// Stored contact message as returned by the backend, both from a
/// successful submission and from the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `GET /api/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub message: String,
}
