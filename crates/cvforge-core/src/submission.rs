//! Submission payload and backend response shapes.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::attachments::{Attachment, AttachmentSlot};
use crate::error::CvResult;

pub const CONTACT_PHONE_FIELD: &str = "contactPhone";
pub const RELIGION_FIELD: &str = "religion";
pub const EXPERIENCES_FIELD: &str = "experiences";

/// Fallback when an error body is JSON but carries no message.
pub const UNKNOWN_BACKEND_ERROR: &str = "An unknown backend error occurred.";

/// Everything sent with one `POST /generate`.
#[derive(Debug, Clone)]
pub struct SubmissionPayload {
    pub files: Vec<(AttachmentSlot, Attachment)>,
    pub contact_phone: String,
    pub religion: String,
    /// JSON array of `{country, period}`
    pub experiences: String,
}

impl SubmissionPayload {
    /// Part names in the order they are appended.
    pub fn part_names(&self) -> Vec<&'static str> {
        self.files
            .iter()
            .map(|(slot, _)| slot.field_name())
            .chain([CONTACT_PHONE_FIELD, RELIGION_FIELD, EXPERIENCES_FIELD])
            .collect()
    }

    pub fn into_form(self) -> CvResult<Form> {
        let mut form = Form::new();

        for (slot, attachment) in self.files {
            let part = Part::bytes(attachment.bytes.to_vec())
                .file_name(attachment.file_name)
                .mime_str(&attachment.mime)?;
            form = form.part(slot.field_name(), part);
        }

        Ok(form
            .text(CONTACT_PHONE_FIELD, self.contact_phone)
            .text(RELIGION_FIELD, self.religion)
            .text(EXPERIENCES_FIELD, self.experiences))
    }
}

/// Success body of `/generate`. Missing fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

/// Human-readable message for a non-success response.
///
/// JSON bodies contribute their `message` field, stringified when it is not
/// a string; empty, null, false and zero count as missing. Anything else falls
/// back to the status code.
pub fn error_message(status: u16, body: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(body) {
        Ok(value) => match value.get("message") {
            Some(serde_json::Value::String(m)) if !m.is_empty() => m.clone(),
            Some(serde_json::Value::Number(n)) if n.as_f64() != Some(0.0) => n.to_string(),
            Some(serde_json::Value::Bool(true)) => "true".to_string(),
            Some(other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
                other.to_string()
            }
            _ => UNKNOWN_BACKEND_ERROR.to_string(),
        },
        Err(_) => format!("HTTP error! Status: {status}"),
    }
}
