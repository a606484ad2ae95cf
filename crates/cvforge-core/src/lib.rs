//! CV Forge Core Library
//!
//! Headless state and I/O for the CV Forge desktop client.
//!
//! ## Overview
//!
//! The user picks a theme, attaches three photos (passport, face, full
//! body), fills in a phone number, a religion and up to three work
//! experiences, and submits everything to the generator backend, which
//! answers with the candidate's name and a link to the generated PDF.
//!
//! Everything here is UI-agnostic so it can be tested without a window:
//!
//! - [`theme`]: fixed palette registry
//! - [`storage`]: persisted preferences (redb)
//! - [`attachments`]: photo slots and preview decoding
//! - [`experience`]: repeatable experience rows
//! - [`controller`]: the form/result state machine
//! - [`client`]: the `/generate` HTTP client
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use cvforge_core::{AttachmentSlot, Attachment, ClientConfig, FormController,
//!                    GenerateClient, MemoryPreferences};
//!
//! let config = ClientConfig::new("http://127.0.0.1:5000")?;
//! let mut form = FormController::new(config.clone(), Arc::new(MemoryPreferences::new()));
//! for slot in AttachmentSlot::ALL {
//!     form.on_file_selected(slot, Some(Attachment::from_path(path_for(slot)).await?));
//! }
//!
//! let payload = form.begin_submit()?;
//! let outcome = GenerateClient::new(config).generate(payload).await;
//! form.finish_submit(outcome);
//! ```

pub mod attachments;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod experience;
pub mod result;
pub mod storage;
pub mod submission;
pub mod theme;

// Re-exports
pub use attachments::{
    decode_preview, Attachment, AttachmentSlot, AttachmentTracker, PreviewFraming, PreviewState,
    PreviewTicket, IMAGE_EXTENSIONS,
};
pub use client::GenerateClient;
pub use config::{ClientConfig, DEFAULT_BACKEND_URL};
pub use controller::{FormController, Phase, View};
pub use error::{CvError, CvResult};
pub use experience::{Experience, ExperienceList, ExperienceRow, RowId, MAX_EXPERIENCES};
pub use result::{download_file_name, populate, DownloadLink, ResultView};
pub use storage::{MemoryPreferences, PreferenceStore, Preferences};
pub use submission::{GenerateResponse, SubmissionPayload};
pub use theme::{themes, Theme, ThemeMenu};
