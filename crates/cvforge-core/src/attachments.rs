//! Attachment tracking for the three photo slots.
//!
//! Each slot holds at most one file. Selecting a file hands back a
//! [`PreviewTicket`]; the caller decodes it with [`decode_preview`] off the UI
//! thread and feeds the result to [`AttachmentTracker::complete_preview`].
//! Tickets carry a per-slot generation, so a decode that finishes after the
//! slot was changed again is dropped instead of overwriting the newer preview.

use std::path::Path;

use base64::Engine;
use bytes::Bytes;

use crate::error::{CvError, CvResult};

/// File extensions offered by the native picker.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "gif", "bmp"];

/// One of the three fixed photo positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttachmentSlot {
    Passport,
    Face,
    FullBody,
}

/// How a slot's preview image is framed inside its 3:4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewFraming {
    pub background_size: &'static str,
    pub background_position: &'static str,
}

impl AttachmentSlot {
    pub const ALL: [AttachmentSlot; 3] = [
        AttachmentSlot::Passport,
        AttachmentSlot::Face,
        AttachmentSlot::FullBody,
    ];

    /// Multipart part name expected by the backend.
    pub fn field_name(self) -> &'static str {
        match self {
            AttachmentSlot::Passport => "passport",
            AttachmentSlot::Face => "face",
            AttachmentSlot::FullBody => "full_body",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AttachmentSlot::Passport => "Passport Photo *",
            AttachmentSlot::Face => "Face Photo *",
            AttachmentSlot::FullBody => "Full Body Photo *",
        }
    }

    /// Passport scans are zoomed onto the photo corner; full-body shots keep
    /// the head in frame.
    pub fn framing(self) -> PreviewFraming {
        match self {
            AttachmentSlot::Passport => PreviewFraming {
                background_size: "180%",
                background_position: "left bottom",
            },
            AttachmentSlot::Face => PreviewFraming {
                background_size: "cover",
                background_position: "center",
            },
            AttachmentSlot::FullBody => PreviewFraming {
                background_size: "cover",
                background_position: "top",
            },
        }
    }

    fn index(self) -> usize {
        match self {
            AttachmentSlot::Passport => 0,
            AttachmentSlot::Face => 1,
            AttachmentSlot::FullBody => 2,
        }
    }
}

impl std::fmt::Display for AttachmentSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// A user-selected file, held in memory until submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Bytes,
}

impl Attachment {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for_file_name(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes: bytes.into(),
        }
    }

    /// Read a file picked from disk.
    pub async fn from_path(path: impl AsRef<Path>) -> CvResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        Ok(Self::new(file_name, bytes))
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

fn mime_for_file_name(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// What a slot's preview surface currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PreviewState {
    #[default]
    Placeholder,
    Decoding,
    /// `data:` URI ready to be used as a background image.
    Ready(String),
    Failed(String),
}

/// A pending preview decode for one slot.
#[derive(Debug, Clone)]
pub struct PreviewTicket {
    pub slot: AttachmentSlot,
    pub generation: u64,
    pub attachment: Attachment,
}

#[derive(Debug, Clone, Default)]
struct SlotState {
    file: Option<Attachment>,
    preview: PreviewState,
    generation: u64,
}

/// Holds at most one file per slot plus its preview state.
#[derive(Debug, Clone, Default)]
pub struct AttachmentTracker {
    slots: [SlotState; 3],
}

impl AttachmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or clear a slot's file.
    ///
    /// Returns a ticket when a preview decode should be started.
    pub fn select(
        &mut self,
        slot: AttachmentSlot,
        file: Option<Attachment>,
    ) -> Option<PreviewTicket> {
        let state = &mut self.slots[slot.index()];
        state.generation += 1;

        match file {
            Some(attachment) => {
                tracing::debug!(%slot, file = %attachment.file_name, bytes = attachment.len(), "Slot set");
                state.file = Some(attachment.clone());
                state.preview = PreviewState::Decoding;
                Some(PreviewTicket {
                    slot,
                    generation: state.generation,
                    attachment,
                })
            }
            None => {
                tracing::debug!(%slot, "Slot cleared");
                state.file = None;
                state.preview = PreviewState::Placeholder;
                None
            }
        }
    }

    /// Apply a finished decode. Returns `false` if the ticket went stale.
    pub fn complete_preview(&mut self, ticket: &PreviewTicket, result: CvResult<String>) -> bool {
        let state = &mut self.slots[ticket.slot.index()];
        if state.generation != ticket.generation {
            tracing::debug!(slot = %ticket.slot, "Dropping stale preview");
            return false;
        }

        state.preview = match result {
            Ok(uri) => PreviewState::Ready(uri),
            Err(e) => {
                tracing::warn!(slot = %ticket.slot, "Preview decode failed: {}", e);
                PreviewState::Failed(e.to_string())
            }
        };
        true
    }

    pub fn get(&self, slot: AttachmentSlot) -> Option<&Attachment> {
        self.slots[slot.index()].file.as_ref()
    }

    pub fn preview(&self, slot: AttachmentSlot) -> &PreviewState {
        &self.slots[slot.index()].preview
    }

    /// True when every slot holds a file.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.file.is_some())
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.file.is_some()).count()
    }

    /// Present attachments in slot order.
    pub fn present(&self) -> impl Iterator<Item = (AttachmentSlot, &Attachment)> {
        AttachmentSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|a| (slot, a)))
    }

    /// Empty every slot and invalidate pending decodes.
    pub fn clear(&mut self) {
        for slot in AttachmentSlot::ALL {
            self.select(slot, None);
        }
    }
}

/// Decode an attachment into a previewable `data:` URI.
///
/// The bytes must decode as an image; decoding runs on the blocking pool.
pub async fn decode_preview(attachment: Attachment) -> CvResult<String> {
    tokio::task::spawn_blocking(move || encode_data_uri(&attachment))
        .await
        .map_err(|e| CvError::ImageDecode(format!("decode task failed: {e}")))?
}

fn encode_data_uri(attachment: &Attachment) -> CvResult<String> {
    let format = image::guess_format(&attachment.bytes)
        .map_err(|e| CvError::ImageDecode(e.to_string()))?;
    image::load_from_memory_with_format(&attachment.bytes, format)
        .map_err(|e| CvError::ImageDecode(e.to_string()))?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&attachment.bytes);
    Ok(format!("data:{};base64,{}", format.to_mime_type(), encoded))
}
