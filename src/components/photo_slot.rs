//! Photo Slot Component
//!
//! File picker with an in-place preview for one attachment slot.

use cvforge_core::{decode_preview, Attachment, AttachmentSlot, PreviewState, IMAGE_EXTENSIONS};
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::use_form;

/// Clickable 3:4 box that picks a photo for `slot` and previews it.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     PhotoSlot { slot: AttachmentSlot::Passport }
/// }
/// ```
#[component]
pub fn PhotoSlot(
    /// Which attachment this box fills
    slot: AttachmentSlot,
) -> Element {
    let mut form = use_form();
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_| {
        if picking() {
            return;
        }
        picking.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn so UI stays responsive)
            let file_path = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", IMAGE_EXTENSIONS)
                    .set_title(slot.label().trim_end_matches(" *"))
                    .pick_file()
            })
            .await;

            let path = match file_path {
                Ok(Some(path)) => path,
                Ok(None) => {
                    // User cancelled
                    picking.set(false);
                    return;
                }
                Err(e) => {
                    error.set(Some(format!("File picker error: {:?}", e)));
                    picking.set(false);
                    return;
                }
            };

            let attachment = match Attachment::from_path(&path).await {
                Ok(attachment) => attachment,
                Err(e) => {
                    error.set(Some(format!("Failed to read file: {}", e)));
                    picking.set(false);
                    return;
                }
            };
            picking.set(false);

            let ticket = form.write().on_file_selected(slot, Some(attachment));
            if let Some(ticket) = ticket {
                // Root-scoped: must resolve even if the form page unmounts
                spawn_forever(async move {
                    let preview = decode_preview(ticket.attachment.clone()).await;
                    form.write().complete_preview(&ticket, preview);
                });
            }
        });
    };

    let handle_clear = move |e: MouseEvent| {
        e.stop_propagation();
        error.set(None);
        form.write().on_file_selected(slot, None);
    };

    let label = slot.label();
    let framing = slot.framing();
    let background_size = framing.background_size;
    let background_position = framing.background_position;
    let has_file = form.read().attachments().get(slot).is_some();
    let file_name = form
        .read()
        .attachments()
        .get(slot)
        .map(|a| a.file_name.clone())
        .unwrap_or_default();
    let preview = form.read().attachments().preview(slot).clone();
    let failed_reason = match &preview {
        PreviewState::Failed(reason) => Some(reason.clone()),
        _ => None,
    };

    rsx! {
        div { class: "photo-slot-wrapper",
            span { class: "photo-slot-label", "{label}" }

            div {
                class: "photo-slot",
                title: if has_file { "Change photo" } else { "Click to upload" },
                onclick: handle_pick,

                match preview {
                    PreviewState::Ready(uri) => rsx! {
                        div {
                            class: "photo-slot-preview",
                            style: "background-image: url('{uri}'); background-size: {background_size}; background-position: {background_position};",
                        }
                        div { class: "photo-slot-overlay", "Change" }
                    },
                    PreviewState::Decoding => rsx! {
                        div { class: "photo-slot-placeholder",
                            div { class: "spinner" }
                        }
                    },
                    PreviewState::Failed(_) | PreviewState::Placeholder => rsx! {
                        div { class: "photo-slot-placeholder",
                            // Image icon
                            svg {
                                xmlns: "http://www.w3.org/2000/svg",
                                width: "48",
                                height: "48",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "1",
                                path {
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    d: "M2.25 15.75l5.159-5.159a2.25 2.25 0 013.182 0l5.159 5.159m-1.5-1.5l1.409-1.409a2.25 2.25 0 013.182 0l2.909 2.909m-18 3.75h16.5a1.5 1.5 0 001.5-1.5V6a1.5 1.5 0 00-1.5-1.5H3.75A1.5 1.5 0 002.25 6v12a1.5 1.5 0 001.5 1.5z",
                                }
                            }
                            p { if picking() { "Opening..." } else { "Click to upload" } }
                        }
                    },
                }
            }

            if let Some(reason) = failed_reason {
                p { class: "photo-slot-status error", "Preview unavailable: {reason}" }
            }

            if has_file {
                p { class: "photo-slot-status", "{file_name}" }
                button {
                    r#type: "button",
                    class: "photo-slot-clear",
                    onclick: handle_clear,
                    "Remove"
                }
            }

            if let Some(err) = error() {
                p { class: "photo-slot-status error", "⚠️ {err}" }
            }
        }
    }
}
