//! Result page - generated CV preview and download.

use std::path::PathBuf;

use dioxus::prelude::*;
use rfd::FileDialog;

use crate::context::{use_client, use_form};

#[component]
pub fn ResultPage() -> Element {
    let mut form = use_form();
    let client = use_client();
    let mut saving = use_signal(|| false);
    let mut status = use_signal(|| Option::<String>::None);

    let result = form.read().result().clone();
    let preview_src = result.preview_src.clone();
    let download = result.download.clone();

    let handle_download = move |_| {
        let Some(link) = download.clone() else {
            return;
        };
        let client = client.clone();
        saving.set(true);
        status.set(None);

        spawn(async move {
            let suggested = link.file_name.clone();
            let target: Option<PathBuf> = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("PDF", &["pdf"])
                    .set_file_name(&suggested)
                    .save_file()
            })
            .await
            .unwrap_or(None);

            let Some(path) = target else {
                // User cancelled
                saving.set(false);
                return;
            };

            let outcome = match client.download(&link.href).await {
                Ok(bytes) => tokio::fs::write(&path, &bytes).await.map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };

            match outcome {
                Ok(()) => {
                    tracing::info!("Saved CV to {:?}", path);
                    status.set(Some(format!("Saved to {}", path.display())));
                }
                Err(e) => {
                    tracing::error!("Failed to save CV: {}", e);
                    status.set(Some(format!("⚠️ Download failed: {}", e)));
                }
            }
            saving.set(false);
        });
    };

    let download_label = result
        .download
        .as_ref()
        .map(|link| link.file_name.clone())
        .unwrap_or_default();

    rsx! {
        header { class: "page-header",
            div {
                h1 { class: "page-title", "Your CV is ready" }
                p { class: "page-subtitle", "Preview the document below or save a copy." }
            }
        }

        div { class: "card",
            div { class: "result-actions",
                if result.download.is_some() {
                    button {
                        r#type: "button",
                        class: "btn btn-primary",
                        disabled: saving(),
                        title: "{download_label}",
                        onclick: handle_download,
                        if saving() { "Saving..." } else { "Download PDF" }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| form.write().back_to_form(),
                    "Back to form"
                }
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    onclick: move |_| form.write().reset(),
                    "Generate another CV"
                }
            }

            if let Some(message) = status() {
                p { class: "result-status", "{message}" }
            }

            if let Some(src) = preview_src {
                iframe {
                    class: "pdf-preview",
                    src: "{src}",
                    title: "Generated CV preview",
                }
            } else {
                div { class: "pdf-preview-empty", "No preview available." }
            }
        }
    }
}
