//! Submit Bar Component
//!
//! Submit button, "generating" indicator and error area of the form.

use cvforge_core::AttachmentSlot;
use dioxus::prelude::*;

use crate::context::use_form;

/// Bottom of the form.
///
/// While a request is in flight the actions are swapped for a loading
/// indicator; the last failure stays visible until the next attempt.
#[component]
pub fn SubmitBar() -> Element {
    let form = use_form();

    let submitting = form.read().is_submitting();
    let enabled = form.read().submit_enabled();
    let missing = AttachmentSlot::ALL.len() - form.read().attachments().filled_count();
    let error = form.read().error().map(str::to_string);

    rsx! {
        if let Some(message) = error {
            div { class: "error-container", role: "alert",
                p { class: "error-title", "Generation failed" }
                p { "{message}" }
            }
        }

        if submitting {
            div { class: "generating-indicator",
                div { class: "spinner" }
                span { "Generating your CV..." }
            }
        } else {
            div { class: "form-actions",
                if !enabled {
                    span { class: "page-subtitle",
                        "Attach {missing} more photo(s) to continue"
                    }
                }
                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: !enabled,
                    "Generate CV"
                }
            }
        }
    }
}
