//! Form page - photos, contact details and experience.

use cvforge_core::AttachmentSlot;
use dioxus::prelude::*;

use crate::components::{ExperienceFields, PhotoSlot, SubmitBar, ThemeSwitcher};
use crate::context::{use_client, use_form};

#[component]
pub fn FormPage() -> Element {
    let mut state = use_form();
    let client = use_client();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let payload = match state.write().begin_submit() {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!("Submit ignored: {}", e);
                return;
            }
        };

        let client = client.clone();
        spawn(async move {
            let outcome = client.generate(payload).await;
            if state.write().finish_submit(outcome) {
                let _ = document::eval("window.scrollTo(0, 0);");
            }
        });
    };

    let contact_phone = state.read().contact_phone().to_string();
    let religion = state.read().religion().to_string();

    rsx! {
        header { class: "page-header",
            div {
                h1 { class: "page-title", "CV Generator" }
                p { class: "page-subtitle", "Upload your photos and details to generate a CV." }
            }
            ThemeSwitcher {}
        }

        form {
            class: "card",
            onsubmit: on_submit,

            section { class: "form-section",
                h2 { class: "section-title", "Photos" }
                div { class: "photo-grid",
                    for slot in AttachmentSlot::ALL {
                        PhotoSlot { key: "{slot}", slot }
                    }
                }
            }

            section { class: "form-section",
                h2 { class: "section-title", "Contact" }
                div { class: "field-grid",
                    div {
                        label { class: "field-label", r#for: "contactPhone", "Contact Phone" }
                        input {
                            id: "contactPhone",
                            name: "contactPhone",
                            r#type: "tel",
                            class: "input-style",
                            value: "{contact_phone}",
                            oninput: move |evt| state.write().set_contact_phone(evt.value()),
                        }
                    }
                    div {
                        label { class: "field-label", r#for: "religion", "Religion" }
                        input {
                            id: "religion",
                            name: "religion",
                            r#type: "text",
                            class: "input-style",
                            value: "{religion}",
                            oninput: move |evt| state.write().set_religion(evt.value()),
                        }
                    }
                }
            }

            ExperienceFields {}
            SubmitBar {}
        }
    }
}
