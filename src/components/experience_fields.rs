//! Experience Fields Component
//!
//! Up to three country/years rows, each with its own remove control.

use cvforge_core::MAX_EXPERIENCES;
use dioxus::prelude::*;

use crate::context::use_form;

#[component]
pub fn ExperienceFields() -> Element {
    let mut form = use_form();

    let rows = form.read().experiences().rows().to_vec();
    let show_rows = form.read().experiences().show_container();
    let can_add = form.read().experiences().can_add();

    rsx! {
        section { class: "form-section",
            div { class: "experience-header",
                h2 { class: "section-title", "Work Experience (max {MAX_EXPERIENCES})" }
                if can_add {
                    button {
                        r#type: "button",
                        class: "btn btn-ghost",
                        onclick: move |_| {
                            if let Some(id) = form.write().add_row() {
                                tracing::debug!(%id, "Experience row added");
                            }
                        },
                        "+ Add Experience"
                    }
                }
            }

            if show_rows {
                div { class: "experience-rows",
                    for row in rows {
                        {
                            let id = row.id;
                            let country = row.country;
                            let period = row.period;

                            rsx! {
                                div {
                                    key: "{id}",
                                    class: "experience-row",
                                    input {
                                        r#type: "text",
                                        class: "input-style",
                                        placeholder: "Country",
                                        value: "{country}",
                                        oninput: move |evt| form.write().update_country(id, evt.value()),
                                    }
                                    input {
                                        r#type: "number",
                                        class: "input-style",
                                        placeholder: "Years",
                                        min: "0",
                                        value: "{period}",
                                        oninput: move |evt| form.write().update_period(id, evt.value()),
                                    }
                                    button {
                                        r#type: "button",
                                        class: "experience-remove",
                                        title: "Remove experience",
                                        onclick: move |_| {
                                            form.write().remove_row(id);
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
