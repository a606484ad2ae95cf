//! Theme Switcher Component
//!
//! Toggle button showing the active palette, with a dismissible option list.

use cvforge_core::themes;
use dioxus::prelude::*;

use crate::context::use_form;

/// Theme selector.
///
/// Clicking anywhere outside the open list closes it; picking an option
/// applies and persists that theme.
#[component]
pub fn ThemeSwitcher() -> Element {
    let mut form = use_form();

    let active = form.read().theme();
    let active_name = active.name;
    let active_swatch = active.primary();
    let is_open = form.read().theme_menu().is_open();

    rsx! {
        div { class: "theme-switcher",
            // Backdrop to close the list when clicking outside
            if is_open {
                div {
                    class: "theme-switcher-backdrop",
                    onclick: move |_| form.write().close_theme_menu(),
                }
            }

            button {
                r#type: "button",
                class: "btn btn-ghost",
                onclick: move |e| {
                    e.stop_propagation();
                    form.write().toggle_theme_menu();
                },
                span {
                    class: "theme-swatch",
                    style: "background-color: {active_swatch};",
                }
                span { "{active_name}" }
                // Chevron
                svg {
                    class: if is_open { "theme-chevron open" } else { "theme-chevron" },
                    xmlns: "http://www.w3.org/2000/svg",
                    width: "20",
                    height: "20",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "1.5",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        d: "M19.5 8.25l-7.5 7.5-7.5-7.5",
                    }
                }
            }

            if is_open {
                ul { class: "theme-options",
                    for theme in themes() {
                        {
                            let name = theme.name;
                            let swatch = theme.primary();
                            let class = if name == active_name { "theme-option active" } else { "theme-option" };

                            rsx! {
                                li { key: "{name}",
                                    button {
                                        r#type: "button",
                                        class: "{class}",
                                        onclick: move |_| {
                                            form.write().apply_theme(theme);
                                            tracing::info!(theme = name, "Theme selected");
                                        },
                                        span {
                                            class: "theme-swatch",
                                            style: "background-color: {swatch};",
                                        }
                                        span { "{name}" }
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
