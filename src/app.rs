use cvforge_core::{FormController, GenerateClient, View};
use dioxus::prelude::*;

use crate::context::{get_client_config, new_form_controller};
use crate::pages::{FormPage, ResultPage};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the active theme's CSS variables, the form
/// context, and switches between the form and result screens.
#[component]
pub fn App() -> Element {
    let form: Signal<FormController> = use_signal(new_form_controller);
    use_context_provider(|| form);
    use_context_provider(|| GenerateClient::new(get_client_config()));

    let theme_css = form.read().theme().to_css();
    let view = form.read().view();

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {theme_css} }
        main { class: "app-shell",
            match view {
                View::Form => rsx! { FormPage {} },
                View::Result => rsx! { ResultPage {} },
            }
        }
    }
}
