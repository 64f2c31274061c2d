use leptos::prelude::*;

use crate::state::Action;

use super::store::use_store;

/// Mock download: shows a short "Preparing..." state, then hands the
/// generated text resume to the browser.
#[component]
pub fn ResumeButton() -> impl IntoView {
    let store = use_store();
    let preparing = move || store.with(|s| s.preparing_resume);

    view! {
        <button
            id="download-resume"
            class="btn btn--outline"
            disabled=preparing
            on:click=move |_| store.dispatch(Action::RequestResume)
        >
            {move || {
                if preparing() {
                    view! {
                        <i class="fas fa-spinner fa-spin"></i>
                        " Preparing..."
                    }
                        .into_any()
                } else {
                    view! {
                        <i class="fas fa-download"></i>
                        " Download Resume"
                    }
                        .into_any()
                }
            }}
        </button>
    }
}
