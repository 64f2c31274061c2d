use leptos::prelude::*;

use crate::{notify::NoticePhase, state::Action};

use super::store::use_store;

#[component]
pub fn Toast() -> impl IntoView {
    let store = use_store();
    let notice = move || store.with(|s| s.notices.current().cloned());

    move || {
        notice().map(|notice| {
            let id = notice.id;
            let phase = match notice.phase {
                NoticePhase::Entering => "",
                NoticePhase::Shown => " show",
                NoticePhase::Leaving => " hide",
            };
            view! {
                <div class=format!("notification {}{phase}", notice.kind.modifier()) role="status">
                    <div class="notification-content">
                        <i class=notice.kind.icon_class()></i>
                        <span>{notice.message}</span>
                    </div>
                    <button
                        class="notification-close"
                        aria-label="Dismiss notification"
                        on:click=move |_| store.dispatch(Action::DismissNotice(id))
                    >
                        <i class="fas fa-times"></i>
                    </button>
                </div>
            }
        })
    }
}
