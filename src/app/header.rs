use leptos::{ev::MouseEvent, prelude::*};

use crate::{content::profile, state::Action};

use super::store::{use_store, Store};

/// In-page sections in document order, with their nav labels.
pub const NAV_SECTIONS: [(&str, &str); 7] = [
    ("home", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("education", "Education"),
    ("contact", "Contact"),
];

/// Smooth-scrolls to `section` instead of jumping, and closes the mobile menu.
pub fn go_to(store: Store, section: &'static str) -> impl Fn(MouseEvent) + Copy {
    move |ev: MouseEvent| {
        ev.prevent_default();
        store.dispatch(Action::CloseMenu);
        #[cfg(feature = "hydrate")]
        super::dom::scroll_to_section(section);
        #[cfg(not(feature = "hydrate"))]
        let _ = section;
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_store();
    let nav_class = move || {
        if store.with(|s| s.scrolled) {
            "navbar scrolled"
        } else {
            "navbar"
        }
    };
    let menu_open = move || store.with(|s| s.menu_open);

    view! {
        <nav id="navbar" class=nav_class>
            <div class="nav-container">
                <a href="#home" class="nav-logo" on:click=go_to(store, "home")>
                    {initials(&profile().name)}
                </a>
                <ul id="nav-menu" class=move || {
                    if menu_open() { "nav-menu active" } else { "nav-menu" }
                }>
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|(id, label)| {
                            view! {
                                <li>
                                    <a
                                        href=format!("#{id}")
                                        class=move || {
                                            if store.with(|s| s.is_active(id)) {
                                                "nav-link active"
                                            } else {
                                                "nav-link"
                                            }
                                        }
                                        on:click=go_to(store, id)
                                    >
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <div class="nav-actions">
                    <button
                        id="theme-toggle"
                        class="theme-toggle"
                        aria-label=move || store.with(|s| s.theme.toggle_label())
                        on:click=move |_| store.dispatch(Action::ToggleTheme)
                    >
                        <i class=move || store.with(|s| s.theme.icon_class())></i>
                    </button>
                    <button
                        id="mobile-menu-toggle"
                        class=move || {
                            if menu_open() { "mobile-menu-toggle active" } else { "mobile-menu-toggle" }
                        }
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| store.dispatch(Action::ToggleMenu)
                    >
                        <span class="bar"></span>
                        <span class="bar"></span>
                        <span class="bar"></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}
