mod about;
mod contact;
#[cfg(feature = "hydrate")]
mod dom;
mod education;
mod experience;
mod header;
mod hero;
mod homepage;
mod projects;
mod resume;
mod reveal;
mod skills;
mod store;
mod toast;

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use reveal::Motion;
use store::Store;
use toast::Toast;

use crate::{
    content::profile,
    state::{Action, AppState, LoaderPhase},
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.4.0/css/all.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let categories = profile()
        .project_categories()
        .map(str::to_string)
        .collect();
    let store = Store::new(AppState::new(categories));
    let motion = Motion::new();
    provide_context(store);
    provide_context(motion);

    #[cfg(feature = "hydrate")]
    client_effects(store, motion);

    let theme = move || store.with(|s| s.theme.as_str());
    let name = profile().name.clone();

    view! {
        <Html attr:data-theme=theme attr:data-color-scheme=theme />
        <Title formatter=move |title| format!("{name} - {title}") />

        <Loader />
        <Router>
            <Header />
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
        <Toast />
    }
}

/// Startup work that only makes sense in the browser: restoring the theme,
/// the throttled scroll tick, the first reveal pass and the loader.
#[cfg(feature = "hydrate")]
fn client_effects(store: Store, motion: Motion) {
    use std::time::Duration;

    use codee::string::FromToStringCodec;
    use leptos_use::{
        storage::use_local_storage, use_throttle_fn_with_options, use_window_scroll,
        ThrottleOptions,
    };

    use crate::{
        motion::{ScrollFrame, SCROLL_THROTTLE_MS},
        theme::{Theme, THEME_STORAGE_KEY},
    };

    /// Delay before the first reveal pass, once layout has settled.
    const INITIAL_REVEAL_CHECK: Duration = Duration::from_millis(100);

    let (stored_theme, set_stored_theme, _) =
        use_local_storage::<String, FromToStringCodec>(THEME_STORAGE_KEY);
    Effect::watch(
        || (),
        move |_, _, _| {
            let stored = stored_theme.get_untracked();
            store.dispatch(Action::SetTheme(Theme::from_stored(Some(&stored))));
        },
        true,
    );
    Effect::watch(
        move || store.with(|s| s.theme),
        move |theme, _, _| set_stored_theme.set(theme.to_string()),
        false,
    );

    let (_, scroll_y) = use_window_scroll();
    let tick = use_throttle_fn_with_options(
        move || {
            let sections = dom::measure_sections(header::NAV_SECTIONS.map(|(id, _)| id));
            let frame = ScrollFrame::measure(scroll_y.get_untracked(), &sections);
            store.dispatch(Action::Scrolled(frame));
            motion.sweep(dom::viewport_height());
        },
        SCROLL_THROTTLE_MS,
        ThrottleOptions::default().leading(true).trailing(false),
    );
    Effect::new(move |_| {
        scroll_y.track();
        tick();
    });

    Effect::new(move |_| {
        set_timeout(
            move || motion.check(dom::viewport_height()),
            INITIAL_REVEAL_CHECK,
        );
        store.dispatch(Action::Hydrated);
    });
}

#[component]
fn Loader() -> impl IntoView {
    let store = store::use_store();
    let phase = move || store.with(|s| s.loader);

    move || {
        let class = match phase() {
            LoaderPhase::Visible => "loading",
            LoaderPhase::Hiding => "loading hide",
            LoaderPhase::Gone => return None,
        };
        Some(view! {
            <div class=class>
                <div class="loader"></div>
            </div>
        })
    }
}

#[component]
fn Footer() -> impl IntoView {
    let name = profile().name.clone();
    view! {
        <footer class="footer">
            <div class="container">
                <p>{format!("© {name}. Built with Rust and Leptos.")}</p>
                <p class="footer-build">{format!("Last built {}", env!("BUILD_TIME"))}</p>
            </div>
        </footer>
    }
}
