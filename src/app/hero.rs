use leptos::prelude::*;

use crate::{content::profile, motion::Particle};

use super::{header::go_to, resume::ResumeButton, store::use_store};

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_store();
    let profile = profile();
    let typed = RwSignal::new(String::new());
    let particles = RwSignal::new(Vec::<Particle>::new());

    // Both loops start on the client only; the server renders an empty field.
    #[cfg(feature = "hydrate")]
    {
        use rand::{rngs::SmallRng, SeedableRng};

        use crate::motion::{drive, generate_with_rng, BrowserScheduler, TypingEffect, PARTICLE_COUNT};

        let roles = profile.roles.clone();
        Effect::new(move |_| {
            drive(BrowserScheduler, TypingEffect::new(roles.clone()), move |text| {
                typed.try_set(text);
            });
        });
        Effect::new(move |_| {
            let (width, height) = super::dom::viewport_size();
            let mut rng = SmallRng::seed_from_u64(js_sys::Date::now() as u64);
            particles.set(generate_with_rng(PARTICLE_COUNT, width, height, &mut rng));
        });
    }

    let contact = &profile.contact;

    view! {
        <section id="home" class="hero">
            <div
                class="hero-background"
                style=move || format!("transform: translateY({}px)", store.with(|s| s.parallax))
            >
                <div id="particles" class="particles">
                    {move || {
                        particles
                            .get()
                            .into_iter()
                            .map(|p| view! { <div class="particle" style=p.style()></div> })
                            .collect_view()
                    }}
                </div>
            </div>
            <div class="container hero-content">
                <h1 class="hero-title">
                    "Hi, I'm " <span class="highlight">{profile.name.clone()}</span>
                </h1>
                <h2 class="hero-subtitle">
                    <span id="typing-text" class="typing-text">
                        {move || typed.get()}
                    </span>
                    <span class="cursor" aria-hidden="true">"|"</span>
                </h2>
                <p class="hero-description">{profile.tagline.clone()}</p>
                <div class="hero-buttons">
                    <a href="#projects" class="btn btn--primary" on:click=go_to(store, "projects")>
                        "View My Work"
                    </a>
                    <ResumeButton />
                </div>
                <div class="hero-social">
                    <a href=contact.linkedin.clone() target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                        <i class="fab fa-linkedin"></i>
                    </a>
                    <a href=contact.github.clone() target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                        <i class="fab fa-github"></i>
                    </a>
                    <a href=contact.leetcode.clone() target="_blank" rel="noopener noreferrer" aria-label="LeetCode">
                        <i class="fas fa-code"></i>
                    </a>
                    <a href=contact.mailto() aria-label="Email">
                        <i class="fas fa-envelope"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
