use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::About, contact::Contact, education::Education, experience::Experience, hero::Hero,
    projects::Projects, skills::Skills,
};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Skills />
        <Education />
        <Contact />
    }
}
