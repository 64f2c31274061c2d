use leptos::prelude::*;

use crate::{
    content::{profile, Project},
    filter::filter_options,
    motion::{StaggerProfile, TargetKind},
    state::{Action, ProjectLink},
};

use super::{reveal::use_motion, store::use_store};

fn filter_label(option: &str) -> String {
    let mut chars = option.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let store = use_store();
    let profile = profile();
    let options = filter_options(profile.project_categories());

    view! {
        <section id="projects" class="section projects">
            <div class="container">
                <h2 class="section-title">"Key Projects"</h2>
                <div class="project-filters" role="group" aria-label="Filter projects">
                    {options
                        .into_iter()
                        .map(|option| {
                            let label = filter_label(&option);
                            let is_active = {
                                let option = option.clone();
                                move || store.with(|s| s.filter.selected() == option)
                            };
                            view! {
                                <button
                                    class=move || { if is_active() { "filter-btn active" } else { "filter-btn" } }
                                    on:click=move |_| store.dispatch(Action::SelectFilter(option.clone()))
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="projects-grid">
                    {profile
                        .projects
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index project=project.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project) -> impl IntoView {
    let store = use_store();
    let card = use_motion().track(TargetKind::Plain);
    let stagger = StaggerProfile::PROJECT_CARDS;
    let delay = stagger.transition_delay(index);
    let style = move || {
        let phase = store.with(|s| s.card_phase(index));
        format!("{delay}; {}", phase.style())
    };
    let follow = move |link: ProjectLink| {
        move |ev: leptos::ev::MouseEvent| {
            ev.prevent_default();
            store.dispatch(Action::FollowProjectLink(link));
        }
    };

    view! {
        <div
            node_ref=card.node
            class=card.class("project-card", stagger.style_for(index))
            style=style
            data-category=project.category
        >
            <div class="project-header">
                <h3>{project.name}</h3>
                <span class="project-date">{project.date}</span>
            </div>
            <p class="project-summary">{project.summary}</p>
            <ul class="project-highlights">
                {project.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
            <div class="project-tech">
                {project
                    .technologies
                    .into_iter()
                    .map(|t| view! { <span class="tech-tag">{t}</span> })
                    .collect_view()}
            </div>
            <div class="project-links">
                <a href="#" class="project-link" on:click=follow(ProjectLink::Demo)>
                    <i class="fas fa-external-link-alt"></i>
                    " Live Demo"
                </a>
                <a href="#" class="project-link" on:click=follow(ProjectLink::Code)>
                    <i class="fab fa-github"></i>
                    " Code"
                </a>
            </div>
        </div>
    }
}
