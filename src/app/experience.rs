use leptos::prelude::*;

use crate::{
    content::{profile, Experience as Job},
    motion::{StaggerProfile, TargetKind},
};

use super::reveal::use_motion;

#[component]
pub fn Experience() -> impl IntoView {
    let jobs = &profile().experience;

    view! {
        <section id="experience" class="section experience">
            <div class="container">
                <h2 class="section-title">"Professional Experience"</h2>
                <div class="timeline">
                    {jobs
                        .iter()
                        .enumerate()
                        .map(|(index, job)| view! { <TimelineItem index job=job.clone() /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(index: usize, job: Job) -> impl IntoView {
    let entry = use_motion().track(TargetKind::Plain);
    let stagger = StaggerProfile::TIMELINE;

    view! {
        <div
            node_ref=entry.node
            class=entry.class("timeline-item", stagger.style_for(index))
            style=stagger.transition_delay(index)
        >
            <div class="timeline-marker"></div>
            <div class="timeline-content">
                <h3>{job.role}</h3>
                <h4>{job.company}</h4>
                <div class="timeline-meta">
                    <span>
                        <i class="fas fa-calendar"></i>
                        " "
                        {job.period}
                    </span>
                    <span>
                        <i class="fas fa-map-marker-alt"></i>
                        " "
                        {job.location}
                    </span>
                </div>
                <ul>{job.highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}</ul>
            </div>
        </div>
    }
}
