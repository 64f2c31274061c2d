use leptos::prelude::*;

use crate::{
    content::{profile, Skill, SkillCategory},
    motion::{StaggerProfile, TargetKind},
};

use super::reveal::{use_motion, Reveal};

#[component]
pub fn Skills() -> impl IntoView {
    let profile = profile();

    view! {
        <section id="skills" class="section skills">
            <div class="container">
                <h2 class="section-title">"Technical Skills"</h2>
                <div class="skills-grid">
                    {profile
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, category)| {
                            view! { <SkillGroup index category=category.clone() /> }
                        })
                        .collect_view()}
                </div>
                <div class="competencies">
                    <h3>"Core Competencies"</h3>
                    <div class="competency-tags">
                        {profile
                            .competencies
                            .iter()
                            .map(|c| view! { <span class="tech-tag">{c.clone()}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// A skill category: fades in with the section, then reveals its skills one
/// timer apart.
#[component]
fn SkillGroup(index: usize, category: SkillCategory) -> impl IntoView {
    let stagger = StaggerProfile::SKILL_CATEGORIES;
    let group = use_motion().track_group(
        TargetKind::Plain,
        category.skills.len(),
        StaggerProfile::SKILL_ITEMS,
    );

    view! {
        <div
            node_ref=group.node
            class=group.class("skill-category", stagger.style_for(index))
            style=stagger.transition_delay(index)
        >
            <h3>
                <i class=category.icon></i>
                " "
                {category.name}
            </h3>
            <div class="skill-items">
                {category
                    .skills
                    .into_iter()
                    .enumerate()
                    .map(|(i, skill)| view! { <SkillItem group index=i skill /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn SkillItem(group: Reveal, index: usize, skill: Skill) -> impl IntoView {
    let bar = use_motion().track(TargetKind::Progress {
        percent: skill.level,
    });
    let item_class = move || {
        let style = StaggerProfile::SKILL_ITEMS.style_for(index).class();
        if group.item_shown(index) {
            format!("skill-item {style} visible")
        } else {
            format!("skill-item {style}")
        }
    };

    view! {
        <div class=item_class>
            <div class="skill-info">
                <span class="skill-name">{skill.name}</span>
                <span class="skill-level">{format!("{}%", skill.level)}</span>
            </div>
            <div node_ref=bar.node class="skill-bar">
                <div class="progress-bar" style=move || format!("width: {}", bar.value.get())></div>
            </div>
        </div>
    }
}
