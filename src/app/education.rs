use leptos::prelude::*;

use crate::{
    content::profile,
    motion::{RevealStyle, TargetKind},
};

use super::reveal::use_motion;

fn tag_list(items: &[String]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view()
}

#[component]
pub fn Education() -> impl IntoView {
    let motion = use_motion();
    let profile = profile();

    view! {
        <section id="education" class="section education">
            <div class="container">
                <h2 class="section-title">"Education & Certifications"</h2>
                <div class="education-grid">
                    {profile
                        .education
                        .iter()
                        .map(|edu| {
                            let card = motion.track(TargetKind::Plain);
                            view! {
                                <div node_ref=card.node class=card.class("education-card", RevealStyle::FadeIn)>
                                    <h3>{edu.degree.clone()}</h3>
                                    <h4>{format!("{}, {}", edu.institution, edu.location)}</h4>
                                    <p>{format!("{}: {}", edu.period_label, edu.period)}</p>
                                    <p class="education-score">
                                        {format!("{}: {}", edu.score_label, edu.score)}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="achievements-grid">
                    {[
                        ("fas fa-certificate", "Certifications", &profile.certifications),
                        ("fas fa-trophy", "Achievements", &profile.achievements),
                        ("fas fa-lightbulb", "Areas of Expertise", &profile.expertise),
                        ("fas fa-language", "Languages", &profile.languages),
                        ("fas fa-heart", "Interests", &profile.interests),
                    ]
                        .into_iter()
                        .filter(|(_, _, items)| !items.is_empty())
                        .map(|(icon, title, items)| {
                            let block = motion.track(TargetKind::Plain);
                            view! {
                                <div node_ref=block.node class=block.class("achievement-card", RevealStyle::FadeUp)>
                                    <h3>
                                        <i class=icon></i>
                                        " "
                                        {title}
                                    </h3>
                                    <ul>{tag_list(items)}</ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
