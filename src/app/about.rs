use leptos::prelude::*;

use crate::{
    content::profile,
    motion::{RevealStyle, StaggerProfile, TargetKind},
};

use super::reveal::use_motion;

#[component]
pub fn About() -> impl IntoView {
    let motion = use_motion();
    let profile = profile();
    let text = motion.track(TargetKind::Plain);
    let details = motion.track(TargetKind::Plain);
    let contact = &profile.contact;

    view! {
        <section id="about" class="section about">
            <div class="container">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-content">
                    <div node_ref=text.node class=text.class("about-text", RevealStyle::FadeIn)>
                        {profile
                            .about
                            .iter()
                            .map(|p| view! { <p>{p.clone()}</p> })
                            .collect_view()}
                    </div>
                    <div node_ref=details.node class=details.class("about-details", RevealStyle::SlideLeft)>
                        <div class="detail-item">
                            <i class="fas fa-map-marker-alt"></i>
                            <span>{contact.location.clone()}</span>
                        </div>
                        <div class="detail-item">
                            <i class="fas fa-envelope"></i>
                            <a href=contact.mailto()>{contact.email.clone()}</a>
                        </div>
                        <div class="detail-item">
                            <i class="fas fa-phone"></i>
                            <a href=contact.tel()>{contact.phone.clone()}</a>
                        </div>
                    </div>
                </div>
                <div class="stats-grid">
                    {profile
                        .stats
                        .iter()
                        .enumerate()
                        .map(|(i, stat)| {
                            let card = motion.track(TargetKind::Stat { target: stat.value });
                            let stagger = StaggerProfile::STAT_CARDS;
                            view! {
                                <div
                                    node_ref=card.node
                                    class=card.class("stat-card", stagger.style_for(i))
                                    style=stagger.transition_delay(i)
                                >
                                    <div class="stat-number">
                                        {move || card.value.get()}
                                        {stat.suffix.clone()}
                                    </div>
                                    <div class="stat-label">{stat.label.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
