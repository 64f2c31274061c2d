use leptos::prelude::*;

use crate::{
    contact::Field,
    content::profile,
    motion::{RevealStyle, StaggerProfile, TargetKind},
    state::Action,
};

use super::{reveal::use_motion, store::use_store};

#[component]
pub fn Contact() -> impl IntoView {
    let motion = use_motion();
    let contact = &profile().contact;
    let cards = [
        ("fas fa-envelope", "Email", contact.email.clone(), contact.mailto()),
        ("fas fa-phone", "Phone", contact.phone.clone(), contact.tel()),
        ("fab fa-linkedin", "LinkedIn", "Connect with me".to_string(), contact.linkedin.clone()),
        ("fab fa-github", "GitHub", "View my code".to_string(), contact.github.clone()),
    ];

    view! {
        <section id="contact" class="section contact">
            <div class="container">
                <h2 class="section-title">"Get In Touch"</h2>
                <div class="contact-content">
                    <div class="contact-info">
                        {cards
                            .into_iter()
                            .enumerate()
                            .map(|(index, (icon, title, text, href))| {
                                let card = motion.track(TargetKind::Plain);
                                let stagger = StaggerProfile::CONTACT_CARDS;
                                view! {
                                    <div
                                        node_ref=card.node
                                        class=card.class("contact-card", stagger.style_for(index))
                                        style=stagger.transition_delay(index)
                                    >
                                        <i class=icon></i>
                                        <h3>{title}</h3>
                                        <a href=href target="_blank" rel="noopener noreferrer">
                                            {text}
                                        </a>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactForm() -> impl IntoView {
    let store = use_store();
    let wrapper = use_motion().track(TargetKind::Plain);
    let sending = move || store.with(|s| s.sending);

    let input = move |field: Field, kind: &'static str, label: &'static str| {
        let id = format!("contact-{}", label.to_lowercase());
        view! {
            <div class="form-group">
                <label for=id.clone()>{label}</label>
                <input
                    id=id
                    type=kind
                    prop:value=move || store.with(|s| s.contact.field(field).to_string())
                    on:input=move |ev| {
                        store.dispatch(Action::EditContact(field, event_target_value(&ev)))
                    }
                />
            </div>
        }
    };

    view! {
        <div node_ref=wrapper.node class=wrapper.class("contact-form-wrapper", RevealStyle::SlideRight)>
            <form
                id="contact-form"
                class="contact-form"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    store.dispatch(Action::SubmitContact);
                }
            >
                {input(Field::Name, "text", "Name")}
                {input(Field::Email, "email", "Email")}
                {input(Field::Subject, "text", "Subject")}
                <div class="form-group">
                    <label for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        prop:value=move || store.with(|s| s.contact.message.clone())
                        on:input=move |ev| {
                            store.dispatch(Action::EditContact(Field::Message, event_target_value(&ev)))
                        }
                    ></textarea>
                </div>
                <button type="submit" class="btn btn--primary btn--full-width" disabled=sending>
                    {move || {
                        if sending() {
                            view! {
                                <i class="fas fa-spinner fa-spin"></i>
                                " Sending..."
                            }
                                .into_any()
                        } else {
                            view! {
                                <i class="fas fa-paper-plane"></i>
                                " Send Message"
                            }
                                .into_any()
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
