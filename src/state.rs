//! Application state and its single update path.
//!
//! The view renders from [`AppState`], user input becomes an [`Action`], and
//! [`AppState::apply`] returns the follow-up [`Command`]s (timers, the file
//! download) for the view layer to carry out.

use std::time::Duration;

use crate::{
    contact::{ContactForm, Field, SEND_DELAY, SENT_MESSAGE},
    filter::{CardPhase, ProjectFilter, COLLAPSE_DELAY},
    motion::ScrollFrame,
    notify::{NoticeId, NoticeKind, NotificationCenter, AUTO_DISMISS, SLIDE_IN_DELAY, SLIDE_OUT},
    resume::{DOWNLOADED_MESSAGE, PREPARE_DELAY},
    theme::Theme,
};

/// The loading overlay fades for this long before it is removed.
pub const LOADER_FADE: Duration = Duration::from_millis(500);

pub const DEMO_PENDING_MESSAGE: &str = "Live demo will be available soon!";
pub const CODE_PENDING_MESSAGE: &str = "Source code repository will be shared upon request!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoaderPhase {
    #[default]
    Visible,
    Hiding,
    Gone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectLink {
    Demo,
    Code,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ToggleTheme,
    SetTheme(Theme),
    ToggleMenu,
    CloseMenu,
    Scrolled(ScrollFrame),
    SelectFilter(String),
    /// Collapses card `index` if it is still fading from filter selection
    /// `epoch`.
    CollapseCard { index: usize, epoch: u64 },
    EditContact(Field, String),
    SubmitContact,
    ContactSent,
    RequestResume,
    ResumeReady,
    FollowProjectLink(ProjectLink),
    Notify(NoticeKind, String),
    NoticeEntered(NoticeId),
    DismissNotice(NoticeId),
    RemoveNotice(NoticeId),
    Hydrated,
    LoaderGone,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Dispatch the action once the delay has passed.
    After(Duration, Action),
    DownloadResume,
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub theme: Theme,
    pub menu_open: bool,
    pub active_section: Option<String>,
    pub scrolled: bool,
    pub parallax: f64,
    pub filter: ProjectFilter,
    /// Bumped on every filter selection.
    pub filter_epoch: u64,
    pub card_categories: Vec<String>,
    pub cards: Vec<CardPhase>,
    pub contact: ContactForm,
    pub sending: bool,
    pub preparing_resume: bool,
    pub notices: NotificationCenter,
    pub loader: LoaderPhase,
}

impl AppState {
    pub fn new(card_categories: Vec<String>) -> Self {
        Self {
            cards: vec![CardPhase::Shown; card_categories.len()],
            card_categories,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::ToggleTheme => {
                self.theme = self.theme.toggled();
                vec![]
            }
            Action::SetTheme(theme) => {
                self.theme = theme;
                vec![]
            }
            Action::ToggleMenu => {
                self.menu_open = !self.menu_open;
                vec![]
            }
            Action::CloseMenu => {
                self.menu_open = false;
                vec![]
            }
            Action::Scrolled(frame) => {
                if !self.frame_changes(&frame) {
                    return vec![];
                }
                if let Some(active) = frame.active {
                    self.active_section = Some(active);
                }
                self.scrolled = frame.scrolled;
                self.parallax = frame.parallax;
                vec![]
            }
            Action::SelectFilter(category) => {
                self.filter.select(category);
                self.filter_epoch += 1;
                let epoch = self.filter_epoch;
                let mut commands = vec![];
                for (index, (phase, category)) in
                    self.cards.iter_mut().zip(&self.card_categories).enumerate()
                {
                    let next = phase.apply(self.filter.matches(category), epoch);
                    if next == CardPhase::Fading(epoch) {
                        commands.push(Command::After(
                            COLLAPSE_DELAY,
                            Action::CollapseCard { index, epoch },
                        ));
                    }
                    *phase = next;
                }
                commands
            }
            Action::CollapseCard { index, epoch } => {
                if let Some(phase) = self.cards.get_mut(index) {
                    *phase = phase.collapse(epoch);
                }
                vec![]
            }
            Action::EditContact(field, value) => {
                self.contact.set(field, value);
                vec![]
            }
            Action::SubmitContact => {
                if self.sending {
                    return vec![];
                }
                match self.contact.validate() {
                    Ok(submission) => {
                        log::info!("contact form accepted from {}", submission.email);
                        self.sending = true;
                        vec![Command::After(SEND_DELAY, Action::ContactSent)]
                    }
                    Err(err) => self.notify(NoticeKind::Error, err.to_string()),
                }
            }
            Action::ContactSent => {
                self.sending = false;
                self.contact.clear();
                self.notify(NoticeKind::Success, SENT_MESSAGE)
            }
            Action::RequestResume => {
                if self.preparing_resume {
                    return vec![];
                }
                self.preparing_resume = true;
                vec![Command::After(PREPARE_DELAY, Action::ResumeReady)]
            }
            Action::ResumeReady => {
                self.preparing_resume = false;
                let mut commands = vec![Command::DownloadResume];
                commands.extend(self.notify(NoticeKind::Success, DOWNLOADED_MESSAGE));
                commands
            }
            Action::FollowProjectLink(link) => {
                let message = match link {
                    ProjectLink::Demo => DEMO_PENDING_MESSAGE,
                    ProjectLink::Code => CODE_PENDING_MESSAGE,
                };
                self.notify(NoticeKind::Error, message)
            }
            Action::Notify(kind, message) => self.notify(kind, message),
            Action::NoticeEntered(id) => {
                self.notices.slide_in(id);
                vec![]
            }
            Action::DismissNotice(id) => {
                if self.notices.dismiss(id) {
                    vec![Command::After(SLIDE_OUT, Action::RemoveNotice(id))]
                } else {
                    vec![]
                }
            }
            Action::RemoveNotice(id) => {
                self.notices.remove(id);
                vec![]
            }
            Action::Hydrated => {
                if self.loader != LoaderPhase::Visible {
                    return vec![];
                }
                self.loader = LoaderPhase::Hiding;
                vec![Command::After(LOADER_FADE, Action::LoaderGone)]
            }
            Action::LoaderGone => {
                self.loader = LoaderPhase::Gone;
                vec![]
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: impl Into<String>) -> Vec<Command> {
        let id = self.notices.show(kind, message);
        vec![
            Command::After(SLIDE_IN_DELAY, Action::NoticeEntered(id)),
            Command::After(AUTO_DISMISS, Action::DismissNotice(id)),
        ]
    }

    /// Whether applying `action` would change anything. Scroll ticks arrive
    /// every frame and mostly repeat the last one, so the view layer skips
    /// the signal write when this is false.
    pub fn changes(&self, action: &Action) -> bool {
        match action {
            Action::Scrolled(frame) => self.frame_changes(frame),
            Action::SetTheme(theme) => *theme != self.theme,
            Action::CloseMenu => self.menu_open,
            _ => true,
        }
    }

    fn frame_changes(&self, frame: &ScrollFrame) -> bool {
        let active_moved = frame
            .active
            .as_ref()
            .is_some_and(|a| self.active_section.as_ref() != Some(a));
        active_moved || frame.scrolled != self.scrolled || frame.parallax != self.parallax
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active_section.as_deref() == Some(section)
    }

    pub fn card_phase(&self, index: usize) -> CardPhase {
        self.cards.get(index).copied().unwrap_or_default()
    }
}
