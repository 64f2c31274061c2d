use leptos::prelude::*;

use crate::{
    motion::{BrowserScheduler, Scheduler},
    state::{Action, AppState, Command},
};

/// Handle to the page state. Views read through [`Store::with`] and change
/// it only through [`Store::dispatch`].
#[derive(Debug, Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self {
            state: RwSignal::new(state),
        }
    }

    pub fn with<U>(self, f: impl FnOnce(&AppState) -> U) -> U {
        self.state.with(f)
    }

    pub fn dispatch(self, action: Action) {
        if self.state.try_with_untracked(|state| state.changes(&action)) != Some(true) {
            return;
        }
        log::trace!("dispatch {action:?}");
        let Some(commands) = self.state.try_update(|state| state.apply(action)) else {
            return;
        };
        for command in commands {
            match command {
                Command::After(delay, next) => {
                    BrowserScheduler.schedule(delay, Box::new(move || self.dispatch(next)));
                }
                Command::DownloadResume => {
                    #[cfg(feature = "hydrate")]
                    if let Err(err) = super::dom::download_resume() {
                        log::error!("resume download failed: {err:?}");
                    }
                }
            }
        }
    }
}

pub fn use_store() -> Store {
    expect_context::<Store>()
}
