use leptos::{html, prelude::*};

use crate::motion::{
    drive_after, format_stat, Activation, BrowserScheduler, ProgressFill, Rect, RevealScheduler,
    RevealStyle, StaggerProfile, StatCounter, TargetId, TargetKind, ViewportTracker,
};
#[cfg(feature = "hydrate")]
use crate::motion::{ROOT_MARGIN, VISIBILITY_THRESHOLD};

/// Reactive handles for one tracked block.
#[derive(Clone, Copy)]
pub struct Reveal {
    pub node: NodeRef<html::Div>,
    pub visible: RwSignal<bool>,
    /// Counter text or progress width, depending on the target kind.
    pub value: RwSignal<String>,
    shown: RwSignal<usize>,
}

impl Reveal {
    /// `base` plus the reveal style, gaining `visible` once activated.
    pub fn class(self, base: &'static str, style: RevealStyle) -> impl Fn() -> String + Send + Sync {
        move || {
            let visible = if self.visible.get() { " visible" } else { "" };
            format!("{base} {}{visible}", style.class())
        }
    }

    pub fn item_shown(self, index: usize) -> bool {
        self.shown.get() > index
    }
}

struct Binding {
    id: TargetId,
    reveal: Reveal,
    items: usize,
    profile: StaggerProfile,
}

#[derive(Default)]
struct RevealHub {
    tracker: ViewportTracker,
    stagger: RevealScheduler,
    bindings: Vec<Binding>,
}

/// Page-wide registry connecting tracked blocks to the reveal engine.
#[derive(Clone, Copy)]
pub struct Motion {
    hub: StoredValue<RevealHub>,
}

impl Motion {
    pub fn new() -> Self {
        Self {
            hub: StoredValue::new(RevealHub::default()),
        }
    }

    pub fn track(self, kind: TargetKind) -> Reveal {
        self.track_group(kind, 0, StaggerProfile::SKILL_ITEMS)
    }

    /// Tracks a container whose `items` children appear one timer apart
    /// once it is activated.
    pub fn track_group(self, kind: TargetKind, items: usize, profile: StaggerProfile) -> Reveal {
        let initial = match kind {
            TargetKind::Plain => String::new(),
            TargetKind::Stat { target } => format_stat(0.0, target),
            TargetKind::Progress { .. } => "0%".to_string(),
        };
        let reveal = Reveal {
            node: NodeRef::new(),
            visible: RwSignal::new(false),
            value: RwSignal::new(initial),
            shown: RwSignal::new(0),
        };
        let Some(id) = self.hub.try_update_value(|hub| {
            let id = hub.tracker.register(kind);
            hub.bindings.push(Binding {
                id,
                reveal,
                items,
                profile,
            });
            id
        }) else {
            return reveal;
        };

        #[cfg(feature = "hydrate")]
        {
            use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

            let _ = use_intersection_observer_with_options(
                reveal.node,
                move |entries, _| {
                    if entries.iter().any(|entry| entry.is_intersecting()) {
                        self.notify(id);
                    }
                },
                UseIntersectionObserverOptions::default()
                    .thresholds(vec![VISIBILITY_THRESHOLD])
                    .root_margin(ROOT_MARGIN.to_string()),
            );
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;

        reveal
    }

    pub fn notify(self, id: TargetId) {
        let activation = self
            .hub
            .try_update_value(|hub| hub.tracker.notify(id))
            .flatten();
        if let Some(activation) = activation {
            self.activate(activation);
        }
    }

    /// Scroll fallback: plain blocks whose top has risen far enough into the
    /// viewport are revealed even if no intersection was reported.
    pub fn sweep(self, viewport_height: f64) {
        let entries = self.measure();
        let activations = self
            .hub
            .try_update_value(|hub| hub.tracker.reveal_above(entries, viewport_height))
            .unwrap_or_default();
        activations.into_iter().for_each(|a| self.activate(a));
    }

    /// Geometric visibility pass followed by [`Motion::sweep`].
    pub fn check(self, viewport_height: f64) {
        let entries = self.measure();
        let activations = self
            .hub
            .try_update_value(|hub| hub.tracker.observe(entries, viewport_height))
            .unwrap_or_default();
        activations.into_iter().for_each(|a| self.activate(a));
        self.sweep(viewport_height);
    }

    fn measure(self) -> Vec<(TargetId, Rect)> {
        self.hub
            .try_with_value(|hub| {
                hub.bindings
                    .iter()
                    .filter_map(|b| {
                        let el = b.reveal.node.get_untracked()?;
                        let rect = el.get_bounding_client_rect();
                        Some((
                            b.id,
                            Rect {
                                top: rect.top(),
                                height: rect.height(),
                            },
                        ))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn activate(self, activation: Activation) {
        let scheduler = BrowserScheduler;
        let reveal = self
            .hub
            .try_update_value(|hub| {
                let (reveal, items, profile) = hub
                    .bindings
                    .iter()
                    .find(|b| b.id == activation.id)
                    .map(|b| (b.reveal, b.items, b.profile))?;
                if items > 0 {
                    let shown = reveal.shown;
                    hub.stagger
                        .reveal(activation.id, items, profile, &scheduler, move |i| {
                            shown.try_update(|n| *n = (*n).max(i + 1));
                        });
                }
                Some(reveal)
            })
            .flatten();
        let Some(reveal) = reveal else {
            return;
        };

        reveal.visible.set(true);
        match activation.kind {
            TargetKind::Plain => {}
            TargetKind::Stat { target } => {
                drive_after(
                    scheduler,
                    StatCounter::interval(),
                    StatCounter::new(target),
                    move |frame| {
                        reveal.value.try_set(frame);
                    },
                );
            }
            TargetKind::Progress { percent } => {
                ProgressFill::new(percent).start(&scheduler, move |width| {
                    reveal.value.try_set(width);
                });
            }
        }
    }
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_motion() -> Motion {
    expect_context::<Motion>()
}
