use std::collections::BTreeMap;

/// Minimum visible fraction of a target before it counts as seen.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;
/// The viewport's bottom edge is pulled up by this much, so targets fire
/// slightly before they are fully in frame.
pub const BOTTOM_MARGIN: f64 = 50.0;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";
/// Scroll fallback: a plain target is revealed once its top edge is this far
/// above the bottom of the viewport.
pub const REVEAL_OFFSET: f64 = 150.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TargetId(u32);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetKind {
    Plain,
    Stat { target: f64 },
    Progress { percent: f64 },
}

/// Emitted exactly once per target, the first time it becomes visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Activation {
    pub id: TargetId,
    pub kind: TargetKind,
}

/// Bounding box of a target relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

#[derive(Debug, Clone)]
struct Target {
    kind: TargetKind,
    visible: bool,
}

/// Fraction of `rect` inside `[0, viewport_height - BOTTOM_MARGIN)`.
pub fn intersection_ratio(rect: Rect, viewport_height: f64) -> f64 {
    if rect.height <= 0.0 {
        return 0.0;
    }
    let bottom_edge = viewport_height - BOTTOM_MARGIN;
    let visible = (rect.top + rect.height).min(bottom_edge) - rect.top.max(0.0);
    (visible / rect.height).clamp(0.0, 1.0)
}

/// Registry of reveal targets and their one-way `visible` flags.
#[derive(Debug, Clone, Default)]
pub struct ViewportTracker {
    targets: BTreeMap<TargetId, Target>,
    next_id: u32,
}

impl ViewportTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, kind: TargetKind) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.targets.insert(
            id,
            Target {
                kind,
                visible: false,
            },
        );
        id
    }

    pub fn is_visible(&self, id: TargetId) -> bool {
        self.targets.get(&id).is_some_and(|t| t.visible)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// The host reported `id` as intersecting. Returns the activation the
    /// first time only; unknown ids are ignored.
    pub fn notify(&mut self, id: TargetId) -> Option<Activation> {
        let target = self.targets.get_mut(&id)?;
        if target.visible {
            return None;
        }
        target.visible = true;
        log::debug!("reveal target {id:?} activated");
        Some(Activation {
            id,
            kind: target.kind,
        })
    }

    /// Geometric pass over measured targets: anything past the visibility
    /// threshold activates.
    pub fn observe(
        &mut self,
        entries: impl IntoIterator<Item = (TargetId, Rect)>,
        viewport_height: f64,
    ) -> Vec<Activation> {
        entries
            .into_iter()
            .filter(|(_, rect)| intersection_ratio(*rect, viewport_height) >= VISIBILITY_THRESHOLD)
            .filter_map(|(id, _)| self.notify(id))
            .collect()
    }

    /// Scroll fallback for plain targets whose top edge has risen above
    /// `viewport_height - REVEAL_OFFSET`. Counters and progress bars are
    /// left to [`ViewportTracker::notify`] so their animation still starts.
    pub fn reveal_above(
        &mut self,
        entries: impl IntoIterator<Item = (TargetId, Rect)>,
        viewport_height: f64,
    ) -> Vec<Activation> {
        let eligible: Vec<TargetId> = entries
            .into_iter()
            .filter(|(id, rect)| {
                rect.top < viewport_height - REVEAL_OFFSET
                    && self
                        .targets
                        .get(id)
                        .is_some_and(|t| t.kind == TargetKind::Plain)
            })
            .map(|(id, _)| id)
            .collect();
        eligible
            .into_iter()
            .filter_map(|id| self.notify(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    #[test]
    fn test_ratio_respects_bottom_margin() {
        // Entirely inside the margin band at the bottom.
        let rect = Rect {
            top: 760.0,
            height: 40.0,
        };
        assert_eq!(intersection_ratio(rect, VIEWPORT), 0.0);

        let rect = Rect {
            top: 700.0,
            height: 100.0,
        };
        assert!((intersection_ratio(rect, VIEWPORT) - 0.5).abs() < 1e-9);

        let rect = Rect {
            top: -50.0,
            height: 100.0,
        };
        assert!((intersection_ratio(rect, VIEWPORT) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_height_never_intersects() {
        let rect = Rect {
            top: 10.0,
            height: 0.0,
        };
        assert_eq!(intersection_ratio(rect, VIEWPORT), 0.0);
    }

    #[test]
    fn test_notify_fires_once() {
        let mut tracker = ViewportTracker::new();
        let id = tracker.register(TargetKind::Plain);

        assert!(!tracker.is_visible(id));
        let first = tracker.notify(id);
        assert_eq!(
            first,
            Some(Activation {
                id,
                kind: TargetKind::Plain
            })
        );
        assert!(tracker.is_visible(id));
        assert_eq!(tracker.notify(id), None);
        assert!(tracker.is_visible(id));
    }

    #[test]
    fn test_visible_targets_never_revert() {
        let mut tracker = ViewportTracker::new();
        let id = tracker.register(TargetKind::Stat { target: 2000.0 });

        let on_screen = Rect {
            top: 100.0,
            height: 200.0,
        };
        let off_screen = Rect {
            top: 5000.0,
            height: 200.0,
        };

        let activations = tracker.observe([(id, on_screen)], VIEWPORT);
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].kind, TargetKind::Stat { target: 2000.0 });

        for rect in [off_screen, on_screen, off_screen] {
            assert!(tracker.observe([(id, rect)], VIEWPORT).is_empty());
            assert!(tracker.is_visible(id));
        }
    }

    #[test]
    fn test_observe_threshold() {
        let mut tracker = ViewportTracker::new();
        let barely = tracker.register(TargetKind::Plain);
        let enough = tracker.register(TargetKind::Plain);

        // 5% and 20% of a 200px box above the effective bottom edge (750).
        let activations = tracker.observe(
            [
                (
                    barely,
                    Rect {
                        top: 740.0,
                        height: 200.0,
                    },
                ),
                (
                    enough,
                    Rect {
                        top: 710.0,
                        height: 200.0,
                    },
                ),
            ],
            VIEWPORT,
        );
        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].id, enough);
        assert!(!tracker.is_visible(barely));
    }

    #[test]
    fn test_unknown_target_is_ignored() {
        let mut other = ViewportTracker::new();
        other.register(TargetKind::Plain);
        let stray = other.register(TargetKind::Plain);

        let mut tracker = ViewportTracker::new();
        tracker.register(TargetKind::Plain);
        assert_eq!(tracker.notify(stray), None);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_reveal_above_skips_animated_targets() {
        let mut tracker = ViewportTracker::new();
        let block = tracker.register(TargetKind::Plain);
        let bar = tracker.register(TargetKind::Progress { percent: 80.0 });
        let low = tracker.register(TargetKind::Plain);

        let high_rect = Rect {
            top: 600.0,
            height: 10.0,
        };
        let low_rect = Rect {
            top: 700.0,
            height: 10.0,
        };
        let activations =
            tracker.reveal_above([(block, high_rect), (bar, high_rect), (low, low_rect)], VIEWPORT);

        assert_eq!(activations.len(), 1);
        assert_eq!(activations[0].id, block);
        assert!(!tracker.is_visible(bar));
        assert!(!tracker.is_visible(low));

        // The bar still gets its one activation from the observer.
        assert_eq!(
            tracker.notify(bar).map(|a| a.kind),
            Some(TargetKind::Progress { percent: 80.0 })
        );
    }
}
