use std::{collections::HashSet, time::Duration};

use super::{schedule::Scheduler, viewport::TargetId};

/// Starting pose of a block before it is revealed. Maps onto the CSS classes
/// in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealStyle {
    FadeIn,
    FadeUp,
    SlideLeft,
    SlideRight,
    ScaleIn,
}

impl RevealStyle {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeIn => "fade-in",
            Self::FadeUp => "fade-up",
            Self::SlideLeft => "slide-in-left",
            Self::SlideRight => "slide-in-right",
            Self::ScaleIn => "scale-in",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionRule {
    Fixed(RevealStyle),
    /// Even indices use the first style, odd indices the second.
    Alternate(RevealStyle, RevealStyle),
}

/// Per-group stagger: item `i` starts `i * step` after the group trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggerProfile {
    pub step: Duration,
    pub rule: DirectionRule,
}

impl StaggerProfile {
    pub const SKILL_ITEMS: Self = Self::fixed(100, RevealStyle::FadeUp);
    pub const STAT_CARDS: Self = Self::fixed(100, RevealStyle::ScaleIn);
    pub const TIMELINE: Self = Self {
        step: Duration::from_millis(200),
        rule: DirectionRule::Alternate(RevealStyle::SlideLeft, RevealStyle::SlideRight),
    };
    pub const PROJECT_CARDS: Self = Self::fixed(100, RevealStyle::FadeIn);
    pub const SKILL_CATEGORIES: Self = Self::fixed(200, RevealStyle::FadeIn);
    pub const CONTACT_CARDS: Self = Self::fixed(100, RevealStyle::ScaleIn);

    const fn fixed(step_ms: u64, style: RevealStyle) -> Self {
        Self {
            step: Duration::from_millis(step_ms),
            rule: DirectionRule::Fixed(style),
        }
    }

    pub fn delay_for(&self, index: usize) -> Duration {
        self.step * index as u32
    }

    pub fn style_for(&self, index: usize) -> RevealStyle {
        match self.rule {
            DirectionRule::Fixed(style) => style,
            DirectionRule::Alternate(even, _) if index % 2 == 0 => even,
            DirectionRule::Alternate(_, odd) => odd,
        }
    }

    /// Inline `transition-delay` for groups revealed purely through CSS.
    pub fn transition_delay(&self, index: usize) -> String {
        format!("transition-delay: {}ms", self.delay_for(index).as_millis())
    }
}

/// Reveals the children of a container one timer per child, once per
/// container.
#[derive(Debug, Clone, Default)]
pub struct RevealScheduler {
    revealed: HashSet<TargetId>,
}

impl RevealScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self, container: TargetId) -> bool {
        self.revealed.contains(&container)
    }

    /// Schedules `show(i)` for every child index. Returns `false` without
    /// scheduling anything if the container was already revealed.
    pub fn reveal<S, F>(
        &mut self,
        container: TargetId,
        count: usize,
        profile: StaggerProfile,
        scheduler: &S,
        show: F,
    ) -> bool
    where
        S: Scheduler,
        F: Fn(usize) + Clone + 'static,
    {
        if !self.revealed.insert(container) {
            return false;
        }
        for index in 0..count {
            let show = show.clone();
            scheduler.schedule(profile.delay_for(index), Box::new(move || show(index)));
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::motion::{
        schedule::ManualScheduler,
        viewport::{TargetKind, ViewportTracker},
    };

    #[test]
    fn test_timeline_alternates_direction() {
        let profile = StaggerProfile::TIMELINE;
        let styles: Vec<_> = (0..4).map(|i| profile.style_for(i)).collect();
        assert_eq!(
            styles,
            vec![
                RevealStyle::SlideLeft,
                RevealStyle::SlideRight,
                RevealStyle::SlideLeft,
                RevealStyle::SlideRight
            ]
        );
        assert_eq!(profile.delay_for(3), Duration::from_millis(600));
    }

    #[test]
    fn test_profile_delays() {
        assert_eq!(
            StaggerProfile::PROJECT_CARDS.transition_delay(2),
            "transition-delay: 200ms"
        );
        assert_eq!(
            StaggerProfile::SKILL_CATEGORIES.delay_for(1),
            Duration::from_millis(200)
        );
        assert_eq!(StaggerProfile::CONTACT_CARDS.delay_for(0), Duration::ZERO);
        assert_eq!(
            StaggerProfile::STAT_CARDS.style_for(5),
            RevealStyle::ScaleIn
        );
    }

    #[test]
    fn test_children_reveal_in_order_on_independent_timers() {
        let mut tracker = ViewportTracker::new();
        let container = tracker.register(TargetKind::Plain);
        let scheduler = ManualScheduler::new();
        let shown = Rc::new(RefCell::new(Vec::new()));
        let sink = shown.clone();

        let mut reveals = RevealScheduler::new();
        assert!(reveals.reveal(
            container,
            3,
            StaggerProfile::SKILL_ITEMS,
            &scheduler,
            move |i| sink.borrow_mut().push(i),
        ));
        assert_eq!(scheduler.pending(), 3);

        scheduler.advance(Duration::ZERO);
        assert_eq!(*shown.borrow(), vec![0]);
        scheduler.advance_ms(100);
        assert_eq!(*shown.borrow(), vec![0, 1]);
        scheduler.advance_ms(100);
        assert_eq!(*shown.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_container_reveals_once() {
        let mut tracker = ViewportTracker::new();
        let container = tracker.register(TargetKind::Plain);
        let scheduler = ManualScheduler::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        let show = move |_: usize| *sink.borrow_mut() += 1;

        let mut reveals = RevealScheduler::new();
        assert!(reveals.reveal(container, 2, StaggerProfile::SKILL_ITEMS, &scheduler, show.clone()));
        assert!(!reveals.reveal(container, 2, StaggerProfile::SKILL_ITEMS, &scheduler, show));
        assert!(reveals.is_revealed(container));

        scheduler.advance_ms(1000);
        assert_eq!(*count.borrow(), 2);
    }
}
