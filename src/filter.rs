use std::time::Duration;

pub const ALL: &str = "all";
/// Non-matching cards fade for this long before collapsing.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter {
    selected: String,
}

impl Default for ProjectFilter {
    fn default() -> Self {
        Self {
            selected: ALL.to_string(),
        }
    }
}

impl ProjectFilter {
    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = category.into();
    }

    pub fn matches(&self, category: &str) -> bool {
        self.selected == ALL || self.selected == category
    }

    pub fn visible_count<'a>(&self, categories: impl IntoIterator<Item = &'a str>) -> usize {
        categories.into_iter().filter(|c| self.matches(c)).count()
    }
}

/// Filter buttons: `all` first, then each category in first-seen order.
pub fn filter_options<'a>(categories: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut options = vec![ALL.to_string()];
    for category in categories {
        if !options.iter().any(|o| o == category) {
            options.push(category.to_string());
        }
    }
    options
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardPhase {
    #[default]
    Shown,
    /// Hidden but still occupying layout while it fades out. Carries the
    /// filter selection that started the fade.
    Fading(u64),
    Collapsed,
}

impl CardPhase {
    /// Phase after filter selection `epoch`. A card that is already fading
    /// keeps its original epoch, so its pending collapse still applies.
    pub fn apply(self, matches: bool, epoch: u64) -> Self {
        match (self, matches) {
            (_, true) => Self::Shown,
            (Self::Shown, false) => Self::Fading(epoch),
            (hidden, false) => hidden,
        }
    }

    /// Runs [`COLLAPSE_DELAY`] after the fade began. Only a card still fading
    /// from the same selection collapses.
    pub fn collapse(self, epoch: u64) -> Self {
        match self {
            Self::Fading(started) if started == epoch => Self::Collapsed,
            other => other,
        }
    }

    pub fn is_hidden(self) -> bool {
        self != Self::Shown
    }

    /// Inline style layered over the card's reveal classes; a shown card
    /// falls back to them entirely.
    pub fn style(self) -> &'static str {
        match self {
            Self::Shown => "",
            Self::Fading(_) => "opacity: 0; transform: translateY(20px)",
            Self::Collapsed => "display: none; opacity: 0; transform: translateY(20px)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_blockchain_shows_one_card() {
        let cards = ["web", "blockchain", "web"];
        let mut filter = ProjectFilter::default();
        assert_eq!(filter.visible_count(cards), 3);

        filter.select("blockchain");
        assert_eq!(filter.visible_count(cards), 1);

        filter.select("web");
        assert_eq!(filter.visible_count(cards), 2);

        filter.select(ALL);
        assert_eq!(filter.visible_count(cards), 3);
    }

    #[test]
    fn test_unknown_category_hides_everything() {
        let mut filter = ProjectFilter::default();
        filter.select("mobile");
        assert_eq!(filter.visible_count(["web", "ai"]), 0);
    }

    #[test]
    fn test_filter_options_dedupe_in_order() {
        let options = filter_options(["web", "blockchain", "web", "ai"]);
        assert_eq!(options, vec!["all", "web", "blockchain", "ai"]);
    }

    #[test]
    fn test_card_phases() {
        let phase = CardPhase::Shown.apply(false, 1);
        assert_eq!(phase, CardPhase::Fading(1));
        assert_eq!(phase.collapse(1), CardPhase::Collapsed);

        // Re-shown before the collapse timer fired.
        let phase = CardPhase::Fading(1).apply(true, 2);
        assert_eq!(phase.collapse(1), CardPhase::Shown);

        assert_eq!(CardPhase::Collapsed.apply(false, 3), CardPhase::Collapsed);
        assert_eq!(CardPhase::Collapsed.apply(true, 3), CardPhase::Shown);
        assert!(CardPhase::Fading(1).is_hidden());
    }

    #[test]
    fn test_collapse_ignores_other_selections() {
        // Still fading from selection 1 when selection 2 hides it again.
        let phase = CardPhase::Shown.apply(false, 1).apply(false, 2);
        assert_eq!(phase, CardPhase::Fading(1));
        assert_eq!(phase.collapse(2), CardPhase::Fading(1));
        assert_eq!(phase.collapse(1), CardPhase::Collapsed);

        // Hidden, shown, then hidden again: the first timer is stale.
        let phase = CardPhase::Fading(1).apply(true, 2).apply(false, 3);
        assert_eq!(phase.collapse(1), CardPhase::Fading(3));
    }
}
