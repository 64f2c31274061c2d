/// Compensates for the fixed header when deciding which section owns the
/// viewport.
pub const HEADER_OFFSET: f64 = 120.0;
/// Anchor navigation lands this far above a section's top.
pub const ANCHOR_OFFSET: f64 = 80.0;
pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const PARALLAX_SPEED: f64 = 0.5;
/// Minimum spacing between two scroll ticks (~60fps).
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// The section whose span contains `scroll_y + HEADER_OFFSET`. Overlapping
/// spans resolve to the later section in document order.
pub fn classify(sections: &[SectionDescriptor], scroll_y: f64) -> Option<&str> {
    let effective_y = scroll_y + HEADER_OFFSET;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(effective_y))
        .map(|s| s.id.as_str())
}

pub fn anchor_target(section_top: f64) -> f64 {
    section_top - ANCHOR_OFFSET
}

/// Everything one scroll tick derives from the scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollFrame {
    /// `None` when no section contains the position; the previous highlight
    /// then stays as it was.
    pub active: Option<String>,
    pub scrolled: bool,
    pub parallax: f64,
}

impl ScrollFrame {
    pub fn measure(scroll_y: f64, sections: &[SectionDescriptor]) -> Self {
        Self {
            active: classify(sections, scroll_y).map(str::to_string),
            scrolled: scroll_y > SCROLLED_THRESHOLD,
            parallax: scroll_y * PARALLAX_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("hero", 0.0, 500.0),
            SectionDescriptor::new("about", 500.0, 400.0),
        ]
    }

    #[test]
    fn test_header_offset_moves_ownership_early() {
        let sections = layout();
        assert_eq!(classify(&sections, 450.0), Some("about"));
        assert_eq!(classify(&sections, 379.0), Some("hero"));
        assert_eq!(classify(&sections, 380.0), Some("about"));
    }

    #[test]
    fn test_span_end_is_exclusive() {
        let sections = layout();
        // effective 900 is past about's [500, 900)
        assert_eq!(classify(&sections, 780.0), None);
        assert_eq!(classify(&sections, 779.0), Some("about"));
    }

    #[test]
    fn test_position_above_first_section() {
        let sections = vec![SectionDescriptor::new("hero", 300.0, 500.0)];
        assert_eq!(classify(&sections, 0.0), None);
        assert_eq!(classify(&[], 100.0), None);
    }

    #[test]
    fn test_scroll_frame() {
        let frame = ScrollFrame::measure(450.0, &layout());
        assert_eq!(frame.active.as_deref(), Some("about"));
        assert!(frame.scrolled);
        assert_eq!(frame.parallax, 225.0);

        let frame = ScrollFrame::measure(50.0, &layout());
        assert!(!frame.scrolled);
        assert_eq!(frame.active.as_deref(), Some("hero"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target(500.0), 420.0);
    }
}
