//! Entrance animation timing
//!
//! Sections reveal their children one after another. Each child gets a CSS
//! `animation-delay` computed from the section's stagger preset.

/// Window scroll offset (px) past which the header gets its shadow
pub const HEADER_SHADOW_THRESHOLD: f64 = 10.0;

/// Delay before scrolling a freshly revealed section into view, in milliseconds
pub const REVEAL_SCROLL_DELAY_MS: u32 = 100;

/// Stagger preset for a group of animated children
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Seconds before the first child starts
    pub delay_children: f64,
    /// Seconds between consecutive children
    pub stagger_children: f64,
    /// Seconds each child's animation runs
    pub duration: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger_children: f64, duration: f64) -> Self {
        Self {
            delay_children,
            stagger_children,
            duration,
        }
    }

    /// Start delay for the child at `index`, in seconds
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }

    /// Inline style for the child at `index`
    pub fn style_for(&self, index: usize) -> String {
        format!(
            "animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.delay_for(index),
            self.duration
        )
    }

    /// Inline style for CSS transitions (scroll reveal) of the child at `index`
    pub fn transition_style_for(&self, index: usize) -> String {
        format!(
            "transition-delay: {:.2}s; transition-duration: {:.2}s;",
            self.delay_for(index),
            self.duration
        )
    }
}

pub const HERO: Stagger = Stagger::new(0.2, 0.1, 0.5);
pub const FEATURES: Stagger = Stagger::new(0.1, 0.05, 0.4);
pub const FOOTER: Stagger = Stagger::new(0.1, 0.05, 0.5);
pub const CHAT_SECTION: Stagger = Stagger::new(0.0, 0.1, 0.5);
/// Stats tiles in the features call-to-action
pub const STATS: Stagger = Stagger::new(0.5, 0.1, 0.3);

/// Whether the header should be drawn raised at this scroll offset
pub fn header_is_raised(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_delay_for() {
        assert!(approx(HERO.delay_for(0), 0.2));
        assert!(approx(HERO.delay_for(3), 0.5));
        assert!(approx(FEATURES.delay_for(5), 0.35));
        assert!(approx(CHAT_SECTION.delay_for(0), 0.0));
    }

    #[test]
    fn test_style_for() {
        assert_eq!(
            HERO.style_for(2),
            "animation-delay: 0.40s; animation-duration: 0.50s;"
        );
        assert_eq!(
            STATS.transition_style_for(1),
            "transition-delay: 0.60s; transition-duration: 0.30s;"
        );
    }

    #[test]
    fn test_header_is_raised() {
        assert!(!header_is_raised(0.0));
        assert!(!header_is_raised(10.0));
        assert!(header_is_raised(10.5));
    }
}
