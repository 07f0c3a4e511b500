/// Offset, in CSS pixels, at which the navbar switches to its "scrolled" chrome.
pub const DEFAULT_SCROLL_THRESHOLD: f64 = 90.0;

/// Tracks whether the page has been scrolled past the chrome threshold.
///
/// The flag only drives visual treatment of the navbar (backdrop blur, shadow,
/// border). It never feeds into section resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD)
    }
}

impl ScrollTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset >= self.threshold
    }

    /// Records a new offset and returns the updated flag.
    pub fn observe(&mut self, offset: f64) -> bool {
        self.scrolled = self.is_scrolled(offset);
        self.scrolled
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        let tracker = ScrollTracker::default();
        assert!(!tracker.is_scrolled(0.0));
        assert!(!tracker.is_scrolled(89.0));
        assert!(!tracker.is_scrolled(89.99));
        assert!(tracker.is_scrolled(90.0));
        assert!(tracker.is_scrolled(91.0));
        assert!(tracker.is_scrolled(5000.0));
    }

    #[test]
    fn test_observe_updates_flag() {
        let mut tracker = ScrollTracker::default();
        assert!(!tracker.scrolled());

        assert!(tracker.observe(120.0));
        assert!(tracker.scrolled());

        assert!(!tracker.observe(40.0));
        assert!(!tracker.scrolled());
    }

    #[test]
    fn test_custom_threshold() {
        let mut tracker = ScrollTracker::new(10.0);
        assert_eq!(tracker.threshold(), 10.0);
        assert!(!tracker.observe(9.5));
        assert!(tracker.observe(10.0));
    }
}
