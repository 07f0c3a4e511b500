use std::collections::{HashMap, HashSet};

use crate::config::ConfigError;

/// Lookahead, in CSS pixels, added to the scroll offset before testing section extents.
/// Highlights a link slightly before its section reaches the top of the viewport.
pub const DEFAULT_SECTION_BIAS: f64 = 100.0;

/// Home page sections in top-to-bottom order.
pub const DEFAULT_SECTIONS: [&str; 5] = ["home", "about", "skills", "projects", "contact"];

/// Vertical extent of a section in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: `top` is inside, `top + height` is not.
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Source of section extents for the current document.
///
/// Returning `None` means the anchor is not rendered right now, which is an
/// expected transient state and not an error.
pub trait SectionLayout {
    fn extent(&self, id: &str) -> Option<Extent>;
}

impl SectionLayout for HashMap<String, Extent> {
    fn extent(&self, id: &str) -> Option<Extent> {
        self.get(id).copied()
    }
}

impl SectionLayout for [(&str, Extent)] {
    fn extent(&self, id: &str) -> Option<Extent> {
        self.iter().find(|(s, _)| *s == id).map(|(_, e)| *e)
    }
}

impl<const N: usize> SectionLayout for [(&str, Extent); N] {
    fn extent(&self, id: &str) -> Option<Extent> {
        self.as_slice().extent(id)
    }
}

/// Layout with no rendered sections, used where there is no document (server render).
pub struct EmptyLayout;

impl SectionLayout for EmptyLayout {
    fn extent(&self, _id: &str) -> Option<Extent> {
        None
    }
}

/// Maps a scroll offset to the section it falls in.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBoundaryResolver {
    sections: Vec<String>,
    bias: f64,
}

impl Default for SectionBoundaryResolver {
    fn default() -> Self {
        Self {
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            bias: DEFAULT_SECTION_BIAS,
        }
    }
}

impl SectionBoundaryResolver {
    /// `sections` must be in top-to-bottom page order with unique, non-empty ids.
    pub fn new(sections: Vec<String>, bias: f64) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for id in &sections {
            if id.is_empty() {
                return Err(ConfigError::EmptySectionId);
            }
            if !seen.insert(id.as_str()) {
                return Err(ConfigError::DuplicateSection(id.clone()));
            }
        }
        Ok(Self { sections, bias })
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn contains_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    /// Returns the first section (in page order) whose extent contains
    /// `offset + bias`. Sections without a rendered anchor are skipped.
    /// `None` when no section matches; callers keep their previous value.
    pub fn resolve<L>(&self, offset: f64, layout: &L) -> Option<&str>
    where
        L: SectionLayout + ?Sized,
    {
        let line = offset + self.bias;
        self.sections
            .iter()
            .find(|id| layout.extent(id).is_some_and(|e| e.contains(line)))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(ids: &[&str]) -> SectionBoundaryResolver {
        SectionBoundaryResolver::new(
            ids.iter().map(|s| s.to_string()).collect(),
            DEFAULT_SECTION_BIAS,
        )
        .expect("valid section list")
    }

    fn stacked(ids: &[&'static str], height: f64) -> Vec<(&'static str, Extent)> {
        ids.iter()
            .enumerate()
            .map(|(i, id)| (*id, Extent::new(i as f64 * height, height)))
            .collect()
    }

    #[test]
    fn test_extent_half_open() {
        let e = Extent::new(800.0, 800.0);
        assert!(!e.contains(799.0));
        assert!(e.contains(800.0));
        assert!(e.contains(1599.5));
        assert!(!e.contains(1600.0));
    }

    #[test]
    fn test_boundary_values_with_bias() {
        let r = resolver(&["home", "about", "skills"]);
        let layout = [
            ("home", Extent::new(0.0, 800.0)),
            ("about", Extent::new(800.0, 800.0)),
            ("skills", Extent::new(1600.0, 800.0)),
        ];

        assert_eq!(r.resolve(0.0, &layout), Some("home"));
        assert_eq!(r.resolve(699.0, &layout), Some("home"));
        assert_eq!(r.resolve(700.0, &layout), Some("about"));
        assert_eq!(r.resolve(701.0, &layout), Some("about"));
        assert_eq!(r.resolve(750.0, &layout), Some("about"));

        assert_eq!(r.resolve(1499.0, &layout), Some("about"));
        assert_eq!(r.resolve(1500.0, &layout), Some("skills"));
        assert_eq!(r.resolve(1501.0, &layout), Some("skills"));

        // past the last section
        assert_eq!(r.resolve(2300.0, &layout), None);
    }

    #[test]
    fn test_offset_inside_each_section() {
        let ids = ["home", "about", "skills", "projects", "contact"];
        let r = resolver(&ids);
        let layout = stacked(&ids, 650.0);
        for (k, id) in ids.iter().enumerate() {
            let top = k as f64 * 650.0;
            for inside in [top + 1.0, top + 325.0, top + 649.0] {
                let offset = inside - r.bias();
                assert_eq!(r.resolve(offset, layout.as_slice()), Some(*id));
            }
        }
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let r = resolver(&["home", "about", "skills"]);
        let mut layout = HashMap::new();
        layout.insert("home".to_string(), Extent::new(0.0, 500.0));
        layout.insert("skills".to_string(), Extent::new(500.0, 500.0));

        assert_eq!(r.resolve(450.0, &layout), Some("skills"));
        assert_eq!(r.resolve(0.0, &layout), Some("home"));
    }

    #[test]
    fn test_gap_resolves_nothing() {
        let r = resolver(&["home", "about"]);
        let layout = [
            ("home", Extent::new(0.0, 400.0)),
            ("about", Extent::new(600.0, 400.0)),
        ];
        assert_eq!(r.resolve(350.0, &layout), None);
        assert_eq!(r.resolve(500.0, &layout), Some("about"));
    }

    #[test]
    fn test_overlap_earlier_section_wins() {
        let r = resolver(&["home", "about"]);
        let layout = [
            ("home", Extent::new(0.0, 1000.0)),
            ("about", Extent::new(500.0, 1000.0)),
        ];
        assert_eq!(r.resolve(600.0, &layout), Some("home"));
        assert_eq!(r.resolve(950.0, &layout), Some("about"));
    }

    #[test]
    fn test_default_sections() {
        let r = SectionBoundaryResolver::default();
        assert_eq!(r.sections(), DEFAULT_SECTIONS);
        assert_eq!(r.bias(), DEFAULT_SECTION_BIAS);
        assert!(r.contains_section("projects"));
        assert!(!r.contains_section("resume"));
    }

    #[test]
    fn test_empty_layout() {
        let r = resolver(&["home"]);
        assert_eq!(r.resolve(0.0, &EmptyLayout), None);
    }

    #[test]
    fn test_rejects_invalid_section_lists() {
        let dup = SectionBoundaryResolver::new(
            vec!["home".to_string(), "about".to_string(), "home".to_string()],
            DEFAULT_SECTION_BIAS,
        );
        assert!(matches!(dup, Err(ConfigError::DuplicateSection(id)) if id == "home"));

        let empty = SectionBoundaryResolver::new(vec!["home".to_string(), String::new()], 0.0);
        assert!(matches!(empty, Err(ConfigError::EmptySectionId)));
    }
}
