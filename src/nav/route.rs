use serde::{Deserialize, Serialize};

/// How the current route decides the active section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteMode {
    /// Dedicated page that always highlights one link; scroll tracking is off.
    Fixed(String),
    /// Non-root page without a link of its own; nothing is highlighted.
    Cleared,
    /// Root document; the active section follows the scroll position.
    Track,
}

impl RouteMode {
    pub fn is_tracking(&self) -> bool {
        matches!(self, RouteMode::Track)
    }
}

/// A route that pins the active section regardless of scroll position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedRoute {
    pub path: String,
    pub section: String,
}

impl FixedRoute {
    pub fn new(path: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            section: section.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSectionMapper {
    root: String,
    fixed: Vec<FixedRoute>,
}

impl Default for RouteSectionMapper {
    fn default() -> Self {
        Self::new("/", vec![FixedRoute::new("/resume", "resume")])
    }
}

impl RouteSectionMapper {
    pub fn new(root: impl Into<String>, fixed: Vec<FixedRoute>) -> Self {
        let root: String = root.into();
        let root = normalize(&root).to_string();
        let fixed = fixed
            .into_iter()
            .map(|r| FixedRoute {
                path: normalize(&r.path).to_string(),
                section: r.section,
            })
            .collect();
        Self { root, fixed }
    }

    pub fn fixed_routes(&self) -> &[FixedRoute] {
        &self.fixed
    }

    pub fn map(&self, path: &str) -> RouteMode {
        let path = normalize(path);
        if path == self.root {
            return RouteMode::Track;
        }
        self.fixed
            .iter()
            .find(|r| r.path == path)
            .map(|r| RouteMode::Fixed(r.section.clone()))
            .unwrap_or(RouteMode::Cleared)
    }
}

/// Drops any query or fragment and trailing slashes, keeping `/` for the root.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_tracks_scroll() {
        let mapper = RouteSectionMapper::default();
        assert_eq!(mapper.map("/"), RouteMode::Track);
        assert_eq!(mapper.map(""), RouteMode::Track);
        assert_eq!(mapper.map("/#about"), RouteMode::Track);
        assert_eq!(mapper.map("/?ref=home"), RouteMode::Track);
    }

    #[test]
    fn test_resume_is_fixed() {
        let mapper = RouteSectionMapper::default();
        assert_eq!(mapper.map("/resume"), RouteMode::Fixed("resume".to_string()));
        assert_eq!(mapper.map("/resume/"), RouteMode::Fixed("resume".to_string()));
        assert_eq!(
            mapper.map("/resume?download=1"),
            RouteMode::Fixed("resume".to_string())
        );
    }

    #[test]
    fn test_other_paths_clear() {
        let mapper = RouteSectionMapper::default();
        for path in ["/blog", "/weather", "/resume/old", "/resumes", "/food/"] {
            assert_eq!(mapper.map(path), RouteMode::Cleared, "path {path}");
            assert!(!mapper.map(path).is_tracking());
        }
    }

    #[test]
    fn test_configured_routes_are_normalized() {
        let mapper = RouteSectionMapper::new(
            "/",
            vec![
                FixedRoute::new("/cv/", "resume"),
                FixedRoute::new("/blog", "blog"),
            ],
        );
        assert_eq!(mapper.fixed_routes()[0].path, "/cv");
        assert_eq!(mapper.map("/cv"), RouteMode::Fixed("resume".to_string()));
        assert_eq!(mapper.map("/blog/"), RouteMode::Fixed("blog".to_string()));
        assert_eq!(mapper.map("/resume"), RouteMode::Cleared);
    }
}
