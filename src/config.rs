use chrono::{DateTime, Datelike};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

use crate::nav::{
    FixedRoute, NavLink, RouteSectionMapper, SectionBoundaryResolver, SocialLink,
    DEFAULT_SCROLL_THRESHOLD, DEFAULT_SECTIONS, DEFAULT_SECTION_BIAS,
};

const SITE_CONFIG_JSON: &str = include_str!("../config/site.json");
const BUILD_TIME: &str = env!("BUILD_TIME");

pub static SITE_CONFIG: LazyLock<SiteConfig> = LazyLock::new(|| {
    SiteConfig::from_json(SITE_CONFIG_JSON).unwrap_or_else(|err| {
        log::error!("{err}, falling back to built-in site config");
        SiteConfig::default()
    })
});

/// The validated site configuration embedded at build time.
pub fn site_config() -> &'static SiteConfig {
    &SITE_CONFIG
}

/// Year the site was built, stamped by `build.rs`.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(String),
    #[error("Section id must not be empty")]
    EmptySectionId,
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),
    #[error("Nav link '{label}' points at unknown section '{section}'")]
    UnknownSection { label: String, section: String },
    #[error("{0} must be a finite, non-negative pixel value")]
    InvalidPixels(&'static str),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub tagline: String,
    pub email: String,
    pub scroll_threshold: f64,
    pub section_bias: f64,
    pub root_path: String,
    /// Home page sections, top to bottom.
    pub sections: Vec<String>,
    pub fixed_routes: Vec<FixedRoute>,
    pub nav_links: Vec<NavLink>,
    pub social_links: Vec<SocialLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: String::new(),
            tagline: String::new(),
            email: String::new(),
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            section_bias: DEFAULT_SECTION_BIAS,
            root_path: "/".to_string(),
            sections: DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect(),
            fixed_routes: vec![FixedRoute::new("/resume", "resume")],
            nav_links: vec![
                NavLink::new("/", "Home", Some("home")),
                NavLink::new("/#about", "About", Some("about")),
                NavLink::new("/#skills", "Skills", Some("skills")),
                NavLink::new("/#projects", "Projects", Some("projects")),
                NavLink::new("/resume", "Resume", Some("resume")),
                NavLink::new("/#contact", "Contact", Some("contact")),
            ],
            social_links: Vec::new(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("scroll_threshold", self.scroll_threshold),
            ("section_bias", self.section_bias),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidPixels(name));
            }
        }

        let resolver = self.resolver()?;
        for link in &self.nav_links {
            let Some(section) = &link.section else {
                continue;
            };
            let routed = self.fixed_routes.iter().any(|r| &r.section == section);
            if !routed && !resolver.contains_section(section) {
                return Err(ConfigError::UnknownSection {
                    label: link.label.clone(),
                    section: section.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn resolver(&self) -> Result<SectionBoundaryResolver, ConfigError> {
        SectionBoundaryResolver::new(self.sections.clone(), self.section_bias)
    }

    pub fn route_mapper(&self) -> RouteSectionMapper {
        RouteSectionMapper::new(self.root_path.clone(), self.fixed_routes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{RouteMode, SocialIcon};

    #[test]
    fn test_embedded_config_is_valid() {
        let config = SiteConfig::from_json(SITE_CONFIG_JSON).expect("embedded config parses");
        assert_eq!(config.scroll_threshold, 90.0);
        assert_eq!(config.section_bias, 100.0);
        assert_eq!(config.sections, DEFAULT_SECTIONS);
        assert_eq!(config.nav_links.len(), 6);
        assert_eq!(config.nav_links[4].section.as_deref(), Some("resume"));
        assert!(config
            .social_links
            .iter()
            .any(|s| s.icon == SocialIcon::Github && !s.internal));
        assert_eq!(site_config(), &config);
    }

    #[test]
    fn test_build_year_is_stamped() {
        let year = build_year().expect("BUILD_TIME is rfc3339");
        assert!(year >= 2024);
    }

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(
            config.route_mapper().map("/resume"),
            RouteMode::Fixed("resume".to_string())
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "owner": "Someone", "section_bias": 40 }"#)
            .expect("partial config parses");
        assert_eq!(config.owner, "Someone");
        assert_eq!(config.section_bias, 40.0);
        assert_eq!(config.scroll_threshold, DEFAULT_SCROLL_THRESHOLD);
        assert_eq!(config.nav_links, SiteConfig::default().nav_links);
    }

    #[test]
    fn test_malformed_json() {
        let err = SiteConfig::from_json("{ \"sections\": [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Couldn't parse site config"));
    }

    #[test]
    fn test_rejects_bad_pixels() {
        let err = SiteConfig::from_json(r#"{ "scroll_threshold": -5 }"#).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPixels("scroll_threshold"));
    }

    #[test]
    fn test_rejects_duplicate_sections() {
        let err = SiteConfig::from_json(r#"{ "sections": ["home", "about", "home"] }"#)
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSection("home".to_string()));
    }

    #[test]
    fn test_rejects_link_to_unknown_section() {
        let json = r#"{
            "sections": ["home"],
            "fixed_routes": [],
            "nav_links": [
                { "href": "/", "label": "Home", "section": "home" },
                { "href": "/blog", "label": "Blog", "section": "blog" }
            ]
        }"#;
        let err = SiteConfig::from_json(json).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownSection {
                label: "Blog".to_string(),
                section: "blog".to_string(),
            }
        );
    }

    #[test]
    fn test_links_without_section_are_allowed() {
        let json = r#"{
            "sections": ["home"],
            "nav_links": [{ "href": "https://example.com", "label": "Elsewhere" }]
        }"#;
        let config = SiteConfig::from_json(json).expect("valid");
        assert_eq!(config.nav_links[0].section, None);
    }
}
