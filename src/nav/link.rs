use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub section: Option<String>,
}

impl NavLink {
    pub fn new(href: &str, label: &str, section: Option<&str>) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            section: section.map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Linkedin,
    Github,
    Mail,
    Resume,
}

impl SocialIcon {
    pub fn class(&self) -> &'static str {
        match self {
            SocialIcon::Linkedin => "devicon-linkedin-plain",
            SocialIcon::Github => "devicon-github-plain",
            SocialIcon::Mail => "extra-email",
            SocialIcon::Resume => "extra-download",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub href: String,
    pub label: String,
    pub icon: SocialIcon,
    /// Internal links route inside the site and close the drawer like a nav link.
    #[serde(default)]
    pub internal: bool,
}
