/// Technologies that can appear on a project or skill badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tech {
    React,
    NextJs,
    TypeScript,
    JavaScript,
    Tailwind,
    Supabase,
    Firebase,
    WordPress,
    NodeJs,
    MongoDb,
    Api,
    Css,
    Html,
    CustomTheme,
    Seo,
    ResponsiveDesign,
    ContactForms,
    CustomDevelopment,
    BusinessTools,
    Unknown,
}

impl From<&str> for Tech {
    fn from(value: &str) -> Self {
        match value {
            "React" => Self::React,
            "Next.js" => Self::NextJs,
            "TypeScript" => Self::TypeScript,
            "JavaScript" => Self::JavaScript,
            "Tailwind" => Self::Tailwind,
            "Supabase" => Self::Supabase,
            "Firebase" => Self::Firebase,
            "WordPress" => Self::WordPress,
            "Node.js" => Self::NodeJs,
            "MongoDB" => Self::MongoDb,
            "API" => Self::Api,
            "CSS" => Self::Css,
            "HTML" => Self::Html,
            "Custom Theme" => Self::CustomTheme,
            "SEO" => Self::Seo,
            "Responsive Design" => Self::ResponsiveDesign,
            "Contact Forms" => Self::ContactForms,
            "Custom Development" => Self::CustomDevelopment,
            "Business Tools" => Self::BusinessTools,
            _ => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    /// For badges drawn over dark image overlays.
    Light,
}

const DEFAULT_BADGE: &str = "bg-primary/20 text-primary border-primary/30";
const LIGHT_BADGE: &str = "bg-white/90 text-gray-900 border-white shadow-md";

impl Tech {
    /// Colour classes for a badge. Anything without its own palette gets the
    /// variant's fallback.
    pub fn badge_class(&self, variant: BadgeVariant) -> &'static str {
        match variant {
            BadgeVariant::Default => self.default_class().unwrap_or(DEFAULT_BADGE),
            BadgeVariant::Light => self.light_class().unwrap_or(LIGHT_BADGE),
        }
    }

    fn default_class(&self) -> Option<&'static str> {
        let class = match self {
            Tech::React => "bg-[#61dafb]/20 text-[#61dafb] border-[#61dafb]/30",
            Tech::NextJs => "bg-slate-200/20 text-slate-100 border-slate-200/30",
            Tech::TypeScript => "bg-[#3178c6]/20 text-[#3178c6] border-[#3178c6]/30",
            Tech::JavaScript => "bg-[#f7df1e]/20 text-[#f7df1e] border-[#f7df1e]/30",
            Tech::Tailwind => "bg-[#38bdf8]/20 text-[#38bdf8] border-[#38bdf8]/30",
            Tech::Supabase => "bg-[#3ecf8e]/20 text-[#3ecf8e] border-[#3ecf8e]/30",
            Tech::Firebase => "bg-[#ffca28]/20 text-[#ffca28] border-[#ffca28]/30",
            Tech::WordPress => "bg-[#21759b]/20 text-[#21759b] border-[#21759b]/30",
            Tech::NodeJs => "bg-[#339933]/20 text-[#339933] border-[#339933]/30",
            Tech::MongoDb => "bg-[#47a248]/20 text-[#47a248] border-[#47a248]/30",
            Tech::Api => "bg-purple-500/20 text-purple-400 border-purple-400/30",
            Tech::Css => "bg-[#264de4]/20 text-[#264de4] border-[#264de4]/30",
            _ => return None,
        };
        Some(class)
    }

    fn light_class(&self) -> Option<&'static str> {
        let class = match self {
            Tech::React => "bg-white/90 text-[#61dafb] border-white shadow-md",
            Tech::NextJs => "bg-white/90 text-gray-900 border-white shadow-md",
            Tech::TypeScript => "bg-white/90 text-[#3178c6] border-white shadow-md",
            Tech::JavaScript => "bg-white/90 text-[#f0db4f] border-white shadow-md",
            Tech::Tailwind => "bg-white/90 text-[#38bdf8] border-white shadow-md",
            Tech::Supabase => "bg-white/90 text-[#3ecf8e] border-white shadow-md",
            Tech::Firebase => "bg-white/90 text-[#ffa000] border-white shadow-md",
            Tech::WordPress => "bg-white/90 text-[#21759b] border-white shadow-md",
            Tech::NodeJs => "bg-white/90 text-[#339933] border-white shadow-md",
            Tech::MongoDb => "bg-white/90 text-[#47a248] border-white shadow-md",
            Tech::Api | Tech::CustomDevelopment => {
                "bg-white/90 text-purple-600 border-white shadow-md"
            }
            Tech::Css => "bg-white/90 text-[#264de4] border-white shadow-md",
            Tech::CustomTheme => "bg-white/90 text-indigo-600 border-white shadow-md",
            Tech::Seo => "bg-white/90 text-green-600 border-white shadow-md",
            Tech::ResponsiveDesign => "bg-white/90 text-blue-600 border-white shadow-md",
            Tech::ContactForms => "bg-white/90 text-teal-600 border-white shadow-md",
            Tech::BusinessTools => "bg-white/90 text-orange-600 border-white shadow-md",
            Tech::Html | Tech::Unknown => return None,
        };
        Some(class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labels() {
        assert_eq!(Tech::from("Next.js"), Tech::NextJs);
        assert_eq!(Tech::from("Custom Theme"), Tech::CustomTheme);
        assert_eq!(Tech::from("MongoDB"), Tech::MongoDb);
        assert_eq!(Tech::from("react"), Tech::Unknown);
        assert_eq!(Tech::from("Elm"), Tech::Unknown);
    }

    #[test]
    fn test_known_tech_has_own_style() {
        let react = Tech::React.badge_class(BadgeVariant::Default);
        assert!(react.contains("#61dafb"));
        assert_ne!(react, DEFAULT_BADGE);
        assert!(Tech::React
            .badge_class(BadgeVariant::Light)
            .contains("text-[#61dafb]"));
    }

    #[test]
    fn test_unknown_falls_back() {
        assert_eq!(Tech::Unknown.badge_class(BadgeVariant::Default), DEFAULT_BADGE);
        assert_eq!(Tech::Unknown.badge_class(BadgeVariant::Light), LIGHT_BADGE);
        assert_eq!(Tech::from("Rust").badge_class(BadgeVariant::default()), DEFAULT_BADGE);
    }

    #[test]
    fn test_light_only_styles() {
        // only styled on dark overlays
        assert_eq!(Tech::Seo.badge_class(BadgeVariant::Default), DEFAULT_BADGE);
        assert!(Tech::Seo.badge_class(BadgeVariant::Light).contains("green-600"));
        assert_eq!(Tech::Html.badge_class(BadgeVariant::Light), LIGHT_BADGE);
    }
}
