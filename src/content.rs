//! Static portfolio content rendered by the home page.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    NextJs,
    React,
    WordPress,
}

impl ProjectCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectCategory::NextJs => "Next.js",
            ProjectCategory::React => "React",
            ProjectCategory::WordPress => "WordPress",
        }
    }
}

/// A card in the projects section. `project_url` is where "More Info" goes:
/// an internal detail page such as `/weather`, or the live site itself for
/// client work, in which case the card only shows the live link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub category: ProjectCategory,
    pub tech: &'static [&'static str],
    pub project_url: &'static str,
    pub live_url: Option<&'static str>,
    pub github_url: Option<&'static str>,
}

impl Project {
    pub fn has_detail_page(&self) -> bool {
        self.live_url != Some(self.project_url)
    }

    /// Slug of the internal detail page, if the card links to one.
    pub fn detail_slug(&self) -> Option<&'static str> {
        if !self.has_detail_page() {
            return None;
        }
        self.project_url.strip_prefix('/')
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Photography Portfolio",
        description: "A photography portfolio with a modern UI and smooth animations",
        category: ProjectCategory::NextJs,
        tech: &["Next.js", "TypeScript", "Tailwind"],
        project_url: "/photograph",
        live_url: Some("https://next-landingpage-tw.vercel.app/"),
        github_url: Some("https://github.com/Geoffrey2002/next-landingpage-tw"),
    },
    Project {
        title: "Expense Tracker",
        description: "Track your expenses with charts and insights",
        category: ProjectCategory::React,
        tech: &["React", "JavaScript", "CSS"],
        project_url: "/expense",
        live_url: Some("https://expense-app-drab.vercel.app/"),
        github_url: Some("https://github.com/Geoffrey2002/Expense-App"),
    },
    Project {
        title: "Food Ordering App",
        description: "Order food online with real-time updates and a simple checkout",
        category: ProjectCategory::React,
        tech: &["React", "JavaScript", "API"],
        project_url: "/food",
        live_url: Some("https://food-app-dun.vercel.app/"),
        github_url: Some("https://github.com/Geoffrey2002/Food-App"),
    },
    Project {
        title: "Weather App",
        description: "Real-time weather updates for any location worldwide",
        category: ProjectCategory::React,
        tech: &["React", "JavaScript", "API"],
        project_url: "/weather",
        live_url: Some("https://weather-app-react-tw.vercel.app/"),
        github_url: Some("https://github.com/Geoffrey2002/weather-app-reactTw"),
    },
    Project {
        title: "Ezzia Healthcare PLLC",
        description: "Primary care and wellness practice in Everett, WA offering walk-in, urgent care and DOT physicals",
        category: ProjectCategory::WordPress,
        tech: &["WordPress", "Custom Theme", "SEO"],
        project_url: "https://www.ezziahealthcare.com/",
        live_url: Some("https://www.ezziahealthcare.com/"),
        github_url: None,
    },
    Project {
        title: "Kingsgate Highlands AFH",
        description: "Residential care facility in Kirkland, WA providing 24/7 adult and elder care",
        category: ProjectCategory::WordPress,
        tech: &["WordPress", "Responsive Design", "Contact Forms"],
        project_url: "https://kingsgateafh.com/",
        live_url: Some("https://kingsgateafh.com/"),
        github_url: None,
    },
    Project {
        title: "Mwango Capital",
        description: "Financial services and investment management platform",
        category: ProjectCategory::WordPress,
        tech: &["WordPress", "Custom Development", "Business Tools"],
        project_url: "https://mwangocapital.com/",
        live_url: Some("https://mwangocapital.com/"),
        github_url: None,
    },
];

/// Long-form page for a personal project, served at `/{slug}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetail {
    pub slug: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub overview: &'static str,
    pub tech: &'static [&'static str],
    pub code_url: &'static str,
    pub demo_url: &'static str,
}

impl ProjectDetail {
    pub fn path(&self) -> String {
        format!("/{}", self.slug)
    }
}

pub const PROJECT_DETAILS: &[ProjectDetail] = &[
    ProjectDetail {
        slug: "photograph",
        title: "Photography Portfolio",
        subtitle: "Next.js / TypeScript / Tailwind CSS",
        overview: "A photography landing page built with Next.js 14 and Tailwind CSS. \
            Images are lazy loaded and the layout adapts from phones to wide screens, \
            with smooth animations between sections.",
        tech: &["Next.js", "TypeScript", "Tailwind", "React"],
        code_url: "https://github.com/Geoffrey2002/next-landingpage-tw",
        demo_url: "https://next-landingpage-tw.vercel.app/",
    },
    ProjectDetail {
        slug: "expense",
        title: "Expense App",
        subtitle: "React JS / CSS",
        overview: "This app showcases my proficiency in React JS, allowing users to create \
            and display new expenses seamlessly. Built with modern React patterns and state \
            management, it provides an intuitive interface for tracking daily expenses.",
        tech: &["React", "CSS", "JavaScript"],
        code_url: "https://github.com/Geoffrey2002/Expense-App",
        demo_url: "https://expense-app-drab.vercel.app/",
    },
    ProjectDetail {
        slug: "food",
        title: "Food App",
        subtitle: "React JS / CSS / Context API",
        overview: "This app demonstrates how to use Context API to pass data from one \
            component to another component efficiently. Built with React JS and CSS, it \
            showcases modern state management patterns and component architecture.",
        tech: &["React", "CSS", "Context API", "JavaScript"],
        code_url: "https://github.com/Geoffrey2002/Food-App",
        demo_url: "https://food-app-dun.vercel.app/",
    },
    ProjectDetail {
        slug: "weather",
        title: "Weather App",
        subtitle: "React JS / Tailwind CSS / OpenWeather API",
        overview: "Weather App is a React JS application that displays the current weather \
            in your city. The weather is displayed in Celsius and Fahrenheit. I get the weather \
            information from the OpenWeather API and styled the application using the Tailwind \
            CSS framework for a modern, responsive design.",
        tech: &["React", "Tailwind CSS", "OpenWeather API", "JavaScript"],
        code_url: "https://github.com/Geoffrey2002/weather-app-reactTw",
        demo_url: "https://weather-app-react-tw.vercel.app/",
    },
];

pub fn project_detail(slug: &str) -> Option<&'static ProjectDetail> {
    PROJECT_DETAILS.iter().find(|d| d.slug == slug)
}

/// Tab selection over the project catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(ProjectCategory),
}

impl ProjectFilter {
    /// Tabs in display order.
    pub fn tabs() -> [ProjectFilter; 4] {
        [
            ProjectFilter::All,
            ProjectFilter::Category(ProjectCategory::NextJs),
            ProjectFilter::Category(ProjectCategory::React),
            ProjectFilter::Category(ProjectCategory::WordPress),
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(c) => c.label(),
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == *c,
        }
    }

    /// Keeps catalogue order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
    /// 0-100
    pub proficiency: u8,
    pub years: Option<u8>,
}

pub const SKILLS: &[Skill] = &[
    Skill {
        name: "HTML",
        category: "Frontend",
        proficiency: 95,
        years: Some(4),
    },
    Skill {
        name: "CSS",
        category: "Frontend",
        proficiency: 90,
        years: Some(4),
    },
    Skill {
        name: "JavaScript",
        category: "Frontend",
        proficiency: 90,
        years: Some(4),
    },
    Skill {
        name: "React",
        category: "Frontend",
        proficiency: 85,
        years: Some(3),
    },
    Skill {
        name: "Tailwind",
        category: "Frontend",
        proficiency: 90,
        years: Some(3),
    },
    Skill {
        name: "Next.js",
        category: "Frontend",
        proficiency: 85,
        years: Some(2),
    },
    Skill {
        name: "Supabase",
        category: "Backend",
        proficiency: 75,
        years: Some(2),
    },
    Skill {
        name: "WordPress",
        category: "CMS",
        proficiency: 80,
        years: Some(4),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filter_keeps_everything_in_order() {
        let all = ProjectFilter::All.apply(PROJECTS);
        assert_eq!(all.len(), PROJECTS.len());
        assert_eq!(all[0].title, "Photography Portfolio");
        assert_eq!(all[all.len() - 1].title, "Mwango Capital");
    }

    #[test]
    fn test_category_filter() {
        let react = ProjectFilter::Category(ProjectCategory::React).apply(PROJECTS);
        let titles = react.iter().map(|p| p.title).collect::<Vec<_>>();
        assert_eq!(titles, vec!["Expense Tracker", "Food Ordering App", "Weather App"]);

        let next = ProjectFilter::Category(ProjectCategory::NextJs).apply(PROJECTS);
        assert_eq!(next.len(), 1);

        let wp = ProjectFilter::Category(ProjectCategory::WordPress).apply(PROJECTS);
        assert!(wp.iter().all(|p| p.tech.contains(&"WordPress")));
    }

    #[test]
    fn test_tabs_cover_catalogue() {
        let tabs = ProjectFilter::tabs();
        assert_eq!(tabs[0], ProjectFilter::default());
        let labels = tabs.iter().map(|t| t.label()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["All", "Next.js", "React", "WordPress"]);

        let per_category: usize = tabs[1..].iter().map(|t| t.apply(PROJECTS).len()).sum();
        assert_eq!(per_category, PROJECTS.len());
    }

    #[test]
    fn test_card_links() {
        for project in PROJECTS {
            match project.category {
                ProjectCategory::WordPress => {
                    assert!(!project.has_detail_page(), "{}", project.title);
                    assert_eq!(project.detail_slug(), None);
                    assert_eq!(project.github_url, None);
                }
                _ => {
                    assert!(project.has_detail_page(), "{}", project.title);
                    assert!(project.github_url.is_some());
                }
            }
        }
    }

    #[test]
    fn test_every_detail_link_has_a_page() {
        let slugs = PROJECTS.iter().filter_map(|p| p.detail_slug()).collect::<Vec<_>>();
        assert_eq!(slugs, vec!["photograph", "expense", "food", "weather"]);

        for project in PROJECTS.iter().filter(|p| p.has_detail_page()) {
            let detail = project
                .detail_slug()
                .and_then(project_detail)
                .expect("detail page");
            assert_eq!(detail.path(), project.project_url);
            assert_eq!(Some(detail.demo_url), project.live_url);
            assert_eq!(Some(detail.code_url), project.github_url);
        }
    }

    #[test]
    fn test_unknown_detail_slug() {
        assert_eq!(project_detail("resume"), None);
        assert_eq!(project_detail(""), None);
        assert_eq!(project_detail("weather").map(|d| d.title), Some("Weather App"));
    }

    #[test]
    fn test_skill_proficiency_in_range() {
        assert!(SKILLS.iter().all(|s| s.proficiency <= 100));
    }
}
