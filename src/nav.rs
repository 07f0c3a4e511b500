//! Navigation bar state: which link is highlighted, whether the page has
//! scrolled past the chrome threshold, and whether the mobile drawer is open.
//!
//! Everything here is plain Rust driven by discrete events so the navbar
//! component only has to forward browser events and render the result.

mod link;
mod menu;
mod route;
mod scroll;
mod section;

pub use link::{NavLink, SocialIcon, SocialLink};
pub use menu::{MenuController, MenuEvent, MenuState};
pub use route::{FixedRoute, RouteMode, RouteSectionMapper};
pub use scroll::{ScrollTracker, DEFAULT_SCROLL_THRESHOLD};
pub use section::{
    EmptyLayout, Extent, SectionBoundaryResolver, SectionLayout, DEFAULT_SECTIONS,
    DEFAULT_SECTION_BIAS,
};

use crate::config::{ConfigError, SiteConfig};

/// The link that should currently be highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveSection {
    #[default]
    None,
    /// Resolved from the scroll position on the root page.
    Section(String),
    /// Pinned by a dedicated route such as `/resume`.
    Route(String),
}

impl ActiveSection {
    pub fn key(&self) -> Option<&str> {
        match self {
            ActiveSection::None => None,
            ActiveSection::Section(id) | ActiveSection::Route(id) => Some(id),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, ActiveSection::None)
    }
}

/// Derived values produced by one event, computed from a single offset.
#[derive(Debug, Clone, PartialEq)]
pub struct NavUpdate {
    pub is_scrolled: bool,
    pub active: ActiveSection,
}

/// Per-instance navigation state. Nothing here is shared between navbars.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationController {
    scroll: ScrollTracker,
    routes: RouteSectionMapper,
    resolver: SectionBoundaryResolver,
    menu: MenuController,
    mode: RouteMode,
    active: ActiveSection,
    last_section: Option<String>,
    mounted: bool,
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new(
            ScrollTracker::default(),
            RouteSectionMapper::default(),
            SectionBoundaryResolver::default(),
        )
    }
}

impl NavigationController {
    pub fn new(
        scroll: ScrollTracker,
        routes: RouteSectionMapper,
        resolver: SectionBoundaryResolver,
    ) -> Self {
        let last_section = resolver.sections().first().cloned();
        let active = last_section
            .clone()
            .map(ActiveSection::Section)
            .unwrap_or_default();
        Self {
            scroll,
            routes,
            resolver,
            menu: MenuController::new(),
            mode: RouteMode::Track,
            active,
            last_section,
            mounted: false,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            ScrollTracker::new(config.scroll_threshold),
            config.route_mapper(),
            config.resolver()?,
        ))
    }

    /// Starts observing. Resolves immediately so the first render is correct
    /// without waiting for a scroll event.
    pub fn mount<L>(&mut self, path: &str, offset: f64, layout: &L) -> Option<NavUpdate>
    where
        L: SectionLayout + ?Sized,
    {
        self.mounted = true;
        log::debug!("navigation mounted at {path}");
        self.on_route_change(path, offset, layout)
    }

    /// Stops observing. Every later event is ignored.
    pub fn unmount(&mut self) {
        if self.mounted {
            log::debug!("navigation unmounted");
        }
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn on_scroll<L>(&mut self, offset: f64, layout: &L) -> Option<NavUpdate>
    where
        L: SectionLayout + ?Sized,
    {
        if !self.mounted {
            return None;
        }
        self.scroll.observe(offset);
        if self.mode.is_tracking() {
            self.track(offset, layout);
        }
        Some(self.snapshot())
    }

    /// Section extents move on resize, so this is resolved like a scroll.
    pub fn on_resize<L>(&mut self, offset: f64, layout: &L) -> Option<NavUpdate>
    where
        L: SectionLayout + ?Sized,
    {
        self.on_scroll(offset, layout)
    }

    pub fn on_route_change<L>(&mut self, path: &str, offset: f64, layout: &L) -> Option<NavUpdate>
    where
        L: SectionLayout + ?Sized,
    {
        if !self.mounted {
            return None;
        }
        self.scroll.observe(offset);
        let mode = self.routes.map(path);
        match &mode {
            RouteMode::Fixed(id) => self.active = ActiveSection::Route(id.clone()),
            RouteMode::Cleared => self.active = ActiveSection::None,
            RouteMode::Track => self.track(offset, layout),
        }
        self.mode = mode;
        Some(self.snapshot())
    }

    fn track<L>(&mut self, offset: f64, layout: &L)
    where
        L: SectionLayout + ?Sized,
    {
        if let Some(id) = self.resolver.resolve(offset, layout) {
            if self.last_section.as_deref() != Some(id) {
                log::trace!("active section -> {id}");
                self.last_section = Some(id.to_string());
            }
        }
        // no match keeps the last resolved section
        self.active = self
            .last_section
            .clone()
            .map(ActiveSection::Section)
            .unwrap_or_default();
    }

    fn snapshot(&self) -> NavUpdate {
        NavUpdate {
            is_scrolled: self.scroll.scrolled(),
            active: self.active.clone(),
        }
    }

    /// Follows a link: the drawer is closed as part of the same action.
    /// Returns the href to navigate to.
    pub fn activate<'a>(&mut self, link: &'a NavLink) -> &'a str {
        if self.mounted {
            self.menu.link_activated();
        }
        &link.href
    }

    /// Internal social links behave like nav links; external ones open a new tab
    /// and leave the drawer alone.
    pub fn activate_social<'a>(&mut self, link: &'a SocialLink) -> &'a str {
        if self.mounted && link.internal {
            self.menu.link_activated();
        }
        &link.href
    }

    pub fn open_menu(&mut self) {
        if self.mounted {
            self.menu.open();
        }
    }

    pub fn close_menu(&mut self) {
        if self.mounted {
            self.menu.close();
        }
    }

    pub fn toggle_menu(&mut self) -> bool {
        if self.mounted {
            self.menu.toggle();
        }
        self.menu.is_open()
    }

    pub fn dismiss_menu(&mut self) {
        if self.mounted {
            self.menu.dismiss();
        }
    }

    /// Keyboard handler for the page. Only Escape is bound: it closes an open
    /// drawer. Returns whether the key was consumed.
    pub fn on_key(&mut self, key: &str) -> bool {
        if !self.mounted || key != "Escape" || !self.menu.is_open() {
            return false;
        }
        self.menu.apply(MenuEvent::Escape);
        true
    }

    pub fn set_menu_open(&mut self, open: bool) {
        if self.mounted {
            self.menu.set_open(open);
        }
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn menu_state(&self) -> MenuState {
        self.menu.state()
    }

    pub fn is_scrolled(&self) -> bool {
        self.scroll.scrolled()
    }

    pub fn active(&self) -> &ActiveSection {
        &self.active
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        match (self.active.key(), link.section.as_deref()) {
            (Some(active), Some(section)) => active == section,
            _ => false,
        }
    }

    /// Index of the single highlighted link, if any. When several links share a
    /// section the first one wins.
    pub fn highlighted(&self, links: &[NavLink]) -> Option<usize> {
        links.iter().position(|l| self.is_active(l))
    }
}
