/// Visibility of the mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User actions that move the drawer between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger button.
    Trigger,
    /// Click on the backdrop behind the open drawer.
    Backdrop,
    /// A navigation link inside the drawer was followed.
    LinkActivated,
    /// The Escape key.
    Escape,
}

impl MenuState {
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Trigger) => MenuState::Open,
            (MenuState::Open, MenuEvent::Trigger)
            | (MenuState::Open, MenuEvent::Backdrop)
            | (MenuState::Open, MenuEvent::LinkActivated)
            | (MenuState::Open, MenuEvent::Escape) => MenuState::Closed,
            (state, _) => state,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the `data-state` attribute on the drawer and trigger.
    pub fn as_str(self) -> &'static str {
        match self {
            MenuState::Closed => "closed",
            MenuState::Open => "open",
        }
    }
}

/// Owns the drawer state for one navbar instance. Always starts closed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn apply(&mut self, event: MenuEvent) -> MenuState {
        self.state = self.state.next(event);
        self.state
    }

    pub fn open(&mut self) {
        self.state = MenuState::Open;
    }

    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }

    pub fn toggle(&mut self) -> bool {
        self.apply(MenuEvent::Trigger).is_open()
    }

    pub fn dismiss(&mut self) {
        self.apply(MenuEvent::Backdrop);
    }

    /// Link activation always leaves the drawer closed.
    pub fn link_activated(&mut self) {
        self.apply(MenuEvent::LinkActivated);
    }

    /// Mirrors an open-change reported by the drawer element itself.
    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        use MenuEvent::*;
        use MenuState::*;

        assert_eq!(Closed.next(Trigger), Open);
        assert_eq!(Closed.next(Backdrop), Closed);
        assert_eq!(Closed.next(LinkActivated), Closed);
        assert_eq!(Open.next(Trigger), Closed);
        assert_eq!(Open.next(Backdrop), Closed);
        assert_eq!(Open.next(LinkActivated), Closed);
        assert_eq!(Open.next(Escape), Closed);
        assert_eq!(Closed.next(Escape), Closed);
    }

    #[test]
    fn test_starts_closed() {
        let menu = MenuController::new();
        assert_eq!(menu.state(), MenuState::Closed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut menu = MenuController::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.toggle());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_open_close_idempotent() {
        let mut menu = MenuController::new();
        menu.open();
        menu.open();
        assert!(menu.is_open());
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_dismiss_and_link_close() {
        let mut menu = MenuController::new();
        menu.open();
        menu.dismiss();
        assert!(!menu.is_open());

        menu.open();
        menu.link_activated();
        assert!(!menu.is_open());

        // link activation on a closed drawer keeps it closed
        menu.link_activated();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_set_open() {
        let mut menu = MenuController::new();
        menu.set_open(true);
        assert_eq!(menu.state(), MenuState::Open);
        menu.set_open(false);
        assert_eq!(menu.state(), MenuState::Closed);
    }

    #[test]
    fn test_state_attribute() {
        assert_eq!(MenuState::Closed.as_str(), "closed");
        assert_eq!(MenuState::Open.as_str(), "open");
    }
}
