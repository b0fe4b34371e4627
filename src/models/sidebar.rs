//! Responsive sidebar state.
//!
//! The sidebar is driven by two flags plus the viewport class:
//!
//! | Viewport | `is_open` | `is_collapsed` | Mode |
//! |----------|-----------|----------------|------|
//! | Mobile   | false     | any            | [`SidebarMode::Closed`] |
//! | Mobile   | true      | any            | [`SidebarMode::Overlay`] |
//! | Desktop  | any       | false          | [`SidebarMode::Pinned`] |
//! | Desktop  | any       | true           | [`SidebarMode::Collapsed`] |
//!
//! The desktop sidebar is always visible, so `is_open` only matters on mobile,
//! and collapse only matters on desktop.

/// Viewport class relative to the desktop breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Viewport {
    #[default]
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn from_is_desktop(is_desktop: bool) -> Self {
        if is_desktop {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }
}

/// Visible presentation derived from [`SidebarState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarMode {
    /// Off-canvas (mobile).
    Closed,
    /// Drawn over the page with a backdrop (mobile).
    Overlay,
    /// Full width beside the page (desktop).
    Pinned,
    /// Icon rail beside the page (desktop).
    Collapsed,
}

/// Sidebar flags. Lives for the page lifetime only; never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    is_open: bool,
    is_collapsed: bool,
    viewport: Viewport,
}

impl SidebarState {
    /// Initial state for a viewport: open on desktop, closed on mobile.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            is_open: viewport.is_desktop(),
            is_collapsed: false,
            viewport,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_collapsed(&self) -> bool {
        self.is_collapsed
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn mode(&self) -> SidebarMode {
        match (self.viewport, self.is_open, self.is_collapsed) {
            (Viewport::Mobile, false, _) => SidebarMode::Closed,
            (Viewport::Mobile, true, _) => SidebarMode::Overlay,
            (Viewport::Desktop, _, false) => SidebarMode::Pinned,
            (Viewport::Desktop, _, true) => SidebarMode::Collapsed,
        }
    }

    /// Whether nav items show text labels (icons only when collapsed).
    pub fn shows_labels(&self) -> bool {
        self.mode() != SidebarMode::Collapsed
    }

    /// Whether the dimming backdrop behind the overlay is shown.
    pub fn shows_backdrop(&self) -> bool {
        self.mode() == SidebarMode::Overlay
    }

    /// Viewport crossed the breakpoint: desktop opens, mobile closes.
    ///
    /// Reports of the same viewport are ignored so an open mobile overlay
    /// survives unrelated layout changes.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport != viewport {
            *self = Self {
                is_open: viewport.is_desktop(),
                is_collapsed: self.is_collapsed,
                viewport,
            };
        }
    }

    /// Mobile menu button.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn toggle_collapse(&mut self) {
        self.is_collapsed = !self.is_collapsed;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Sidebar header button: close on mobile, collapse/expand on desktop.
    pub fn header_action(&mut self) {
        match self.viewport {
            Viewport::Mobile => self.close(),
            Viewport::Desktop => self.toggle_collapse(),
        }
    }

    /// A route was navigated to: the mobile overlay gets out of the way.
    pub fn navigated(&mut self) {
        if self.viewport == Viewport::Mobile {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_modes() {
        assert_eq!(SidebarState::new(Viewport::Mobile).mode(), SidebarMode::Closed);
        assert_eq!(SidebarState::new(Viewport::Desktop).mode(), SidebarMode::Pinned);
        assert_eq!(SidebarState::default().mode(), SidebarMode::Closed);
    }

    #[test]
    fn test_mobile_toggle_and_navigation() {
        let mut state = SidebarState::new(Viewport::Mobile);
        state.toggle();
        assert_eq!(state.mode(), SidebarMode::Overlay);
        assert!(state.shows_backdrop());

        state.navigated();
        assert_eq!(state.mode(), SidebarMode::Closed);
        assert!(!state.shows_backdrop());
    }

    #[test]
    fn test_header_action_per_viewport() {
        let mut mobile = SidebarState::new(Viewport::Mobile);
        mobile.toggle();
        mobile.header_action();
        assert_eq!(mobile.mode(), SidebarMode::Closed);
        assert!(!mobile.is_collapsed());

        let mut desktop = SidebarState::new(Viewport::Desktop);
        desktop.header_action();
        assert_eq!(desktop.mode(), SidebarMode::Collapsed);
        assert!(!desktop.shows_labels());
        desktop.header_action();
        assert_eq!(desktop.mode(), SidebarMode::Pinned);
    }

    #[test]
    fn test_navigation_keeps_desktop_layout() {
        let mut state = SidebarState::new(Viewport::Desktop);
        state.toggle_collapse();
        state.navigated();
        assert_eq!(state.mode(), SidebarMode::Collapsed);
        assert!(state.is_open());
    }

    #[test]
    fn test_crossing_breakpoint() {
        let mut state = SidebarState::new(Viewport::Mobile);
        state.set_viewport(Viewport::Desktop);
        assert_eq!(state.mode(), SidebarMode::Pinned);
        assert!(state.is_open());

        state.set_viewport(Viewport::Mobile);
        assert_eq!(state.mode(), SidebarMode::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn test_same_viewport_report_is_ignored() {
        let mut state = SidebarState::new(Viewport::Mobile);
        state.toggle();
        state.set_viewport(Viewport::Mobile);
        assert_eq!(state.mode(), SidebarMode::Overlay);
    }

    #[test]
    fn test_collapse_is_desktop_only() {
        let mut state = SidebarState::new(Viewport::Desktop);
        state.toggle_collapse();
        state.set_viewport(Viewport::Mobile);
        state.toggle();
        assert_eq!(state.mode(), SidebarMode::Overlay);
        assert!(state.shows_labels());

        state.set_viewport(Viewport::Desktop);
        assert_eq!(state.mode(), SidebarMode::Collapsed);
    }
}
