//! Navigation menu, smooth scrolling and active-section highlighting.

use crate::config::NavConfig;
use crate::env::{SectionBox, View};

/// Window offset that puts `section_top` just below the fixed nav bar.
pub fn scroll_target(section_top: f64, nav_height: f64) -> f64 {
    section_top - nav_height
}

/// Section the reader is in at `scroll_y`.
///
/// A section is active when `scroll_y` lies in `(top', top' + height]` where
/// `top' = top - nav_height - offset`. With overlapping matches the last one
/// in document order wins.
///
/// ```rust
/// use tablefront::env::SectionBox;
/// use tablefront::interaction::active_section;
///
/// let sections = vec![
///     SectionBox::new("home", 0.0, 600.0),
///     SectionBox::new("menu", 600.0, 800.0),
/// ];
/// let active = active_section(550.0, 70.0, 100.0, &sections).unwrap();
/// assert_eq!(active.id, "menu");
/// ```
pub fn active_section(
    scroll_y: f64,
    nav_height: f64,
    offset: f64,
    sections: &[SectionBox],
) -> Option<&SectionBox> {
    sections
        .iter()
        .filter(|section| {
            let top = section.top - nav_height - offset;
            scroll_y > top && scroll_y <= top + section.height
        })
        .last()
}

/// Mobile menu plus the link highlighting that follows scrolling.
#[derive(Clone, Debug)]
pub struct NavMenu {
    config: NavConfig,
    open: bool,
    active: Option<String>,
}

impl NavMenu {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            open: false,
            active: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    fn set_open<V: View>(&mut self, view: &mut V, open: bool) {
        if self.open != open {
            self.open = open;
            view.set_menu_open(open);
        }
    }

    pub fn hamburger_clicked<V: View>(&mut self, view: &mut V) {
        let open = !self.open;
        self.set_open(view, open);
    }

    /// A click landed somewhere on the page.
    pub fn document_clicked<V: View>(&mut self, view: &mut V, inside_menu: bool) {
        if !inside_menu {
            self.set_open(view, false);
        }
    }

    pub fn resized<V: View>(&mut self, view: &mut V, width: f64) {
        if width > self.config.desktop_breakpoint_px {
            self.set_open(view, false);
        }
    }

    /// A nav link to `href` was clicked: close the menu and scroll to the
    /// target section if the page has it.
    pub fn link_clicked<V: View>(&mut self, view: &mut V, href: &str) {
        self.set_open(view, false);

        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        let target = view.sections().into_iter().find(|s| s.id == id);
        if let Some(section) = target {
            let top = scroll_target(section.top, view.nav_height());
            view.scroll_to(top);
        }
    }

    /// Recompute the active link for the current scroll position.
    pub fn highlight<V: View>(&mut self, view: &mut V) {
        let sections = view.sections();
        let found = active_section(
            view.page_y(),
            view.nav_height(),
            self.config.highlight_offset_px,
            &sections,
        );
        if let Some(section) = found {
            if self.active.as_deref() != Some(section.id.as_str()) {
                view.set_active_link(&section.id);
                self.active = Some(section.id.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryView;

    fn page() -> MemoryView {
        MemoryView::new().with_layout(
            70.0,
            vec![
                SectionBox::new("home", 0.0, 700.0),
                SectionBox::new("menu", 700.0, 900.0),
                SectionBox::new("reservations", 1600.0, 800.0),
            ],
        )
    }

    #[test]
    fn hamburger_toggles() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());

        nav.hamburger_clicked(&mut view);
        assert!(view.menu_open());
        nav.hamburger_clicked(&mut view);
        assert!(!view.menu_open());
    }

    #[test]
    fn outside_click_closes_inside_click_does_not() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());
        nav.hamburger_clicked(&mut view);

        nav.document_clicked(&mut view, true);
        assert!(nav.is_open());
        nav.document_clicked(&mut view, false);
        assert!(!nav.is_open());
    }

    #[test]
    fn wide_resize_closes() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());
        nav.hamburger_clicked(&mut view);

        nav.resized(&mut view, 968.0);
        assert!(nav.is_open());
        nav.resized(&mut view, 969.0);
        assert!(!nav.is_open());
    }

    #[test]
    fn link_click_closes_and_scrolls_below_nav() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());
        nav.hamburger_clicked(&mut view);

        nav.link_clicked(&mut view, "#reservations");

        assert!(!view.menu_open());
        assert_eq!(view.scroll_requests(), &[1530.0]);
    }

    #[test]
    fn link_to_missing_section_only_closes() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());

        nav.link_clicked(&mut view, "#contact");
        nav.link_clicked(&mut view, "menu.html");

        assert!(view.scroll_requests().is_empty());
    }

    #[test]
    fn highlight_tracks_scroll_position() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());

        view.set_page_y(10.0);
        nav.highlight(&mut view);
        assert_eq!(view.active_link(), Some("home"));

        view.set_page_y(1500.0);
        nav.highlight(&mut view);
        assert_eq!(view.active_link(), Some("reservations"));
    }

    #[test]
    fn highlight_keeps_previous_when_nothing_matches() {
        let mut view = page();
        let mut nav = NavMenu::new(NavConfig::default());
        view.set_page_y(10.0);
        nav.highlight(&mut view);

        view.set_page_y(10_000.0);
        nav.highlight(&mut view);

        assert_eq!(nav.active(), Some("home"));
    }

    #[test]
    fn boundary_belongs_to_earlier_section() {
        let sections = vec![
            SectionBox::new("a", 0.0, 500.0),
            SectionBox::new("b", 500.0, 500.0),
        ];
        // a spans (-100, 400], b spans (400, 900]
        assert_eq!(active_section(400.0, 0.0, 100.0, &sections).unwrap().id, "a");
        assert_eq!(active_section(400.5, 0.0, 100.0, &sections).unwrap().id, "b");
        assert!(active_section(-100.0, 0.0, 100.0, &sections).is_none());
    }
}
