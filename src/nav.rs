/// A distinct, anchorable block of the page, listed in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Education,
    Resume,
    Contact,
    Social,
}

impl Section {
    /// Order in which the page body lays out its sections. The navigation bar
    /// sits above and the footer below.
    pub const ORDER: [Section; 8] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Education,
        Section::Resume,
        Section::Contact,
        Section::Social,
    ];

    /// Sections reachable from the navigation bar.
    pub const NAV_LINKS: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Resume,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Hero => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Education => "education",
            Section::Resume => "resume",
            Section::Contact => "contact",
            Section::Social => "connect",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Education => "Education",
            Section::Resume => "Resume",
            Section::Contact => "Contact",
            Section::Social => "Connect",
        }
    }
}

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    menu_open: bool,
}

impl NavState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close(&mut self) {
        self.menu_open = false;
    }

    /// Glyph for the hamburger button.
    pub fn toggle_icon(&self) -> &'static str {
        if self.menu_open {
            "✖"
        } else {
            "☰"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_menu_starts_closed() {
        let nav = NavState::new();
        assert!(!nav.is_open());
        assert_eq!(nav.toggle_icon(), "☰");
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let mut nav = NavState::new();
        nav.toggle();
        assert!(nav.is_open());
        assert_eq!(nav.toggle_icon(), "✖");
        nav.toggle();
        assert!(!nav.is_open());

        let mut opened = NavState::new();
        opened.toggle();
        opened.toggle();
        opened.toggle();
        assert!(opened.is_open());
    }

    #[test]
    fn test_selecting_link_closes_menu() {
        let mut nav = NavState::new();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());

        // closing an already closed menu is a no-op
        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn test_section_order() {
        let anchors = Section::ORDER
            .iter()
            .map(|s| s.anchor())
            .collect::<Vec<_>>();
        assert_eq!(
            anchors,
            vec!["home", "about", "skills", "projects", "education", "resume", "contact", "connect"]
        );
    }

    #[test]
    fn test_anchors_are_unique() {
        let anchors = Section::ORDER
            .iter()
            .map(|s| s.anchor())
            .collect::<HashSet<_>>();
        assert_eq!(anchors.len(), Section::ORDER.len());
    }

    #[test]
    fn test_nav_links_point_at_rendered_sections() {
        for link in Section::NAV_LINKS {
            assert!(Section::ORDER.contains(&link));
            assert_eq!(link.href(), format!("#{}", link.label().to_lowercase()));
        }
    }
}
