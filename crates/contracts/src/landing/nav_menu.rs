//! Open/closed state of the mobile navigation menu.

/// Something that happened around the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The hamburger toggle was clicked
    Toggle,
    /// A link inside the menu was followed
    LinkFollowed,
    /// A click anywhere on the document
    DocumentClick { inside_menu: bool, inside_toggle: bool },
    KeyDown(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Apply an event; returns whether the state changed
    pub fn apply(&mut self, event: &MenuEvent) -> bool {
        match event {
            MenuEvent::Toggle => {
                self.toggle();
                true
            }
            MenuEvent::LinkFollowed => self.close(),
            MenuEvent::DocumentClick {
                inside_menu,
                inside_toggle,
            } => {
                if *inside_menu || *inside_toggle {
                    false
                } else {
                    self.close()
                }
            }
            MenuEvent::KeyDown(key) if key == "Escape" => self.close(),
            MenuEvent::KeyDown(_) => false,
        }
    }

    /// Value of `document.body.style.overflow`; scrolling is locked while open
    pub fn body_overflow(&self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }

    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}
