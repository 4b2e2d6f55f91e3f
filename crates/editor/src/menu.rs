//! A toolkit-independent disclosure menu.
//!
//! The menu is plain data: sections of single-select groups, toggles, links
//! and actions, plus an open/closed flag. Whatever renders it sends back
//! [`MenuEvent`]s.

/// What a toggle or action item does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    SmallText,
    FullWidth,
    PublicResponses,
    LockResponses,
    CopyLink,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    /// A radio group; exactly the checked option is current.
    SingleSelect {
        label: String,
        options: Vec<SelectOption>,
    },
    Toggle {
        label: String,
        checked: bool,
        action: MenuAction,
    },
    Link {
        label: String,
        href: String,
        new_tab: bool,
    },
    Action {
        label: String,
        action: MenuAction,
    },
}

impl MenuItem {
    pub fn label(&self) -> &str {
        match self {
            Self::SingleSelect { label, .. }
            | Self::Toggle { label, .. }
            | Self::Link { label, .. }
            | Self::Action { label, .. } => label,
        }
    }
}

/// Input coming back from the rendered menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// An option of the single-select group was picked.
    Select(String),
    Toggle(MenuAction, bool),
    Activate(MenuAction),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureMenu {
    open: bool,
    sections: Vec<Vec<MenuItem>>,
}

impl DisclosureMenu {
    pub fn new(sections: Vec<Vec<MenuItem>>) -> Self {
        Self { open: false, sections }
    }

    pub fn with_open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn sections(&self) -> &[Vec<MenuItem>] {
        &self.sections
    }

    /// First item carrying `label`, across all sections.
    pub fn item(&self, label: &str) -> Option<&MenuItem> {
        self.sections.iter().flatten().find(|i| i.label() == label)
    }

    /// Checked state of the toggle labelled `label`.
    pub fn toggle_state(&self, label: &str) -> Option<bool> {
        match self.item(label)? {
            MenuItem::Toggle { checked, .. } => Some(*checked),
            _ => None,
        }
    }

    /// Value of the checked option in the single-select group labelled `label`.
    pub fn selected(&self, label: &str) -> Option<&str> {
        match self.item(label)? {
            MenuItem::SingleSelect { options, .. } => options
                .iter()
                .find(|o| o.checked)
                .map(|o| o.value.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DisclosureMenu {
        DisclosureMenu::new(vec![
            vec![MenuItem::SingleSelect {
                label: "Size".into(),
                options: vec![
                    SelectOption { label: "S".into(), value: "s".into(), checked: false },
                    SelectOption { label: "M".into(), value: "m".into(), checked: true },
                ],
            }],
            vec![MenuItem::Toggle {
                label: "Small text".into(),
                checked: true,
                action: MenuAction::SmallText,
            }],
        ])
    }

    #[test]
    fn starts_closed_unless_opened() {
        assert!(!sample().is_open());
        assert!(sample().with_open(true).is_open());
    }

    #[test]
    fn lookups_by_label() {
        let menu = sample();
        assert_eq!(menu.selected("Size"), Some("m"));
        assert_eq!(menu.toggle_state("Small text"), Some(true));
        assert_eq!(menu.toggle_state("Size"), None);
        assert!(menu.item("Nope").is_none());
    }
}
