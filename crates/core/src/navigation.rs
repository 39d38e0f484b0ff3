//! Route table and side panel
//!
//! Flat, declarative: one path per page, no nesting, guards or redirects.
//! A destination is active when its path equals the current location
//! exactly.

use crate::i18n::Translator;

/// Top-level destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Emails,
    Tasks,
    Calendar,
    Excel,
    Logs,
}

impl Route {
    /// Side panel order.
    pub const ALL: [Self; 6] =
        [Self::Dashboard, Self::Emails, Self::Tasks, Self::Calendar, Self::Excel, Self::Logs];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Emails => "/emails",
            Self::Tasks => "/tasks",
            Self::Calendar => "/calendar",
            Self::Excel => "/excel",
            Self::Logs => "/logs",
        }
    }

    /// Catalog key of the side panel label.
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::Dashboard => "home",
            Self::Emails => "emails",
            Self::Tasks => "tasks",
            Self::Calendar => "calendar",
            Self::Excel => "excel",
            Self::Logs => "logs",
        }
    }

    /// Exact-match lookup.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}

/// One side panel entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub route: Route,
    pub label: String,
    pub active: bool,
}

/// Side panel entries for `current_path`, labelled in the translator's language.
pub fn nav_items(current_path: &str, translator: Translator) -> Vec<NavItem> {
    Route::ALL
        .into_iter()
        .map(|route| NavItem {
            route,
            label: translator.t(route.label_key()).to_string(),
            active: route.path() == current_path,
        })
        .collect()
}

/// Dashboard shortcut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label_key: &'static str,
    /// `None` for actions without a destination yet (search).
    pub target: Option<Route>,
}

pub const fn quick_actions() -> [QuickAction; 4] {
    [
        QuickAction { label_key: "newMessage", target: Some(Route::Emails) },
        QuickAction { label_key: "newTable", target: Some(Route::Excel) },
        QuickAction { label_key: "schedule", target: Some(Route::Calendar) },
        QuickAction { label_key: "search", target: None },
    ]
}

#[cfg(test)]
mod tests {
    use deskmate_domain::Language;

    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Route::from_path("/tasks/"), None);
        assert_eq!(Route::from_path("/Tasks"), None);
        assert_eq!(Route::from_path(""), None);
    }

    #[test]
    fn exactly_one_active_item() {
        let items = nav_items("/calendar", Translator::new(Language::En));
        let active: Vec<_> = items.iter().filter(|item| item.active).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].route, Route::Calendar);
    }

    #[test]
    fn root_does_not_prefix_match() {
        let items = nav_items("/logs", Translator::new(Language::En));
        assert!(!items[0].active);
    }

    #[test]
    fn labels_follow_language() {
        let items = nav_items("/", Translator::new(Language::Fr));
        assert_eq!(items[0].label, "Accueil");
        assert!(items[0].active);
    }
}
