//! Sidebar menu model, logout confirmation and the navigation collaborator.

use crate::i18n::LanguageStrings;

/// Routing collaborator. Target resolution lives outside this crate.
pub trait Navigator: Send + Sync {
    /// Leave the signup wizard after the account was created.
    fn leave_signup(&self);
}

/// Entries of the main sidebar, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItem {
    Dashboard,
    Courses,
    Attendance,
    Reports,
    Settings,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Dashboard,
        MenuItem::Courses,
        MenuItem::Attendance,
        MenuItem::Reports,
        MenuItem::Settings,
    ];

    /// Route prefix the item links to
    pub fn route(self) -> &'static str {
        match self {
            MenuItem::Dashboard => "/dashboard",
            MenuItem::Courses => "/courses",
            MenuItem::Attendance => "/attendance",
            MenuItem::Reports => "/reports",
            MenuItem::Settings => "/settings",
        }
    }

    pub fn label(self, strings: &LanguageStrings) -> &'static str {
        match self {
            MenuItem::Dashboard => strings.menu_dashboard,
            MenuItem::Courses => strings.menu_courses,
            MenuItem::Attendance => strings.menu_attendance,
            MenuItem::Reports => strings.menu_reports,
            MenuItem::Settings => strings.menu_settings,
        }
    }

    /// Whether `path` is this item's route or nested below it.
    fn matches(self, path: &str) -> bool {
        let route = self.route();
        match path.strip_prefix(route) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }
}

/// The sidebar item to highlight for the current path.
///
/// Matching is on whole path segments, so `/coursesarchive` does not
/// highlight Courses. The longest matching route wins.
pub fn active_item(path: &str) -> Option<MenuItem> {
    MenuItem::ALL
        .iter()
        .copied()
        .filter(|item| item.matches(path))
        .max_by_key(|item| item.route().len())
}

/// Logout confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutDialog {
    #[default]
    Closed,
    Open,
}

impl LogoutDialog {
    pub fn is_open(self) -> bool {
        self == LogoutDialog::Open
    }

    /// The logout menu entry was pressed.
    pub fn open(&mut self) {
        *self = LogoutDialog::Open;
    }

    pub fn cancel(&mut self) {
        *self = LogoutDialog::Closed;
    }

    /// Confirm the logout. Returns `true` only if the dialog was showing,
    /// in which case the caller should end the session.
    pub fn confirm(&mut self) -> bool {
        let was_open = self.is_open();
        *self = LogoutDialog::Closed;
        was_open
    }
}
