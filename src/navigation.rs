//! Page routes and navigation intents

use serde::Serialize;

use crate::models::Role;

/// Pages of the library front-end the guard can send a visitor to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    Login,
    Dashboard,
    AdminDashboard,
    ManageBooks,
    EditBook,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login.html",
            Route::Dashboard => "/dashboard.html",
            Route::AdminDashboard => "/admin_dashboard.html",
            Route::ManageBooks => "/manage_books.html",
            Route::EditBook => "/edit_book.html",
        }
    }

    /// Landing page for a signed-in role: admins get the admin dashboard,
    /// every other role the standard one.
    pub fn landing_for(role: &Role) -> Self {
        if role.is_admin() {
            Route::AdminDashboard
        } else {
            Route::Dashboard
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// What the calling page must do once the guard has decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Navigation {
    /// Carry on rendering the current page
    Stay,
    /// Leave for another page
    Redirect(Route),
}

impl Navigation {
    pub fn is_stay(&self) -> bool {
        matches!(self, Navigation::Stay)
    }

    pub fn target(&self) -> Option<Route> {
        match self {
            Navigation::Stay => None,
            Navigation::Redirect(route) => Some(*route),
        }
    }
}
