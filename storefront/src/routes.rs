//! Role-gated route resolution
//!
//! Pure decision table over the current role and the requested route.
//! Anonymous users are bounced off protected routes to the login screen;
//! back-office roles are bounced off the plain storefront screens to
//! their panels.

use shared::models::Role;

use crate::context::AppContext;

/// Navigable screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The catalog grid
    Home,
    Login,
    Register,
    About,
    Support,
    Basket,
    Favorites,
    Profile,
    ManagerPanel,
    AdminPanel,
}

impl Route {
    /// Routes that require a session
    fn is_protected(self) -> bool {
        matches!(
            self,
            Route::Basket
                | Route::Favorites
                | Route::Profile
                | Route::ManagerPanel
                | Route::AdminPanel
        )
    }

    /// Plain storefront screens back-office roles are redirected away from
    fn is_storefront_entry(self) -> bool {
        matches!(self, Route::Home | Route::Login | Route::Register)
    }
}

/// Outcome of resolving a route against the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the requested route
    Render(Route),
    /// Navigate elsewhere instead
    Redirect(Route),
}

/// Panel a back-office role lands on
fn panel_for(role: Role) -> Option<Route> {
    match role {
        Role::Admin => Some(Route::AdminPanel),
        Role::Manager => Some(Route::ManagerPanel),
        Role::Customer => None,
    }
}

/// Resolve a requested route for a user with `role` (`None` = anonymous)
pub fn resolve_route(route: Route, role: Option<Role>) -> RouteDecision {
    let Some(role) = role else {
        return if route.is_protected() {
            RouteDecision::Redirect(Route::Login)
        } else {
            RouteDecision::Render(route)
        };
    };

    if route.is_storefront_entry() {
        return match panel_for(role) {
            Some(panel) => RouteDecision::Redirect(panel),
            // Customers see the catalog; a logged-in customer opening
            // login/register is sent home
            None if route == Route::Home => RouteDecision::Render(route),
            None => RouteDecision::Redirect(Route::Home),
        };
    }

    RouteDecision::Render(route)
}

impl AppContext {
    /// Resolve a route against this context's session
    pub fn resolve_route(&self, route: Route) -> RouteDecision {
        resolve_route(route, self.role())
    }
}
