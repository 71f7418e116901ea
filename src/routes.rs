//! Which pages a session may see.
//!
//! One table instead of role checks scattered through views: the router guard,
//! the nav bar and the Moderate page all ask [`can_visit`] / [`visible_routes`].

use crate::session::{has_role, CurrentUser, ROLE_ADMIN, ROLE_MODERATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    LoggedIn,
    /// Logged in and holding at least one of the roles.
    AnyRole(&'static [&'static str]),
}

impl Access {
    pub fn allows(self, user: Option<&CurrentUser>) -> bool {
        match self {
            Access::Public => true,
            Access::LoggedIn => user.map(|user| user.logged_in).unwrap_or(false),
            Access::AnyRole(roles) => roles.iter().any(|role| has_role(user, role)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRule {
    pub path: &'static str,
    pub title: &'static str,
    pub access: Access,
    /// Listed in the nav bar.
    pub in_nav: bool,
}

pub const HOME_PATH: &str = "/";
pub const MODERATE_PATH: &str = "/moderate";

pub const MODERATION_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MODERATOR];

pub const ROUTES: &[RouteRule] = &[
    RouteRule {
        path: HOME_PATH,
        title: "Home",
        access: Access::Public,
        in_nav: false,
    },
    RouteRule {
        path: MODERATE_PATH,
        title: "Moderate",
        access: Access::AnyRole(MODERATION_ROLES),
        in_nav: true,
    },
];

pub fn rule_for(path: &str) -> Option<&'static RouteRule> {
    ROUTES.iter().find(|rule| rule.path == path)
}

/// Unknown paths are not visitable.
pub fn can_visit(user: Option<&CurrentUser>, path: &str) -> bool {
    rule_for(path)
        .map(|rule| rule.access.allows(user))
        .unwrap_or(false)
}

pub fn visible_routes(user: Option<&CurrentUser>) -> Vec<&'static RouteRule> {
    ROUTES.iter().filter(|rule| rule.access.allows(user)).collect()
}

pub fn nav_routes(user: Option<&CurrentUser>) -> Vec<&'static RouteRule> {
    visible_routes(user).into_iter().filter(|rule| rule.in_nav).collect()
}
