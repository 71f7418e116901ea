//! Logged-in identity and role checks.
//!
//! `App` calls [`use_current_user`] once and provides the resulting
//! [`SessionContext`]; everything below reads it with [`use_session`].

use crate::api::RequestDescriptor;
use crate::backend::{use_backend, use_backend_context, use_backend_mutation, QueryResult};
use crate::cache::QueryKey;
use crate::toast::use_toaster;
use leptos::logging::{error, log};
use leptos::*;
use leptos_router::use_navigate;
use serde::{Deserialize, Serialize};

pub const ROLE_USER: &str = "ROLE_USER";
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";
pub const ROLE_MODERATOR: &str = "ROLE_MODERATOR";

pub const CURRENT_USER_PATH: &str = "/api/currentUser";
pub const LOGOUT_PATH: &str = "/logout";

pub fn current_user_key() -> QueryKey {
    QueryKey::from("current user")
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub moderator: bool,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub proposed_alias: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GrantedAuthority {
    pub authority: String,
}

/// Body of `GET /api/currentUser`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CurrentUserResponse {
    pub user: User,
    #[serde(default)]
    pub roles: Vec<GrantedAuthority>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRoot {
    pub user: User,
    pub roles_list: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CurrentUser {
    pub logged_in: bool,
    pub root: Option<UserRoot>,
}

impl CurrentUser {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn from_response(response: Option<CurrentUserResponse>) -> Self {
        match response {
            Some(response) => Self {
                logged_in: true,
                root: Some(UserRoot {
                    roles_list: response.roles.into_iter().map(|role| role.authority).collect(),
                    user: response.user,
                }),
            },
            None => Self::logged_out(),
        }
    }

    /// Builds a logged-in user holding exactly `roles`.
    pub fn with_roles<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            logged_in: true,
            root: Some(UserRoot {
                user: User::default(),
                roles_list: roles.into_iter().map(Into::into).collect(),
            }),
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.root.as_ref().map(|root| &root.user)
    }

    pub fn display_name(&self) -> Option<String> {
        let user = self.user()?;
        Some(
            user.alias
                .clone()
                .or_else(|| user.full_name.clone())
                .unwrap_or_else(|| user.email.clone()),
        )
    }
}

/// True iff `user` is logged in and holds `role`. Missing users hold nothing.
pub fn has_role(user: Option<&CurrentUser>, role: &str) -> bool {
    user.filter(|user| user.logged_in)
        .and_then(|user| user.root.as_ref())
        .map(|root| root.roles_list.iter().any(|granted| granted == role))
        .unwrap_or(false)
}

/// The session as the rest of the app sees it.
#[derive(Clone, Copy)]
pub struct SessionContext {
    response: QueryResult<Option<CurrentUserResponse>>,
}

impl SessionContext {
    /// Logged-out default while the session is loading or after it failed.
    /// A failed refetch overrides whatever session was cached before it.
    pub fn user(&self) -> CurrentUser {
        session_user(self.response)
    }

    pub fn user_signal(&self) -> Signal<CurrentUser> {
        let response = self.response;
        Signal::derive(move || session_user(response))
    }

    /// False until the first `/api/currentUser` call settles either way.
    pub fn is_resolved(&self) -> bool {
        !self.response.is_loading.get()
    }

    pub fn has_role(&self, role: &str) -> bool {
        has_role(Some(&self.user()), role)
    }
}

fn session_user(response: QueryResult<Option<CurrentUserResponse>>) -> CurrentUser {
    if response.error.with(Option::is_some) {
        return CurrentUser::logged_out();
    }
    CurrentUser::from_response(response.data.get())
}

/// Reads `/api/currentUser`. Errors degrade to a logged-out session.
pub fn use_current_user() -> SessionContext {
    let response = use_backend(
        current_user_key(),
        RequestDescriptor::get(CURRENT_USER_PATH),
        None::<CurrentUserResponse>,
    );
    SessionContext { response }
}

/// The session provided by `App`, or a fresh one.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        let session = use_current_user();
        provide_context(session);
        session
    })
}

/// Posts `/logout`, drops the cached session and returns to `/`.
pub fn use_logout() -> Callback<()> {
    let logout = use_backend_mutation(|_: &()| RequestDescriptor::post(LOGOUT_PATH), vec![current_user_key()]);
    let backend = use_backend_context();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let logout = store_value(logout);

    Callback::new(move |_| {
        let logout = logout.get_value();
        let backend = backend.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match logout.mutate(()).await {
                Ok(_) => {
                    log!("[SESSION] Logged out");
                    toaster.info("Logged out");
                }
                Err(err) => {
                    error!("[SESSION] Logout failed: {}", err);
                    backend.invalidate(&[current_user_key()]);
                }
            }
            navigate("/", Default::default());
        });
    })
}
