//! Client-side route table and the post-login destination rule.
//!
//! Paths are plain constants with no encoded parameters. The router in
//! `app.rs`, the sidebars, and every redirect use these so a path is spelled
//! exactly once.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Unauthenticated entry page (login).
pub const LOGIN: &str = "/";
pub const HOME_ADMIN: &str = "/homeadmin";
pub const HOME_MENTOR: &str = "/homementor";
pub const HOME_MENTEE: &str = "/homementee";
pub const INPUT_CLASS: &str = "/inputclass";
pub const INPUT_MEMBER: &str = "/inputmember";
pub const INPUT_TASK: &str = "/inputtask";
pub const TASK: &str = "/task";
pub const FORUM_MENTEE: &str = "/forummentee";
pub const FORUM_MENTOR: &str = "/forummentor";
pub const PROFILE_MENTEE: &str = "/profilementee";
pub const PROFILE_MENTOR: &str = "/profilementor";

/// Where the browser goes after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginDestination {
    /// A client-side route inside the app.
    Route(&'static str),
    /// A server-supplied URL for a pending external authorization step.
    External(String),
    /// The server answered with a role this client does not know.
    UnknownRole(String),
}

/// Pick the post-login destination from the server's `role` and `auth_gmail`.
///
/// Only mentees are sent to the external authorization URL, and only when
/// the server supplied one. Unrecognized roles are reported instead of being
/// redirected to `auth_gmail`.
pub fn login_destination(role: &str, auth_gmail: &str) -> LoginDestination {
    match Role::parse(role) {
        Some(Role::Admin) => LoginDestination::Route(HOME_ADMIN),
        Some(Role::Mentor) => LoginDestination::Route(HOME_MENTOR),
        Some(Role::Mentee) if auth_gmail.is_empty() => LoginDestination::Route(HOME_MENTEE),
        Some(Role::Mentee) => LoginDestination::External(auth_gmail.to_owned()),
        None => LoginDestination::UnknownRole(role.to_owned()),
    }
}
