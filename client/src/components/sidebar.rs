//! Role-specific navigation sidebars.
//!
//! ARCHITECTURE
//! ============
//! Menus are static tables keyed by role; the component renders whichever
//! table matches and owns the logout entry, which drives
//! `state::logout::LogoutFlow` through the shared dialog host.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::dialog::DialogState;
use crate::routes;
use crate::state::logout::LogoutFlow;
use crate::state::session::{Role, SessionContext};
use crate::util::auth::apply_logout_effects;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Task,
    People,
    Profile,
}

impl NavIcon {
    fn class(self) -> &'static str {
        match self {
            Self::Home => "sidebar__icon sidebar__icon--home",
            Self::Task => "sidebar__icon sidebar__icon--task",
            Self::People => "sidebar__icon sidebar__icon--people",
            Self::Profile => "sidebar__icon sidebar__icon--profile",
        }
    }
}

/// One menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// DOM id used by end-to-end selectors; the mentee Home entry has none.
    pub id: Option<&'static str>,
    pub label: &'static str,
    pub route: &'static str,
    pub icon: NavIcon,
}

const ADMIN_NAV: &[NavItem] = &[
    NavItem { id: Some("nav-home"), label: "Home", route: routes::HOME_ADMIN, icon: NavIcon::Home },
    NavItem { id: Some("nav-inputClass"), label: "Input Class", route: routes::INPUT_CLASS, icon: NavIcon::Task },
    NavItem { id: Some("nav-inputMember"), label: "Input Member", route: routes::INPUT_MEMBER, icon: NavIcon::People },
];

const MENTOR_NAV: &[NavItem] = &[
    NavItem { id: Some("home"), label: "Home", route: routes::HOME_MENTOR, icon: NavIcon::Home },
    NavItem { id: Some("nav-task"), label: "Create Task", route: routes::INPUT_TASK, icon: NavIcon::Task },
    NavItem { id: Some("nav-forum"), label: "Forum", route: routes::FORUM_MENTOR, icon: NavIcon::People },
    NavItem { id: Some("nav-profile"), label: "Profile", route: routes::PROFILE_MENTOR, icon: NavIcon::Profile },
];

const MENTEE_NAV: &[NavItem] = &[
    NavItem { id: None, label: "Home", route: routes::HOME_MENTEE, icon: NavIcon::Home },
    NavItem { id: Some("nav-task"), label: "Task", route: routes::TASK, icon: NavIcon::Task },
    NavItem { id: Some("nav-forum"), label: "Forum", route: routes::FORUM_MENTEE, icon: NavIcon::People },
    NavItem { id: Some("nav-profile"), label: "Profile", route: routes::PROFILE_MENTEE, icon: NavIcon::Profile },
];

/// Menu table for `role`.
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Mentor => MENTOR_NAV,
        Role::Mentee => MENTEE_NAV,
    }
}

/// Fixed left sidebar with brand, role menu, and logout.
#[component]
pub fn SideBar(role: Role) -> impl IntoView {
    let session = SessionContext::expect();
    let dialogs = DialogState::expect();
    let logout = expect_context::<RwSignal<LogoutFlow>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let has_session = session.get_session_untracked().is_some();
        let (next, effects) = logout.get_untracked().begin(has_session);
        logout.set(next);
        apply_logout_effects(&effects, session, dialogs, &navigate);
    };

    view! {
        <nav class="sidebar">
            <p class="sidebar__brand">"Mentutor"</p>
            <p class="sidebar__brand sidebar__brand--compact">"M"</p>

            <div class="sidebar__menu">
                {nav_items(role)
                    .iter()
                    .map(|item| {
                        view! {
                            <A href=item.route>
                                <div id=item.id class="sidebar__item">
                                    <span class=item.icon.class() aria-hidden="true"></span>
                                    <h3 class="sidebar__label">{item.label}</h3>
                                </div>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div id="nav-logout" class="sidebar__item sidebar__logout" on:click=on_logout>
                <span class="sidebar__icon sidebar__icon--logout" aria-hidden="true"></span>
                <h3 class="sidebar__label">"Logout"</h3>
            </div>
        </nav>
    }
}
