//! Frame for authenticated pages: role sidebar plus content column.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::sidebar::SideBar;
use crate::state::logout::LogoutFlow;
use crate::state::session::SessionContext;
use crate::util::auth::install_unauth_redirect;

/// Wraps page content with the sidebar for the signed-in role.
/// Redirects to the login page when there is no session.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = SessionContext::expect();
    let logout = expect_context::<RwSignal<LogoutFlow>>();
    install_unauth_redirect(session, logout, use_navigate());

    view! {
        <div class="layout">
            {move || session.role().map(|role| view! { <SideBar role=role/> })}
            <main class="layout__content">{children()}</main>
        </div>
    }
}
