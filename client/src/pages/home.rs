//! Role home pages.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::dialog::DialogState;
use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::net::api::{self, ApiClient};
use crate::net::types::ClassSummary;
use crate::state::session::{Role, SessionContext, SessionState};
use crate::util::auth::{RELOGIN_MESSAGE, handle_api_error};
use crate::util::mount::MountGuard;
use crate::util::task::spawn_request;

/// Heading for a role's home page.
pub(crate) fn greeting(state: &SessionState) -> String {
    match (state.display_name(), state.session.as_ref().map(|s| s.role)) {
        (Some(name), _) => format!("Welcome, {name}"),
        (None, Some(Role::Admin)) => "Welcome, Admin".to_owned(),
        (None, Some(Role::Mentor)) => "Welcome, Mentor".to_owned(),
        (None, Some(Role::Mentee)) => "Welcome, Mentee".to_owned(),
        (None, None) => "Welcome".to_owned(),
    }
}

/// Admin home: every class known to the server.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    let session = SessionContext::expect();
    let dialogs = DialogState::expect();
    let api_config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let guard = MountGuard::install();

    let classes = RwSignal::new(Vec::<ClassSummary>::new());
    let loading = RwSignal::new(true);

    if session.get_session_untracked().is_some() {
        let client = ApiClient::new(api_config, session.token_untracked());
        spawn_request(async move {
            let result = api::fetch_classes(&client).await;
            if !guard.is_mounted() {
                return;
            }
            loading.set(false);
            match result {
                Ok(list) => classes.set(list),
                Err(err) => handle_api_error(&err, RELOGIN_MESSAGE, session, dialogs, &navigate),
            }
        });
    }

    view! {
        <Title text="Home Admin"/>
        <Layout>
            <section class="home-page">
                <h1 class="home-page__title">{move || session.state().with(greeting)}</h1>
                <h2 class="home-page__subtitle">"List Class"</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p class="home-page__empty">"Loading classes..."</p> }
                >
                    <Show
                        when=move || classes.with(|list| !list.is_empty())
                        fallback=|| view! { <p class="home-page__empty">"No classes yet"</p> }
                    >
                        <table id="table-class" class="table">
                            <thead>
                                <tr>
                                    <th>"No"</th>
                                    <th>"Class Name"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || classes.get().into_iter().enumerate()
                                    key=|(_, class)| class.id_class
                                    children=|(index, class)| {
                                        view! {
                                            <tr>
                                                <td>{index + 1}</td>
                                                <td>{class.class_name}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </Show>
            </section>
        </Layout>
    }
}

#[component]
pub fn MentorHomePage() -> impl IntoView {
    let session = SessionContext::expect();
    view! {
        <Title text="Home Mentor"/>
        <Layout>
            <section class="home-page">
                <h1 class="home-page__title">{move || session.state().with(greeting)}</h1>
            </section>
        </Layout>
    }
}

#[component]
pub fn MenteeHomePage() -> impl IntoView {
    let session = SessionContext::expect();
    view! {
        <Title text="Home Mentee"/>
        <Layout>
            <section class="home-page">
                <h1 class="home-page__title">{move || session.state().with(greeting)}</h1>
            </section>
        </Layout>
    }
}
