//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::dialog::{DialogHost, DialogState};
use crate::config::{API_BASE_META_NAME, ApiConfig};
use crate::pages::forum::{ForumMenteePage, ForumMentorPage};
use crate::pages::home::{AdminHomePage, MenteeHomePage, MentorHomePage};
use crate::pages::input_class::InputClassPage;
use crate::pages::input_member::InputMemberPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::{ProfileMenteePage, ProfileMentorPage};
use crate::pages::task::{InputTaskPage, TaskPage};
use crate::routes;
use crate::state::logout::LogoutFlow;
use crate::state::session::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The API base URL provided by the host is written into a `<meta>` tag so
/// the browser bundle can pick it up.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let api_base = use_context::<ApiConfig>().unwrap_or_default().base_url;
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META_NAME content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn segment(path: &'static str) -> StaticSegment<&'static str> {
    StaticSegment(path.trim_start_matches('/'))
}

/// Root application component.
///
/// Provides the API config, session, dialog and logout contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api_config = use_context::<ApiConfig>().unwrap_or_else(ApiConfig::from_document);
    provide_context(api_config);
    provide_context(SessionContext::from_cookies());
    provide_context(DialogState::new());
    provide_context(RwSignal::new(LogoutFlow::Idle));

    view! {
        <Stylesheet id="leptos" href="/pkg/mentutor-ui.css"/>
        <Title text="Mentutor"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=segment(routes::LOGIN) view=LoginPage/>
                <Route path=segment(routes::HOME_ADMIN) view=AdminHomePage/>
                <Route path=segment(routes::HOME_MENTOR) view=MentorHomePage/>
                <Route path=segment(routes::HOME_MENTEE) view=MenteeHomePage/>
                <Route path=segment(routes::INPUT_CLASS) view=InputClassPage/>
                <Route path=segment(routes::INPUT_MEMBER) view=InputMemberPage/>
                <Route path=segment(routes::INPUT_TASK) view=InputTaskPage/>
                <Route path=segment(routes::TASK) view=TaskPage/>
                <Route path=segment(routes::FORUM_MENTEE) view=ForumMenteePage/>
                <Route path=segment(routes::FORUM_MENTOR) view=ForumMentorPage/>
                <Route path=segment(routes::PROFILE_MENTEE) view=ProfileMenteePage/>
                <Route path=segment(routes::PROFILE_MENTOR) view=ProfileMentorPage/>
            </Routes>
            <DialogHost/>
        </Router>
    }
}
