//! Profile pages for mentors and mentees.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::Layout;
use crate::state::session::{SessionContext, SessionState};

pub(crate) const DEFAULT_AVATAR: &str = "/assets/avatar.png";

/// Label/value pairs shown on the profile card.
pub(crate) fn profile_rows(state: &SessionState) -> Vec<(&'static str, String)> {
    let Some(session) = state.session.as_ref() else {
        return Vec::new();
    };
    let mut rows = Vec::with_capacity(3);
    if let Some(name) = state.display_name() {
        rows.push(("Name", name));
    }
    rows.push(("User ID", session.id_user.to_string()));
    rows.push(("Role", session.role.as_str().to_owned()));
    rows
}

pub(crate) fn avatar_src(state: &SessionState) -> String {
    state
        .session
        .as_ref()
        .map(|s| s.images.clone())
        .filter(|src| !src.is_empty())
        .unwrap_or_else(|| DEFAULT_AVATAR.to_owned())
}

#[component]
fn ProfileCard() -> impl IntoView {
    let session = SessionContext::expect();
    view! {
        <section class="profile-page">
            <h1 class="profile-page__title">"Profile"</h1>
            <div class="profile-card">
                <img
                    id="img-profile"
                    class="profile-card__avatar"
                    src=move || session.state().with(avatar_src)
                    alt="profile"
                />
                <dl class="profile-card__details">
                    {move || {
                        session
                            .state()
                            .with(profile_rows)
                            .into_iter()
                            .map(|(label, value)| {
                                view! {
                                    <dt>{label}</dt>
                                    <dd>{value}</dd>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </dl>
            </div>
        </section>
    }
}

#[component]
pub fn ProfileMentorPage() -> impl IntoView {
    view! {
        <Title text="Profile Mentor"/>
        <Layout>
            <ProfileCard/>
        </Layout>
    }
}

#[component]
pub fn ProfileMenteePage() -> impl IntoView {
    view! {
        <Title text="Profile Mentee"/>
        <Layout>
            <ProfileCard/>
        </Layout>
    }
}
