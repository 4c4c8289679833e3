//! Discussion forum pages.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::Layout;

#[component]
fn ForumFrame(title: &'static str) -> impl IntoView {
    view! {
        <Title text=title/>
        <Layout>
            <section class="forum-page">
                <h1 class="forum-page__title">"Forum"</h1>
            </section>
        </Layout>
    }
}

#[component]
pub fn ForumMentorPage() -> impl IntoView {
    view! { <ForumFrame title="Forum Mentor"/> }
}

#[component]
pub fn ForumMenteePage() -> impl IntoView {
    view! { <ForumFrame title="Forum Mentee"/> }
}
