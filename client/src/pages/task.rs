//! Task pages: mentors create tasks, mentees see theirs.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::layout::Layout;

#[component]
pub fn InputTaskPage() -> impl IntoView {
    view! {
        <Title text="Create Task"/>
        <Layout>
            <section class="form-page">
                <h1 class="form-page__title">"Create Task"</h1>
            </section>
        </Layout>
    }
}

#[component]
pub fn TaskPage() -> impl IntoView {
    view! {
        <Title text="Task"/>
        <Layout>
            <section class="task-page">
                <h1 class="task-page__title">"Task"</h1>
            </section>
        </Layout>
    }
}
