//! Admin form for creating a class.

#[cfg(test)]
#[path = "input_class_test.rs"]
mod input_class_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::dialog::{DialogState, Notice};
use crate::components::form_field::FormField;
use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::net::api::{self, ApiClient};
use crate::net::types::NewClass;
use crate::pages::input_member::INVALID_INPUT_MESSAGE;
use crate::routes;
use crate::state::session::SessionContext;
use crate::util::auth::handle_api_error;
use crate::util::mount::MountGuard;
use crate::util::task::spawn_request;
use crate::validation::gating::schema_submit_enabled;
use crate::validation::schemas::{CLASS_NAME, INPUT_CLASS};
use crate::validation::{FieldErrors, FormDraft};

pub(crate) fn build_class(draft: &FormDraft) -> NewClass {
    NewClass { class_name: draft.get(CLASS_NAME).trim().to_owned() }
}

#[component]
pub fn InputClassPage() -> impl IntoView {
    let session = SessionContext::expect();
    let dialogs = DialogState::expect();
    let api_config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let guard = MountGuard::install();

    let draft = RwSignal::new(FormDraft::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let disabled = move || busy.get() || !draft.with(|d| schema_submit_enabled(d, &INPUT_CLASS));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(field_errors) = INPUT_CLASS.validate(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        let class = build_class(&current);
        let client = ApiClient::new(api_config.clone(), session.token_untracked());
        let navigate = navigate.clone();
        let guard = guard.clone();
        spawn_request(async move {
            let result = api::create_class(&client, &class).await;
            if !guard.is_mounted() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => {
                    draft.set(FormDraft::new());
                    dialogs.show(Notice::success("Add Class Success").then_navigate(routes::HOME_ADMIN));
                }
                Err(err) => handle_api_error(&err, INVALID_INPUT_MESSAGE, session, dialogs, &navigate),
            }
        });
    };

    view! {
        <Title text="List Class"/>
        <Layout>
            <section class="form-page">
                <h1 class="form-page__title">"Add New Class"</h1>
                <form class="form-card" on:submit=on_submit>
                    <FormField
                        field=CLASS_NAME
                        label="Class Name"
                        id="input-className"
                        placeholder="Back End Engineer"
                        draft=draft
                        errors=errors
                    />
                    <button id="btn-addClass" class="btn btn--primary" type="submit" disabled=disabled>
                        {move || if busy.get() { "Saving..." } else { "Add Class" }}
                    </button>
                </form>
            </section>
        </Layout>
    }
}
