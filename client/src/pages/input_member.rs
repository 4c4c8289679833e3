//! Admin form for registering a mentor or mentee into a class.

#[cfg(test)]
#[path = "input_member_test.rs"]
mod input_member_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::components::dialog::{DialogState, Notice};
use crate::components::form_field::{FormField, SelectField};
use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::net::api::{self, ApiClient};
use crate::net::types::{ClassSummary, NewMember};
use crate::routes;
use crate::state::session::{Role, SessionContext};
use crate::util::auth::{RELOGIN_MESSAGE, handle_api_error};
use crate::util::mount::MountGuard;
use crate::util::task::spawn_request;
use crate::validation::gating::schema_submit_enabled;
use crate::validation::schemas::{CLASSNAME, EMAIL, FULLNAME, INPUT_MEMBER, PASSWORD, ROLE};
use crate::validation::{FieldErrors, FormDraft};

pub(crate) const INVALID_INPUT_MESSAGE: &str = "Invalid Input From Client";

/// A draft that passed validation but cannot become a request body.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum MemberDraftError {
    #[error("class id {0:?} is not a number")]
    InvalidClass(String),
    #[error("role {0:?} cannot be registered")]
    InvalidRole(String),
}

/// Roles an admin may register.
pub(crate) fn role_options() -> Vec<(String, String)> {
    [Role::Mentor, Role::Mentee].into_iter().map(|role| (role.as_str().to_owned(), role.as_str().to_owned())).collect()
}

/// `(id_class, class_name)` options for the class dropdown.
pub(crate) fn class_options(classes: &[ClassSummary]) -> Vec<(String, String)> {
    classes.iter().map(|class| (class.id_class.to_string(), class.class_name.clone())).collect()
}

/// Request body for a validated draft.
pub(crate) fn build_member(draft: &FormDraft) -> Result<NewMember, MemberDraftError> {
    let role = draft.get(ROLE);
    if !matches!(Role::parse(role), Some(Role::Mentor | Role::Mentee)) {
        return Err(MemberDraftError::InvalidRole(role.to_owned()));
    }
    let raw_class = draft.get(CLASSNAME);
    let id_class = raw_class
        .trim()
        .parse::<u64>()
        .map_err(|_| MemberDraftError::InvalidClass(raw_class.to_owned()))?;
    Ok(NewMember {
        name: draft.get(FULLNAME).to_owned(),
        email: draft.get(EMAIL).to_owned(),
        role: role.to_owned(),
        id_class,
        password: draft.get(PASSWORD).to_owned(),
    })
}

#[component]
pub fn InputMemberPage() -> impl IntoView {
    let session = SessionContext::expect();
    let dialogs = DialogState::expect();
    let api_config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let guard = MountGuard::install();

    let classes = RwSignal::new(Vec::<ClassSummary>::new());
    let draft = RwSignal::new(FormDraft::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let disabled = move || busy.get() || !draft.with(|d| schema_submit_enabled(d, &INPUT_MEMBER));

    if session.get_session_untracked().is_some() {
        let client = ApiClient::new(api_config.clone(), session.token_untracked());
        let navigate = navigate.clone();
        let guard = guard.clone();
        spawn_request(async move {
            let result = api::fetch_classes(&client).await;
            if !guard.is_mounted() {
                return;
            }
            match result {
                Ok(list) => classes.set(list),
                Err(err) => handle_api_error(&err, RELOGIN_MESSAGE, session, dialogs, &navigate),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if let Err(field_errors) = INPUT_MEMBER.validate(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        let member = match build_member(&current) {
            Ok(member) => member,
            Err(_err) => {
                #[cfg(feature = "hydrate")]
                log::warn!("member form rejected: {_err}");
                dialogs.show(Notice::error(INVALID_INPUT_MESSAGE));
                return;
            }
        };
        busy.set(true);

        let client = ApiClient::new(api_config.clone(), session.token_untracked());
        let navigate = navigate.clone();
        let guard = guard.clone();
        spawn_request(async move {
            let result = api::create_member(&client, &member).await;
            if !guard.is_mounted() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => {
                    draft.set(FormDraft::new());
                    dialogs.show(Notice::success("Register Success").then_navigate(routes::HOME_ADMIN));
                }
                Err(err) => handle_api_error(&err, INVALID_INPUT_MESSAGE, session, dialogs, &navigate),
            }
        });
    };

    let class_choices = Signal::derive(move || classes.with(|list| class_options(list)));

    view! {
        <Title text="List Members"/>
        <Layout>
            <section class="form-page">
                <div class="form-page__header">
                    <h1 class="form-page__title">"Add Member"</h1>
                    <p class="form-page__subtitle">"Join the class to learn with each others."</p>
                </div>
                <form class="form-card" on:submit=on_submit>
                    <FormField
                        field=FULLNAME
                        label="Name"
                        id="input-fullname"
                        placeholder="Full name"
                        draft=draft
                        errors=errors
                    />
                    <FormField
                        field=EMAIL
                        label="Email"
                        id="input-email"
                        input_type="email"
                        placeholder="example@gmail.com"
                        draft=draft
                        errors=errors
                    />
                    <SelectField
                        field=ROLE
                        label="Role"
                        id="dropdown-role"
                        prompt="Choose a role"
                        options=Signal::stored(role_options())
                        draft=draft
                        errors=errors
                    />
                    <SelectField
                        field=CLASSNAME
                        label="Class"
                        id="dropdown-class"
                        prompt="Choose a class"
                        options=class_choices
                        draft=draft
                        errors=errors
                    />
                    <FormField
                        field=PASSWORD
                        label="Password"
                        id="input-password"
                        input_type="password"
                        placeholder="********"
                        draft=draft
                        errors=errors
                    />
                    <button id="btn-addMember" class="btn btn--primary" type="submit" disabled=disabled>
                        {move || if busy.get() { "Saving..." } else { "Add" }}
                    </button>
                </form>
            </section>
        </Layout>
    }
}
