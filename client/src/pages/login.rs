//! Login page: email + password, then off to the role's home.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::dialog::{DialogState, Notice};
use crate::components::form_field::FormField;
use crate::config::ApiConfig;
use crate::net::api::{self, ApiClient, ApiError};
use crate::net::types::LoginResponse;
use crate::routes::{self, LoginDestination};
use crate::state::session::{Session, SessionContext};
use crate::util::auth::{SERVER_ERROR_MESSAGE, redirect_external};
use crate::util::mount::MountGuard;
use crate::util::task::spawn_request;
use crate::validation::gating::schema_submit_enabled;
use crate::validation::schemas::{EMAIL, LOGIN, PASSWORD};
use crate::validation::{FieldErrors, FormDraft};

pub(crate) const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password";
pub(crate) const EMPTY_FIELDS_MESSAGE: &str = "Data cannot be empty !";

/// What to do with a successful login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LoginPlan {
    /// Persist the session, then go to `destination` (route or URL).
    Enter { session: Session, destination: LoginDestination },
    /// Unknown role: keep the user logged out.
    Reject { role: String },
}

pub(crate) fn plan_login(resp: &LoginResponse) -> LoginPlan {
    match (routes::login_destination(&resp.role, &resp.auth_gmail), Session::from_login(resp)) {
        (LoginDestination::UnknownRole(role), _) => LoginPlan::Reject { role },
        (destination, Some(session)) => LoginPlan::Enter { session, destination },
        (_, None) => LoginPlan::Reject { role: resp.role.clone() },
    }
}

pub(crate) fn login_error_notice(err: &ApiError) -> Notice {
    match err {
        ApiError::Server => Notice::error(SERVER_ERROR_MESSAGE),
        _ => Notice::error(LOGIN_FAILED_MESSAGE),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = SessionContext::expect();
    let dialogs = DialogState::expect();
    let api_config = expect_context::<ApiConfig>();
    let navigate = use_navigate();
    let guard = MountGuard::install();

    let draft = RwSignal::new(FormDraft::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);
    let disabled = move || busy.get() || !draft.with(|d| schema_submit_enabled(d, &LOGIN));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        if current.get(EMAIL).is_empty() || current.get(PASSWORD).is_empty() {
            dialogs.show(Notice::error(EMPTY_FIELDS_MESSAGE));
            return;
        }
        if let Err(field_errors) = LOGIN.validate(&current) {
            errors.set(field_errors);
            return;
        }
        errors.set(FieldErrors::new());
        busy.set(true);

        let client = ApiClient::new(api_config.clone(), None);
        let navigate = navigate.clone();
        let guard = guard.clone();
        let email = current.get(EMAIL).to_owned();
        let password = current.get(PASSWORD).to_owned();
        let submit = async move {
            let result = api::login(&client, &email, &password).await;
            if !guard.is_mounted() {
                return;
            }
            busy.set(false);
            let resp = match result {
                Ok(resp) => resp,
                Err(err) => {
                    dialogs.show(login_error_notice(&err));
                    return;
                }
            };
            match plan_login(&resp) {
                LoginPlan::Enter { session: new_session, destination } => {
                    session.set_session(new_session, Some(resp));
                    match destination {
                        LoginDestination::Route(path) => navigate(path, NavigateOptions::default()),
                        LoginDestination::External(url) => redirect_external(&url),
                        LoginDestination::UnknownRole(_) => {}
                    }
                    dialogs.show(Notice::success("Login Successful !"));
                    draft.set(FormDraft::new());
                }
                LoginPlan::Reject { role } => {
                    #[cfg(feature = "hydrate")]
                    log::warn!("login answered with unknown role {role:?}");
                    #[cfg(not(feature = "hydrate"))]
                    let _ = role;
                    dialogs.show(Notice::error(LOGIN_FAILED_MESSAGE));
                }
            }
        };
        spawn_request(submit);
    };

    view! {
        <Title text="Mentutor"/>
        <div class="login-page">
            <div class="login-page__art">
                <img id="gbr-login" class="login-page__image" src="/assets/girl.png" alt="gambarLogin"/>
            </div>
            <form class="login-form" on:submit=on_submit>
                <h1 class="login-form__title">"Login to your account"</h1>
                <FormField
                    field=EMAIL
                    label="Email"
                    id="input-email"
                    input_type="email"
                    placeholder="example@gmail.com"
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
                <button id="btn-login" class="btn btn--primary login-form__submit" type="submit" disabled=disabled>
                    {move || if busy.get() { "Logging in..." } else { "Login" }}
                </button>
                <p class="login-form__hint">
                    "If you dont have an account, please contact "
                    <a id="link-admin" href="mailto:mentutor@gmail.com">"admin"</a>
                </p>
            </form>
        </div>
    }
}
