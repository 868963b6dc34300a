//! Account registration for students and teachers.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::button::{Button, ButtonVariant};
use crate::components::input::Input;
use crate::config::ClientConfig;
use crate::net::types::{Department, RegisterRequest};
use crate::state::role::Role;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Roles a visitor may register as; staff roles are provisioned by admins.
pub const SIGNUP_ROLES: [Role; 2] = [Role::Student, Role::Teacher];

/// Raw form values as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Option<Role>,
    pub department: String,
    pub student_id: String,
    pub terms_accepted: bool,
}

impl SignupForm {
    /// Check the form and build the request, or return the message to show.
    pub fn validate(&self) -> Result<RegisterRequest, &'static str> {
        let first_name = self.first_name.trim();
        let last_name = self.last_name.trim();
        let email = self.email.trim();
        if first_name.is_empty()
            || last_name.is_empty()
            || email.is_empty()
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err("Please fill in all required fields");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("Password must be at least 8 characters long");
        }
        let department = self.department.trim();
        if department.is_empty() {
            return Err("Please select a department");
        }
        if !self.terms_accepted {
            return Err("Please accept the Terms of Service and Privacy Policy");
        }
        let role = self.role.unwrap_or(Role::Student);
        let student_id = Some(self.student_id.trim())
            .filter(|id| role == Role::Student && !id.is_empty())
            .map(str::to_owned);
        Ok(RegisterRequest {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            password_confirmation: self.confirm_password.clone(),
            role,
            department: department.to_owned(),
            college: None,
            student_id,
        })
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigate = use_navigate();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let student_id = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Student);
    let department = RwSignal::new(String::new());
    let terms = RwSignal::new(false);
    let departments = RwSignal::new(Vec::<Department>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let api = config.api(None);
        leptos::task::spawn_local(async move {
            match api.departments().await {
                Ok(list) => departments.set(list),
                Err(e) => log::warn!("could not load departments: {e}"),
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignupForm {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            role: Some(role.get()),
            department: department.get(),
            student_id: student_id.get(),
            terms_accepted: terms.get(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());
        let api = config.api(None);
        let navigate = navigate.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api.register(&request).await {
                Ok(()) => navigate("/login?registered=true", NavigateOptions::default()),
                Err(e) => {
                    log::warn!("registration failed: {e}");
                    info.set(e.user_message());
                }
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, request, navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit novalidate=true>
                    <fieldset class="auth-form__roles">
                        <legend>"I am a"</legend>
                        {SIGNUP_ROLES
                            .into_iter()
                            .map(|r| view! {
                                <label class="auth-form__role">
                                    <input
                                        type="radio"
                                        name="role"
                                        value=r.as_str()
                                        prop:checked=move || role.get() == r
                                        on:change=move |_| role.set(r)
                                    />
                                    {r.label()}
                                </label>
                            })
                            .collect_view()}
                    </fieldset>
                    <div class="auth-form__row">
                        <Input label="First name" id="signup-first-name" autocomplete="given-name" value=first_name required=true />
                        <Input label="Last name" id="signup-last-name" autocomplete="family-name" value=last_name required=true />
                    </div>
                    <Input label="Email" id="signup-email" kind="email" autocomplete="email" value=email required=true />
                    <Show when=move || role.get() == Role::Student>
                        <Input label="Student ID" id="signup-student-id" value=student_id hint="As printed on your ID card" />
                    </Show>
                    <div class="field">
                        <label class="field__label" for="signup-department">"Department"</label>
                        <select
                            id="signup-department"
                            class="input"
                            required=true
                            on:change=move |ev| department.set(event_target_value(&ev))
                        >
                            <option value="">"Select a department"</option>
                            {move || {
                                departments
                                    .get()
                                    .into_iter()
                                    .map(|d| view! { <option value=d.name.clone()>{d.name.clone()}</option> })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                    <Input
                        label="Password"
                        id="signup-password"
                        kind="password"
                        autocomplete="new-password"
                        value=password
                        required=true
                        toggle_password=true
                        hint="At least 8 characters"
                    />
                    <Input
                        label="Confirm password"
                        id="signup-confirm-password"
                        kind="password"
                        autocomplete="new-password"
                        value=confirm_password
                        required=true
                    />
                    <label class="auth-form__terms">
                        <input
                            type="checkbox"
                            prop:checked=move || terms.get()
                            on:change=move |ev| terms.set(event_target_checked(&ev))
                        />
                        "I accept the Terms of Service and Privacy Policy"
                    </label>
                    <Button kind="submit" variant=ButtonVariant::Primary loading=Signal::derive(move || busy.get())>
                        "Create account"
                    </Button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-card__error" role="alert">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
