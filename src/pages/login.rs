//! Login page with sign-in and sign-up forms.
//!
//! Both forms go through `AuthContext`; the loading overlay covers the page
//! while an action is in flight. A signed-in visitor is sent to `/` by the
//! authenticated redirect, which also fires right after a successful action.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::auth::{AuthError, SignUpType};
use crate::components::loading_overlay::LoadingOverlay;
use crate::context::use_auth;
use crate::util::auth::install_auth_redirect;

/// Trimmed sign-up fields, ready for `AuthContext::sign_up`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

/// Trim the sign-in fields and require both.
///
/// Passwords are not trimmed; whitespace may be part of one.
pub fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim the sign-up fields and require name, email and password. Phone is
/// optional.
pub fn validate_sign_up_input(
    name: &str,
    phone: &str,
    email: &str,
    password: &str,
) -> Result<SignUpInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter your name, email and password.");
    }
    Ok(SignUpInput {
        name: name.to_owned(),
        phone: phone.trim().to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

/// Message shown when an auth action fails.
pub fn auth_failed_message(action: &str, error: &AuthError) -> String {
    format!("{action} failed: {error}")
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    SignIn,
    SignUp,
}

fn tab_class(active: bool) -> &'static str {
    if active { "login-tab login-tab--active" } else { "login-tab" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    install_auth_redirect(auth.state(), use_navigate());

    let mode = RwSignal::new(Mode::default());
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let account_type = RwSignal::new(SignUpType::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        leptos::task::spawn_local(async move {
            if let Err(e) = auth.sign_in(email_value, password_value).await {
                info.set(auth_failed_message("Sign in", &e));
            }
            busy.set(false);
        });
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_sign_up_input(&name.get(), &phone.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let kind = account_type.get();
        leptos::task::spawn_local(async move {
            let SignUpInput { name, phone, email, password } = input;
            if let Err(e) = auth.sign_up(name, phone, email, password, kind).await {
                info.set(auth_failed_message("Sign up", &e));
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <Show when=move || busy.get()>
                <LoadingOverlay/>
            </Show>
            <div class="login-card">
                <h1>"Link"</h1>
                <div class="login-tabs">
                    <button
                        class=move || tab_class(mode.get() == Mode::SignIn)
                        on:click=move |_| mode.set(Mode::SignIn)
                    >
                        "Sign in"
                    </button>
                    <button
                        class=move || tab_class(mode.get() == Mode::SignUp)
                        on:click=move |_| mode.set(Mode::SignUp)
                    >
                        "Create account"
                    </button>
                </div>
                <Show
                    when=move || mode.get() == Mode::SignIn
                    fallback=move || {
                        view! {
                            <form class="login-form" on:submit=on_sign_up>
                                <input
                                    class="login-input"
                                    type="text"
                                    placeholder="Name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="tel"
                                    placeholder="Phone"
                                    prop:value=move || phone.get()
                                    on:input=move |ev| phone.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="email"
                                    placeholder="you@example.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <input
                                    class="login-input"
                                    type="password"
                                    placeholder="Password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                                <select
                                    class="login-input"
                                    prop:value=move || account_type.get().as_str()
                                    on:change=move |ev| {
                                        if let Some(kind) = SignUpType::parse(&event_target_value(&ev)) {
                                            account_type.set(kind);
                                        }
                                    }
                                >
                                    <option value="customer">"Customer"</option>
                                    <option value="provider">"Provider"</option>
                                </select>
                                <button class="login-button" type="submit" disabled=move || busy.get()>
                                    "Create account"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="login-form" on:submit=on_sign_in>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign in"
                        </button>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
