//! Signed-in landing page.
//!
//! Shows who is signed in and offers sign-out. Visitors without a session are
//! redirected to `/login` once the stored session has been resolved.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    install_unauth_redirect(auth.state(), use_navigate());

    let on_sign_out = move |_| {
        leptos::task::spawn_local(auth.sign_out());
    };

    view! {
        <div class="home-page">
            <Show
                when=move || auth.is_authenticated()
                fallback=|| view! { <p>"Redirecting to login..."</p> }
            >
                {move || {
                    auth.user()
                        .map(|user| {
                            view! {
                                <div class="home-card">
                                    <h1>"Welcome, " {user.name}</h1>
                                    <p class="home-card__email">{user.email}</p>
                                    <p class="home-card__type">{user.account_type.as_str()}</p>
                                </div>
                            }
                        })
                }}
                <button class="btn home-page__logout" on:click=on_sign_out>
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
