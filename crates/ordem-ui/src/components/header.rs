use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::client::api;

/// Top bar with the brand link home and, on authenticated pages, the
/// logout action. Logout is purely local: drop the token, go to `/auth`.
#[component]
pub fn Header(#[prop(default = true)] show_user_info: bool) -> impl IntoView {
    let navigate = use_navigate();

    let handleLogout = move |_| {
        ordem_client::auth::logout(&api());
        navigate("/auth", Default::default());
    };

    view! {
        <header class="header">
            <a href="/" class="header-brand">
                <svg
                    width="28"
                    height="28"
                    viewBox="0 0 60 60"
                    fill="none"
                    xmlns="http://www.w3.org/2000/svg"
                >
                    <path
                        d="M30 5 L30 55 M5 30 L55 30"
                        stroke="currentColor"
                        stroke-width="4"
                        stroke-linecap="round"
                    />
                    <circle cx="30" cy="30" r="9" fill="none" stroke="currentColor" stroke-width="3" />
                </svg>
                <span>"A ORDEM DOS QUATRO"</span>
            </a>
            {show_user_info
                .then(|| {
                    view! {
                        <button class="btn btn-ghost btn-sm" on:click=handleLogout>
                            "SAIR"
                        </button>
                    }
                })}
        </header>
    }
}
