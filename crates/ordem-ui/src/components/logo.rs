use leptos::prelude::*;

/// Brand mark of A Ordem dos Quatro: the four-pointed cross over the
/// stacked wordmark.
#[component]
pub fn OrdemLogo() -> impl IntoView {
    view! {
        <div class="ordem-logo">
            <svg
                width="60"
                height="60"
                viewBox="0 0 60 60"
                fill="none"
                xmlns="http://www.w3.org/2000/svg"
            >
                <path
                    d="M30 5 L30 55 M5 30 L55 30"
                    stroke="currentColor"
                    stroke-width="3"
                    stroke-linecap="round"
                />
                <circle cx="30" cy="30" r="8" fill="none" stroke="currentColor" stroke-width="2" />
                <circle cx="30" cy="12" r="3" fill="currentColor" />
                <circle cx="30" cy="48" r="3" fill="currentColor" />
                <circle cx="12" cy="30" r="3" fill="currentColor" />
                <circle cx="48" cy="30" r="3" fill="currentColor" />
                <path d="M30 2 L32 5 L30 8 L28 5 Z" fill="currentColor" />
                <path d="M30 52 L32 55 L30 58 L28 55 Z" fill="currentColor" />
                <path d="M2 30 L5 28 L8 30 L5 32 Z" fill="currentColor" />
                <path d="M52 30 L55 28 L58 30 L55 32 Z" fill="currentColor" />
            </svg>
            <div class="ordem-logo-text">
                <span class="ordem-logo-small">"A"</span>
                <span class="ordem-logo-large">"ORDEM"</span>
                <span class="ordem-logo-small">"DOS"</span>
                <span class="ordem-logo-large">"QUATRO"</span>
            </div>
        </div>
    }
}
