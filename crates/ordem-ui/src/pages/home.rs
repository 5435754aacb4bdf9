use leptos::prelude::*;

use crate::components::header::Header;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header show_user_info=false />
        <main class="landing">
            <h1>"Bem-vindo ao Sistema"</h1>
            <p class="subtitle">"Crie campanhas épicas e gerencie seus jogadores com facilidade"</p>
            <div class="landing-actions">
                <a href="/auth" class="btn btn-primary">
                    "ENTRAR / CADASTRAR"
                </a>
                <a href="/dashboard" class="btn btn-outline">
                    "DASHBOARD"
                </a>
            </div>
        </main>
    }
}
