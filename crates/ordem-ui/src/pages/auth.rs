use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::login_form::LoginForm;
use crate::components::logo::OrdemLogo;
use crate::components::register_form::RegisterForm;

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let (activeTab, setActiveTab) = signal(Tab::Login);
    let navigate = use_navigate();

    // Someone with a stored token has no business on the login screen.
    #[cfg(feature = "hydrate")]
    {
        use ordem_client::SessionStore;

        use crate::client::api;

        if api().session().is_authenticated() {
            let navigate = navigate.clone();
            request_animation_frame(move || navigate("/dashboard", Default::default()));
        }
    }

    let loginSuccess = move || navigate("/dashboard", Default::default());
    let registered = move || setActiveTab.set(Tab::Login);

    view! {
        <Header show_user_info=false />
        <main class="auth-page">
            <OrdemLogo />

            <div class="auth-card">
                <div class="auth-tabs">
                    <button
                        class=move || {
                            if activeTab.get() == Tab::Login { "auth-tab active" } else { "auth-tab" }
                        }
                        on:click=move |_| setActiveTab.set(Tab::Login)
                    >
                        "ENTRAR"
                    </button>
                    <button
                        class=move || {
                            if activeTab.get() == Tab::Register {
                                "auth-tab active"
                            } else {
                                "auth-tab"
                            }
                        }
                        on:click=move |_| setActiveTab.set(Tab::Register)
                    >
                        "CADASTRAR"
                    </button>
                </div>

                <div class="auth-panel">
                    {move || {
                        let loginSuccess = loginSuccess.clone();
                        match activeTab.get() {
                            Tab::Login => {
                                view! {
                                    <h2>"Faça Login"</h2>
                                    <LoginForm on_success=loginSuccess />
                                    <p class="auth-switch">
                                        "Novo por aqui? "
                                        <button on:click=move |_| setActiveTab.set(Tab::Register)>
                                            "Crie sua conta"
                                        </button>
                                    </p>
                                }
                                    .into_any()
                            }
                            Tab::Register => {
                                view! {
                                    <h2>"Criar Conta de Mestre"</h2>
                                    <RegisterForm on_registered=registered />
                                    <p class="auth-switch">
                                        "Já tem uma conta? "
                                        <button on:click=move |_| setActiveTab.set(Tab::Login)>
                                            "Faça login"
                                        </button>
                                    </p>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </div>
            </div>

            <p class="auth-footer">
                "Crie campanhas épicas e gerencie seus jogadores com facilidade"
            </p>
        </main>
    }
}
