use leptos::prelude::*;

use ordem_client::ApiError;

fn login_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Unauthorized => "Email ou senha incorretos",
        ApiError::Status(status) if *status >= 500 => {
            "Erro no servidor. Tente novamente mais tarde."
        }
        ApiError::Status(_) | ApiError::Network(_) => {
            "Erro ao fazer login. Verifique sua conexão."
        }
        ApiError::Decode(_) => "Erro inesperado.",
    }
}

#[component]
pub fn LoginForm<F>(on_success: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);
    let (error, setError) = signal(Option::<&'static str>::None);

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use ordem_types::LoginRequest;
            use wasm_bindgen_futures::spawn_local;

            use crate::client::api;

            let on_success = on_success.clone();
            let credentials = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            setLoading.set(true);
            setError.set(None);
            spawn_local(async move {
                match ordem_client::auth::login(&api(), &credentials).await {
                    Ok(_) => on_success(),
                    Err(e) => setError.set(Some(login_error_message(&e))),
                }
                setLoading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &on_success;
        }
    };

    view! {
        <form class="form" on:submit=handleSubmit>
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="form-error">{message}</div> })
            }}

            <div class="form-group">
                <label for="email">"EMAIL:"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="seu.email@exemplo.com"
                    required
                    prop:value=email
                    disabled=move || loading.get()
                    on:input=move |ev| {
                        setEmail.set(event_target_value(&ev));
                        if error.get_untracked().is_some() {
                            setError.set(None);
                        }
                    }
                />
            </div>

            <div class="form-group">
                <label for="password">"SENHA:"</label>
                <input
                    type="password"
                    id="password"
                    placeholder="Sua senha"
                    required
                    prop:value=password
                    disabled=move || loading.get()
                    on:input=move |ev| {
                        setPassword.set(event_target_value(&ev));
                        if error.get_untracked().is_some() {
                            setError.set(None);
                        }
                    }
                />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                {move || if loading.get() { "ENTRANDO..." } else { "ENTRAR" }}
            </button>
        </form>
    }
}
