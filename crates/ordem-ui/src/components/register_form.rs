use leptos::prelude::*;

use ordem_client::ApiError;

/// Checks run before any request leaves the browser.
fn validate(name: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if password != confirm {
        return Err("As senhas não coincidem");
    }
    if password.chars().count() < 6 {
        return Err("A senha deve ter pelo menos 6 caracteres");
    }
    if name.trim().is_empty() {
        return Err("O nome é obrigatório");
    }
    Ok(())
}

fn register_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(409) => "Este email já está cadastrado",
        ApiError::Status(400) => "Dados inválidos. Verifique os campos preenchidos.",
        ApiError::Status(status) if *status >= 500 => {
            "Erro no servidor. Tente novamente mais tarde."
        }
        ApiError::Unauthorized | ApiError::Status(_) | ApiError::Network(_) => {
            "Erro ao criar conta. Verifique sua conexão."
        }
        ApiError::Decode(_) => "Erro inesperado.",
    }
}

/// Registration form. `on_registered` fires 2 s after the success panel
/// shows, giving the auth page time to flip back to the login tab.
#[component]
pub fn RegisterForm<F>(on_registered: F) -> impl IntoView
where
    F: Fn() + Clone + 'static + Send,
{
    let (name, setName) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    let (confirm, setConfirm) = signal(String::new());
    #[allow(unused_variables)]
    let (loading, setLoading) = signal(false);
    let (error, setError) = signal(Option::<&'static str>::None);
    let (success, setSuccess) = signal(false);

    let clearErrorOnInput = move || {
        if error.get_untracked().is_some() {
            setError.set(None);
        }
    };

    let handleSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if let Err(message) = validate(
            &name.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            setError.set(Some(message));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use ordem_types::GameMaster;
            use wasm_bindgen_futures::spawn_local;

            use crate::client::api;

            let on_registered = on_registered.clone();
            let newAccount = GameMaster {
                name: name.get_untracked().trim().to_string(),
                email: email.get_untracked(),
                password: Some(password.get_untracked()),
            };
            setLoading.set(true);
            setError.set(None);
            spawn_local(async move {
                match ordem_client::auth::register(&api(), &newAccount).await {
                    Ok(_) => {
                        setSuccess.set(true);
                        set_timeout(
                            move || on_registered(),
                            std::time::Duration::from_secs(2),
                        );
                    }
                    Err(e) => setError.set(Some(register_error_message(&e))),
                }
                setLoading.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &on_registered;
        }
    };

    view! {
        {move || {
            if success.get() {
                view! {
                    <div class="form-success">
                        <div class="form-success-banner">"Conta criada com sucesso!"</div>
                        <p>"Redirecionando para o login..."</p>
                    </div>
                }
                    .into_any()
            } else {
                let handleSubmit = handleSubmit.clone();
                view! {
                    <form class="form" on:submit=handleSubmit>
                        {move || {
                            error
                                .get()
                                .map(|message| view! { <div class="form-error">{message}</div> })
                        }}

                        <div class="form-group">
                            <label for="name">"NOME:"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Seu nome completo"
                                required
                                prop:value=name
                                disabled=move || loading.get()
                                on:input=move |ev| {
                                    setName.set(event_target_value(&ev));
                                    clearErrorOnInput();
                                }
                            />
                        </div>

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
                                    clearErrorOnInput();
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="password">"SENHA:"</label>
                            <input
                                type="password"
                                id="password"
                                placeholder="Mínimo 6 caracteres"
                                required
                                prop:value=password
                                disabled=move || loading.get()
                                on:input=move |ev| {
                                    setPassword.set(event_target_value(&ev));
                                    clearErrorOnInput();
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="confirm">"CONFIRMAR SENHA:"</label>
                            <input
                                type="password"
                                id="confirm"
                                placeholder="Digite a senha novamente"
                                required
                                prop:value=confirm
                                disabled=move || loading.get()
                                on:input=move |ev| {
                                    setConfirm.set(event_target_value(&ev));
                                    clearErrorOnInput();
                                }
                            />
                        </div>

                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || if loading.get() { "CRIANDO CONTA..." } else { "CRIAR CONTA" }}
                        </button>
                    </form>
                }
                    .into_any()
            }
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_passwords_are_rejected() {
        assert_eq!(
            validate("Ana", "secret1", "secret2"),
            Err("As senhas não coincidem")
        );
    }

    #[test]
    fn short_passwords_are_rejected() {
        assert_eq!(
            validate("Ana", "12345", "12345"),
            Err("A senha deve ter pelo menos 6 caracteres")
        );
    }

    #[test]
    fn blank_names_are_rejected() {
        assert_eq!(validate("   ", "secret1", "secret1"), Err("O nome é obrigatório"));
        assert_eq!(validate("Ana", "secret1", "secret1"), Ok(()));
    }

    #[test]
    fn statuses_map_to_the_fixed_messages() {
        assert_eq!(
            register_error_message(&ApiError::Status(409)),
            "Este email já está cadastrado"
        );
        assert_eq!(
            register_error_message(&ApiError::Status(400)),
            "Dados inválidos. Verifique os campos preenchidos."
        );
        assert_eq!(
            register_error_message(&ApiError::Status(502)),
            "Erro no servidor. Tente novamente mais tarde."
        );
        assert_eq!(
            register_error_message(&ApiError::Network("offline".into())),
            "Erro ao criar conta. Verifique sua conexão."
        );
    }
}
