use leptos::prelude::*;
use ordem_client::ApiError;
use ordem_types::Campaign;

use crate::components::header::Header;
use crate::pages::{format_date, status_class, status_label};

fn load_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Decode(_) => "Erro inesperado ao carregar campanhas.",
        _ => "Erro ao carregar campanhas. Tente novamente.",
    }
}

fn create_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(400) => "Nome da campanha inválido",
        ApiError::Decode(_) => "Erro inesperado ao criar campanha.",
        _ => "Erro ao criar campanha. Tente novamente.",
    }
}

/// Names are trimmed before submission; whitespace-only input never turns
/// into a request.
fn normalized_campaign_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (campaigns, setCampaigns) = signal(Option::<Result<Vec<Campaign>, &'static str>>::None);
    let (showCreateForm, setShowCreateForm) = signal(false);
    let (newName, setNewName) = signal(String::new());
    #[allow(unused_variables)]
    let (creating, setCreating) = signal(false);
    #[allow(unused_variables)]
    let (createError, setCreateError) = signal(Option::<&'static str>::None);

    let fetch = move || {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::client::api;

            setCampaigns.set(None);
            spawn_local(async move {
                let result = ordem_client::campaigns::get_all(&api())
                    .await
                    .map_err(|e| load_error_message(&e));
                setCampaigns.set(Some(result));
            });
        }
    };

    // Route guard: no token, no dashboard.
    #[cfg(feature = "hydrate")]
    {
        use leptos_router::hooks::use_navigate;
        use ordem_client::SessionStore;

        use crate::client::api;

        if api().session().is_authenticated() {
            fetch();
        } else {
            let navigate = use_navigate();
            request_animation_frame(move || navigate("/auth", Default::default()));
        }
    }

    let handleCreate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(name) = normalized_campaign_name(&newName.get_untracked()) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use ordem_types::CreateCampaignRequest;
            use wasm_bindgen_futures::spawn_local;

            use crate::client::api;

            let request = CreateCampaignRequest { name };
            setCreating.set(true);
            setCreateError.set(None);
            spawn_local(async move {
                match ordem_client::campaigns::create(&api(), &request).await {
                    Ok(created) => {
                        setCampaigns.update(|state| {
                            if let Some(Ok(list)) = state {
                                list.push(created);
                            }
                        });
                        setNewName.set(String::new());
                        setShowCreateForm.set(false);
                    }
                    Err(e) => setCreateError.set(Some(create_error_message(&e))),
                }
                setCreating.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
        }
    };

    view! {
        <Header />
        <main class="page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard do Mestre"</h1>
                    <p class="subtitle">"Gerencie suas campanhas e aventuras"</p>
                </div>
                <button class="btn btn-primary" on:click=move |_| setShowCreateForm.set(true)>
                    "+ NOVA CAMPANHA"
                </button>
            </div>

            {move || {
                showCreateForm
                    .get()
                    .then(|| {
                        view! {
                            <div class="card create-card">
                                <h3>"Criar Nova Campanha"</h3>
                                {move || {
                                    createError
                                        .get()
                                        .map(|message| {
                                            view! { <div class="form-error">{message}</div> }
                                        })
                                }}
                                <form class="create-row" on:submit=handleCreate>
                                    <input
                                        type="text"
                                        placeholder="Nome da campanha"
                                        required
                                        prop:value=newName
                                        disabled=move || creating.get()
                                        on:input=move |ev| setNewName.set(event_target_value(&ev))
                                    />
                                    <button
                                        type="submit"
                                        class="btn btn-primary"
                                        disabled=move || {
                                            creating.get() || newName.get().trim().is_empty()
                                        }
                                    >
                                        {move || if creating.get() { "CRIANDO..." } else { "CRIAR" }}
                                    </button>
                                    <button
                                        type="button"
                                        class="btn btn-ghost"
                                        disabled=move || creating.get()
                                        on:click=move |_| {
                                            setShowCreateForm.set(false);
                                            setNewName.set(String::new());
                                            setCreateError.set(None);
                                        }
                                    >
                                        "CANCELAR"
                                    </button>
                                </form>
                            </div>
                        }
                    })
            }}

            {move || {
                match campaigns.get() {
                    None => {
                        view! {
                            <div class="loading">
                                <div class="spinner"></div>
                                "Carregando campanhas..."
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(message)) => {
                        view! {
                            <div class="form-error">
                                {message} " "
                                <button class="link-button" on:click=move |_| fetch()>
                                    "Tentar novamente"
                                </button>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Ok(list)) => {
                        if list.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <h3>"Nenhuma campanha criada ainda"</h3>
                                    <p>
                                        "Comece criando sua primeira campanha para gerenciar aventuras épicas"
                                    </p>
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| setShowCreateForm.set(true)
                                    >
                                        "CRIAR PRIMEIRA CAMPANHA"
                                    </button>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="campaign-grid">
                                    {list
                                        .into_iter()
                                        .map(|campaign| {
                                            view! {
                                                <a
                                                    href=format!("/campaign/{}", campaign.id)
                                                    class="campaign-card card"
                                                >
                                                    <h3>{campaign.name.clone()}</h3>
                                                    <div class="campaign-card-row">
                                                        <span class="campaign-code">
                                                            "Código: " {campaign.code.clone()}
                                                        </span>
                                                        <span class=format!(
                                                            "status-badge {}",
                                                            status_class(campaign.status),
                                                        )>{status_label(campaign.status)}</span>
                                                    </div>
                                                    <div class="campaign-card-date">
                                                        "Criada em: " {format_date(&campaign.created_at)}
                                                    </div>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }
            }}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejections_map_by_status() {
        assert_eq!(
            create_error_message(&ApiError::Status(400)),
            "Nome da campanha inválido"
        );
        assert_eq!(
            create_error_message(&ApiError::Status(500)),
            "Erro ao criar campanha. Tente novamente."
        );
        assert_eq!(
            create_error_message(&ApiError::Decode("bad".into())),
            "Erro inesperado ao criar campanha."
        );
    }

    #[test]
    fn whitespace_only_names_are_rejected_before_any_request() {
        assert_eq!(normalized_campaign_name(""), None);
        assert_eq!(normalized_campaign_name("   \t"), None);
        assert_eq!(
            normalized_campaign_name("  Mesa de sexta  "),
            Some("Mesa de sexta".to_string())
        );
    }

    #[test]
    fn load_failures_keep_the_retry_wording() {
        assert_eq!(
            load_error_message(&ApiError::Network("offline".into())),
            "Erro ao carregar campanhas. Tente novamente."
        );
        assert_eq!(
            load_error_message(&ApiError::Decode("bad".into())),
            "Erro inesperado ao carregar campanhas."
        );
    }
}
