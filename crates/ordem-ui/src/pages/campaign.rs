use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use ordem_client::ApiError;
use ordem_types::Campaign;

use crate::components::header::Header;
use crate::components::toast::{ToastContext, ToastKind};
use crate::pages::{format_date, status_class, status_label};

fn detail_error_message(error: &ApiError) -> &'static str {
    match error {
        ApiError::Status(404) => "Campanha não encontrada",
        ApiError::Status(403) => "Você não tem permissão para acessar esta campanha",
        ApiError::Decode(_) => "Erro inesperado ao carregar campanha.",
        _ => "Erro ao carregar campanha. Tente novamente.",
    }
}

#[component]
pub fn CampaignPage() -> impl IntoView {
    #[allow(unused_variables)]
    let params = use_params_map();
    #[allow(unused_variables)]
    let (campaign, setCampaign) = signal(Option::<Result<Campaign, &'static str>>::None);
    #[allow(unused_variables)]
    let (copied, setCopied) = signal(false);
    #[allow(unused_variables)]
    let toasts = expect_context::<ToastContext>();

    let fetch = move || {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            use crate::client::api;

            let id = params.get_untracked().get("id").unwrap_or_default();
            setCampaign.set(None);
            spawn_local(async move {
                let result = ordem_client::campaigns::get(&api(), &id)
                    .await
                    .map_err(|e| detail_error_message(&e));
                setCampaign.set(Some(result));
            });
        }
    };

    // Route guard, same rule as the dashboard.
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

    let handleCopy = move |code: String| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::{spawn_local, JsFuture};

            if let Some(window) = web_sys::window() {
                let promise = window.navigator().clipboard().write_text(&code);
                spawn_local(async move {
                    if JsFuture::from(promise).await.is_ok() {
                        setCopied.set(true);
                        toasts.notify("Código copiado!", ToastKind::Success);
                        set_timeout(
                            move || setCopied.set(false),
                            std::time::Duration::from_secs(2),
                        );
                    } else {
                        toasts.notify("Não foi possível copiar o código", ToastKind::Error);
                    }
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = code;
        }
    };

    view! {
        <Header />
        <main class="page">
            {move || {
                match campaign.get() {
                    None => {
                        view! {
                            <div class="loading">
                                <div class="spinner"></div>
                                "Carregando detalhes da campanha..."
                            </div>
                        }
                            .into_any()
                    }
                    Some(Err(message)) => {
                        view! {
                            <div class="error-state">
                                <h3>"Erro"</h3>
                                <p>{message}</p>
                                <div class="error-actions">
                                    <button class="btn btn-primary" on:click=move |_| fetch()>
                                        "TENTAR NOVAMENTE"
                                    </button>
                                    <a href="/dashboard" class="btn btn-outline">
                                        "VOLTAR"
                                    </a>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                    Some(Ok(campaign)) => {
                        let code = campaign.code.clone();
                        view! {
                            <a href="/dashboard" class="breadcrumb">
                                "← Voltar ao Dashboard"
                            </a>

                            <div class="card campaign-title">
                                <h1>{campaign.name.clone()}</h1>
                                <div class="campaign-card-row">
                                    <span class=format!(
                                        "status-badge {}",
                                        status_class(campaign.status),
                                    )>{status_label(campaign.status)}</span>
                                    <span class="campaign-card-date">
                                        "Criada em: " {format_date(&campaign.created_at)}
                                    </span>
                                </div>
                            </div>

                            <div class="card">
                                <h2>"Código de Acesso dos Jogadores"</h2>
                                <p class="subtitle">
                                    "Compartilhe este código com seus jogadores para que eles possam entrar na campanha:"
                                </p>
                                <div class="join-code">{campaign.code.clone()}</div>
                                <button
                                    class="btn btn-primary"
                                    on:click=move |_| handleCopy(code.clone())
                                >
                                    {move || {
                                        if copied.get() { "✓ COPIADO!" } else { "COPIAR CÓDIGO" }
                                    }}
                                </button>
                            </div>

                            <div class="card">
                                <h2>"Informações da Campanha"</h2>
                                <div class="info-grid">
                                    <div>
                                        <h4>"ID DA CAMPANHA"</h4>
                                        <p class="mono">{campaign.id.clone()}</p>
                                    </div>
                                    <div>
                                        <h4>"STATUS"</h4>
                                        <p>{status_label(campaign.status)}</p>
                                    </div>
                                    <div>
                                        <h4>"DATA DE CRIAÇÃO"</h4>
                                        <p>{format_date(&campaign.created_at)}</p>
                                    </div>
                                    <div>
                                        <h4>"CÓDIGO DE ACESSO"</h4>
                                        <p class="mono">{campaign.code.clone()}</p>
                                    </div>
                                </div>
                            </div>

                            <div class="card">
                                <h2>"Jogadores na Campanha"</h2>
                                <p class="subtitle">
                                    "Os jogadores que entrarem com o código aparecerão aqui."
                                </p>
                            </div>
                        }
                            .into_any()
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
    fn missing_campaign_maps_to_not_found_message() {
        assert_eq!(
            detail_error_message(&ApiError::Status(404)),
            "Campanha não encontrada"
        );
    }

    #[test]
    fn forbidden_campaign_maps_to_permission_message() {
        assert_eq!(
            detail_error_message(&ApiError::Status(403)),
            "Você não tem permissão para acessar esta campanha"
        );
    }

    #[test]
    fn other_failures_keep_the_retry_wording() {
        assert_eq!(
            detail_error_message(&ApiError::Status(500)),
            "Erro ao carregar campanha. Tente novamente."
        );
        assert_eq!(
            detail_error_message(&ApiError::Network("offline".into())),
            "Erro ao carregar campanha. Tente novamente."
        );
    }
}
