use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::components::toast::ToastProvider;
use crate::pages::auth::AuthPage;
use crate::pages::campaign::CampaignPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ordem-console.css" />
        <Title text="A Ordem dos Quatro" />
        <ToastProvider>
            <Router>
                <Routes fallback=|| view! { <p>"Página não encontrada."</p> }.into_any()>
                    <Route path=StaticSegment("") view=HomePage />
                    <Route path=StaticSegment("auth") view=AuthPage />
                    <Route path=StaticSegment("dashboard") view=DashboardPage />
                    <Route
                        path=(StaticSegment("campaign"), ParamSegment("id"))
                        view=CampaignPage
                    />
                </Routes>
            </Router>
        </ToastProvider>
    }
}
