//! AI assistant hub: entry points to the assistant variants.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AiAssistantPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_| navigate(path, NavigateOptions::default())
    };

    view! {
        <div class="ai-hub">
            <header class="navbar">
                <button class="btn" on:click=go("/")>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"🤖"</span>
                    <span>"AI Asistent"</span>
                </div>
            </header>

            <main class="ai-hub__main">
                <p class="muted ai-hub__intro">
                    "Chytrý kulinářský pomocník. Vyberte si, s čím má dnes pomoci."
                </p>
                <div class="ai-hub__cards">
                    <button class="ai-hub__card" on:click=go("/ai/consult")>
                        <span class="ai-hub__card-icon">"💬"</span>
                        <h3>"Konzultace"</h3>
                        <p class="muted">"Ptejte se na techniky, suroviny a kuchařská fakta."</p>
                    </button>
                    <button class="ai-hub__card" on:click=go("/ai/ingredients")>
                        <span class="ai-hub__card-icon">"🪄"</span>
                        <h3>"Recept z ingrediencí"</h3>
                        <p class="muted">"Zadejte, co máte doma, a nechte si navrhnout jídlo."</p>
                    </button>
                    <button class="ai-hub__card" on:click=go("/ai/photo")>
                        <span class="ai-hub__card-icon">"📷"</span>
                        <h3>"Recept z fotky"</h3>
                        <p class="muted">"Vyfoťte suroviny nebo hotové jídlo."</p>
                    </button>
                </div>
            </main>
        </div>
    }
}
