//! Public recipe catalogue with search. Anonymous: no credentials are
//! attached, so the page also works for signed-out visitors.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::recipe_grid_card::RecipeGridCard;
use crate::net::api;
use crate::state::auth::AuthHandle;

#[component]
pub fn PublicRecipesPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();

    let search = RwSignal::new(String::new());
    let submitted_search = RwSignal::new(String::new());

    let recipes = {
        let gateway = auth.gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            let term = submitted_search.get();
            async move {
                let term = if term.is_empty() { None } else { Some(term) };
                api::fetch_public_recipes(&gateway, term.as_deref()).await
            }
        })
    };

    let open_recipe = {
        let navigate = navigate.clone();
        Callback::new(move |id: String| {
            navigate(&format!("/recipes/{id}"), NavigateOptions::default());
        })
    };

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted_search.set(search.get().trim().to_owned());
    };

    let go_back = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div class="listing-page">
            <header class="navbar">
                <button class="btn" on:click=go_back>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"🌍"</span>
                    <span>"Veřejné recepty"</span>
                </div>
            </header>

            <main class="listing-page__main">
                <form class="listing-page__search" on:submit=on_search>
                    <input
                        class="listing-page__search-input"
                        type="text"
                        placeholder="Hledat ve veřejných receptech..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit">
                        "Hledat"
                    </button>
                </form>

                <Suspense fallback=move || {
                    view! {
                        <div class="listing-page__loading">
                            <div class="spinner"></div>
                            <p class="muted">"Načítám kulinářské poklady..."</p>
                        </div>
                    }
                }>
                    {move || {
                        recipes.get().map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <div class="listing-page__empty">
                                            <div class="listing-page__empty-badge">"🍳"</div>
                                            <h3>"Žádné recepty nenalezeny"</h3>
                                            <p class="muted">"Zkuste změnit vyhledávání nebo se vraťte později."</p>
                                        </div>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="listing-page__grid">
                                            {list
                                                .into_iter()
                                                .map(|recipe| {
                                                    view! { <RecipeGridCard recipe=recipe on_select=open_recipe/> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                            Err(err) => view! {
                                <div class="listing-page__error">
                                    <p class="error-text">{err.message("Nepodařilo se načíst recepty")}</p>
                                    <button class="btn btn--primary" on:click=move |_| recipes.refetch()>
                                        "Zkusit znovu"
                                    </button>
                                </div>
                            }
                                .into_any(),
                        })
                    }}
                </Suspense>
            </main>
        </div>
    }
}
