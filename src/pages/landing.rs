//! Landing page: the signed-in user's kitchen.
//!
//! Shows a hero carousel of random public recipes, the user's own
//! searchable recipe grid with create/edit modals, and quick stats for
//! recipes, favorites and the shopping cart.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::carousel::Carousel;
use crate::components::modal::Modal;
use crate::components::recipe_form::RecipeForm;
use crate::components::recipe_grid_card::RecipeGridCard;
use crate::net::api;
use crate::net::types::Recipe;
use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;

const HERO_LIMIT: usize = 8;

#[component]
pub fn LandingPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let search = RwSignal::new(String::new());
    let submitted_search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);
    let editing = RwSignal::new(None::<Recipe>);
    let submitting = RwSignal::new(false);

    let random_recipes = {
        let gateway = auth.gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move { api::fetch_random_recipes(&gateway, HERO_LIMIT).await }
        })
    };

    let my_recipes = {
        let gateway = auth.gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            let term = submitted_search.get();
            async move {
                let term = if term.is_empty() { None } else { Some(term) };
                api::fetch_my_recipes(&gateway, term.as_deref()).await
            }
        })
    };

    let favorites = {
        let gateway = auth.gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move { api::fetch_favorite_recipes(&gateway).await }
        })
    };

    let cart = {
        let gateway = auth.gateway.clone();
        LocalResource::new(move || {
            let gateway = gateway.clone();
            async move { api::fetch_cart(&gateway).await }
        })
    };

    let open_recipe = {
        let navigate = navigate.clone();
        Callback::new(move |id: String| {
            navigate(&format!("/recipes/{id}"), NavigateOptions::default());
        })
    };

    let on_edit = Callback::new(move |recipe: Recipe| editing.set(Some(recipe)));

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitted_search.set(search.get().trim().to_owned());
    };

    let on_logout = {
        let auth = auth.clone();
        move |_| auth.logout()
    };

    let submit_create = {
        let auth = auth.clone();
        Callback::new(move |draft: crate::net::types::RecipeDraft| {
            if submitting.get() {
                return;
            }
            submitting.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = auth.gateway.clone();
                leptos::task::spawn_local(async move {
                    match api::create_recipe(&gateway, &draft).await {
                        Ok(_) => {
                            show_create.set(false);
                            my_recipes.refetch();
                        }
                        Err(err) => crate::util::dialog::alert(&err.message("Nepodařilo se vytvořit recept")),
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&auth, draft);
            }
        })
    };

    let submit_edit = {
        let auth = auth.clone();
        Callback::new(move |draft: crate::net::types::RecipeDraft| {
            let Some(recipe) = editing.get() else {
                return;
            };
            if submitting.get() {
                return;
            }
            submitting.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = auth.gateway.clone();
                leptos::task::spawn_local(async move {
                    match api::update_recipe(&gateway, &recipe.id, &draft).await {
                        Ok(_) => {
                            editing.set(None);
                            my_recipes.refetch();
                        }
                        Err(err) => crate::util::dialog::alert(&err.message("Nepodařilo se aktualizovat recept")),
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&auth, recipe, draft);
            }
        })
    };

    let user_email = Signal::derive({
        let auth = auth.clone();
        move || auth.state.get().user.map(|u| u.email).unwrap_or_default()
    });
    let user_name = Signal::derive({
        let auth = auth.clone();
        move || auth.state.get().user.map(|u| u.name).unwrap_or_default()
    });

    let go = move |path: &'static str| {
        let navigate = navigate.clone();
        move |_| navigate(path, NavigateOptions::default())
    };

    view! {
        <div class="landing-page">
            <header class="navbar">
                <div class="navbar__brand">
                    <span class="navbar__logo">"🍲"</span>
                    <span>"Receptář"</span>
                </div>
                <div class="navbar__actions">
                    <span class="navbar__email">{user_email}</span>
                    <button class="btn" on:click=go("/cart")>
                        "🛒 Nákupní seznam"
                    </button>
                    <button class="btn" on:click=on_logout>
                        "Odhlásit"
                    </button>
                </div>
            </header>

            <main class="landing-page__main">
                <div class="landing-page__actions">
                    <form class="landing-page__search" on:submit=on_search>
                        <input
                            class="landing-page__search-input"
                            type="text"
                            placeholder="Hledat recepty, ingredience..."
                            prop:value=move || search.get()
                            on:input=move |ev| search.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">
                            "Hledat"
                        </button>
                    </form>
                    <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                        "+ Nový recept"
                    </button>
                    <button class="btn btn--accent" on:click=go("/ai")>
                        "✨ AI Asistent"
                    </button>
                    <button class="btn" on:click=go("/recipes")>
                        "🌍 Veřejné recepty"
                    </button>
                </div>

                <section class="landing-page__hero">
                    <h2>"Inspirace pro dnešní vaření"</h2>
                    <Suspense fallback=move || view! { <p class="muted">"Načítám inspiraci..."</p> }>
                        {move || {
                            random_recipes.get().map(|result| match result {
                                Ok(recipes) => view! { <Carousel items=recipes on_select=open_recipe/> }.into_any(),
                                Err(_) => ().into_any(),
                            })
                        }}
                    </Suspense>
                </section>

                <section class="landing-page__mine">
                    <h2>"Moje recepty"</h2>
                    <Suspense fallback=move || view! { <p class="muted">"Načítám vaše recepty..."</p> }>
                        {move || {
                            my_recipes.get().map(|result| match result {
                                Ok(recipes) => {
                                    if recipes.is_empty() {
                                        view! {
                                            <div class="landing-page__empty">
                                                <div class="landing-page__empty-badge">"👨‍🍳"</div>
                                                <h3>{move || format!("Vítejte ve své kuchyni, {}!", user_name.get())}</h3>
                                                <p class="muted">
                                                    "Zatím zde nejsou žádné recepty. Začněte přidáním svého prvního kulinářského díla nebo se zeptejte AI na inspiraci."
                                                </p>
                                            </div>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div class="landing-page__grid">
                                                {recipes
                                                    .into_iter()
                                                    .map(|recipe| {
                                                        view! {
                                                            <RecipeGridCard
                                                                recipe=recipe
                                                                on_select=open_recipe
                                                                on_edit=on_edit
                                                            />
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </div>
                                        }
                                            .into_any()
                                    }
                                }
                                Err(err) => view! {
                                    <div class="landing-page__error">
                                        <p class="error-text">{err.message("Nepodařilo se načíst recepty")}</p>
                                        <button class="btn" on:click=move |_| my_recipes.refetch()>
                                            "Zkusit znovu"
                                        </button>
                                    </div>
                                }
                                    .into_any(),
                            })
                        }}
                    </Suspense>
                </section>

                <section class="landing-page__stats">
                    <div class="stat-card">
                        <span class="stat-card__value">
                            {move || {
                                my_recipes
                                    .get()
                                    .and_then(|r| r.ok())
                                    .map_or_else(|| "–".to_owned(), |r| r.len().to_string())
                            }}
                        </span>
                        <span class="muted">"Moje recepty"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">
                            {move || {
                                favorites
                                    .get()
                                    .and_then(|r| r.ok())
                                    .map_or_else(|| "–".to_owned(), |r| r.len().to_string())
                            }}
                        </span>
                        <span class="muted">"Oblíbené"</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__value">
                            {move || {
                                cart.get()
                                    .and_then(|r| r.ok())
                                    .map_or_else(|| "–".to_owned(), |c| c.items.len().to_string())
                            }}
                        </span>
                        <span class="muted">"Nákupní seznam"</span>
                    </div>
                </section>
            </main>

            <Show when=move || show_create.get()>
                <Modal title="Nový recept" on_close=Callback::new(move |()| show_create.set(false))>
                    <RecipeForm on_submit=submit_create on_cancel=Callback::new(move |()| show_create.set(false)) submitting=submitting/>
                </Modal>
            </Show>

            {move || {
                editing.get().map(|recipe| {
                    view! {
                        <Modal title="Upravit recept" on_close=Callback::new(move |()| editing.set(None))>
                            <RecipeForm
                                initial=recipe
                                on_submit=submit_edit
                                on_cancel=Callback::new(move |()| editing.set(None))
                                submitting=submitting
                            />
                        </Modal>
                    }
                })
            }}
        </div>
    }
}
