//! Generate a recipe proposal from a list of ingredients.

#[cfg(test)]
#[path = "ai_ingredients_test.rs"]
mod ai_ingredients_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;

/// Drop blank rows and surrounding whitespace before submitting.
fn filled_ingredients(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(str::to_owned)
        .collect()
}

#[component]
pub fn AiIngredientsPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let ingredients = RwSignal::new(vec![String::new(), String::new(), String::new()]);
    let loading = RwSignal::new(false);
    let response = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    let on_submit = {
        let gateway = auth.gateway.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let filled = filled_ingredients(&ingredients.get());
            if filled.is_empty() || loading.get() {
                return;
            }

            loading.set(true);
            response.set(None);
            error.set(None);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::generate_from_ingredients(&gateway, &filled).await {
                        Ok(proposal) => response.set(Some(proposal)),
                        Err(err) => error.set(Some(err.message("Recept se nepodařilo vygenerovat"))),
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, filled);
                loading.set(false);
            }
        }
    };

    let go_back = move |_| navigate("/ai", NavigateOptions::default());

    view! {
        <div class="ai-ingredients">
            <header class="navbar">
                <button class="btn" on:click=go_back>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"🪄"</span>
                    <span>"Vytvořit recept z ingrediencí"</span>
                </div>
            </header>

            <main class="ai-ingredients__main">
                <section class="ai-ingredients__form-card">
                    <h2>"Co máte v kuchyni?"</h2>
                    <form on:submit=on_submit>
                        <div class="ai-ingredients__rows">
                            {move || {
                                let rows = ingredients.get();
                                let removable = rows.len() > 1;
                                rows.iter()
                                    .enumerate()
                                    .map(|(idx, row)| {
                                        view! {
                                            <div class="ai-ingredients__row">
                                                <input
                                                    class="ai-ingredients__input"
                                                    type="text"
                                                    placeholder=format!("Ingredience {}", idx + 1)
                                                    prop:value=row.clone()
                                                    on:input=move |ev| {
                                                        ingredients.update(|r| r[idx] = event_target_value(&ev));
                                                    }
                                                />
                                                <Show when=move || removable>
                                                    <button
                                                        type="button"
                                                        class="btn btn--ghost"
                                                        on:click=move |_| {
                                                            ingredients.update(|r| {
                                                                r.remove(idx);
                                                            });
                                                        }
                                                    >
                                                        "×"
                                                    </button>
                                                </Show>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                        <div class="ai-ingredients__actions">
                            <button
                                type="button"
                                class="btn"
                                on:click=move |_| ingredients.update(|r| r.push(String::new()))
                            >
                                "+ Další ingredience"
                            </button>
                            <button
                                type="submit"
                                class="btn btn--primary"
                                disabled=move || loading.get() || filled_ingredients(&ingredients.get()).is_empty()
                            >
                                {move || if loading.get() { "Vymýšlím recept..." } else { "Vygenerovat recept" }}
                            </button>
                        </div>
                    </form>
                </section>

                <Show when=move || error.get().is_some()>
                    <p class="error-text">{move || error.get().unwrap_or_default()}</p>
                </Show>

                {move || {
                    response.get().map(|proposal| {
                        view! {
                            <section class="ai-ingredients__response">
                                <h3>"Navržený recept"</h3>
                                <pre class="ai-ingredients__proposal">{proposal}</pre>
                            </section>
                        }
                    })
                }}
            </main>
        </div>
    }
}
