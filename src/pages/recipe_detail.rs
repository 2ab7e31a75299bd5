//! Recipe detail page: full view plus owner actions (edit, delete, AI
//! video analysis) and favoriting.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::modal::Modal;
use crate::components::recipe_form::RecipeForm;
use crate::net::types::{Recipe, RecipeDraft};
use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog;
use crate::util::video::embed_url;

#[component]
pub fn RecipeDetailPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let params = use_params_map();
    let recipe_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let recipe = RwSignal::new(None::<Recipe>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let editing = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let analyzing = RwSignal::new(false);

    let load = {
        let gateway = auth.gateway.clone();
        move || {
            loading.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let id = recipe_id.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_recipe(&gateway, &id).await {
                        Ok(found) => {
                            recipe.set(Some(found));
                            error.set(None);
                        }
                        Err(err) => error.set(Some(err.message("Nepodařilo se načíst detail receptu"))),
                    }
                    loading.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &gateway;
                loading.set(false);
            }
        }
    };

    {
        let load = load.clone();
        Effect::new(move || {
            let _ = recipe_id.get();
            load();
        });
    }

    let current_user_id = {
        let auth = auth.clone();
        Signal::derive(move || auth.state.get().user.map(|u| u.id))
    };

    let go_back = {
        let navigate = navigate.clone();
        move |_| navigate("/", NavigateOptions::default())
    };

    let on_favorite = {
        let gateway = auth.gateway.clone();
        Callback::new(move |()| {
            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let id = recipe_id.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::toggle_favorite(&gateway, &id).await {
                        Ok(updated) => recipe.update(|r| {
                            if let Some(r) = r {
                                r.is_favorite = updated.is_favorite;
                            }
                        }),
                        Err(err) => dialog::alert(&err.message("Nepodařilo se změnit stav oblíbených")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &gateway;
            }
        })
    };

    let on_analyze = {
        let gateway = auth.gateway.clone();
        let load = load.clone();
        Callback::new(move |video_url: String| {
            if analyzing.get() {
                return;
            }
            analyzing.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let load = load.clone();
                let id = recipe_id.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::analyze_video(&gateway, &id, &video_url).await {
                        Ok(message) => {
                            dialog::alert(&message);
                            load();
                        }
                        Err(err) => dialog::alert(&err.message("Analýza AI se nezdařila")),
                    }
                    analyzing.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, &load, video_url);
                analyzing.set(false);
            }
        })
    };

    let on_delete = {
        let gateway = auth.gateway.clone();
        let navigate = navigate.clone();
        Callback::new(move |()| {
            if submitting.get() {
                return;
            }
            if !dialog::confirm("Opravdu chcete tento recept smazat? Tato akce je nevratná.") {
                return;
            }
            submitting.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let navigate = navigate.clone();
                let id = recipe_id.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_recipe(&gateway, &id).await {
                        Ok(()) => navigate("/", NavigateOptions::default()),
                        Err(err) => dialog::alert(&err.message("Nepodařilo se smazat recept")),
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, &navigate);
                submitting.set(false);
            }
        })
    };

    let on_update = {
        let gateway = auth.gateway.clone();
        Callback::new(move |draft: RecipeDraft| {
            if submitting.get() {
                return;
            }
            submitting.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let id = recipe_id.get_untracked();
                leptos::task::spawn_local(async move {
                    match crate::net::api::update_recipe(&gateway, &id, &draft).await {
                        Ok(updated) => {
                            recipe.set(Some(updated));
                            editing.set(false);
                        }
                        Err(err) => dialog::alert(&err.message("Nepodařilo se aktualizovat recept")),
                    }
                    submitting.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, draft);
                submitting.set(false);
            }
        })
    };

    view! {
        <div class="detail-page">
            {move || {
                if loading.get() {
                    return view! {
                        <div class="detail-page__loading">
                            <div class="spinner"></div>
                            <p class="muted">"Připravuji ingredience..."</p>
                        </div>
                    }
                        .into_any();
                }

                let Some(current) = recipe.get() else {
                    let message = error.get().unwrap_or_else(|| "Recept nebyl nalezen.".to_owned());
                    return view! {
                        <div class="detail-page__error">
                            <div class="detail-page__error-badge">"🌪️"</div>
                            <h3>"Ups! Recept zmizel"</h3>
                            <p class="muted">{message}</p>
                            <button class="btn btn--primary" on:click=go_back.clone()>
                                "Zpět na seznam"
                            </button>
                        </div>
                    }
                        .into_any();
                };

                let is_author = current_user_id.get().is_some_and(|uid| uid == current.author_id);
                let is_favorite = current.is_favorite;
                let video_url = current.video_url.clone();
                let embed = video_url.as_deref().and_then(embed_url);
                let analyze_url = video_url.clone();
                let has_video = analyze_url.is_some();
                let title = current.title.clone();
                let edit_initial = current.clone();

                view! {
                    <header class="navbar">
                        <button class="btn" on:click=go_back.clone()>
                            "‹ Zpět"
                        </button>
                        <h1 class="navbar__title">{title.clone()}</h1>
                        <div class="navbar__actions">
                            <button
                                class="btn detail-page__favorite"
                                class:detail-page__favorite--active=is_favorite
                                on:click=move |_| on_favorite.run(())
                            >
                                {if is_favorite { "♥" } else { "♡" }}
                            </button>
                            <Show when=move || is_author>
                                <button
                                    class="btn btn--accent"
                                    disabled=move || analyzing.get() || !has_video
                                    on:click={
                                        let analyze_url = analyze_url.clone();
                                        move |_| {
                                            if let Some(url) = analyze_url.clone() {
                                                on_analyze.run(url);
                                            }
                                        }
                                    }
                                >
                                    {move || if analyzing.get() { "Analyzuji..." } else { "✨ AI Analyzovat" }}
                                </button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || submitting.get() || analyzing.get()
                                    on:click=move |_| editing.set(true)
                                >
                                    "Upravit"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    disabled=move || submitting.get() || analyzing.get()
                                    on:click=move |_| on_delete.run(())
                                >
                                    "Smazat"
                                </button>
                            </Show>
                        </div>
                    </header>

                    <main class="detail-page__main">
                        <section class="detail-page__hero">
                            <div class="detail-page__tags">
                                {current
                                    .tags
                                    .iter()
                                    .map(|tag| view! { <span class="tag tag--accent">{tag.clone()}</span> })
                                    .collect::<Vec<_>>()}
                            </div>
                            <h2>{title}</h2>
                            <p class="detail-page__description">
                                {current
                                    .description
                                    .clone()
                                    .unwrap_or_else(|| {
                                        "Tento recept zatím nemá popis, ale určitě stojí za vyzkoušení!".to_owned()
                                    })}
                            </p>
                            <div class="detail-page__meta">
                                <span>{format!("Publikováno: {}", current.created_date())}</span>
                                <span>{format!("Autor: {}", current.author_short())}</span>
                                {video_url
                                    .clone()
                                    .map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Původní video"</a> })}
                                {current
                                    .web_url
                                    .clone()
                                    .map(|url| view! { <a href=url target="_blank" rel="noopener noreferrer">"Původní recept (WEB)"</a> })}
                            </div>
                        </section>

                        {embed
                            .map(|src| {
                                view! {
                                    <section class="detail-page__video">
                                        <iframe
                                            class="detail-page__player"
                                            src=src
                                            title="Video k receptu"
                                            allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                                            allowfullscreen="true"
                                        ></iframe>
                                    </section>
                                }
                            })}

                        <div class="detail-page__columns">
                            <aside class="detail-page__ingredients">
                                <h3>"Ingredience"</h3>
                                {if current.ingredients.is_empty() {
                                    view! { <p class="muted">"Seznam ingrediencí je prázdný."</p> }.into_any()
                                } else {
                                    view! {
                                        <ul>
                                            {current
                                                .ingredients
                                                .iter()
                                                .map(|ing| {
                                                    let quantity = match &ing.unit {
                                                        Some(unit) => format!("{} {unit}", ing.amount),
                                                        None => ing.amount.clone(),
                                                    };
                                                    view! {
                                                        <li>
                                                            <span>{ing.name.clone()}</span>
                                                            <span class="detail-page__amount">{quantity}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }}
                            </aside>

                            <section class="detail-page__steps">
                                <h3>"Postup přípravy"</h3>
                                {if current.steps.is_empty() {
                                    view! { <p class="muted">"Autor k tomuto receptu zatím nepřidal postup."</p> }
                                        .into_any()
                                } else {
                                    view! {
                                        <ol>
                                            {current
                                                .steps
                                                .iter()
                                                .map(|step| view! { <li>{step.clone()}</li> })
                                                .collect::<Vec<_>>()}
                                        </ol>
                                    }
                                        .into_any()
                                }}
                            </section>
                        </div>
                    </main>

                    <Show when=move || editing.get()>
                        {
                            let initial = edit_initial.clone();
                            move || {
                                let initial = initial.clone();
                                view! {
                                    <Modal title="Upravit recept" on_close=Callback::new(move |()| editing.set(false))>
                                        <RecipeForm
                                            initial=initial.clone()
                                            on_submit=on_update
                                            on_cancel=Callback::new(move |()| editing.set(false))
                                            submitting=submitting
                                        />
                                    </Modal>
                                }
                            }
                        }
                    </Show>
                }
                    .into_any()
            }}
        </div>
    }
}
