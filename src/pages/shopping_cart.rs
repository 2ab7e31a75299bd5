//! Shopping cart page: list, add, remove and clear items. Every mutation
//! returns the updated cart, which replaces the local copy wholesale.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::ShoppingCart;
use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;
use crate::util::dialog;

#[component]
pub fn ShoppingCartPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let cart = RwSignal::new(None::<ShoppingCart>);
    let loading = RwSignal::new(true);
    let new_item = RwSignal::new(String::new());
    let adding = RwSignal::new(false);

    let load = {
        let gateway = auth.gateway.clone();
        move || {
            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_cart(&gateway).await {
                        Ok(found) => cart.set(Some(found)),
                        Err(err) => leptos::logging::warn!("shopping cart fetch failed: {err}"),
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
        Effect::new(move || load());
    }

    let on_add = {
        let gateway = auth.gateway.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let value = new_item.get().trim().to_owned();
            if value.is_empty() || adding.get() {
                return;
            }
            adding.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::add_cart_item(&gateway, &value).await {
                        Ok(updated) => {
                            cart.set(Some(updated));
                            new_item.set(String::new());
                        }
                        Err(err) => dialog::alert(&err.message("Položku se nepodařilo přidat")),
                    }
                    adding.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, value);
                adding.set(false);
            }
        }
    };

    let on_remove = {
        let gateway = auth.gateway.clone();
        Callback::new(move |item_id: String| {
            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::remove_cart_item(&gateway, &item_id).await {
                        Ok(updated) => cart.set(Some(updated)),
                        Err(err) => dialog::alert(&err.message("Položku se nepodařilo odebrat")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, item_id);
            }
        })
    };

    let on_clear = {
        let gateway = auth.gateway.clone();
        let load = load.clone();
        move |_| {
            if !dialog::confirm("Opravdu chcete vymazat celý seznam?") {
                return;
            }

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let load = load.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::clear_cart(&gateway).await {
                        Ok(()) => load(),
                        Err(err) => dialog::alert(&err.message("Seznam se nepodařilo vymazat")),
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&gateway, &load);
            }
        }
    };

    let go_back = move |_| navigate("/", NavigateOptions::default());

    view! {
        <div class="cart-page">
            <header class="navbar">
                <button class="btn" on:click=go_back>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"🛒"</span>
                    <span>"Nákupní seznam"</span>
                </div>
            </header>

            <main class="cart-page__main">
                <form class="cart-page__add" on:submit=on_add>
                    <input
                        class="cart-page__input"
                        type="text"
                        placeholder="Co potřebujete koupit?"
                        prop:value=move || new_item.get()
                        on:input=move |ev| new_item.set(event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || adding.get() || new_item.get().trim().is_empty()
                    >
                        {move || if adding.get() { "..." } else { "+" }}
                    </button>
                </form>

                {move || {
                    if loading.get() {
                        return view! {
                            <div class="cart-page__loading">
                                <div class="spinner"></div>
                                <p class="muted">"Načítám váš seznam..."</p>
                            </div>
                        }
                            .into_any();
                    }

                    let items = cart.get().map(|c| c.items).unwrap_or_default();
                    if items.is_empty() {
                        return view! {
                            <div class="cart-page__empty">
                                <div class="cart-page__empty-badge">"🛒"</div>
                                <h2>"Seznam je prázdný"</h2>
                                <p class="muted">"Zatím jste si nic neuložili. Začněte přidáním první položky!"</p>
                            </div>
                        }
                            .into_any();
                    }

                    let count = items.len();
                    view! {
                        <div class="cart-page__items">
                            {items
                                .into_iter()
                                .map(|item| {
                                    let item_id = item.id.clone();
                                    view! {
                                        <div class="cart-page__item">
                                            <span class="cart-page__value">{item.value.clone()}</span>
                                            <button
                                                class="btn btn--ghost"
                                                on:click=move |_| on_remove.run(item_id.clone())
                                            >
                                                "Odebrat"
                                            </button>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                            <div class="cart-page__footer">
                                <span class="muted">{format!("Celkem {count} položek")}</span>
                                <button class="cart-page__clear" on:click=on_clear.clone()>
                                    "Vymazat vše"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }}
            </main>
        </div>
    }
}
