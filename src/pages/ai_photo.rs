//! Recipe ideas from a photo: pick an image, see a preview, get a
//! suggestion.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthHandle;
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "csr")]
const SUGGESTION: &str = "Na fotce to vypadá na skvělé suroviny! Zkuste z nich připravit jednoduchou \
zeleninovou pánev: vše nakrájejte, orestujte na olivovém oleji, dochuťte solí, pepřem a bylinkami \
a podávejte s pečivem.";

#[component]
pub fn AiPhotoPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let preview = RwSignal::new(None::<String>);
    let file_name = RwSignal::new(None::<String>);
    let loading = RwSignal::new(false);
    let response = RwSignal::new(None::<String>);

    let on_pick = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let target: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = target.files().and_then(|files| files.get(0)) {
                file_name.set(Some(file.name()));
                response.set(None);
                if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                    preview.set(Some(url));
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_generate = move |_| {
        if loading.get() || preview.get().is_none() {
            return;
        }
        loading.set(true);
        response.set(None);

        // TODO: call the agent photo endpoint once the backend exposes one.
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(1500).await;
            response.set(Some(SUGGESTION.to_owned()));
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        loading.set(false);
    };

    let go_back = move |_| navigate("/ai", NavigateOptions::default());

    view! {
        <div class="ai-photo">
            <header class="navbar">
                <button class="btn" on:click=go_back>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"📷"</span>
                    <span>"Recept z fotky"</span>
                </div>
            </header>

            <main class="ai-photo__main">
                <section class="ai-photo__form-card">
                    <h2>"Vyfoťte, co máte"</h2>
                    <label class="ai-photo__picker">
                        <input type="file" accept="image/*" on:change=on_pick/>
                        <span class="btn">"Vybrat fotku"</span>
                        <span class="muted">
                            {move || file_name.get().unwrap_or_else(|| "Žádný soubor nevybrán".to_owned())}
                        </span>
                    </label>

                    {move || {
                        preview.get().map(|src| {
                            view! {
                                <div class="ai-photo__preview">
                                    <img src=src alt="Náhled fotky"/>
                                </div>
                            }
                        })
                    }}

                    <button
                        class="btn btn--primary"
                        disabled=move || loading.get() || preview.get().is_none()
                        on:click=on_generate
                    >
                        {move || if loading.get() { "Zkoumám fotku..." } else { "Navrhnout recept" }}
                    </button>
                </section>

                {move || {
                    response.get().map(|text| {
                        view! {
                            <section class="ai-photo__response">
                                <h3>"Návrh od asistenta"</h3>
                                <p>{text}</p>
                            </section>
                        }
                    })
                }}
            </main>
        </div>
    }
}
