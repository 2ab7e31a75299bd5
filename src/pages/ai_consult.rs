//! AI consult page: a chat thread against the consult agent.
//!
//! The whole conversation is sent on every turn so the agent keeps
//! context. Assistant answers arrive as markdown and are rendered with
//! raw HTML stripped.

#[cfg(test)]
#[path = "ai_consult_test.rs"]
mod ai_consult_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::state::auth::AuthHandle;
use crate::state::chat::{self, ChatMessage, Sender};
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "csr")]
const CHAT_ERROR_MESSAGE: &str =
    "Omlouvám se, ale nastala chyba při komunikaci se šéfkuchařem. Zkuste to prosím znovu za chvíli.";

/// Render assistant markdown to HTML, dropping raw HTML events from the
/// model output before rendering.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn AiConsultPage(auth: AuthHandle) -> impl IntoView {
    let navigate = use_navigate();
    install_unauth_redirect(&auth, navigate.clone());

    let messages = RwSignal::new(vec![chat::greeting()]);
    let input = RwSignal::new(String::new());
    let typing = RwSignal::new(false);
    let messages_ref = NodeRef::<leptos::html::Main>::new();

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = messages.get().len();
        let _ = typing.get();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = {
        let gateway = auth.gateway.clone();
        move || {
            let text = input.get().trim().to_owned();
            if text.is_empty() || typing.get() {
                return;
            }

            messages.update(|m| m.push(ChatMessage::user(text)));
            input.set(String::new());
            typing.set(true);

            #[cfg(feature = "csr")]
            {
                let gateway = gateway.clone();
                let history = chat::to_agent_messages(&messages.get_untracked());
                leptos::task::spawn_local(async move {
                    let reply = match crate::net::api::consult_agent(&gateway, &history).await {
                        Ok(answer) => ChatMessage::assistant(answer),
                        Err(_) => ChatMessage::assistant(CHAT_ERROR_MESSAGE),
                    };
                    messages.update(|m| m.push(reply));
                    typing.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = &gateway;
                typing.set(false);
            }
        }
    };

    let on_submit = {
        let do_send = do_send.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            do_send();
        }
    };

    let go_back = move |_| navigate("/ai", NavigateOptions::default());

    view! {
        <div class="chat-page">
            <header class="navbar">
                <button class="btn" on:click=go_back>
                    "‹ Zpět"
                </button>
                <div class="navbar__brand">
                    <span class="navbar__logo">"✨"</span>
                    <span>"AI Konzultace"</span>
                </div>
            </header>

            <main class="chat-page__messages" node_ref=messages_ref>
                {move || {
                    messages
                        .get()
                        .iter()
                        .map(|message| {
                            let is_user = message.sender == Sender::User;
                            let content = message.content.clone();
                            view! {
                                <div class="chat-page__row" class:chat-page__row--user=is_user>
                                    <span class="chat-page__avatar">{if is_user { "🙂" } else { "🤖" }}</span>
                                    {if is_user {
                                        view! { <div class="chat-page__bubble chat-page__bubble--user">{content}</div> }
                                            .into_any()
                                    } else {
                                        view! {
                                            <div
                                                class="chat-page__bubble chat-page__bubble--assistant"
                                                inner_html=render_markdown_html(&content)
                                            ></div>
                                        }
                                            .into_any()
                                    }}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || typing.get()>
                    <div class="chat-page__row">
                        <span class="chat-page__avatar">"🤖"</span>
                        <div class="chat-page__bubble chat-page__bubble--assistant chat-page__typing">
                            <span></span>
                            <span></span>
                            <span></span>
                        </div>
                    </div>
                </Show>
            </main>

            <form class="chat-page__input-row" on:submit=on_submit>
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Zeptejte se na cokoliv ohledně vaření..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || typing.get() || input.get().trim().is_empty()
                >
                    "Odeslat"
                </button>
            </form>
            <p class="chat-page__disclaimer muted">
                "AI může dělat chyby. Vždy se řiďte svým kulinářským instinktem."
            </p>
        </div>
    }
}
