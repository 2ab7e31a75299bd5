//! Modal dialog shell: backdrop, title bar, arbitrary content.

use leptos::prelude::*;

/// Centered dialog over a dimmed backdrop. Clicking the backdrop or the
/// close button closes; clicks inside the dialog do not propagate out.
#[component]
pub fn Modal(#[prop(into)] title: String, on_close: Callback<()>, children: Children) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <div class="dialog__header">
                    <h2>{title}</h2>
                    <button class="dialog__close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
