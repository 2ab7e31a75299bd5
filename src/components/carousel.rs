//! Horizontally scrollable recipe carousel with optional auto-advance.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use leptos::prelude::*;

use crate::components::hero_recipe_card::HeroRecipeCard;
use crate::net::types::Recipe;

#[cfg(feature = "csr")]
const AUTO_SLIDE_MS: u32 = 3000;

/// Auto-advance only makes sense when the row actually overflows.
const AUTO_SLIDE_THRESHOLD: usize = 4;

/// Whether the carousel should advance on its own right now.
pub fn should_auto_slide(count: usize, threshold: usize, paused: bool) -> bool {
    count > threshold && !paused
}

/// Hero-card row that scrolls a full viewport per step and wraps back to
/// the start; pauses while the pointer is over it.
#[component]
pub fn Carousel(items: Vec<Recipe>, on_select: Callback<String>) -> impl IntoView {
    if items.is_empty() {
        return ().into_any();
    }

    let paused = RwSignal::new(false);
    let scroll_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let scroll_step = move |direction: i32| {
        if let Some(el) = scroll_ref.get_untracked() {
            let width = el.client_width();
            let at_end = el.scroll_left() + width >= el.scroll_width() - 10;
            if direction > 0 && at_end {
                el.set_scroll_left(0);
            } else {
                el.set_scroll_left(el.scroll_left() + direction * width);
            }
        }
    };

    let on_prev = move |_| {
        #[cfg(feature = "csr")]
        scroll_step(-1);
    };
    let on_next = move |_| {
        #[cfg(feature = "csr")]
        scroll_step(1);
    };

    #[cfg(feature = "csr")]
    {
        let count = items.len();
        let interval = gloo_timers::callback::Interval::new(AUTO_SLIDE_MS, move || {
            if should_auto_slide(count, AUTO_SLIDE_THRESHOLD, paused.get_untracked()) {
                scroll_step(1);
            }
        });
        on_cleanup(move || drop(interval));
    }

    view! {
        <div
            class="carousel"
            on:mouseenter=move |_| paused.set(true)
            on:mouseleave=move |_| paused.set(false)
        >
            <button class="carousel__arrow carousel__arrow--left" aria-label="Předchozí" on:click=on_prev>
                "‹"
            </button>
            <div class="carousel__track" node_ref=scroll_ref>
                {items
                    .into_iter()
                    .map(|recipe| {
                        view! { <HeroRecipeCard recipe=recipe on_select=on_select/> }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <button class="carousel__arrow carousel__arrow--right" aria-label="Další" on:click=on_next>
                "›"
            </button>
        </div>
    }
    .into_any()
}
