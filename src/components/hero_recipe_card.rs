//! Large visual card for the landing carousel.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::util::video::thumbnail_url;

/// Hero card: image (or video thumbnail) with the title overlaid and a
/// one-line description.
#[component]
pub fn HeroRecipeCard(recipe: Recipe, on_select: Callback<String>) -> impl IntoView {
    let id = recipe.id.clone();
    let thumbnail = recipe
        .image_url
        .clone()
        .or_else(|| recipe.video_url.as_deref().and_then(thumbnail_url));
    let description = recipe.description.clone().unwrap_or_else(|| "Bez popisu...".to_owned());

    view! {
        <div class="hero-card" on:click=move |_| on_select.run(id.clone())>
            <div class="hero-card__media">
                {match thumbnail {
                    Some(src) => view! { <img class="hero-card__image" src=src alt=recipe.title.clone()/> }.into_any(),
                    None => view! { <div class="hero-card__placeholder">"🍲"</div> }.into_any(),
                }}
                <div class="hero-card__overlay">
                    <h3 class="hero-card__title">{recipe.title.clone()}</h3>
                </div>
            </div>
            <p class="hero-card__description">{description}</p>
        </div>
    }
}
