//! Grid card for recipe listings.

use leptos::prelude::*;

use crate::net::types::Recipe;
use crate::util::video::thumbnail_url;

/// Clickable card showing thumbnail, title, description, tags and an
/// author/date footer. When `on_edit` is provided an edit button appears
/// that does not trigger the card's own click.
#[component]
pub fn RecipeGridCard(
    recipe: Recipe,
    on_select: Callback<String>,
    #[prop(optional, into)] on_edit: Option<Callback<Recipe>>,
) -> impl IntoView {
    let id = recipe.id.clone();
    let thumbnail = recipe.video_url.as_deref().and_then(thumbnail_url);
    let description = recipe.description.clone().unwrap_or_else(|| "Bez popisu.".to_owned());
    let author = format!("Autor: {}", recipe.author_short());
    let created = recipe.created_date().to_owned();
    let edit_recipe = recipe.clone();

    view! {
        <div class="recipe-card" on:click=move |_| on_select.run(id.clone())>
            <div class="recipe-card__media">
                {match thumbnail {
                    Some(src) => view! { <img class="recipe-card__image" src=src alt=recipe.title.clone()/> }.into_any(),
                    None => view! { <span class="recipe-card__placeholder">"🥘"</span> }.into_any(),
                }}
            </div>
            <h3 class="recipe-card__title">{recipe.title.clone()}</h3>
            <p class="recipe-card__description">{description}</p>
            <div class="recipe-card__tags">
                {recipe
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag">{format!("#{tag}")}</span> })
                    .collect::<Vec<_>>()}
            </div>
            <div class="recipe-card__footer">
                <span>{author}</span>
                <span>{created}</span>
                {on_edit.map(|on_edit| {
                    view! {
                        <button
                            class="btn btn--ghost recipe-card__edit"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_edit.run(edit_recipe.clone());
                            }
                        >
                            "Upravit"
                        </button>
                    }
                })}
            </div>
        </div>
    }
}
