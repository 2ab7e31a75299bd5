//! Recipe create/edit form with dynamic ingredient and step rows.

#[cfg(test)]
#[path = "recipe_form_test.rs"]
mod recipe_form_test;

use leptos::prelude::*;

use crate::net::types::{Ingredient, Recipe, RecipeDraft, Visibility};

/// One editable ingredient line; all fields are free text until submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientRow {
    pub name: String,
    pub amount: String,
    pub unit: String,
}

impl IngredientRow {
    fn from_ingredient(ingredient: &Ingredient) -> Self {
        Self {
            name: ingredient.name.clone(),
            amount: ingredient.amount.clone(),
            unit: ingredient.unit.clone().unwrap_or_default(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Assemble the submit payload: blank rows are dropped, tags come from a
/// comma-separated field, empty description/video become absent.
pub fn build_recipe_draft(
    title: &str,
    description: &str,
    video_url: &str,
    steps: &[String],
    ingredients: &[IngredientRow],
    tags: &str,
    visibility: Visibility,
) -> RecipeDraft {
    RecipeDraft {
        title: title.trim().to_owned(),
        description: non_empty(description),
        video_url: non_empty(video_url),
        steps: steps.iter().filter(|s| !s.trim().is_empty()).cloned().collect(),
        ingredients: ingredients
            .iter()
            .filter(|row| !row.name.trim().is_empty())
            .map(|row| Ingredient {
                name: row.name.clone(),
                amount: row.amount.clone(),
                unit: non_empty(&row.unit),
            })
            .collect(),
        tags: tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_owned)
            .collect(),
        visibility,
    }
}

/// Recipe form used by both the create modal (no `initial`) and the edit
/// modal (pre-filled from the recipe being edited). Emits a
/// [`RecipeDraft`] through `on_submit`; the parent owns the network call
/// and the `submitting` flag.
#[component]
pub fn RecipeForm(
    #[prop(optional, into)] initial: Option<Recipe>,
    on_submit: Callback<RecipeDraft>,
    on_cancel: Callback<()>,
    submitting: RwSignal<bool>,
) -> impl IntoView {
    let title = RwSignal::new(initial.as_ref().map(|r| r.title.clone()).unwrap_or_default());
    let description = RwSignal::new(
        initial
            .as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let video_url = RwSignal::new(initial.as_ref().and_then(|r| r.video_url.clone()).unwrap_or_default());
    let tags = RwSignal::new(initial.as_ref().map(|r| r.tags.join(", ")).unwrap_or_default());
    let visibility = RwSignal::new(initial.as_ref().map_or(Visibility::Public, |r| r.visibility));

    let initial_steps = initial
        .as_ref()
        .map(|r| r.steps.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| vec![String::new()]);
    let steps = RwSignal::new(initial_steps);

    let initial_rows = initial
        .as_ref()
        .map(|r| r.ingredients.iter().map(IngredientRow::from_ingredient).collect::<Vec<_>>())
        .filter(|rows| !rows.is_empty())
        .unwrap_or_else(|| vec![IngredientRow::default()]);
    let ingredients = RwSignal::new(initial_rows);

    let is_edit = initial.is_some();

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() || title.get().trim().is_empty() {
            return;
        }
        let draft = build_recipe_draft(
            &title.get(),
            &description.get(),
            &video_url.get(),
            &steps.get(),
            &ingredients.get(),
            &tags.get(),
            visibility.get(),
        );
        on_submit.run(draft);
    };

    view! {
        <form class="recipe-form" on:submit=on_form_submit>
            <label class="recipe-form__label">
                "Název receptu *"
                <input
                    class="recipe-form__input"
                    type="text"
                    placeholder="Např. Tradiční Carbonara"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
            </label>

            <label class="recipe-form__label">
                "Popis"
                <textarea
                    class="recipe-form__textarea"
                    placeholder="Krátce popište váš recept..."
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>

            <label class="recipe-form__label">
                "Video URL (YouTube)"
                <input
                    class="recipe-form__input"
                    type="text"
                    placeholder="https://www.youtube.com/watch?v=..."
                    prop:value=move || video_url.get()
                    on:input=move |ev| video_url.set(event_target_value(&ev))
                />
            </label>

            <div class="recipe-form__section">
                <span class="recipe-form__label">"Ingredience"</span>
                {move || {
                    let rows = ingredients.get();
                    let removable = rows.len() > 1;
                    rows.iter()
                        .enumerate()
                        .map(|(idx, row)| {
                            view! {
                                <div class="recipe-form__ingredient-row">
                                    <input
                                        class="recipe-form__input recipe-form__input--name"
                                        type="text"
                                        placeholder="Název (např. Mouka)"
                                        prop:value=row.name.clone()
                                        on:input=move |ev| {
                                            ingredients.update(|rows| rows[idx].name = event_target_value(&ev));
                                        }
                                    />
                                    <input
                                        class="recipe-form__input recipe-form__input--amount"
                                        type="text"
                                        placeholder="Množství"
                                        prop:value=row.amount.clone()
                                        on:input=move |ev| {
                                            ingredients.update(|rows| rows[idx].amount = event_target_value(&ev));
                                        }
                                    />
                                    <input
                                        class="recipe-form__input recipe-form__input--unit"
                                        type="text"
                                        placeholder="Jednotka"
                                        prop:value=row.unit.clone()
                                        on:input=move |ev| {
                                            ingredients.update(|rows| rows[idx].unit = event_target_value(&ev));
                                        }
                                    />
                                    <Show when=move || removable>
                                        <button
                                            type="button"
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                ingredients.update(|rows| {
                                                    rows.remove(idx);
                                                });
                                            }
                                        >
                                            "Odebrat"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    type="button"
                    class="btn recipe-form__add"
                    on:click=move |_| ingredients.update(|rows| rows.push(IngredientRow::default()))
                >
                    "+ Přidat ingredienci"
                </button>
            </div>

            <div class="recipe-form__section">
                <span class="recipe-form__label">"Postup"</span>
                {move || {
                    let current = steps.get();
                    let removable = current.len() > 1;
                    current
                        .iter()
                        .enumerate()
                        .map(|(idx, step)| {
                            view! {
                                <div class="recipe-form__step-row">
                                    <span class="recipe-form__step-number">{format!("Krok {}", idx + 1)}</span>
                                    <textarea
                                        class="recipe-form__textarea"
                                        placeholder="Napište instrukce..."
                                        prop:value=step.clone()
                                        on:input=move |ev| {
                                            steps.update(|s| s[idx] = event_target_value(&ev));
                                        }
                                    ></textarea>
                                    <Show when=move || removable>
                                        <button
                                            type="button"
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                steps.update(|s| {
                                                    s.remove(idx);
                                                });
                                            }
                                        >
                                            "Odebrat"
                                        </button>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button
                    type="button"
                    class="btn recipe-form__add"
                    on:click=move |_| steps.update(|s| s.push(String::new()))
                >
                    "+ Přidat krok"
                </button>
            </div>

            <label class="recipe-form__label">
                "Tagy (oddělené čárkou)"
                <input
                    class="recipe-form__input"
                    type="text"
                    placeholder="např. itálie, pasta, rychlé"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
            </label>

            <label class="recipe-form__label">
                "Viditelnost"
                <select
                    class="recipe-form__input"
                    on:change=move |ev| visibility.set(Visibility::from_form_value(&event_target_value(&ev)))
                    prop:value=move || visibility.get().as_str()
                >
                    <option value="public" selected=move || visibility.get() == Visibility::Public>
                        "Veřejný"
                    </option>
                    <option value="private" selected=move || visibility.get() == Visibility::Private>
                        "Soukromý"
                    </option>
                </select>
            </label>

            <div class="recipe-form__actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(()) disabled=move || submitting.get()>
                    "Zrušit"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || submitting.get()>
                    {move || {
                        if submitting.get() {
                            "Ukládám..."
                        } else if is_edit {
                            "Uložit změny"
                        } else {
                            "Vytvořit recept"
                        }
                    }}
                </button>
            </div>
        </form>
    }
}
