//! Typed wrappers for the REST endpoints.
//!
//! Each wrapper builds the request, routes it through the gateway
//! (public listings skip bearer injection entirely) and decodes the
//! response into the `types` DTOs. Endpoint paths are pure functions so
//! the URL shapes stay unit-tested.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::api_url;

use super::error::{ApiError, detail_message};
use super::gateway::AuthGateway;
use super::http::{HttpClient, HttpRequest, HttpResponse, encode_component};
use super::tokens::TokenStore;
use super::types::{AgentMessage, AgentReply, CartItem, Recipe, RecipeDraft, ShoppingCart};

const REQUEST_FAILED: &str = "request failed";

// =============================================================
// Endpoint paths
// =============================================================

fn public_recipes_path(search: Option<&str>) -> String {
    match search {
        Some(term) if !term.is_empty() => format!("/api/v1/recipes/?search={}", encode_component(term)),
        _ => "/api/v1/recipes/".to_owned(),
    }
}

fn my_recipes_path(search: Option<&str>) -> String {
    match search {
        Some(term) if !term.is_empty() => format!("/api/v1/recipes/me?search={}", encode_component(term)),
        _ => "/api/v1/recipes/me".to_owned(),
    }
}

fn favorites_path() -> String {
    "/api/v1/recipes/favorites".to_owned()
}

fn random_recipes_path(limit: usize) -> String {
    format!("/api/v1/recipes/random?limit={limit}")
}

fn recipe_path(id: &str) -> String {
    format!("/api/v1/recipes/{id}")
}

fn favorite_path(id: &str) -> String {
    format!("/api/v1/recipes/{id}/favorite")
}

fn consult_path() -> String {
    "/api/v1/agent/consult".to_owned()
}

fn generate_from_ingredients_path() -> String {
    "/api/v1/agent/generate-from-ingredients".to_owned()
}

fn analyze_video_path(recipe_id: &str) -> String {
    format!("/api/v1/agent/analyze-video/{recipe_id}")
}

fn cart_path() -> String {
    "/api/v1/shopping-cart/me".to_owned()
}

fn cart_items_path() -> String {
    "/api/v1/shopping-cart/items".to_owned()
}

fn cart_item_path(item_id: &str) -> String {
    format!("/api/v1/shopping-cart/items/{item_id}")
}

fn cart_clear_path() -> String {
    "/api/v1/shopping-cart/clear".to_owned()
}

// =============================================================
// Response handling
// =============================================================

/// Turn a non-2xx response into `ApiError::Server` carrying the backend
/// `detail` when one is present.
fn check(response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.ok() {
        Ok(response)
    } else {
        Err(ApiError::Server {
            status: response.status(),
            detail: detail_message(response.text(), REQUEST_FAILED),
        })
    }
}

fn agent_text(response: HttpResponse) -> Result<String, ApiError> {
    let reply: AgentReply = check(response)?.json()?;
    reply
        .text()
        .ok_or_else(|| ApiError::Decode("agent reply carried no text".to_owned()))
}

// =============================================================
// Recipes
// =============================================================

/// List public recipes, optionally filtered by a search term. Does not
/// attach credentials.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_public_recipes<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    search: Option<&str>,
) -> Result<Vec<Recipe>, ApiError> {
    let response = gw.fetch(HttpRequest::get(&api_url(&public_recipes_path(search)))).await?;
    Ok(check(response)?.json()?)
}

/// List recipes for the hero carousel. Does not attach credentials.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_random_recipes<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    limit: usize,
) -> Result<Vec<Recipe>, ApiError> {
    let response = gw.fetch(HttpRequest::get(&api_url(&random_recipes_path(limit)))).await?;
    Ok(check(response)?.json()?)
}

/// List the signed-in user's recipes, optionally filtered.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_my_recipes<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    search: Option<&str>,
) -> Result<Vec<Recipe>, ApiError> {
    let response = gw
        .authenticated_fetch(HttpRequest::get(&api_url(&my_recipes_path(search))))
        .await?;
    Ok(check(response)?.json()?)
}

/// List the signed-in user's favorite recipes.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_favorite_recipes<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
) -> Result<Vec<Recipe>, ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::get(&api_url(&favorites_path()))).await?;
    Ok(check(response)?.json()?)
}

/// Fetch one recipe by id.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_recipe<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    id: &str,
) -> Result<Recipe, ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::get(&api_url(&recipe_path(id)))).await?;
    Ok(check(response)?.json()?)
}

/// Create a recipe from a form draft.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn create_recipe<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    draft: &RecipeDraft,
) -> Result<Recipe, ApiError> {
    let request = HttpRequest::post(&api_url(&public_recipes_path(None))).json(draft)?;
    let response = gw.authenticated_fetch(request).await?;
    Ok(check(response)?.json()?)
}

/// Replace a recipe with an edited draft.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn update_recipe<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    id: &str,
    draft: &RecipeDraft,
) -> Result<Recipe, ApiError> {
    let request = HttpRequest::put(&api_url(&recipe_path(id))).json(draft)?;
    let response = gw.authenticated_fetch(request).await?;
    Ok(check(response)?.json()?)
}

/// Delete a recipe. The server answers 204 with no body.
///
/// # Errors
///
/// `ApiError` on transport failure or a non-2xx status.
pub async fn delete_recipe<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    id: &str,
) -> Result<(), ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::delete(&api_url(&recipe_path(id)))).await?;
    check(response)?;
    Ok(())
}

/// Toggle the favorite flag; returns the updated recipe.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn toggle_favorite<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    id: &str,
) -> Result<Recipe, ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::post(&api_url(&favorite_path(id)))).await?;
    Ok(check(response)?.json()?)
}

// =============================================================
// Agent
// =============================================================

/// Send the whole conversation to the consult agent and return its
/// answer.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a reply without
/// text.
pub async fn consult_agent<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    messages: &[AgentMessage],
) -> Result<String, ApiError> {
    let request = HttpRequest::post(&api_url(&consult_path())).json(&serde_json::json!({ "messages": messages }))?;
    let response = gw.authenticated_fetch(request).await?;
    agent_text(response)
}

/// Ask the agent to propose a recipe from a list of ingredients.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a reply without
/// text.
pub async fn generate_from_ingredients<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    ingredients: &[String],
) -> Result<String, ApiError> {
    let request = HttpRequest::post(&api_url(&generate_from_ingredients_path()))
        .json(&serde_json::json!({ "ingredients": ingredients }))?;
    let response = gw.authenticated_fetch(request).await?;
    agent_text(response)
}

/// Ask the agent to fill in a recipe from its source video; returns the
/// status message.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a reply without
/// text.
pub async fn analyze_video<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    recipe_id: &str,
    video_url: &str,
) -> Result<String, ApiError> {
    let request =
        HttpRequest::post(&api_url(&analyze_video_path(recipe_id))).json(&serde_json::json!({ "message": video_url }))?;
    let response = gw.authenticated_fetch(request).await?;
    agent_text(response)
}

// =============================================================
// Shopping cart
// =============================================================

/// Fetch the signed-in user's cart.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn fetch_cart<C: HttpClient, S: TokenStore>(gw: &AuthGateway<C, S>) -> Result<ShoppingCart, ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::get(&api_url(&cart_path()))).await?;
    Ok(check(response)?.json()?)
}

/// Add one item; the id is generated client-side. Returns the updated
/// cart.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn add_cart_item<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    value: &str,
) -> Result<ShoppingCart, ApiError> {
    let item = CartItem {
        id: uuid::Uuid::new_v4().to_string(),
        value: value.to_owned(),
    };
    let request = HttpRequest::post(&api_url(&cart_items_path())).json(&item)?;
    let response = gw.authenticated_fetch(request).await?;
    Ok(check(response)?.json()?)
}

/// Remove one item; returns the updated cart.
///
/// # Errors
///
/// `ApiError` on transport failure, non-2xx status, or a malformed body.
pub async fn remove_cart_item<C: HttpClient, S: TokenStore>(
    gw: &AuthGateway<C, S>,
    item_id: &str,
) -> Result<ShoppingCart, ApiError> {
    let response = gw
        .authenticated_fetch(HttpRequest::delete(&api_url(&cart_item_path(item_id))))
        .await?;
    Ok(check(response)?.json()?)
}

/// Empty the cart. The server answers 204 with no body.
///
/// # Errors
///
/// `ApiError` on transport failure or a non-2xx status.
pub async fn clear_cart<C: HttpClient, S: TokenStore>(gw: &AuthGateway<C, S>) -> Result<(), ApiError> {
    let response = gw.authenticated_fetch(HttpRequest::delete(&api_url(&cart_clear_path()))).await?;
    check(response)?;
    Ok(())
}
