use super::*;
use crate::net::http::Method;
use crate::net::http::testing::{FakeHttp, block_on};
use crate::net::tokens::MemoryTokens;
use crate::net::types::{Ingredient, Visibility};

fn gateway() -> (FakeHttp, AuthGateway<FakeHttp, MemoryTokens>) {
    let http = FakeHttp::new();
    let gw = AuthGateway::new(http.clone(), MemoryTokens::with_pair("acc", "ref"));
    (http, gw)
}

// =============================================================
// Endpoint paths
// =============================================================

#[test]
fn recipe_listing_paths() {
    assert_eq!(public_recipes_path(None), "/api/v1/recipes/");
    assert_eq!(public_recipes_path(Some("")), "/api/v1/recipes/");
    assert_eq!(public_recipes_path(Some("svíčková")), "/api/v1/recipes/?search=sv%C3%AD%C4%8Dkov%C3%A1");
    assert_eq!(my_recipes_path(None), "/api/v1/recipes/me");
    assert_eq!(my_recipes_path(Some("pasta carbonara")), "/api/v1/recipes/me?search=pasta%20carbonara");
    assert_eq!(favorites_path(), "/api/v1/recipes/favorites");
    assert_eq!(random_recipes_path(8), "/api/v1/recipes/random?limit=8");
}

#[test]
fn recipe_item_paths() {
    assert_eq!(recipe_path("r1"), "/api/v1/recipes/r1");
    assert_eq!(favorite_path("r1"), "/api/v1/recipes/r1/favorite");
}

#[test]
fn agent_paths() {
    assert_eq!(consult_path(), "/api/v1/agent/consult");
    assert_eq!(generate_from_ingredients_path(), "/api/v1/agent/generate-from-ingredients");
    assert_eq!(analyze_video_path("r9"), "/api/v1/agent/analyze-video/r9");
}

#[test]
fn cart_paths() {
    assert_eq!(cart_path(), "/api/v1/shopping-cart/me");
    assert_eq!(cart_items_path(), "/api/v1/shopping-cart/items");
    assert_eq!(cart_item_path("i3"), "/api/v1/shopping-cart/items/i3");
    assert_eq!(cart_clear_path(), "/api/v1/shopping-cart/clear");
}

// =============================================================
// Wrappers
// =============================================================

#[test]
fn public_listing_attaches_no_credentials() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, "[]"));

    let recipes = block_on(fetch_public_recipes(&gw, Some("gulas"))).expect("list ok");
    assert!(recipes.is_empty());

    let sent = &http.requests()[0];
    assert_eq!(sent.header_value("Authorization"), None, "public listing must stay anonymous");
    assert!(sent.url.ends_with("/api/v1/recipes/?search=gulas"));
}

#[test]
fn my_recipes_goes_through_the_gateway() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, "[]"));

    block_on(fetch_my_recipes(&gw, None)).expect("list ok");
    let sent = &http.requests()[0];
    assert_eq!(sent.header_value("Authorization"), Some("Bearer acc"));
}

#[test]
fn create_recipe_posts_draft_json() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(
        201,
        r#"{"_id":"r1","title":"Gulas","author_id":"u1","created_at":"2024-05-01T10:00:00"}"#,
    ));

    let draft = RecipeDraft {
        title: "Gulas".to_owned(),
        description: None,
        video_url: None,
        steps: vec!["Cook".to_owned()],
        ingredients: vec![Ingredient {
            name: "Hovězí".to_owned(),
            amount: "500".to_owned(),
            unit: Some("g".to_owned()),
        }],
        tags: vec!["česká".to_owned()],
        visibility: Visibility::Public,
    };
    let recipe = block_on(create_recipe(&gw, &draft)).expect("create ok");
    assert_eq!(recipe.id, "r1");

    let sent = &http.requests()[0];
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.header_value("Content-Type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().expect("body")).expect("json");
    assert_eq!(body["title"], "Gulas");
    assert_eq!(body["visibility"], "public");
    assert_eq!(body["ingredients"][0]["unit"], "g");
}

#[test]
fn delete_recipe_accepts_204_no_content() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(204, ""));
    block_on(delete_recipe(&gw, "r1")).expect("delete ok");
    assert_eq!(http.requests()[0].method, Method::Delete);
}

#[test]
fn server_error_carries_backend_detail() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(403, r#"{"detail":"Not your recipe"}"#));

    let err = block_on(delete_recipe(&gw, "r1")).expect_err("must fail");
    assert_eq!(
        err,
        ApiError::Server {
            status: 403,
            detail: "Not your recipe".to_owned()
        }
    );
    assert_eq!(err.message("fallback"), "Not your recipe");
}

#[test]
fn consult_sends_history_and_reads_response_field() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, r#"{"response":"Zkuste carbonaru."}"#));

    let history = vec![
        AgentMessage {
            role: "assistant".to_owned(),
            content: "Dobrý den.".to_owned(),
        },
        AgentMessage {
            role: "user".to_owned(),
            content: "Co na večeři?".to_owned(),
        },
    ];
    let answer = block_on(consult_agent(&gw, &history)).expect("consult ok");
    assert_eq!(answer, "Zkuste carbonaru.");

    let body: serde_json::Value =
        serde_json::from_str(http.requests()[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body["messages"].as_array().expect("array").len(), 2);
    assert_eq!(body["messages"][1]["role"], "user");
}

#[test]
fn analyze_video_reads_message_field() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, r#"{"message":"Recept byl doplněn."}"#));

    let message = block_on(analyze_video(&gw, "r1", "https://youtu.be/dQw4w9WgXcQ")).expect("analyze ok");
    assert_eq!(message, "Recept byl doplněn.");
    assert!(http.requests()[0].url.ends_with("/api/v1/agent/analyze-video/r1"));
}

#[test]
fn agent_reply_without_text_is_a_decode_error() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, "{}"));
    let err = block_on(generate_from_ingredients(&gw, &["cibule".to_owned()])).expect_err("must fail");
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn add_cart_item_generates_client_side_id() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(200, r#"{"items":[{"id":"i1","value":"Mléko"}]}"#));

    let cart = block_on(add_cart_item(&gw, "Mléko")).expect("add ok");
    assert_eq!(cart.items.len(), 1);

    let body: serde_json::Value =
        serde_json::from_str(http.requests()[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body["value"], "Mléko");
    let id = body["id"].as_str().expect("id is a string");
    assert!(!id.is_empty());
}

#[test]
fn clear_cart_accepts_204() {
    let (http, gw) = gateway();
    http.push(HttpResponse::new(204, ""));
    block_on(clear_cart(&gw)).expect("clear ok");
    assert!(http.requests()[0].url.ends_with("/api/v1/shopping-cart/clear"));
}
