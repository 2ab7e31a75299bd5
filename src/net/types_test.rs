use super::*;

// =============================================================
// Deserialization
// =============================================================

#[test]
fn recipe_decodes_mongo_underscore_id() {
    let recipe: Recipe = serde_json::from_str(
        r#"{
            "_id": "r1",
            "title": "Carbonara",
            "author_id": "user-1234-abcd",
            "created_at": "2024-03-01T12:30:00"
        }"#,
    )
    .expect("minimal recipe should decode");
    assert_eq!(recipe.id, "r1");
    assert!(recipe.steps.is_empty());
    assert!(recipe.ingredients.is_empty());
    assert_eq!(recipe.visibility, Visibility::Private);
    assert!(!recipe.is_favorite);
}

#[test]
fn recipe_decodes_plain_id_too() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"id":"r2","title":"Gulas","author_id":"a","created_at":"2024-01-01T00:00:00"}"#,
    )
    .expect("recipe with plain id should decode");
    assert_eq!(recipe.id, "r2");
}

#[test]
fn profile_decodes_either_id_field() {
    let p: ProfileResponse = serde_json::from_str(r#"{"_id":"u1","email":"a@b.cz"}"#).expect("_id form");
    assert_eq!(p.id, "u1");
    let p: ProfileResponse = serde_json::from_str(r#"{"id":"u2","email":"a@b.cz"}"#).expect("id form");
    assert_eq!(p.id, "u2");
}

#[test]
fn ingredient_unit_is_optional() {
    let ing: Ingredient = serde_json::from_str(r#"{"name":"Mouka","amount":"200"}"#).expect("no unit");
    assert_eq!(ing.unit, None);
    // Absent unit is omitted on the way out as well.
    assert_eq!(serde_json::to_string(&ing).expect("serialize"), r#"{"name":"Mouka","amount":"200"}"#);
}

#[test]
fn visibility_uses_lowercase_wire_values() {
    assert_eq!(serde_json::to_string(&Visibility::Public).expect("serialize"), r#""public""#);
    let v: Visibility = serde_json::from_str(r#""private""#).expect("deserialize");
    assert_eq!(v, Visibility::Private);
}

#[test]
fn agent_reply_text_prefers_response_field() {
    let both = AgentReply {
        response: Some("from response".to_owned()),
        message: Some("from message".to_owned()),
    };
    assert_eq!(both.text().as_deref(), Some("from response"));

    let message_only: AgentReply = serde_json::from_str(r#"{"message":"done"}"#).expect("decode");
    assert_eq!(message_only.text().as_deref(), Some("done"));

    let empty: AgentReply = serde_json::from_str("{}").expect("decode");
    assert_eq!(empty.text(), None);
}

// =============================================================
// Derived display values
// =============================================================

#[test]
fn display_name_takes_email_local_part() {
    assert_eq!(display_name("marie@example.cz"), "marie");
    assert_eq!(display_name("no-at-sign"), "no-at-sign");
}

#[test]
fn created_date_takes_date_portion() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"_id":"r","title":"T","author_id":"abcdefgh-rest","created_at":"2024-03-01T12:30:00"}"#,
    )
    .expect("decode");
    assert_eq!(recipe.created_date(), "2024-03-01");
    assert_eq!(recipe.author_short(), "abcdefgh");
}

#[test]
fn author_short_handles_short_ids() {
    let recipe: Recipe = serde_json::from_str(
        r#"{"_id":"r","title":"T","author_id":"ab","created_at":"2024-01-01"}"#,
    )
    .expect("decode");
    assert_eq!(recipe.author_short(), "ab");
    assert_eq!(recipe.created_date(), "2024-01-01");
}

#[test]
fn visibility_from_form_value_defaults_to_private() {
    assert_eq!(Visibility::from_form_value("public"), Visibility::Public);
    assert_eq!(Visibility::from_form_value("private"), Visibility::Private);
    assert_eq!(Visibility::from_form_value("whatever"), Visibility::Private);
}
