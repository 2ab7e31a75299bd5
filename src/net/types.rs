//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend response models. MongoDB-backed
//! responses identify documents as `_id`, so id fields carry a serde
//! alias; everything the server may omit is defaulted so partial
//! payloads never fail to decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access/refresh pair returned by the login and refresh endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Body of a refresh request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Raw `/users/me` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// Unique user identifier; the server may send it as `id` or `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub email: String,
}

/// The signed-in user as the UI sees them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    /// Display name, derived as the local part of the email.
    pub name: String,
}

impl User {
    pub fn from_profile(profile: ProfileResponse) -> Self {
        let name = display_name(&profile.email);
        Self {
            id: profile.id,
            email: profile.email,
            name,
        }
    }
}

/// Local part of an email address, used as the display name.
pub fn display_name(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_owned()
}

/// Who can see a recipe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

impl Visibility {
    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }

    /// Parse a `<select>` value, defaulting unknown input to private.
    pub fn from_form_value(value: &str) -> Self {
        if value == "public" {
            Visibility::Public
        } else {
            Visibility::Private
        }
    }
}

/// One ingredient line of a recipe.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// A recipe as returned by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier; the server sends it as `_id`.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    /// Source video (YouTube), when the recipe was imported from one.
    #[serde(default)]
    pub video_url: Option<String>,
    /// Source web page, when the recipe was imported from one.
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub author_id: String,
    /// ISO 8601 creation timestamp.
    pub created_at: String,
    /// Whether the current user has favorited this recipe. Only present
    /// on authenticated reads.
    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    /// Date portion of the creation timestamp.
    pub fn created_date(&self) -> &str {
        self.created_at.split('T').next().unwrap_or(&self.created_at)
    }

    /// Shortened author id for display.
    pub fn author_short(&self) -> &str {
        self.author_id.get(..8).unwrap_or(&self.author_id)
    }
}

/// Payload for creating or fully updating a recipe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecipeDraft {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub visibility: Visibility,
}

/// One line of the shopping cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub value: String,
}

/// The user's shopping cart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingCart {
    #[serde(default)]
    pub items: Vec<CartItem>,
}

/// One turn of an agent conversation, in the wire shape the agent
/// endpoints expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentMessage {
    /// `"user"` or `"assistant"`.
    pub role: String,
    pub content: String,
}

/// Free-form agent reply; different endpoints answer in `response` or
/// `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentReply {
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AgentReply {
    /// The reply text, wherever the endpoint put it.
    pub fn text(self) -> Option<String> {
        self.response.or(self.message)
    }
}
