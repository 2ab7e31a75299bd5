//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (local UI state, API calls,
//! error rendering) and delegates rendering details to `components`.
//! Pages receive the session as an explicit [`crate::state::auth::AuthHandle`]
//! prop from `App`.

pub mod ai_assistant;
pub mod ai_consult;
pub mod ai_ingredients;
pub mod ai_photo;
pub mod landing;
pub mod login;
pub mod public_recipes;
pub mod recipe_detail;
pub mod shopping_cart;
