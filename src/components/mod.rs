//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render recipe chrome and form surfaces; pages own the data
//! flow and hand state down as props.

pub mod carousel;
pub mod hero_recipe_card;
pub mod modal;
pub mod recipe_form;
pub mod recipe_grid_card;
