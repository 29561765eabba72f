//! # Recipes
//!
//! Recipe feature slice. Recipes arrive from the API in whatever shape the backend produced;
//! this crate turns them into a canonical form before they are displayed or submitted.
//!
//! * [`normalize`]: pure, order-preserving canonicalisation of recipes and their steps.
//! * [`service`]: the seam an API client implements, plus fetch-then-normalize helpers.
//!
//! ## Example
//!
//! ```rust
//! use brigade_recipes::normalize::normalize_recipe;
//! use brigade_recipes::domain::recipe::{Recipe, RecipeStepItem};
//!
//! let raw = Recipe { recipe_steps: vec![RecipeStepItem::default()], ..Recipe::default() };
//! let recipe = normalize_recipe(&raw);
//!
//! assert_eq!(recipe.recipe_steps[0].step_equipment, Some(vec![]));
//! assert_eq!(recipe.recipe_steps[0].step_image_url, None);
//! ```

mod error;
pub mod normalize;
pub mod service;

pub use crate::error::{RecipeError, RecipeErrorExt};
pub use crate::normalize::{Normalize, normalize_recipe, normalize_step};
pub use crate::service::{RecipeSource, load_recipe, parse_recipe};
pub use brigade_domain as domain;
