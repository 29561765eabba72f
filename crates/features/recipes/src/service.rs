//! Loading recipes from the restaurant API.
//!
//! The HTTP client is not part of this crate. It plugs in through [`RecipeSource`], which hands
//! back whatever the API answered; [`load_recipe`] interprets the status and normalizes the
//! payload before it reaches a caller.

use crate::error::{RecipeError, RecipeErrorExt};
use crate::normalize::Normalize;
use brigade_domain::recipe::Recipe;
use brigade_domain::response::ApiResponse;
use tracing::{debug, warn};

/// A data source able to fetch a single recipe by id.
///
/// Ids are passed as text because backends differ: numeric keys and document-store ids are both
/// in use.
pub trait RecipeSource {
    /// Fetches the raw recipe record.
    ///
    /// # Errors
    /// Returns [`RecipeError::Source`] (or any other variant) when the request cannot be made.
    fn fetch_recipe(&self, id: &str) -> Result<ApiResponse<Recipe>, RecipeError>;
}

impl<S: RecipeSource + ?Sized> RecipeSource for &S {
    fn fetch_recipe(&self, id: &str) -> Result<ApiResponse<Recipe>, RecipeError> {
        (**self).fetch_recipe(id)
    }
}

/// Fetches recipe `id` from `source` and returns it in canonical form.
///
/// # Errors
/// * [`RecipeError::Status`] when the response status is not 2xx.
/// * [`RecipeError::EmptyPayload`] when a 2xx response carries no recipe.
/// * Whatever the source itself returns, with the recipe id attached as context.
pub fn load_recipe<S>(source: &S, id: &str) -> Result<Recipe, RecipeError>
where
    S: RecipeSource + ?Sized,
{
    let response = source.fetch_recipe(id).context(format!("recipe {id}"))?;

    if !response.is_success() {
        warn!(id, status = response.status, "Recipe request rejected");
        return Err(RecipeError::Status {
            status: response.status,
            context: Some(format!("recipe {id}").into()),
        });
    }

    let Some(recipe) = response.data else {
        warn!(id, status = response.status, "Recipe response without payload");
        return Err(RecipeError::EmptyPayload { context: Some(format!("recipe {id}").into()) });
    };

    debug!(id, steps = recipe.recipe_steps.len(), "Recipe loaded");
    Ok(recipe.into_normalized())
}

/// Parses a recipe from JSON text and returns it in canonical form.
///
/// # Errors
/// Returns [`RecipeError::Serde`] if `json` is not a valid recipe document.
pub fn parse_recipe(json: &str) -> Result<Recipe, RecipeError> {
    let recipe: Recipe = serde_json::from_str(json).context("parsing recipe")?;
    Ok(recipe.into_normalized())
}
