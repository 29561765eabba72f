//! Canonical form of recipe records.
//!
//! A normalized [`RecipeStepItem`] always carries `step_equipment` and `step_ingredient_items`
//! (empty when the source had none) and a `step_image_url` that is either a non-empty string or
//! `None`. Nothing else is touched. A normalized [`Recipe`] is one whose steps are all normalized,
//! in their original order.

use brigade_domain::recipe::{Recipe, RecipeStepItem};

/// Conversion into the canonical, fully-populated form.
pub trait Normalize: Sized {
    /// Consumes the record and returns its canonical form.
    #[must_use]
    fn into_normalized(self) -> Self;

    /// Whether the record is already in canonical form.
    fn is_normalized(&self) -> bool;
}

impl Normalize for RecipeStepItem {
    fn into_normalized(self) -> Self {
        Self {
            step_equipment: Some(self.step_equipment.unwrap_or_default()),
            step_ingredient_items: Some(self.step_ingredient_items.unwrap_or_default()),
            // An empty string counts as "no image".
            step_image_url: self.step_image_url.filter(|url| !url.is_empty()),
            ..self
        }
    }

    fn is_normalized(&self) -> bool {
        self.step_equipment.is_some()
            && self.step_ingredient_items.is_some()
            && self.step_image_url.as_deref().is_none_or(|url| !url.is_empty())
    }
}

impl Normalize for Recipe {
    fn into_normalized(self) -> Self {
        Self {
            recipe_steps: self.recipe_steps.into_iter().map(Normalize::into_normalized).collect(),
            ..self
        }
    }

    fn is_normalized(&self) -> bool {
        self.recipe_steps.iter().all(Normalize::is_normalized)
    }
}

/// Returns the canonical form of `step`, leaving the input untouched.
#[must_use]
pub fn normalize_step(step: &RecipeStepItem) -> RecipeStepItem {
    step.clone().into_normalized()
}

/// Returns `recipe` with every step normalized, in the same order, leaving the input untouched.
#[must_use]
pub fn normalize_recipe(recipe: &Recipe) -> Recipe {
    recipe.clone().into_normalized()
}
