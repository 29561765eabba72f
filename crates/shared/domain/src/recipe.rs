//! Recipe records as delivered by the restaurant API.
//!
//! The API is inconsistent about optional step data: equipment and ingredient lists may be
//! missing or `null`, and the image reference may be missing, `null` or an empty string.
//! These types accept every such shape; canonicalisation lives in the recipes feature.
//!
//! Only the fields canonicalisation touches are typed. Everything else (ids, names, step order,
//! durations, and whatever the backend adds later) stays in [`Extra`] as raw JSON, so values of
//! any type, explicit `null`s included, come back out exactly as they went in.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON fields that a record does not model explicitly.
pub type Extra = serde_json::Map<String, Value>;

/// A dish's ordered preparation instructions plus metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Steps in execution order; position is meaningful.
    #[serde(default)]
    pub recipe_steps: Vec<RecipeStepItem>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One instruction step of a [`Recipe`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeStepItem {
    /// Equipment references used in this step. `None` when the source omitted it or sent `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_equipment: Option<Vec<Value>>,
    /// Ingredient references consumed in this step, in the order they are added.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_ingredient_items: Option<Vec<Value>>,
    /// Illustrative image. Always serialized; `null` when there is none.
    #[serde(default)]
    pub step_image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Recipe {
    /// The record's `id`, whatever its JSON type.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.field("id")
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.field("name").and_then(Value::as_str)
    }

    /// A field the record does not model, by its camelCase JSON name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Sets a pass-through field, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl RecipeStepItem {
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.field("id")
    }

    /// A field the step does not model, by its camelCase JSON name.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Sets a pass-through field, replacing any previous value.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}
