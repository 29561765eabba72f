//! Entities managed from the admin screens: ingredients, menu sections and items, restaurants
//! and users.

use crate::categories::IngredientCategory;
use crate::recipe::Extra;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: u64,
    pub name: String,
    pub category: IngredientCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergens: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub id: u64,
    pub name: String,
    /// Display position within the restaurant's menu, ascending.
    #[serde(default)]
    pub position: u32,
    pub restaurant_id: u64,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in minor currency units (cents) of the owning restaurant's currency.
    pub price: i64,
    pub section_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<u64>,
    #[serde(default = "available_by_default")]
    pub available: bool,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// ISO 4217 code, e.g. `EUR`.
    pub currency: String,
    /// Language tag used for the restaurant's menus, e.g. `de-AT`.
    pub locale: String,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: UserRole,
    /// Restaurants the user may manage. Ignored for admins.
    #[serde(default)]
    pub restaurant_ids: Vec<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl User {
    /// Whether the user may manage the given restaurant.
    #[must_use]
    pub fn can_manage(&self, restaurant_id: u64) -> bool {
        match self.role {
            UserRole::Admin => true,
            UserRole::Manager => self.restaurant_ids.contains(&restaurant_id),
            UserRole::Staff => false,
        }
    }
}

const fn available_by_default() -> bool {
    true
}
