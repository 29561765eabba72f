//! Ingredient categories.
//!
//! The category list is fixed and ordered; admin screens render it as a row of checkboxes.
//! A checkbox selection is a [`CategorySet`].

use bitflags::bitflags;
use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const VEGETABLE: &str = "vegetable";
pub const FRUIT: &str = "fruit";
pub const MEAT: &str = "meat";
pub const FISH: &str = "fish";
pub const DAIRY: &str = "dairy";
pub const GRAIN: &str = "grain";
pub const SPICE: &str = "spice";
pub const SAUCE: &str = "sauce";
pub const BEVERAGE: &str = "beverage";
pub const OTHER: &str = "other";

/// Category names in display order.
pub const CATEGORIES: [&str; 10] =
    [VEGETABLE, FRUIT, MEAT, FISH, DAIRY, GRAIN, SPICE, SAUCE, BEVERAGE, OTHER];

/// The category of a single ingredient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    Vegetable,
    Fruit,
    Meat,
    Fish,
    Dairy,
    Grain,
    Spice,
    Sauce,
    Beverage,
    /// Also what unrecognised category names from the API deserialize to.
    #[serde(other)]
    Other,
}

impl IngredientCategory {
    /// Every category, in the same order as [`CATEGORIES`].
    pub const ALL: [Self; 10] = [
        Self::Vegetable,
        Self::Fruit,
        Self::Meat,
        Self::Fish,
        Self::Dairy,
        Self::Grain,
        Self::Spice,
        Self::Sauce,
        Self::Beverage,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Vegetable => VEGETABLE,
            Self::Fruit => FRUIT,
            Self::Meat => MEAT,
            Self::Fish => FISH,
            Self::Dairy => DAIRY,
            Self::Grain => GRAIN,
            Self::Spice => SPICE,
            Self::Sauce => SAUCE,
            Self::Beverage => BEVERAGE,
            Self::Other => OTHER,
        }
    }

    /// Case-insensitive lookup by name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|c| c.as_str().eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub const fn flag(self) -> CategorySet {
        match self {
            Self::Vegetable => CategorySet::VEGETABLE,
            Self::Fruit => CategorySet::FRUIT,
            Self::Meat => CategorySet::MEAT,
            Self::Fish => CategorySet::FISH,
            Self::Dairy => CategorySet::DAIRY,
            Self::Grain => CategorySet::GRAIN,
            Self::Spice => CategorySet::SPICE,
            Self::Sauce => CategorySet::SAUCE,
            Self::Beverage => CategorySet::BEVERAGE,
            Self::Other => CategorySet::OTHER,
        }
    }
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A selection of ingredient categories.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct CategorySet: u16 {
        const VEGETABLE = 1 << 0;
        const FRUIT = 1 << 1;
        const MEAT = 1 << 2;
        const FISH = 1 << 3;
        const DAIRY = 1 << 4;
        const GRAIN = 1 << 5;
        const SPICE = 1 << 6;
        const SAUCE = 1 << 7;
        const BEVERAGE = 1 << 8;
        const OTHER = 1 << 9;

        const ALL = Self::VEGETABLE.bits()
            | Self::FRUIT.bits()
            | Self::MEAT.bits()
            | Self::FISH.bits()
            | Self::DAIRY.bits()
            | Self::GRAIN.bits()
            | Self::SPICE.bits()
            | Self::SAUCE.bits()
            | Self::BEVERAGE.bits()
            | Self::OTHER.bits();
    }
}

impl CategorySet {
    /// Unions the sets named by `names`; unknown names contribute nothing.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        names.into_iter().fold(Self::empty(), |set, name| set | Self::from(name))
    }

    #[must_use]
    pub const fn has(self, category: IngredientCategory) -> bool {
        self.contains(category.flag())
    }

    /// Selected categories in display order.
    pub fn categories(self) -> impl Iterator<Item = IngredientCategory> {
        IngredientCategory::ALL.into_iter().filter(move |c| self.has(*c))
    }
}

impl From<&str> for CategorySet {
    fn from(s: &str) -> Self {
        match s.trim() {
            "all" | "*" => Self::ALL,
            name => IngredientCategory::parse(name).map_or_else(Self::empty, IngredientCategory::flag),
        }
    }
}

impl From<IngredientCategory> for CategorySet {
    fn from(category: IngredientCategory) -> Self {
        category.flag()
    }
}

impl FromIterator<IngredientCategory> for CategorySet {
    fn from_iter<I: IntoIterator<Item = IngredientCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, c| set | c.flag())
    }
}

/// Serialized as the list of selected category names.
impl Serialize for CategorySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.bits().count_ones() as usize))?;
        for category in self.categories() {
            seq.serialize_element(category.as_str())?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for CategorySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NamesVisitor;

        impl<'de> Visitor<'de> for NamesVisitor {
            type Value = CategorySet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of ingredient category names")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut set = CategorySet::empty();
                while let Some(name) = seq.next_element::<String>()? {
                    set |= CategorySet::from(name.as_str());
                }
                Ok(set)
            }
        }

        deserializer.deserialize_seq(NamesVisitor)
    }
}
