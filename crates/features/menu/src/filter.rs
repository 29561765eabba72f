use brigade_domain::catalog::Ingredient;
use brigade_domain::categories::CategorySet;

/// Keeps the ingredients matching both the category selection and the search term.
///
/// An empty `categories` set or a blank `search` does not restrict anything. The search is a
/// case-insensitive substring match on the ingredient name. Input order is preserved.
#[must_use]
pub fn filter_ingredients<'a>(
    ingredients: &'a [Ingredient],
    categories: CategorySet,
    search: &str,
) -> Vec<&'a Ingredient> {
    let needle = search.trim().to_lowercase();

    ingredients
        .iter()
        .filter(|i| categories.is_empty() || categories.has(i.category))
        .filter(|i| needle.is_empty() || i.name.to_lowercase().contains(&needle))
        .collect()
}
