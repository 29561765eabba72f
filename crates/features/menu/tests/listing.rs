use brigade_domain::catalog::{Ingredient, MenuItem, MenuSection};
use brigade_domain::categories::{CategorySet, IngredientCategory};
use brigade_menu::filter::filter_ingredients;
use brigade_menu::sections::group_by_section;
use serde_json::json;

fn ingredient(id: u64, name: &str, category: IngredientCategory) -> Ingredient {
    Ingredient {
        id,
        name: name.to_owned(),
        category,
        unit: None,
        allergens: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

fn pantry() -> Vec<Ingredient> {
    vec![
        ingredient(1, "Beetroot", IngredientCategory::Vegetable),
        ingredient(2, "Sour cream", IngredientCategory::Dairy),
        ingredient(3, "Beef shank", IngredientCategory::Meat),
        ingredient(4, "Bay leaf", IngredientCategory::Spice),
        ingredient(5, "Beer", IngredientCategory::Beverage),
    ]
}

fn names(found: &[&Ingredient]) -> Vec<String> {
    found.iter().map(|i| i.name.clone()).collect()
}

#[test]
fn no_filters_returns_everything_in_order() {
    let items = pantry();
    let found = filter_ingredients(&items, CategorySet::empty(), "   ");
    assert_eq!(found.len(), items.len());
    assert_eq!(found[0].id, 1);
}

#[test]
fn category_selection_restricts() {
    let items = pantry();
    let found = filter_ingredients(&items, CategorySet::from_names(["meat", "dairy"]), "");
    assert_eq!(names(&found), vec!["Sour cream", "Beef shank"]);
}

#[test]
fn search_is_case_insensitive_substring() {
    let items = pantry();
    let found = filter_ingredients(&items, CategorySet::ALL, "BE");
    assert_eq!(names(&found), vec!["Beetroot", "Beef shank", "Beer"]);

    let found = filter_ingredients(&items, CategorySet::from("beverage"), "be");
    assert_eq!(names(&found), vec!["Beer"]);
}

#[test]
fn items_are_grouped_under_ordered_sections() {
    let sections: Vec<MenuSection> = serde_json::from_value(json!([
        { "id": 1, "name": "Mains", "position": 2, "restaurantId": 9 },
        { "id": 2, "name": "Starters", "position": 1, "restaurantId": 9 },
        { "id": 3, "name": "Desserts", "position": 3, "restaurantId": 9 }
    ]))
    .expect("sections");

    let items: Vec<MenuItem> = serde_json::from_value(json!([
        { "id": 10, "name": "Borscht", "price": 900, "sectionId": 2 },
        { "id": 11, "name": "Chicken Kyiv", "price": 1800, "sectionId": 1 },
        { "id": 12, "name": "Salo", "price": 600, "sectionId": 2, "available": false },
        { "id": 13, "name": "Ghost dish", "price": 100, "sectionId": 42 }
    ]))
    .expect("items");

    let listing = group_by_section(&sections, &items, false);
    let order: Vec<&str> = listing.iter().map(|l| l.section.name.as_str()).collect();
    assert_eq!(order, vec!["Starters", "Mains", "Desserts"]);
    assert_eq!(listing[0].items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![10, 12]);
    assert_eq!(listing[1].items.len(), 1);
    assert!(listing[2].items.is_empty());

    let available = group_by_section(&sections, &items, true);
    assert_eq!(available[0].items.iter().map(|i| i.id).collect::<Vec<_>>(), vec![10]);
}
