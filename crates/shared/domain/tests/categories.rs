use brigade_domain::catalog::Ingredient;
use brigade_domain::categories::{CATEGORIES, CategorySet, DAIRY, IngredientCategory, MEAT};
use serde_json::json;

#[test]
fn constants_match_enum_order() {
    let names: Vec<&str> = IngredientCategory::ALL.iter().map(|c| c.as_str()).collect();
    assert_eq!(names, CATEGORIES);
    assert_eq!(MEAT, "meat");
    assert_eq!(DAIRY, "dairy");
}

#[test]
fn category_parse_is_case_insensitive() {
    assert_eq!(IngredientCategory::parse(" Fish "), Some(IngredientCategory::Fish));
    assert_eq!(IngredientCategory::parse("SPICE"), Some(IngredientCategory::Spice));
    assert_eq!(IngredientCategory::parse("candy"), None);
}

#[test]
fn set_from_names() {
    assert_eq!(CategorySet::from("all"), CategorySet::ALL);
    assert_eq!(CategorySet::from("*"), CategorySet::ALL);
    assert_eq!(CategorySet::from("unknown"), CategorySet::empty());

    let set = CategorySet::from_names(["meat", "fish", "nope"]);
    assert!(set.has(IngredientCategory::Meat));
    assert!(set.has(IngredientCategory::Fish));
    assert!(!set.has(IngredientCategory::Dairy));
    assert_eq!(
        set.categories().collect::<Vec<_>>(),
        vec![IngredientCategory::Meat, IngredientCategory::Fish]
    );
}

#[test]
fn set_serializes_as_names_in_display_order() {
    let set: CategorySet = [IngredientCategory::Sauce, IngredientCategory::Vegetable].into_iter().collect();

    assert_eq!(serde_json::to_value(set).expect("serialize"), json!(["vegetable", "sauce"]));

    let back: CategorySet =
        serde_json::from_value(json!(["sauce", "vegetable", "mystery"])).expect("deserialize");
    assert_eq!(back, set);
}

#[test]
fn ingredient_category_uses_lowercase_json() {
    assert_eq!(serde_json::to_value(IngredientCategory::Beverage).expect("serialize"), json!("beverage"));
}

#[test]
fn unknown_category_falls_back_to_other() {
    let items: Vec<Ingredient> = serde_json::from_value(json!([
        { "id": 1, "name": "Carrot", "category": "vegetable" },
        { "id": 2, "name": "Frozen peas", "category": "frozen" }
    ]))
    .expect("one unknown category must not fail the list");

    assert_eq!(items[0].category, IngredientCategory::Vegetable);
    assert_eq!(items[1].category, IngredientCategory::Other);
    assert_eq!(serde_json::to_value(&items[1]).expect("serialize")["category"], json!("other"));
}
