use brigade_recipes::domain::recipe::{Recipe, RecipeStepItem};
use brigade_recipes::{Normalize, normalize_recipe, normalize_step};
use proptest::prelude::*;
use serde_json::{Value, json};

fn image_url() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[a-z0-9]{1,12}".prop_map(|name| Some(format!("https://img.example/{name}.jpg"))),
    ]
}

fn reference() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<u64>().prop_map(|id| json!({ "id": id })),
        "[a-f0-9]{6}".prop_map(|id| json!({ "id": id })),
        "[a-z]{1,8}".prop_map(Value::from),
    ]
}

fn step() -> impl Strategy<Value = RecipeStepItem> {
    (
        proptest::option::of(proptest::collection::vec(reference(), 0..4)),
        proptest::option::of(proptest::collection::vec(reference(), 0..4)),
        image_url(),
        proptest::option::of(any::<u32>()),
    )
        .prop_map(|(equipment, ingredients, image, order)| {
            let step = RecipeStepItem {
                step_equipment: equipment,
                step_ingredient_items: ingredients,
                step_image_url: image,
                ..RecipeStepItem::default()
            };
            step.with_field("stepOrder", order.map_or(Value::Null, Value::from))
        })
}

fn recipe() -> impl Strategy<Value = Recipe> {
    proptest::collection::vec(step(), 0..8).prop_map(|steps| {
        Recipe { recipe_steps: steps, ..Recipe::default() }.with_field("name", "Soup of the day")
    })
}

proptest! {
    #[test]
    fn lists_are_always_present_and_preserved(input in step()) {
        let out = normalize_step(&input);

        prop_assert_eq!(out.step_equipment.clone().unwrap_or_default(), input.step_equipment.clone().unwrap_or_default());
        prop_assert!(out.step_equipment.is_some());
        prop_assert_eq!(out.step_ingredient_items.clone().unwrap_or_default(), input.step_ingredient_items.clone().unwrap_or_default());
        prop_assert!(out.step_ingredient_items.is_some());
    }

    #[test]
    fn image_is_null_exactly_when_input_was_falsy(input in step()) {
        let out = normalize_step(&input);
        let was_falsy = input.step_image_url.as_deref().is_none_or(str::is_empty);

        prop_assert_eq!(out.step_image_url.is_none(), was_falsy);
        if !was_falsy {
            prop_assert_eq!(out.step_image_url, input.step_image_url);
        }
    }

    #[test]
    fn normalizing_twice_changes_nothing(input in step()) {
        let once = normalize_step(&input);
        let twice = normalize_step(&once);

        prop_assert!(once.is_normalized());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn recipe_steps_keep_length_and_order(input in recipe()) {
        let before = input.clone();
        let out = normalize_recipe(&input);

        prop_assert_eq!(&input, &before);
        prop_assert_eq!(out.recipe_steps.len(), input.recipe_steps.len());
        for (raw, normalized) in input.recipe_steps.iter().zip(&out.recipe_steps) {
            prop_assert_eq!(&normalize_step(raw), normalized);
        }
        prop_assert_eq!(&out.extra, &input.extra);
        for (raw, normalized) in input.recipe_steps.iter().zip(&out.recipe_steps) {
            prop_assert_eq!(&raw.extra, &normalized.extra);
        }
        prop_assert!(normalize_recipe(&out).recipe_steps == out.recipe_steps);
    }
}
