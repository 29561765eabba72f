use brigade_domain::catalog::{MenuItem, User, UserRole};
use brigade_domain::response::ApiResponse;
use serde_json::json;

#[test]
fn menu_item_defaults_to_available() {
    let item: MenuItem = serde_json::from_value(json!({
        "id": 1,
        "name": "Varenyky",
        "price": 1250,
        "sectionId": 3
    }))
    .expect("menu item deserialize");

    assert!(item.available);
    assert_eq!(item.price, 1250);
    assert!(item.recipe_id.is_none());
}

#[test]
fn user_permissions_follow_role() {
    let mut user: User = serde_json::from_value(json!({
        "id": 5,
        "email": "chef@example.com",
        "role": "manager",
        "restaurantIds": [10, 11]
    }))
    .expect("user deserialize");

    assert!(user.can_manage(10));
    assert!(!user.can_manage(12));

    user.role = UserRole::Admin;
    assert!(user.can_manage(12));

    user.role = UserRole::Staff;
    assert!(!user.can_manage(10));
}

#[test]
fn api_response_status_helpers() {
    assert!(ApiResponse::ok(1).is_success());
    assert!(ApiResponse::<u8>::status(204).is_success());
    assert!(!ApiResponse::<u8>::status(404).is_success());
    assert!(!ApiResponse::<u8>::status(302).is_success());

    let mapped = ApiResponse::ok(2).map(|n| n * 10);
    assert_eq!(mapped, ApiResponse::new(200, Some(20)));
}

#[test]
fn api_response_without_data_deserializes() {
    let res: ApiResponse<MenuItem> =
        serde_json::from_value(json!({ "status": 500 })).expect("response deserialize");
    assert_eq!(res.status, 500);
    assert!(res.data.is_none());
}
