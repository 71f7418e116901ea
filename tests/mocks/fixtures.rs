use serde_json::{json, Value};

pub fn current_user(roles: &[&str]) -> Value {
    json!({
        "user": {
            "id": 1,
            "email": "phtcon@ucsb.edu",
            "fullName": "Phill Conrad",
            "givenName": "Phill",
            "familyName": "Conrad",
            "admin": roles.contains(&"ROLE_ADMIN"),
            "moderator": roles.contains(&"ROLE_MODERATOR")
        },
        "roles": roles.iter().map(|role| json!({"authority": role})).collect::<Vec<_>>()
    })
}

pub fn one_alias() -> Value {
    json!([{ "id": 1, "email": "ali@ucsb.edu", "proposedAlias": "Ali1" }])
}

pub fn three_reviews() -> Value {
    json!([
        {
            "id": 1, "studentId": 1, "itemId": 7, "itemName": "Grilled Cheese Sandwich",
            "dateItemServed": "2022-01-02T12:00:00", "reviewerComments": "Delicious!",
            "itemsStars": 4, "status": "AWAITING_REVIEW", "userIdModerator": null,
            "moderatorComments": null, "dateReviewed": null,
            "dateCreated": "2022-01-01T12:00:00", "dateEdited": "2022-01-02T13:00:00"
        },
        {
            "id": 2, "studentId": 2, "itemId": 8, "itemName": "Pizza",
            "dateItemServed": "2022-02-02T12:00:00", "reviewerComments": "Too salty.",
            "itemsStars": 2, "status": "AWAITING_REVIEW", "userIdModerator": null,
            "moderatorComments": null, "dateReviewed": null,
            "dateCreated": "2022-02-01T12:00:00", "dateEdited": "2022-02-02T13:00:00"
        },
        {
            "id": 3, "studentId": 3, "itemId": 9, "itemName": "Salad",
            "dateItemServed": "2022-03-02T12:00:00", "reviewerComments": "Pretty good overall.",
            "itemsStars": 3, "status": "AWAITING_REVIEW", "userIdModerator": null,
            "moderatorComments": null, "dateReviewed": null,
            "dateCreated": "2022-03-01T12:00:00", "dateEdited": "2022-03-01T12:00:00"
        }
    ])
}
