use super::*;

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_parses_full_payload() {
    let raw = serde_json::json!({
        "token": "jwt.abc",
        "role": "mentee",
        "id_user": 7,
        "images": "https://cdn.mentutor.test/u7.png",
        "auth_gmail": "https://accounts.google.com/o/oauth2",
        "name": "Alice"
    });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.token, "jwt.abc");
    assert_eq!(resp.role, "mentee");
    assert_eq!(resp.id_user, 7);
    assert_eq!(resp.images, "https://cdn.mentutor.test/u7.png");
    assert_eq!(resp.auth_gmail, "https://accounts.google.com/o/oauth2");
    assert_eq!(resp.name.as_deref(), Some("Alice"));
}

#[test]
fn login_response_defaults_optional_fields() {
    let raw = serde_json::json!({ "token": "t", "role": "admin", "id_user": "12" });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.id_user, 12);
    assert!(resp.images.is_empty());
    assert!(resp.auth_gmail.is_empty());
    assert!(resp.name.is_none());
}

#[test]
fn login_response_rejects_non_numeric_id() {
    let raw = serde_json::json!({ "token": "t", "role": "admin", "id_user": "abc" });
    assert!(serde_json::from_value::<LoginResponse>(raw).is_err());
}

// =============================================================
// ClassSummary / ListPayload
// =============================================================

#[test]
fn class_list_accepts_bare_array() {
    let raw = serde_json::json!([
        { "id_class": 1, "class_name": "Backend" },
        { "id_class": 2.0, "class_name": "Frontend" }
    ]);
    let list: ListPayload<ClassSummary> = serde_json::from_value(raw).unwrap();
    let items = list.into_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].id_class, 2);
}

#[test]
fn class_list_accepts_data_envelope() {
    let raw = serde_json::json!({ "data": [{ "id_class": "3", "class_name": "QE" }] });
    let list: ListPayload<ClassSummary> = serde_json::from_value(raw).unwrap();
    assert_eq!(
        list.into_items(),
        vec![ClassSummary { id_class: 3, class_name: "QE".to_owned() }]
    );
}

#[test]
fn class_id_rejects_fractional_numbers() {
    let raw = serde_json::json!({ "id_class": 1.5, "class_name": "Backend" });
    assert!(serde_json::from_value::<ClassSummary>(raw).is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_member_serializes_exactly_five_fields() {
    let body = NewMember {
        name: "Budi Santoso".to_owned(),
        email: "budi@mentutor.test".to_owned(),
        role: "mentee".to_owned(),
        id_class: 4,
        password: "Secret#123".to_owned(),
    };
    let value = serde_json::to_value(&body).unwrap();
    let obj = value.as_object().unwrap();
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["email", "id_class", "name", "password", "role"]);
    assert!(obj["id_class"].is_u64());
    assert_eq!(obj["id_class"], 4);
}

#[test]
fn login_request_serializes_email_and_password() {
    let body = LoginRequest { email: "a@b.co".to_owned(), password: "Pw#12345".to_owned() };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "email": "a@b.co", "password": "Pw#12345" })
    );
}
