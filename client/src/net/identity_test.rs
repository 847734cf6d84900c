use super::*;

#[test]
fn sign_up_body_uses_provider_field_names() {
    let value = body(&SignUp {
        email: "bo@example.com",
        password: "Secret1",
        display_name: "Bo",
        photo_url: Some("https://img.example.com/bo.png"),
    })
    .unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "email": "bo@example.com",
            "password": "Secret1",
            "displayName": "Bo",
            "photoURL": "https://img.example.com/bo.png",
        })
    );
}

#[test]
fn sign_up_body_omits_missing_photo() {
    let value = body(&SignUp { email: "bo@example.com", password: "Secret1", display_name: "Bo", photo_url: None })
        .unwrap();
    assert!(value.get("photoURL").is_none());
}

#[test]
fn identity_decodes_provider_payload() {
    let identity: Identity =
        decode(r#"{"email":"bo@example.com","displayName":"Bo","photoURL":null,"isNewUser":true}"#).unwrap();
    assert_eq!(identity.name(), "Bo");
    assert!(identity.is_new_user);
}

#[tokio::test]
async fn current_identity_off_the_browser_is_a_network_error() {
    assert!(matches!(current_identity().await, Err(ApiError::Network(_))));
}

#[test]
fn google_sign_in_returns_to_login_page() {
    let (path, query) = GOOGLE_SIGN_IN.split_once('?').expect("query");
    assert_eq!(path, "/identity/google");
    assert_eq!(query, "redirect=/login");
}
