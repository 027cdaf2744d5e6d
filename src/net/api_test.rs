use super::*;

fn message_body(raw: &str) -> Option<String> {
    serde_json::from_str::<MessageBody>(raw)
        .ok()
        .and_then(|body| body.message)
}

fn role_body(raw: &str) -> Option<String> {
    serde_json::from_str::<RoleBody>(raw)
        .ok()
        .and_then(|body| body.role)
}

// =============================================================
// Credential submission classification
// =============================================================

#[test]
fn login_200_is_accepted() {
    assert_eq!(classify_login(200, None), Ok(()));
}

#[test]
fn login_401_surfaces_the_server_message() {
    let message = message_body(r#"{"message":"bad creds"}"#);
    assert_eq!(
        classify_login(401, message),
        Err(AuthError::Rejected("bad creds".to_owned()))
    );
}

#[test]
fn login_failure_without_message_uses_the_generic_text() {
    assert_eq!(
        classify_login(401, None),
        Err(AuthError::Rejected("Invalid email or password.".to_owned()))
    );
}

#[test]
fn login_failure_with_unparseable_body_uses_the_generic_text() {
    let message = message_body("not json");
    assert_eq!(
        classify_login(500, message),
        Err(AuthError::Rejected("Invalid email or password.".to_owned()))
    );
}

// =============================================================
// Role resolution classification
// =============================================================

#[test]
fn role_200_with_known_role_resolves() {
    let role = role_body(r#"{"role":"admin"}"#);
    assert_eq!(classify_role(200, role.as_deref()), Ok(Role::Admin));
}

#[test]
fn role_non_200_fails_resolution_regardless_of_body() {
    let role = role_body(r#"{"role":"admin"}"#);
    assert_eq!(
        classify_role(500, role.as_deref()),
        Err(AuthError::RoleResolutionFailed)
    );
}

#[test]
fn role_outside_the_closed_set_is_a_contract_violation() {
    let role = role_body(r#"{"role":"superuser"}"#);
    assert_eq!(classify_role(200, role.as_deref()), Err(AuthError::UnknownRole));
}

#[test]
fn role_missing_from_a_200_body_is_a_contract_violation() {
    let role = role_body(r#"{"message":"ok"}"#);
    assert_eq!(classify_role(200, role.as_deref()), Err(AuthError::UnknownRole));
}

// =============================================================
// Error taxonomy messages
// =============================================================

#[test]
fn rejected_displays_the_server_message_verbatim() {
    assert_eq!(AuthError::Rejected("bad creds".to_owned()).to_string(), "bad creds");
}

#[test]
fn unknown_role_displays_a_generic_access_message() {
    assert_eq!(AuthError::UnknownRole.to_string(), "cannot determine access level");
}

#[test]
fn unavailable_suggests_retrying_later() {
    assert!(AuthError::Unavailable.to_string().contains("try again later"));
}

#[test]
fn variants_are_distinguishable() {
    assert_ne!(AuthError::RoleResolutionFailed, AuthError::UnknownRole);
    assert_ne!(AuthError::Unavailable, AuthError::Rejected(String::new()));
}

// =============================================================
// Credential serialization
// =============================================================

#[test]
fn credentials_serialize_with_backend_field_names() {
    let creds = Credentials {
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
    };
    let json = serde_json::to_value(&creds).expect("serialize");
    assert_eq!(json["userEmail"], "a@x.com");
    assert_eq!(json["userPassword"], "secret");
}

// =============================================================
// Stubbed outside the browser
// =============================================================

#[test]
fn authenticate_is_unavailable_outside_the_browser() {
    let creds = Credentials {
        email: "a@x.com".to_owned(),
        password: "secret".to_owned(),
    };
    let result = futures::executor::block_on(authenticate(&creds));
    assert_eq!(result, Err(AuthError::Unavailable));
}
