use super::*;

fn credential() -> Credential {
    Credential::new("tok-9").unwrap()
}

// =============================================================
// Endpoint table
// =============================================================

#[test]
fn endpoint_methods_and_paths_match_service_contract() {
    let table = [
        (Endpoint::Login, Method::Post, "/login"),
        (Endpoint::Signup, Method::Post, "/signup"),
        (Endpoint::ListReferrals, Method::Get, "/referrals"),
        (Endpoint::CreateReferral, Method::Post, "/referrals"),
        (Endpoint::Logout, Method::Delete, "/logout"),
    ];
    for (endpoint, method, path) in table {
        assert_eq!(endpoint.method(), method, "{endpoint:?}");
        assert_eq!(endpoint.path(), path, "{endpoint:?}");
    }
}

#[test]
fn only_auth_endpoints_skip_credentials() {
    assert!(!Endpoint::Login.requires_credential());
    assert!(!Endpoint::Signup.requires_credential());
    assert!(Endpoint::ListReferrals.requires_credential());
    assert!(Endpoint::CreateReferral.requires_credential());
    assert!(Endpoint::Logout.requires_credential());
}

#[test]
fn method_display_is_uppercase_verb() {
    assert_eq!(Method::Get.to_string(), "GET");
    assert_eq!(Method::Post.to_string(), "POST");
    assert_eq!(Method::Delete.to_string(), "DELETE");
}

// =============================================================
// ApiRequest
// =============================================================

#[test]
fn anonymous_request_has_no_authorization_header() {
    let request = ApiRequest::anonymous(Endpoint::Login, serde_json::json!({}));
    let headers = request.headers();
    assert_eq!(headers, vec![("Content-Type", "application/json".to_owned())]);
}

#[test]
fn authenticated_request_sends_bearer_header() {
    let request = ApiRequest::authenticated(Endpoint::ListReferrals, &credential());
    assert!(request.headers().contains(&("Authorization", "Bearer tok-9".to_owned())));
    assert!(request.body.is_none());
}

#[test]
fn with_body_attaches_json() {
    let request = ApiRequest::authenticated(Endpoint::CreateReferral, &credential())
        .with_body(serde_json::json!({"email": "a@x.com"}));
    assert_eq!(request.body, Some(serde_json::json!({"email": "a@x.com"})));
}

#[test]
fn url_joins_base_and_path() {
    let request = ApiRequest::authenticated(Endpoint::Logout, &credential());
    assert_eq!(request.url("https://api.example.com"), "https://api.example.com/logout");
}

// =============================================================
// ApiResponse
// =============================================================

#[test]
fn response_success_range_is_2xx() {
    assert!(ApiResponse::new(200, "").is_success());
    assert!(ApiResponse::new(204, "").is_success());
    assert!(!ApiResponse::new(199, "").is_success());
    assert!(!ApiResponse::new(300, "").is_success());
    assert!(!ApiResponse::new(422, "").is_success());
}

#[test]
fn response_with_authorization_sets_header() {
    let response = ApiResponse::new(200, "{}").with_authorization("Bearer abc");
    assert_eq!(response.authorization.as_deref(), Some("Bearer abc"));
}
