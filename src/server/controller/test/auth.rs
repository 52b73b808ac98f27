use super::*;
use test_utils::factory;

/// Tests that a wrong password is rejected with the offending fields named.
///
/// Expected: 401 with error "Invalid credentials" and fields [email, password]
#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = TestApp::new(false).await;
    let user = factory::create_user(&app.db).await.unwrap();

    let response = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": user.email, "password": "Wrong12345" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body,
        json!({
            "success": false,
            "error": "Invalid credentials",
            "fields": ["email", "password"],
        })
    );
    assert!(response.cookie.is_none());
}

/// Tests that an unknown email gets the same response as a wrong password.
///
/// Expected: 401 with error "Invalid credentials"
#[tokio::test]
async fn login_rejects_unknown_email() {
    let app = TestApp::new(false).await;

    let response = app
        .send(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "nobody@example.com", "password": DEFAULT_PASSWORD })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid credentials");
}

/// Tests that the session cookie from login authenticates later requests.
///
/// Expected: 200 from /api/auth/user with the logged-in user's email
#[tokio::test]
async fn login_session_identifies_user() {
    let app = TestApp::new(false).await;
    let user = factory::create_user(&app.db).await.unwrap();

    let cookie = app.login(&user.email).await;
    let response = app
        .send(Method::GET, "/api/auth/user", Some(&cookie), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["email"], user.email.as_str());
}
