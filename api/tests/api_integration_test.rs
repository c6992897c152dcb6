//! End-to-end tests for the HTTP API
//!
//! These run the full routing table against the in-memory user
//! repository, so every response below is produced by the same handler,
//! middleware, and envelope code as the MySQL-backed binary.

use std::sync::Arc;

use actix_web::http::header::AUTHORIZATION;
use actix_web::{test, web};
use chrono::NaiveDate;

use wl_api::app::create_app;
use wl_api::routes::AppState;
use wl_core::domain::entities::user::{User, UserRole};
use wl_core::repositories::MockUserRepository;
use wl_core::services::auth::{AuthService, FixedWindowRateLimiter};
use wl_core::services::token::{TokenService, TokenServiceConfig};
use wl_core::services::user::UserService;
use wl_shared::RateLimitConfig;

const PASSWORD: &str = "correct horse battery";

fn fixture_user(email: &str, role: UserRole) -> User {
    User::new(
        email.to_string(),
        bcrypt::hash(PASSWORD, 4).unwrap(),
        "Test".to_string(),
        "User".to_string(),
        role,
        None,
        NaiveDate::from_ymd_opt(2023, 4, 17).unwrap(),
    )
}

struct TestHarness {
    state: web::Data<AppState<MockUserRepository>>,
    token_service: Arc<TokenService>,
}

/// Build shared state around seeded users and a rate limit budget
async fn harness(users: Vec<User>, rate_limit: RateLimitConfig) -> TestHarness {
    let repository = Arc::new(MockUserRepository::with_users(users).await);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig {
        jwt_secret: "integration-test-secret".to_string(),
        ..TokenServiceConfig::default()
    }));

    let state = web::Data::new(AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&repository),
            Arc::clone(&token_service),
        )),
        user_service: Arc::new(UserService::new(repository)),
        rate_limiter: Arc::new(FixedWindowRateLimiter::new(rate_limit)),
    });

    TestHarness {
        state,
        token_service,
    }
}

/// Generous budget for tests that are not about rate limiting
fn roomy_limit() -> RateLimitConfig {
    RateLimitConfig {
        max_requests: 1_000,
        window_ms: 60_000,
    }
}

fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_web::test]
async fn test_health_check() {
    let h = harness(vec![], roomy_limit()).await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
}

#[actix_web::test]
async fn test_login_returns_token_pair() {
    let h = harness(
        vec![fixture_user("jane@worklog.io", UserRole::Manager)],
        roomy_limit(),
    )
    .await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "jane@worklog.io",
            "password": PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "SUCCESS");
    assert_eq!(body["data"]["expires_in"], 86_400);
    assert_eq!(body["data"]["user"]["role"], "MANAGER");
    assert!(body["data"]["access_token"].as_str().unwrap().len() > 20);
    assert!(body["data"]["refresh_token"].as_str().unwrap().len() > 20);
}

#[actix_web::test]
async fn test_login_wrong_password_and_unknown_email_look_alike() {
    let h = harness(
        vec![fixture_user("jane@worklog.io", UserRole::Employee)],
        roomy_limit(),
    )
    .await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    for (email, password) in [
        ("jane@worklog.io", "wrong password"),
        ("nobody@worklog.io", PASSWORD),
    ] {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({ "email": email, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["code"], "INVALID_CREDENTIALS");
        assert_eq!(body["message"], "Invalid email or password");
    }
}

#[actix_web::test]
async fn test_login_inactive_account_is_403() {
    let mut user = fixture_user("gone@worklog.io", UserRole::Employee);
    user.deactivate();
    let h = harness(vec![user], roomy_limit()).await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "gone@worklog.io",
            "password": PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "ACCOUNT_INACTIVE");
}

#[actix_web::test]
async fn test_login_rate_limited_after_budget() {
    let h = harness(
        vec![fixture_user("jane@worklog.io", UserRole::Employee)],
        RateLimitConfig {
            max_requests: 5,
            window_ms: 60_000,
        },
    )
    .await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    // All test requests resolve to the same client key, so the sixth
    // attempt lands outside the budget regardless of credentials.
    for _ in 0..5 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(serde_json::json!({
                "email": "jane@worklog.io",
                "password": "wrong password",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "jane@worklog.io",
            "password": PASSWORD,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 429);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "RATE_LIMIT_EXCEEDED");
    assert_eq!(body["message"], "Too many requests. Please try again later.");
}

#[actix_web::test]
async fn test_refresh_with_valid_token_is_501() {
    let user = fixture_user("jane@worklog.io", UserRole::Employee);
    let h = harness(vec![user.clone()], roomy_limit()).await;
    let refresh_token = h.token_service.generate_refresh_token(&user).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    // The refresh body is the raw token string
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_payload(refresh_token)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 501);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_IMPLEMENTED");
}

#[actix_web::test]
async fn test_refresh_rejects_access_token() {
    let user = fixture_user("jane@worklog.io", UserRole::Employee);
    let h = harness(vec![user.clone()], roomy_limit()).await;
    let access_token = h.token_service.generate_access_token(&user).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_payload(access_token)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_REFRESH_TOKEN");
}

#[actix_web::test]
async fn test_users_require_authentication() {
    let h = harness(vec![], roomy_limit()).await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let resp =
        test::call_service(&app, test::TestRequest::get().uri("/api/v1/users").to_request()).await;
    assert_eq!(resp.status(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/v1/users/me")
            .insert_header((AUTHORIZATION, "Bearer not.a.jwt"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_current_user_returns_own_record() {
    let user = fixture_user("jane@worklog.io", UserRole::Employee);
    let h = harness(vec![user.clone()], roomy_limit()).await;
    let token = h.token_service.generate_access_token(&user).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users/me")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "jane@worklog.io");
    assert!(body["data"].get("password_hash").is_none());
}

#[actix_web::test]
async fn test_list_users_forbidden_for_employee() {
    let employee = fixture_user("emp@worklog.io", UserRole::Employee);
    let h = harness(vec![employee.clone()], roomy_limit()).await;
    let token = h.token_service.generate_access_token(&employee).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INSUFFICIENT_PERMISSIONS");
}

#[actix_web::test]
async fn test_list_users_filters_and_paginates() {
    let manager = fixture_user("manager@worklog.io", UserRole::Manager);
    let mut users = vec![manager.clone()];
    for i in 0..12 {
        users.push(fixture_user(
            &format!("employee{i:02}@worklog.io"),
            UserRole::Employee,
        ));
    }
    let h = harness(users, roomy_limit()).await;
    let token = h.token_service.generate_access_token(&manager).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users?role=EMPLOYEE&page=1&size=5")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["total_elements"], 12);
    assert_eq!(data["total_pages"], 3);
    assert_eq!(data["page"], 1);
    assert_eq!(data["content"].as_array().unwrap().len(), 5);
    assert_eq!(data["content"][0]["email"], "employee05@worklog.io");
}

#[actix_web::test]
async fn test_list_users_rejects_unknown_role_filter() {
    let manager = fixture_user("manager@worklog.io", UserRole::Manager);
    let h = harness(vec![manager.clone()], roomy_limit()).await;
    let token = h.token_service.generate_access_token(&manager).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/users?role=WIZARD")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_FIELD");
}

#[actix_web::test]
async fn test_create_user_requires_admin() {
    let admin = fixture_user("admin@worklog.io", UserRole::Admin);
    let manager = fixture_user("manager@worklog.io", UserRole::Manager);
    let h = harness(vec![admin.clone(), manager.clone()], roomy_limit()).await;
    let admin_token = h.token_service.generate_access_token(&admin).unwrap();
    let manager_token = h.token_service.generate_access_token(&manager).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let new_user = serde_json::json!({
        "email": "new.hire@worklog.io",
        "password": "longenough",
        "first_name": "New",
        "last_name": "Hire",
        "role": "EMPLOYEE",
        "department_id": null,
        "join_date": "2026-09-01",
    });

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(bearer(&manager_token))
        .set_json(&new_user)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(bearer(&admin_token))
        .set_json(&new_user)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "new.hire@worklog.io");
    assert!(body["data"].get("password_hash").is_none());

    // Same email again is a conflict
    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(bearer(&admin_token))
        .set_json(&new_user)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DUPLICATE_EMAIL");
}

#[actix_web::test]
async fn test_create_user_validates_body() {
    let admin = fixture_user("admin@worklog.io", UserRole::Admin);
    let h = harness(vec![admin.clone()], roomy_limit()).await;
    let token = h.token_service.generate_access_token(&admin).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/users")
        .insert_header(bearer(&token))
        .set_json(serde_json::json!({
            "email": "short.pass@worklog.io",
            "password": "short",
            "first_name": "Short",
            "last_name": "Pass",
            "role": "EMPLOYEE",
            "department_id": null,
            "join_date": "2026-09-01",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_get_user_by_id() {
    let manager = fixture_user("manager@worklog.io", UserRole::Manager);
    let employee = fixture_user("emp@worklog.io", UserRole::Employee);
    let h = harness(vec![manager.clone(), employee.clone()], roomy_limit()).await;
    let token = h.token_service.generate_access_token(&manager).unwrap();
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", employee.id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["email"], "emp@worklog.io");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/users/{}", uuid::Uuid::new_v4()))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[actix_web::test]
async fn test_unknown_route_is_404_envelope() {
    let h = harness(vec![], roomy_limit()).await;
    let app = test::init_service(create_app(h.state.clone(), h.token_service.clone())).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/v2/nothing").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ERROR");
    assert_eq!(body["code"], "NOT_FOUND");
}
