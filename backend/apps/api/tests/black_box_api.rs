//! HTTP black-box tests
//!
//! Drive the composed application over the in-memory store.

use std::sync::Arc;

use api::build_app;
use auth::AuthConfig;
use auth::application::TokenCodec;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use kernel::id::UserId;
use serde_json::{Value, json};
use tower::ServiceExt;
use workforce::InMemoryStore;

struct TestApp {
    router: Router,
    store: Arc<InMemoryStore>,
    config: Arc<AuthConfig>,
}

impl TestApp {
    fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let config = Arc::new(AuthConfig::development());
        let router = build_app(store.clone(), store.clone(), config.clone(), Vec::new());
        Self {
            router,
            store,
            config,
        }
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn call(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    /// Registers an organization and returns the manager's token
    async fn sign_up(&self, organization: &str, email: &str) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/api/auth/signup",
                None,
                Some(json!({"name": organization, "email": email, "password": "pw1"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["token"].as_str().unwrap().to_string()
    }

    /// Creates an employee and returns (id, token)
    async fn hire(&self, manager_token: &str, email: &str) -> (String, String) {
        let (status, body) = self
            .call(
                "POST",
                "/api/user",
                Some(manager_token),
                Some(json!({"email": email, "password": "pw2"})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        let id = body["employee"]["id"].as_str().unwrap().to_string();

        let (status, body) = self
            .call(
                "POST",
                "/api/auth/signin",
                None,
                Some(json!({"email": email, "password": "pw2"})),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "{body}");
        (id, body["token"].as_str().unwrap().to_string())
    }

    async fn create_project(&self, token: &str, title: &str, employees: &[&str]) -> String {
        let (status, body) = self
            .call(
                "POST",
                "/api/project",
                Some(token),
                Some(json!({"title": title, "description": "desc", "employees": employees})),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "{body}");
        body["data"]["id"].as_str().unwrap().to_string()
    }
}

fn titles(body: &Value) -> Vec<String> {
    let mut titles: Vec<String> = body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect();
    titles.sort();
    titles
}

#[tokio::test]
async fn health_reports_ok() {
    let app = TestApp::new();
    let (status, body) = app.call("GET", "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Application is completely healthy!");
}

#[tokio::test]
async fn second_sign_up_with_same_email_is_rejected() {
    let app = TestApp::new();
    app.sign_up("Acme", "ana@acme.io").await;

    let (status, body) = app
        .call(
            "POST",
            "/api/auth/signup",
            None,
            Some(json!({"name": "Other", "email": "ana@acme.io", "password": "different"})),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Email already registered");
}

#[tokio::test]
async fn employee_sees_only_assigned_projects() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (employee_id, employee) = app.hire(&manager, "eve@acme.io").await;

    // Token issued before the assignment; projects are resolved per request
    app.create_project(&manager, "P1", &[&employee_id]).await;
    app.create_project(&manager, "P2", &[]).await;

    let (status, body) = app.call("GET", "/api/project/all", Some(&employee), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["P1"]);

    let (status, body) = app.call("GET", "/api/project/all", Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["P1", "P2"]);
}

#[tokio::test]
async fn deleting_project_clears_assignments() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (employee_id, employee) = app.hire(&manager, "eve@acme.io").await;
    let project_id = app.create_project(&manager, "P1", &[&employee_id]).await;

    let (_, body) = app
        .call("GET", &format!("/api/user/{employee_id}"), Some(&manager), None)
        .await;
    assert_eq!(body["employee"]["projects"], json!([project_id]));

    let (status, body) = app
        .call("DELETE", &format!("/api/project/{project_id}"), Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Project deleted successfully");

    let (_, body) = app
        .call("GET", &format!("/api/user/{employee_id}"), Some(&employee), None)
        .await;
    assert_eq!(body["employee"]["projects"], json!([]));

    let (status, _) = app
        .call("GET", &format!("/api/project/{project_id}"), Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cross_tenant_reads_and_writes_are_forbidden() {
    let app = TestApp::new();
    let acme = app.sign_up("Acme", "ana@acme.io").await;
    let globex = app.sign_up("Globex", "gus@globex.io").await;
    let (globex_employee, _) = app.hire(&globex, "gia@globex.io").await;
    let project_id = app.create_project(&globex, "Secret", &[]).await;

    let uri = format!("/api/project/{project_id}");

    let (status, body) = app.call("GET", &uri, Some(&acme), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "You are not allowed for this resource");
    assert!(body.get("project").is_none());

    let (status, _) = app
        .call("PUT", &uri, Some(&acme), Some(json!({"title": "Mine"})))
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.call("DELETE", &uri, Some(&acme), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app
        .call("DELETE", &format!("/api/user/{globex_employee}"), Some(&acme), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Still intact for its owner
    let (status, body) = app.call("GET", &uri, Some(&globex), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["project"]["title"], "Secret");
}

#[tokio::test]
async fn employee_cannot_create_project_regardless_of_payload() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (_, employee) = app.hire(&manager, "eve@acme.io").await;

    for payload in [json!({"title": "P", "description": "d"}), json!({})] {
        let (status, body) = app
            .call("POST", "/api/project", Some(&employee), Some(payload))
            .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn blank_title_is_rejected_before_any_write() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;

    // Identity resolution alone: a malformed id is rejected before any lookup
    let before = app.store.call_count();
    let (status, _) = app
        .call("GET", "/api/project/not-a-uuid", Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let identity_cost = app.store.call_count() - before;

    let before = app.store.call_count();
    let (status, body) = app
        .call(
            "POST",
            "/api/project",
            Some(&manager),
            Some(json!({"title": "", "description": "x"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title and description are required");
    assert_eq!(app.store.call_count() - before, identity_cost);

    let (_, body) = app.call("GET", "/api/project/all", Some(&manager), None).await;
    assert_eq!(body["projects"], json!([]));
}

#[tokio::test]
async fn missing_token_never_touches_the_store() {
    let app = TestApp::new();

    for (method, uri) in [
        ("GET", "/api/project/all"),
        ("POST", "/api/project"),
        ("GET", "/api/user/all"),
        ("DELETE", "/api/user/00000000-0000-0000-0000-000000000000"),
        ("GET", "/api/auth/signout"),
    ] {
        let (status, body) = app.call(method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        assert_eq!(body["error"], "Unauthenticated user");
    }

    assert_eq!(app.store.call_count(), 0);
}

#[tokio::test]
async fn expired_and_tampered_tokens_are_unauthenticated() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (_, body) = app.call("GET", "/api/user/manager", Some(&manager), None).await;
    let manager_id: UserId = body["employee"]["id"].as_str().unwrap().parse().unwrap();

    let codec = TokenCodec::from_config(&app.config);
    let expired = codec
        .issue_at(&manager_id, chrono::Utc::now() - chrono::Duration::hours(25))
        .unwrap();

    let (payload, signature) = manager.split_once('.').unwrap();
    let first = if signature.starts_with('A') { 'B' } else { 'A' };
    let tampered = format!("{payload}.{first}{}", &signature[1..]);

    let before = app.store.call_count();
    for token in [expired.token.as_str(), tampered.as_str(), "garbage"] {
        let (status, _) = app.call("GET", "/api/project/all", Some(token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
    assert_eq!(app.store.call_count(), before);
}

#[tokio::test]
async fn cookie_takes_precedence_over_bearer() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (_, employee) = app.hire(&manager, "eve@acme.io").await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/project")
        .header(header::COOKIE, format!("token={employee}"))
        .header(header::AUTHORIZATION, format!("Bearer {manager}"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"title": "P", "description": "d"}).to_string()))
        .unwrap();
    let (status, _) = app.send(request).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let request = Request::builder()
        .uri("/api/user/all")
        .header(header::COOKIE, format!("token={manager}"))
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn sign_in_failures_are_distinct_400s() {
    let app = TestApp::new();
    app.sign_up("Acme", "ana@acme.io").await;

    let (status, body) = app
        .call(
            "POST",
            "/api/auth/signin",
            None,
            Some(json!({"email": "ana@acme.io", "password": "nope"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email & password are not matching");

    let (status, body) = app
        .call(
            "POST",
            "/api/auth/signin",
            None,
            Some(json!({"email": "zed@acme.io", "password": "pw1"})),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email not registered yet");
}

#[tokio::test]
async fn roster_update_and_member_listing() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (eve, _) = app.hire(&manager, "eve@acme.io").await;
    let (bob, _) = app.hire(&manager, "bob@acme.io").await;
    let project_id = app.create_project(&manager, "P1", &[&eve]).await;
    let uri = format!("/api/project/{project_id}");

    let (status, body) = app
        .call("PUT", &uri, Some(&manager), Some(json!({"employees": [bob]})))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Project updated successfully");

    let (_, body) = app.call("GET", &uri, Some(&manager), None).await;
    let roster: Vec<&str> = body["employees"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(roster, [bob.as_str()]);

    let (_, body) = app.call("GET", "/api/user/all", Some(&manager), None).await;
    assert_eq!(body["employees"].as_array().unwrap().len(), 2);

    let (status, body) = app.call("GET", "/api/user/manager", Some(&manager), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["employee"]["role"], "manager");
    assert!(body["employee"].get("passwordHash").is_none());
}

#[tokio::test]
async fn manager_cannot_be_deleted_and_employee_deletion_works() {
    let app = TestApp::new();
    let manager = app.sign_up("Acme", "ana@acme.io").await;
    let (eve, _) = app.hire(&manager, "eve@acme.io").await;

    let (_, body) = app.call("GET", "/api/user/manager", Some(&manager), None).await;
    let manager_id = body["employee"]["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .call("DELETE", &format!("/api/user/{manager_id}"), Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = app
        .call("DELETE", &format!("/api/user/{eve}"), Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");

    let (status, _) = app
        .call("GET", &format!("/api/user/{eve}"), Some(&manager), None)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
