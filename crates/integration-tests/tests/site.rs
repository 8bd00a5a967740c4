//! Marketing pages, health check and response headers.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};

use urbanswift_integration_tests::TestClient;

#[tokio::test]
async fn test_health() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, "ok");
}

#[tokio::test]
async fn test_home_page_renders() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Deliveries For Every Need."));
    assert!(response.body.contains("Hyperlocal Delivery"));
    assert!(response.body.contains("Sarah Chen"));
}

#[tokio::test]
async fn test_about_and_contact_render() {
    let mut client = TestClient::new();

    let about = client.get("/about").await;
    assert_eq!(about.status, StatusCode::OK);
    assert!(about.body.contains("Expanded to 20 Cities"));

    let contact = client.get("/contact").await;
    assert_eq!(contact.status, StatusCode::OK);
    assert!(contact.body.contains("How do I track my delivery?"));
}

#[tokio::test]
async fn test_security_headers() {
    let mut client = TestClient::new();
    let response = client.get("/").await;

    assert_eq!(response.header("x-frame-options"), Some("DENY"));
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert!(
        response
            .header("content-security-policy")
            .is_some_and(|csp| csp.contains("default-src 'none'"))
    );
    assert_eq!(response.header("cache-control"), Some("no-store, max-age=0"));
}

#[tokio::test]
async fn test_request_id_is_minted() {
    let mut client = TestClient::new();
    let response = client.get("/health").await;

    let id = response.header("x-request-id").expect("request id header");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let mut client = TestClient::new();
    let request = Request::get("/health")
        .header("x-request-id", "edge-1234")
        .body(Body::empty())
        .expect("valid request");

    let response = client.send(request).await;
    assert_eq!(response.header("x-request-id"), Some("edge-1234"));
}

#[tokio::test]
async fn test_contact_message_is_acknowledged() {
    let mut client = TestClient::new();
    let page = client
        .submit(
            "/contact",
            &[
                ("name", "Priya"),
                ("email", "priya@example.com"),
                ("phone", ""),
                ("message", "Do you deliver to Brooklyn?"),
            ],
        )
        .await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Message sent!"));
}

#[tokio::test]
async fn test_contact_rejects_bad_email() {
    let mut client = TestClient::new();
    let page = client
        .submit(
            "/contact",
            &[
                ("name", "Priya"),
                ("email", "not-an-email"),
                ("message", "Hello"),
            ],
        )
        .await;

    assert!(page.body.contains("Invalid email"));
    assert!(!page.body.contains("Message sent!"));
}

#[tokio::test]
async fn test_notices_are_shown_once() {
    let mut client = TestClient::new();
    let first = client
        .submit(
            "/contact",
            &[
                ("name", "Priya"),
                ("email", "priya@example.com"),
                ("message", "Hello"),
            ],
        )
        .await;
    assert!(first.body.contains("Message sent!"));

    let second = client.get("/contact").await;
    assert!(!second.body.contains("Message sent!"));
}
