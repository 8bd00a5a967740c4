//! Producer, wholesaler and retailer portals.

use axum::http::StatusCode;

use urbanswift_integration_tests::TestClient;

async fn signed_in(role: &str) -> TestClient {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            &format!("/{role}/login"),
            &[("email", "ops@freshfarms.example"), ("password", "hunter2")],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some(format!("/{role}").as_str()));
    client
}

#[tokio::test]
async fn test_portal_shows_sign_in_form() {
    let mut client = TestClient::new();
    let page = client.get("/producer").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Welcome Back"));
    assert!(page.body.contains("action=\"/producer/login\""));
    assert!(page.body.contains("href=\"/producer?mode=register\""));
}

#[tokio::test]
async fn test_register_mode_asks_for_organisation() {
    let mut client = TestClient::new();
    let page = client.get("/retailer?mode=register").await;

    assert!(page.body.contains("Create Account"));
    assert!(page.body.contains("Store Name"));
    assert!(page.body.contains("href=\"/retailer\">Log In"));
}

#[tokio::test]
async fn test_unknown_portal_is_not_found() {
    let mut client = TestClient::new();
    let response = client.get("/warehouse").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_opens_dashboard() {
    let mut client = signed_in("producer").await;
    let page = client.get("/producer").await;

    assert!(page.body.contains("Welcome back!"));
    assert!(page.body.contains("Producer Dashboard"));
    assert!(page.body.contains("Welcome, ops"));
}

#[tokio::test]
async fn test_login_requires_valid_email() {
    let mut client = TestClient::new();
    let page = client
        .submit(
            "/producer/login",
            &[("email", "nobody"), ("password", "secret")],
        )
        .await;

    assert!(page.body.contains("Invalid email"));
    assert!(page.body.contains("Welcome Back"));
}

#[tokio::test]
async fn test_register_missing_fields_returns_to_register_form() {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            "/wholesaler/register",
            &[("email", "buyer@metro.example"), ("password", "secret")],
        )
        .await;

    assert_eq!(response.location(), Some("/wholesaler?mode=register"));
    let page = client.get("/wholesaler?mode=register").await;
    assert!(page.body.contains("Missing fields"));
}

#[tokio::test]
async fn test_register_greets_by_name() {
    let mut client = TestClient::new();
    let page = client
        .submit(
            "/wholesaler/register",
            &[
                ("name", "Maya Patel"),
                ("organisation", "Metro Wholesale"),
                ("email", "maya@metro.example"),
                ("password", "secret"),
            ],
        )
        .await;

    assert!(page.body.contains("Registration successful!"));
    assert!(page.body.contains("Welcome, Maya Patel"));
    assert!(page.body.contains("Metro Wholesale"));
}

#[tokio::test]
async fn test_sign_in_is_per_portal() {
    let mut client = signed_in("producer").await;
    let page = client.get("/wholesaler").await;

    assert!(page.body.contains("Welcome Back"));
    assert!(!page.body.contains("Order Management"));
}

#[tokio::test]
async fn test_logout() {
    let mut client = signed_in("retailer").await;
    let page = client.submit("/retailer/logout", &[]).await;

    assert!(page.body.contains("Signed out"));
    assert!(page.body.contains("Welcome Back"));
}

#[tokio::test]
async fn test_actions_require_sign_in() {
    let mut client = TestClient::new();
    let response = client.post_form("/producer/pickup", &[]).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/producer"));
}

#[tokio::test]
async fn test_schedule_pickup() {
    let mut client = signed_in("producer").await;
    let page = client.submit("/producer/pickup", &[]).await;

    assert!(page.body.contains("Pickup Scheduled!"));
}

#[tokio::test]
async fn test_wholesaler_actions() {
    let mut client = signed_in("wholesaler").await;

    let page = client.submit("/wholesaler/upload", &[]).await;
    assert!(page.body.contains("Product list uploaded!"));

    let page = client.submit("/wholesaler/delivery", &[]).await;
    assert!(page.body.contains("Delivery requested!"));
}

#[tokio::test]
async fn test_delivery_estimate() {
    let mut client = signed_in("wholesaler").await;
    let page = client
        .submit(
            "/wholesaler/estimate",
            &[("weight", "500"), ("distance", "25"), ("quantity", "10")],
        )
        .await;

    assert!(page.body.contains("Estimated Cost: "));
}

#[tokio::test]
async fn test_delivery_estimate_out_of_range() {
    let mut client = signed_in("wholesaler").await;
    let page = client
        .submit(
            "/wholesaler/estimate",
            &[("weight", "79228162514264337593543950335"), ("quantity", "2")],
        )
        .await;

    assert!(page.body.contains("Estimate unavailable"));
    assert!(!page.body.contains("Estimated Cost: "));

    let page = client
        .submit("/wholesaler/estimate", &[("weight", "10")])
        .await;
    assert!(page.body.contains("Estimated Cost: "));
}

#[tokio::test]
async fn test_retailer_source_choice() {
    let mut client = signed_in("retailer").await;

    let page = client.get("/retailer").await;
    assert!(!page.body.contains("source-card--active"));

    let page = client
        .submit("/retailer/source", &[("source", "wholesaler")])
        .await;
    assert!(page.body.contains("source-card--active"));

    let response = client
        .post_form("/retailer/source", &[("source", "warehouse")])
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_quick_reorder() {
    let mut client = signed_in("retailer").await;
    let page = client.submit("/retailer/reorder", &[]).await;

    assert!(page.body.contains("Reorder placed!"));
    assert!(page.body.contains("Payment History"));
}
