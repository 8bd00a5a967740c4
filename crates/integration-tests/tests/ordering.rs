//! The `/order` cart and checkout flow.

use axum::http::StatusCode;

use urbanswift_integration_tests::TestClient;

const CHECKOUT_FIELDS: [(&str, &str); 7] = [
    ("street", "12 Market Road"),
    ("city", "New York"),
    ("zip", "10001"),
    ("slot", "tomorrow"),
    ("card_number", "4242 4242 4242 4242"),
    ("card_expiry", "12/30"),
    ("card_cvv", "123"),
];

#[tokio::test]
async fn test_browse_shows_catalog_and_empty_cart() {
    let mut client = TestClient::new();
    let page = client.get("/order").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Organic Vegetables Bundle"));
    assert!(page.body.contains("Gourmet Cheese Selection"));
    assert!(page.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_search_and_category_filter() {
    let mut client = TestClient::new();

    let page = client.get("/order?q=coffee").await;
    assert!(page.body.contains("Premium Coffee Beans"));
    assert!(!page.body.contains("Artisan Bread Selection"));

    let page = client.get("/order?category=Dairy").await;
    assert!(page.body.contains("Gourmet Cheese Selection"));
    assert!(page.body.contains("Dairy Essentials Pack"));
    assert!(!page.body.contains("Premium Coffee Beans"));
}

#[tokio::test]
async fn test_search_without_matches() {
    let mut client = TestClient::new();
    let page = client.get("/order?q=xyz").await;

    assert!(page.body.contains("No products found"));
}

#[tokio::test]
async fn test_add_to_cart_keeps_search() {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            "/order/cart/add",
            &[("product_id", "3"), ("q", "coffee"), ("category", "")],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/order?q=coffee"));

    let page = client.get("/order?q=coffee").await;
    assert!(page.body.contains("Added to cart!"));
    assert!(page.body.contains("(1 item)"));
}

#[tokio::test]
async fn test_quantity_stepper() {
    let mut client = TestClient::new();
    client
        .post_form("/order/cart/add", &[("product_id", "1")])
        .await;

    let page = client
        .submit(
            "/order/cart/adjust",
            &[("product_id", "1"), ("delta", "1")],
        )
        .await;
    assert!(page.body.contains("(2 items)"));

    client
        .post_form("/order/cart/adjust", &[("product_id", "1"), ("delta", "-1")])
        .await;
    let page = client
        .submit(
            "/order/cart/adjust",
            &[("product_id", "1"), ("delta", "-1")],
        )
        .await;
    assert!(page.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_huge_quantities_still_render() {
    let mut client = TestClient::new();
    for id in ["1", "2"] {
        client.post_form("/order/cart/add", &[("product_id", id)]).await;
        for _ in 0..2 {
            client
                .post_form(
                    "/order/cart/adjust",
                    &[("product_id", id), ("delta", "2147483647")],
                )
                .await;
        }
    }

    let page = client.get("/order").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("(4294967295 items)"));
}

#[tokio::test]
async fn test_unknown_product_is_bad_request() {
    let mut client = TestClient::new();
    let response = client
        .post_form("/order/cart/add", &[("product_id", "999")])
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_empty_cart_checkout_is_refused() {
    let mut client = TestClient::new();
    let page = client.submit("/order/checkout", &[]).await;

    assert!(page.body.contains("Cart is empty"));
    assert!(page.body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_back_to_browsing_keeps_cart() {
    let mut client = TestClient::new();
    client
        .post_form("/order/cart/add", &[("product_id", "2")])
        .await;

    let checkout = client.submit("/order/checkout", &[]).await;
    assert!(checkout.body.contains("Delivery Address"));

    let browse = client.submit("/order/back", &[]).await;
    assert!(browse.body.contains("Proceed to Checkout"));
    assert!(browse.body.contains("(1 item)"));
}

#[tokio::test]
async fn test_incomplete_checkout_stays_on_checkout() {
    let mut client = TestClient::new();
    client
        .post_form("/order/cart/add", &[("product_id", "1")])
        .await;
    client.post_form("/order/checkout", &[]).await;

    let page = client
        .submit("/order/place", &[("street", ""), ("city", "New York")])
        .await;

    assert!(page.body.contains("Missing fields"));
    assert!(page.body.contains("Delivery Address"));
}

#[tokio::test]
async fn test_place_outside_checkout_is_refused_before_validation() {
    let mut client = TestClient::new();
    client
        .post_form("/order/cart/add", &[("product_id", "1")])
        .await;

    let page = client.submit("/order/place", &[("street", "")]).await;

    assert!(page.body.contains("Nothing to do"));
    assert!(!page.body.contains("Missing fields"));
    assert!(page.body.contains("Proceed to Checkout"));
}

#[tokio::test]
async fn test_full_order_cycle() {
    let mut client = TestClient::new();

    client
        .post_form("/order/cart/add", &[("product_id", "4")])
        .await;
    client
        .post_form("/order/cart/add", &[("product_id", "4")])
        .await;

    let checkout = client.submit("/order/checkout", &[]).await;
    assert!(checkout.body.contains("Place Order"));

    let tracking = client.submit("/order/place", &CHECKOUT_FIELDS).await;
    assert_eq!(tracking.status, StatusCode::OK);
    assert!(tracking.body.contains("Order Confirmed!"));
    assert!(tracking.body.contains("ORD-"));
    assert!(tracking.body.contains("Order placed!"));

    // Tracking is not a browsing stage
    let response = client
        .post_form("/order/cart/add", &[("product_id", "1")])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    let still_tracking = client.get("/order").await;
    assert!(still_tracking.body.contains("Order Confirmed!"));
    assert!(still_tracking.body.contains("Nothing to do"));

    let browse = client.submit("/order/continue", &[]).await;
    assert!(browse.body.contains("Your cart is empty"));
}

#[tokio::test]
async fn test_visitors_have_separate_carts() {
    let mut alice = TestClient::new();
    alice
        .post_form("/order/cart/add", &[("product_id", "1")])
        .await;

    let mut bob = TestClient::new();
    let page = bob.get("/order").await;
    assert!(page.body.contains("Your cart is empty"));
}
