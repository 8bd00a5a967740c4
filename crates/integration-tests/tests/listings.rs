//! Portal product lists.

use axum::http::StatusCode;

use urbanswift_integration_tests::TestClient;

#[tokio::test]
async fn test_list_starts_with_samples() {
    let mut client = TestClient::new();
    let page = client.get("/products").await;

    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("Fresh Vegetables Bundle"));
    assert!(page.body.contains("Whole Wheat Bread"));
    assert!(page.body.contains("Back to Retailer dashboard"));
}

#[tokio::test]
async fn test_add_product() {
    let mut client = TestClient::new();
    let response = client
        .post_form(
            "/products?source=producer",
            &[
                ("name", "Wildflower Honey"),
                ("price", "120"),
                ("unit", "1 jar"),
                ("stock", "40"),
            ],
        )
        .await;
    assert_eq!(response.location(), Some("/products?source=producer"));

    let page = client.get("/products?source=producer").await;
    assert!(page.body.contains("Product added!"));
    assert!(page.body.contains("Wildflower Honey"));
    assert!(page.body.contains("Back to Producer dashboard"));
}

#[tokio::test]
async fn test_add_product_needs_a_price() {
    let mut client = TestClient::new();
    let page = client
        .submit(
            "/products",
            &[
                ("name", "Wildflower Honey"),
                ("price", "cheap"),
                ("unit", "1 jar"),
                ("stock", "40"),
            ],
        )
        .await;

    assert!(page.body.contains("Invalid number"));
    assert!(!page.body.contains("Product added!"));
}

#[tokio::test]
async fn test_edit_product() {
    let mut client = TestClient::new();

    let page = client.get("/products?edit=2").await;
    assert!(page.body.contains("action=\"/products/2?source=retailer\""));

    let page = client
        .submit(
            "/products/2?source=retailer",
            &[
                ("name", "Basmati Rice"),
                ("price", "42"),
                ("unit", "1 kg"),
                ("stock", "200"),
            ],
        )
        .await;
    assert!(page.body.contains("Product updated!"));
    assert!(page.body.contains("Basmati Rice"));
    assert!(!page.body.contains("Organic Rice"));
}

#[tokio::test]
async fn test_delete_product() {
    let mut client = TestClient::new();
    let page = client.submit("/products/5/delete", &[]).await;

    assert!(page.body.contains("Product removed"));
    assert!(!page.body.contains("Whole Wheat Bread"));
}

#[tokio::test]
async fn test_delete_missing_product_is_not_found() {
    let mut client = TestClient::new();
    let response = client.post_form("/products/99/delete", &[]).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
