//! Client integration tests
//!
//! Spawns the real router on an ephemeral port and drives it with `ApiRepo`.

use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Router};
use productos_api::api::{self, envelope::Envelope, AppState};
use productos_api::client::{ApiRepo, ClientError};
use productos_api::domain::product::{Category, NewProduct, Product, ProductPatch};
use productos_api::infrastructure::repositories::InMemoryProductRepository;
use rust_decimal::Decimal;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn(app: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn with_products(products: Vec<Product>) -> Self {
        let repo = Arc::new(InMemoryProductRepository::with_products(products));
        Self::spawn(api::router(AppState::new(repo))).await
    }

    fn repo(&self) -> ApiRepo {
        ApiRepo::new(format!("{}/products", self.base_url))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn mock_product() -> Product {
    Product {
        id: 1,
        name: "Producto test".to_string(),
        description: "Descripción de prueba".to_string(),
        price: Decimal::from(200),
        has_promo: false,
        category: Category::Mobile,
    }
}

#[tokio::test]
async fn get_products_resolves_with_parsed_body() {
    let server = TestServer::with_products(vec![mock_product()]).await;

    let products = server.repo().get_products().await.unwrap();

    assert_eq!(products, Envelope::results(vec![mock_product()]));
}

#[tokio::test]
async fn get_product_by_id() {
    let server = TestServer::with_products(vec![mock_product()]).await;

    let product = server.repo().get_product(1).await.unwrap();

    assert_eq!(product.into_first(), Some(mock_product()));
}

#[tokio::test]
async fn create_product() {
    let server = TestServer::with_products(Vec::new()).await;

    let created = server
        .repo()
        .create_product(&NewProduct::from(mock_product()))
        .await
        .unwrap();

    assert_eq!(created, Envelope::single(mock_product()));
}

#[tokio::test]
async fn update_product() {
    let server = TestServer::with_products(vec![mock_product()]).await;

    let updated = server
        .repo()
        .update_product(1, &ProductPatch::rename("Actualizado"))
        .await
        .unwrap()
        .into_first()
        .unwrap();

    assert_eq!(updated.name, "Actualizado");
    assert_eq!(updated.price, Decimal::from(200));
}

#[tokio::test]
async fn delete_product() {
    let server = TestServer::with_products(vec![mock_product()]).await;
    let repo = server.repo();

    let deleted = repo.delete_product(1).await.unwrap();

    assert_eq!(deleted, Envelope::single(mock_product()));
    assert!(repo.get_products().await.unwrap().results.is_empty());
}

#[tokio::test]
async fn missing_product_fails_with_status_line() {
    let server = TestServer::with_products(Vec::new()).await;
    let repo = server.repo();

    let failures = [
        repo.get_product(999).await.unwrap_err(),
        repo.update_product(999, &ProductPatch::rename("x"))
            .await
            .unwrap_err(),
        repo.delete_product(999).await.unwrap_err(),
    ];

    for err in failures {
        assert!(matches!(err, ClientError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "404 Not Found");
    }
}

#[tokio::test]
async fn every_method_reports_server_errors() {
    let app = Router::new().route(
        "/products",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE })
            .post(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let server = TestServer::spawn(app).await;
    let repo = server.repo();

    let err = repo.get_products().await.unwrap_err();
    assert_eq!(err.to_string(), "503 Service Unavailable");

    let err = repo
        .create_product(&NewProduct::from(mock_product()))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "503 Service Unavailable");
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let app = Router::new().route("/products", get(|| async { "not json" }));
    let server = TestServer::spawn(app).await;

    let err = server.repo().get_products().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = ApiRepo::new(format!("http://{}/products", addr))
        .get_products()
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
