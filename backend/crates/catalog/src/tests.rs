//! Crate-level tests for catalog: services and the router

#[cfg(test)]
mod service_tests {
    use std::sync::Arc;

    use kernel::error::kind::ErrorKind;
    use kernel::id::{ProductId, SellerId};

    use crate::application::*;
    use crate::error::CatalogError;
    use crate::infra::memory::InMemoryCatalogRepository;

    fn services() -> (
        SellerService<InMemoryCatalogRepository>,
        ProductService<InMemoryCatalogRepository, InMemoryCatalogRepository>,
    ) {
        let repo = Arc::new(InMemoryCatalogRepository::new());
        (
            SellerService::new(repo.clone()),
            ProductService::new(repo.clone(), repo),
        )
    }

    #[tokio::test]
    async fn test_seller_lifecycle() {
        let (sellers, _) = services();

        let acme = sellers
            .create(CreateSellerCommand { name: "Acme".into() })
            .await
            .unwrap();
        assert_eq!(sellers.find_by_id(acme.id()).await.unwrap(), acme);

        let renamed = sellers
            .update(UpdateSellerCommand {
                id: acme.id(),
                name: "Acme Corp".into(),
            })
            .await
            .unwrap();
        assert_eq!(renamed.id(), acme.id());
        assert_eq!(renamed.name(), "Acme Corp");
        assert_eq!(sellers.find_all().await.unwrap().len(), 1);

        sellers.delete(acme.id()).await.unwrap();
        assert!(matches!(
            sellers.find_by_id(acme.id()).await,
            Err(CatalogError::SellerNotFound)
        ));
    }

    #[tokio::test]
    async fn test_seller_validation_and_missing() {
        let (sellers, _) = services();

        let err = sellers
            .create(CreateSellerCommand { name: "".into() })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = sellers
            .update(UpdateSellerCommand {
                id: SellerId::new(),
                name: "Nobody".into(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SellerNotFound));
        assert!(sellers.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_create_and_read() {
        let (sellers, products) = services();
        let acme = sellers
            .create(CreateSellerCommand { name: "Acme".into() })
            .await
            .unwrap();

        let anvil = products
            .create(CreateProductCommand {
                name: "Anvil".into(),
                price: 99.99,
                seller_id: acme.id(),
            })
            .await
            .unwrap();
        assert_eq!(anvil.name(), "Anvil");
        assert_eq!(anvil.price(), 99.99);
        assert_eq!(anvil.seller(), &acme);

        assert_eq!(products.find_by_id(anvil.id()).await.unwrap(), anvil);
        assert_eq!(products.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_product_create_errors() {
        let (sellers, products) = services();

        let err = products
            .create(CreateProductCommand {
                name: "Anvil".into(),
                price: 10.0,
                seller_id: SellerId::new(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CatalogError::SellerNotFound));

        let acme = sellers
            .create(CreateSellerCommand { name: "Acme".into() })
            .await
            .unwrap();
        for (name, price) in [("Anvil", 0.0), ("Anvil", -5.0), ("", 10.0)] {
            let err = products
                .create(CreateProductCommand {
                    name: name.into(),
                    price,
                    seller_id: acme.id(),
                })
                .await
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation);
        }
        assert!(products.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_product_update_keeps_state_on_error() {
        let (sellers, products) = services();
        let acme = sellers
            .create(CreateSellerCommand { name: "Acme".into() })
            .await
            .unwrap();
        let anvil = products
            .create(CreateProductCommand {
                name: "Anvil".into(),
                price: 10.0,
                seller_id: acme.id(),
            })
            .await
            .unwrap();

        let err = products
            .update(UpdateProductCommand {
                id: anvil.id(),
                name: Some("Heavy Anvil".into()),
                price: Some(0.0),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(products.find_by_id(anvil.id()).await.unwrap(), anvil);

        let updated = products
            .update(UpdateProductCommand {
                id: anvil.id(),
                name: None,
                price: Some(12.0),
            })
            .await
            .unwrap();
        assert_eq!(updated.name(), "Anvil");
        assert_eq!(updated.price(), 12.0);

        assert!(matches!(
            products
                .update(UpdateProductCommand {
                    id: ProductId::new(),
                    name: None,
                    price: None,
                })
                .await,
            Err(CatalogError::ProductNotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_seller_with_products_conflicts() {
        let (sellers, products) = services();
        let acme = sellers
            .create(CreateSellerCommand { name: "Acme".into() })
            .await
            .unwrap();
        let anvil = products
            .create(CreateProductCommand {
                name: "Anvil".into(),
                price: 10.0,
                seller_id: acme.id(),
            })
            .await
            .unwrap();

        let err = sellers.delete(acme.id()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);

        products.delete(anvil.id()).await.unwrap();
        sellers.delete(acme.id()).await.unwrap();
    }
}

#[cfg(test)]
mod router_tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use crate::catalog_router;
    use crate::infra::memory::InMemoryCatalogRepository;

    fn app() -> Router {
        catalog_router(Arc::new(InMemoryCatalogRepository::new()))
    }

    fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder().method(method).uri(uri);
        match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn create_seller(app: &Router, name: &str) -> String {
        let (status, body) = send(app, request("POST", "/sellers", Some(json!({"name": name})))).await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_seller_routes() {
        let app = app();
        let id = create_seller(&app, "Acme").await;

        let (status, body) = send(&app, request("GET", &format!("/sellers/{id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"id": id, "name": "Acme"}));

        let (status, body) = send(
            &app,
            request("PUT", "/sellers", Some(json!({"id": id, "name": "Acme Corp"}))),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Acme Corp");

        let (status, body) = send(&app, request("GET", "/sellers", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, _) = send(&app, request("DELETE", &format!("/sellers/{id}"), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, request("GET", &format!("/sellers/{id}"), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_seller_bad_input() {
        let app = app();

        let (status, body) = send(&app, request("GET", "/sellers/not-a-uuid", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid seller id format");

        let (status, body) = send(&app, request("POST", "/sellers", Some(json!({"name": ""})))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "name");

        let (status, _) = send(
            &app,
            request(
                "PUT",
                "/sellers",
                Some(json!({"id": "00000000-0000-4000-8000-000000000001", "name": "X"})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_routes() {
        let app = app();
        let seller_id = create_seller(&app, "Acme").await;

        let (status, product) = send(
            &app,
            request(
                "POST",
                "/products",
                Some(json!({"name": "Anvil", "price": 49.5, "seller_id": seller_id})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(product["price"], 49.5);
        assert_eq!(product["seller"], json!({"id": seller_id, "name": "Acme"}));
        let product_id = product["id"].as_str().unwrap().to_string();

        // Renaming the seller shows up on the next product read
        send(
            &app,
            request("PUT", "/sellers", Some(json!({"id": seller_id, "name": "Acme Corp"}))),
        )
        .await;
        let (status, body) = send(&app, request("GET", &format!("/products/{product_id}"), None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["seller"]["name"], "Acme Corp");

        let (status, body) = send(
            &app,
            request(
                "PUT",
                &format!("/products/{product_id}"),
                Some(json!({"price": 55.0})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["price"], 55.0);
        assert_eq!(body["name"], "Anvil");

        let (status, body) = send(&app, request("GET", "/products", None)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);

        let (status, body) = send(&app, request("DELETE", &format!("/sellers/{seller_id}"), None)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");

        let (status, _) = send(&app, request("DELETE", &format!("/products/{product_id}"), None)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (status, _) = send(&app, request("GET", &format!("/products/{product_id}"), None)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_product_bad_input() {
        let app = app();
        let seller_id = create_seller(&app, "Acme").await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/products",
                Some(json!({"name": "Anvil", "price": 0, "seller_id": seller_id})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["field"], "price");

        let (status, _) = send(
            &app,
            request(
                "POST",
                "/products",
                Some(json!({
                    "name": "Anvil",
                    "price": 1.0,
                    "seller_id": "00000000-0000-4000-8000-000000000001",
                })),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, request("GET", "/products/42", None)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_bodies() {
        let app = app();
        let seller_id = create_seller(&app, "Acme").await;

        let (status, body) = send(
            &app,
            request(
                "POST",
                "/products",
                Some(json!({"name": "Anvil", "seller_id": seller_id})),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION");
        assert!(body["error"].as_str().unwrap().contains("price"));

        let truncated = Request::builder()
            .method("POST")
            .uri("/products")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"name": "Anvil", "price": 1"#))
            .unwrap();
        let (status, body) = send(&app, truncated).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION");

        // Wrong JSON type on an update
        let (status, body) = send(
            &app,
            request("PUT", "/sellers", Some(json!({"id": seller_id, "name": 7}))),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION");

        let (_, products) = send(&app, request("GET", "/products", None)).await;
        assert_eq!(products, json!([]));
    }
}
