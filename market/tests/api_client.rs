//! # API Client Tests
//!
//! Drives the real `ApiClient` against a stub marketplace server on a loopback port.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Form, Json, Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::Router;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use bep_market::core::{ApiService, AppError};
use bep_market::services::ApiClient;
use shared::{Category, ProductId, ProductQuery, PurchaseMode, RegisterRequest, Role};

const TOKEN: &str = "tok";

/// Query strings seen by the stub, in arrival order
#[derive(Clone, Default)]
struct Recorder {
    queries: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    fn record(&self, query: Option<String>) {
        self.queries.lock().push(query.unwrap_or_default());
    }

    fn last(&self) -> String {
        self.queries.lock().last().cloned().unwrap_or_default()
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", TOKEN))
        .unwrap_or(false)
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Could not validate credentials"}))).into_response()
}

fn cart_body(product_id: Value, quantity: u32) -> Value {
    json!({
        "items": [
            {"product_id": product_id, "name": "Dairy Mix 20kg", "price": "720.00",
             "quantity": quantity, "seller": "Anand Feeds", "unit": "per bag"}
        ],
        "total_items": quantity,
        "total_price": 720 * quantity
    })
}

async fn login(Form(form): Form<HashMap<String, String>>) -> Response {
    let username = form.get("username").map(String::as_str);
    let password = form.get("password").map(String::as_str);
    if username == Some("ravi@example.in") && password == Some("secret123") {
        Json(json!({"access_token": TOKEN, "token_type": "bearer"})).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Incorrect username or password"}))).into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        let detail = json!({"detail": [
            {"msg": "Username already registered", "loc": ["body", "username"]},
            {"msg": "Password too short", "loc": ["body", "password"]}
        ]});
        return (StatusCode::BAD_REQUEST, Json(detail)).into_response();
    }
    if body["role"] != "seller" && body["role"] != "buyer" {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    (StatusCode::CREATED, Json(json!({"id": 12, "username": body["username"]}))).into_response()
}

async fn list_products(State(recorder): State<Recorder>, RawQuery(query): RawQuery) -> Response {
    recorder.record(query);
    Json(json!([
        {"_id": "65f0c2", "name": "Goat Pellets", "price": "310.50", "wholesale_price": 280,
         "unit": "per 25kg bag", "seller_name": "Om Agro", "category": "goats"},
        {"id": 3, "name": "Dairy Mix 20kg", "price": 800, "wholesale_price": "720",
         "seller_name": "Anand Feeds", "category": "dairy"}
    ]))
    .into_response()
}

async fn get_product(headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !authorized(&headers) {
        return unauthorized();
    }
    match id.as_str() {
        "missing" => StatusCode::NOT_FOUND.into_response(),
        "broken" => (StatusCode::OK, "<html>oops</html>").into_response(),
        _ => Json(json!({"id": id, "name": "Layer Mash", "price": 540.0, "seller_name": "Om Agro"})).into_response(),
    }
}

async fn get_cart(State(recorder): State<Recorder>, headers: HeaderMap, RawQuery(query): RawQuery) -> Response {
    recorder.record(query);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"items": [], "total_items": 0, "total_price": 0})).into_response()
}

async fn add_to_cart(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
    Json(body): Json<Value>,
) -> Response {
    recorder.record(query);
    if !authorized(&headers) {
        return unauthorized();
    }
    let quantity = body["quantity"].as_u64().unwrap_or(0) as u32;
    Json(cart_body(body["product_id"].clone(), quantity)).into_response()
}

async fn remove_item(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Path(_id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    recorder.record(query);
    if !authorized(&headers) {
        return unauthorized();
    }
    Json(json!({"items": [], "total_items": 0, "total_price": "0.00"})).into_response()
}

async fn update_item(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    recorder.record(query.clone());
    if !authorized(&headers) {
        return unauthorized();
    }
    let quantity: u32 = query
        .as_deref()
        .and_then(|q| q.split('&').find_map(|pair| pair.strip_prefix("quantity=")))
        .and_then(|q| q.parse().ok())
        .unwrap_or(0);
    if quantity > 10 {
        return (StatusCode::BAD_REQUEST, Json(json!({"detail": "Insufficient stock"}))).into_response();
    }
    let product_id = id.parse::<i64>().map(Value::from).unwrap_or(Value::from(id));
    Json(cart_body(product_id, quantity)).into_response()
}

async fn server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}

async fn spawn_stub() -> (ApiClient, Recorder) {
    let recorder = Recorder::default();
    let router = Router::new()
        .route("/api/login", post(login))
        .route("/api/register", post(register))
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/cart", get(get_cart))
        .route("/api/cart/add", post(add_to_cart))
        .route("/api/cart/item/:id", delete(remove_item).put(update_item))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback port");
    let addr: SocketAddr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    // Trailing slash must not double up in request paths
    (ApiClient::new(&format!("http://{}/", addr)), recorder)
}

async fn spawn_failing_stub() -> ApiClient {
    let router = Router::new()
        .route("/api/products", get(server_error))
        .route("/api/cart/add", post(server_error));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    ApiClient::new(&format!("http://{}", addr))
}

#[tokio::test]
async fn test_login_success_returns_token() {
    let (client, _) = spawn_stub().await;

    let token = client.login("ravi@example.in", "secret123").await.unwrap();

    assert_eq!(token.access_token, TOKEN);
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
}

#[tokio::test]
async fn test_login_rejected_uses_server_detail() {
    let (client, _) = spawn_stub().await;

    let err = client.login("ravi@example.in", "wrong").await.unwrap_err();

    assert_eq!(err, AppError::Api("Incorrect username or password".to_string()));
}

#[tokio::test]
async fn test_register_created() {
    let (client, _) = spawn_stub().await;
    let request = RegisterRequest {
        username: "9876543210".to_string(),
        password: "secret123".to_string(),
        role: Role::Seller,
        full_name: "Meena Patel".to_string(),
    };

    assert!(client.register(&request).await.is_ok());
}

#[tokio::test]
async fn test_register_joins_validation_issues() {
    let (client, _) = spawn_stub().await;
    let request = RegisterRequest {
        username: "taken".to_string(),
        password: "x".to_string(),
        role: Role::Buyer,
        full_name: "Someone".to_string(),
    };

    let err = client.register(&request).await.unwrap_err();

    assert_eq!(err.message(), "Username already registered; Password too short");
}

#[tokio::test]
async fn test_list_products_sends_filters_and_parses_documents() {
    let (client, recorder) = spawn_stub().await;
    let query = ProductQuery {
        search: Some("mix".to_string()),
        min_price: Some(Decimal::new(1000, 1)),
        max_price: None,
        categories: vec![Category::Goats, Category::Dairy],
    };

    let products = client.list_products(&query).await.unwrap();

    assert_eq!(recorder.last(), "search=mix&min_price=100&category=dairy&category=goats");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, ProductId::Text("65f0c2".to_string()));
    assert_eq!(products[0].price, Decimal::new(31050, 2));
    assert_eq!(products[1].id, ProductId::Number(3));
    assert_eq!(products[1].price_for(PurchaseMode::Wholesale), Decimal::from(720));
}

#[tokio::test]
async fn test_list_products_without_filters_sends_no_query() {
    let (client, recorder) = spawn_stub().await;

    client.list_products(&ProductQuery::default()).await.unwrap();

    assert_eq!(recorder.last(), "");
}

#[tokio::test]
async fn test_get_product_requires_token() {
    let (client, _) = spawn_stub().await;

    let product = client.get_product(TOKEN, &ProductId::Number(7)).await.unwrap();
    assert_eq!(product.name, "Layer Mash");

    let err = client.get_product("expired", &ProductId::Number(7)).await.unwrap_err();
    assert_eq!(err.message(), "Could not validate credentials");
}

#[tokio::test]
async fn test_get_product_text_id_stays_one_path_segment() {
    let (client, _) = spawn_stub().await;

    let product = client.get_product(TOKEN, &ProductId::from("feed/mix 20kg")).await.unwrap();

    assert_eq!(product.id, ProductId::Text("feed/mix 20kg".to_string()));
}

#[tokio::test]
async fn test_get_product_empty_error_body_uses_fallback() {
    let (client, _) = spawn_stub().await;

    let err = client.get_product(TOKEN, &ProductId::from("missing")).await.unwrap_err();

    assert_eq!(err.message(), "Product not found");
}

#[tokio::test]
async fn test_get_product_unreadable_success_body() {
    let (client, _) = spawn_stub().await;

    let err = client.get_product(TOKEN, &ProductId::from("broken")).await.unwrap_err();

    assert_eq!(err.message(), "Product not found: unexpected response");
}

#[tokio::test]
async fn test_cart_calls_are_scoped_to_mode() {
    let (client, recorder) = spawn_stub().await;
    let id = ProductId::Number(3);

    let cart = client.get_cart(TOKEN, PurchaseMode::Wholesale).await.unwrap();
    assert!(cart.is_empty());
    assert_eq!(recorder.last(), "mode=wholesale");

    let cart = client.add_to_cart(TOKEN, &id, 2, PurchaseMode::Retail).await.unwrap();
    assert_eq!(recorder.last(), "mode=retail");
    assert_eq!(cart.total_items, 2);
    assert_eq!(cart.total_price, Decimal::from(1440));
    assert_eq!(cart.items[0].product_id, id);
    assert_eq!(cart.items[0].seller_name, "Anand Feeds");

    let cart = client.update_cart_item(TOKEN, &id, 4, PurchaseMode::Retail).await.unwrap();
    assert_eq!(recorder.last(), "quantity=4&mode=retail");
    assert_eq!(cart.items[0].quantity, 4);

    let cart = client.remove_from_cart(TOKEN, &id, PurchaseMode::Wholesale).await.unwrap();
    assert_eq!(recorder.last(), "mode=wholesale");
    assert!(cart.is_empty());
}

#[tokio::test]
async fn test_update_quantity_rejected_by_server() {
    let (client, _) = spawn_stub().await;

    let err = client
        .update_cart_item(TOKEN, &ProductId::Number(3), 11, PurchaseMode::Retail)
        .await
        .unwrap_err();

    assert_eq!(err, AppError::Api("Insufficient stock".to_string()));
}

#[tokio::test]
async fn test_cart_without_token_is_rejected() {
    let (client, _) = spawn_stub().await;

    let err = client.get_cart("", PurchaseMode::Retail).await.unwrap_err();

    assert!(err.is_api());
    assert_eq!(err.message(), "Could not validate credentials");
}

#[tokio::test]
async fn test_server_error_without_detail_uses_fallback() {
    let client = spawn_failing_stub().await;

    let err = client.list_products(&ProductQuery::default()).await.unwrap_err();
    assert_eq!(err.message(), "Failed to fetch products");

    let err = client
        .add_to_cart(TOKEN, &ProductId::Number(1), 1, PurchaseMode::Retail)
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Failed to add item");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.login("ravi@example.in", "secret123").await.unwrap_err();

    assert!(err.is_api());
    assert!(err.message().starts_with("Network error: "), "got {}", err.message());
}
