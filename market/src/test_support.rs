//! In-memory stand-ins for the API and token storage, used by unit tests.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;
use serde_json::json;
use shared::{Cart, CartItem, Product, ProductId, ProductQuery, PurchaseMode, RegisterRequest, TokenResponse};

use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, TokenStore};
use crate::services::jwt::encode_unsigned;

pub(crate) const PASSWORD: &str = "secret123";
pub(crate) const USERNAME: &str = "ravi@example.in";

/// Token store kept in memory
#[derive(Debug, Default)]
pub(crate) struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub(crate) fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.lock().clone())
    }

    fn save(&self, token: &str) -> Result<()> {
        *self.token.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock() = None;
        Ok(())
    }
}

/// Calls that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum MockCall {
    Login,
    Register,
    ListProducts,
    GetProduct,
    GetCart,
    AddToCart,
    RemoveFromCart,
    UpdateCartItem,
}

/// A small marketplace: a fixed catalog, one account, and per-mode carts.
#[derive(Debug)]
pub(crate) struct MockApiService {
    products: Vec<Product>,
    accounts: Mutex<HashMap<String, (String, String)>>,
    carts: Mutex<HashMap<PurchaseMode, Vec<(ProductId, u32)>>>,
    failures: Mutex<HashMap<MockCall, AppError>>,
    delays: Mutex<HashMap<MockCall, Duration>>,
    calls: Mutex<Vec<MockCall>>,
    list_queries: Mutex<Vec<ProductQuery>>,
}

pub(crate) fn product(id: i64, name: &str, price: i64, wholesale: i64, category: &str) -> Product {
    Product {
        id: ProductId::Number(id),
        name: name.to_string(),
        description: Some(format!("{} for healthy livestock", name)),
        price: Decimal::from(price),
        wholesale_price: Some(Decimal::from(wholesale)),
        unit: Some("per bag".to_string()),
        seller_name: "Anand Feeds".to_string(),
        category: Some(category.to_string()),
    }
}

pub(crate) fn session_token(sub: &str, full_name: &str) -> String {
    encode_unsigned(&json!({"sub": sub, "full_name": full_name, "role": "buyer"}))
}

impl MockApiService {
    pub(crate) fn new() -> Self {
        let mut accounts = HashMap::new();
        accounts.insert(USERNAME.to_string(), (PASSWORD.to_string(), "Ravi Kumar".to_string()));

        Self {
            products: vec![
                product(1, "Dairy Mix 20kg", 800, 720, "dairy"),
                product(2, "Layer Mash", 540, 480, "poultry"),
                product(3, "Goat Pellets", 310, 280, "goats"),
                product(4, "Mineral Block", 95, 85, "supplements"),
            ],
            accounts: Mutex::new(accounts),
            carts: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            delays: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            list_queries: Mutex::new(Vec::new()),
        }
    }

    /// Make every subsequent `call` fail with `error`.
    pub(crate) fn fail(&self, call: MockCall, error: AppError) {
        self.failures.lock().insert(call, error);
    }

    /// Hold back the next answer to `call` by `delay`. The answer is computed when the
    /// call arrives, so it reflects the state at that moment.
    pub(crate) fn delay_next(&self, call: MockCall, delay: Duration) {
        self.delays.lock().insert(call, delay);
    }

    async fn lag(&self, call: MockCall) {
        let delay = self.delays.lock().remove(&call);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    pub(crate) fn call_count(&self, call: MockCall) -> usize {
        self.calls.lock().iter().filter(|c| **c == call).count()
    }

    pub(crate) fn list_queries(&self) -> Vec<ProductQuery> {
        self.list_queries.lock().clone()
    }

    fn enter(&self, call: MockCall) -> Result<()> {
        self.calls.lock().push(call);
        match self.failures.lock().get(&call) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn authorize(token: &str) -> Result<()> {
        if token.is_empty() {
            return Err(AppError::Api("Not authenticated".to_string()));
        }
        Ok(())
    }

    fn find(&self, id: &ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| AppError::Api("Product not found".to_string()))
    }

    fn snapshot(&self, mode: PurchaseMode) -> Cart {
        let carts = self.carts.lock();
        let lines = carts.get(&mode).cloned().unwrap_or_default();

        let items: Vec<CartItem> = lines
            .iter()
            .filter_map(|(id, quantity)| {
                let product = self.products.iter().find(|p| &p.id == id)?;
                Some(CartItem {
                    product_id: id.clone(),
                    name: product.name.clone(),
                    price: product.price_for(mode),
                    quantity: *quantity,
                    seller_name: product.seller_name.clone(),
                    unit: product.unit.clone(),
                })
            })
            .collect();

        Cart {
            total_items: items.iter().map(|item| item.quantity).sum(),
            total_price: items.iter().map(CartItem::line_total).sum(),
            items,
        }
    }
}

#[async_trait]
impl ApiService for MockApiService {
    async fn login(&self, username: &str, password: &str) -> Result<TokenResponse> {
        self.enter(MockCall::Login)?;
        let accounts = self.accounts.lock();
        match accounts.get(username) {
            Some((expected, full_name)) if expected == password => Ok(TokenResponse {
                access_token: session_token(username, full_name),
                token_type: Some("bearer".to_string()),
            }),
            _ => Err(AppError::Api("Incorrect username or password".to_string())),
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.enter(MockCall::Register)?;
        let mut accounts = self.accounts.lock();
        if accounts.contains_key(&request.username) {
            return Err(AppError::Api("Username already registered".to_string()));
        }
        accounts.insert(
            request.username.clone(),
            (request.password.clone(), request.full_name.clone()),
        );
        Ok(())
    }

    async fn list_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.list_queries.lock().push(query.clone());
        self.enter(MockCall::ListProducts)?;

        let search = query.search.as_deref().map(str::to_lowercase);
        let categories: HashSet<&str> = query.categories.iter().map(|c| c.id()).collect();

        Ok(self
            .products
            .iter()
            .filter(|p| search.as_deref().map_or(true, |s| p.name.to_lowercase().contains(s)))
            .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
            .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
            .filter(|p| {
                categories.is_empty()
                    || p.category.as_deref().is_some_and(|c| categories.contains(c))
            })
            .cloned()
            .collect())
    }

    async fn get_product(&self, token: &str, id: &ProductId) -> Result<Product> {
        self.enter(MockCall::GetProduct)?;
        Self::authorize(token)?;
        self.find(id).cloned()
    }

    async fn get_cart(&self, token: &str, mode: PurchaseMode) -> Result<Cart> {
        self.enter(MockCall::GetCart)?;
        Self::authorize(token)?;
        let cart = self.snapshot(mode);
        self.lag(MockCall::GetCart).await;
        Ok(cart)
    }

    async fn add_to_cart(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart> {
        self.enter(MockCall::AddToCart)?;
        Self::authorize(token)?;
        self.find(product_id)?;

        {
            let mut carts = self.carts.lock();
            let lines = carts.entry(mode).or_default();
            match lines.iter_mut().find(|(id, _)| id == product_id) {
                Some((_, existing)) => *existing += quantity,
                None => lines.push((product_id.clone(), quantity)),
            }
        }
        Ok(self.snapshot(mode))
    }

    async fn remove_from_cart(&self, token: &str, product_id: &ProductId, mode: PurchaseMode) -> Result<Cart> {
        self.enter(MockCall::RemoveFromCart)?;
        Self::authorize(token)?;

        {
            let mut carts = self.carts.lock();
            let lines = carts.entry(mode).or_default();
            let before = lines.len();
            lines.retain(|(id, _)| id != product_id);
            if lines.len() == before {
                return Err(AppError::Api("Item not found in cart".to_string()));
            }
        }
        Ok(self.snapshot(mode))
    }

    async fn update_cart_item(
        &self,
        token: &str,
        product_id: &ProductId,
        quantity: u32,
        mode: PurchaseMode,
    ) -> Result<Cart> {
        self.enter(MockCall::UpdateCartItem)?;
        Self::authorize(token)?;

        {
            let mut carts = self.carts.lock();
            let lines = carts.entry(mode).or_default();
            match lines.iter_mut().find(|(id, _)| id == product_id) {
                Some((_, existing)) => *existing = quantity,
                None => return Err(AppError::Api("Item not found in cart".to_string())),
            }
        }
        Ok(self.snapshot(mode))
    }
}
