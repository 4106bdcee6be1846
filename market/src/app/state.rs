//! # Application State Types
//!
//! All state-related types for the application: screens, the auth forms, the session
//! store, the mode-scoped cart store, catalog filters and the negotiation transcript.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};

use shared::{Cart, Category, Product, ProductId, ProductQuery, PurchaseMode, Role};

use crate::config::ClientConfig;
use crate::core::error::{AppError, Result};
use crate::core::service::{ApiService, TokenStore};
use crate::services::jwt::{decode_claims, UserClaims};
use crate::utils::debounce::Debouncer;
use crate::utils::validation::parse_price_input;

/// How long a failed add-to-cart message stays on its product card
pub const CARD_ERROR_TTL: Duration = Duration::from_secs(3);

pub const NEGOTIATION_GREETING: &str =
    "Hello! I am your AI-powered negotiation assistant. What price are you looking for?";
pub const NEGOTIATION_REPLY: &str = "That is an interesting offer. Let me check with the seller...";

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Splash with a "Get Started" button
    Welcome,
    /// Login / registration forms
    Login,
    /// Retail or wholesale choice
    ModeSelection,
    /// Product catalog with filters
    Store,
    Cart,
    /// Mock price negotiation for one product
    Negotiation,
}

impl Screen {
    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "Welcome",
            Screen::Login => "Login",
            Screen::ModeSelection => "Choose Your Mode",
            Screen::Store => "Products",
            Screen::Cart => "Your Shopping Cart",
            Screen::Negotiation => "Negotiation & Support",
        }
    }

    /// Whether the screen is behind the session guard
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Welcome | Screen::Login)
    }
}

/// Authentication sub-state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Login form
    Login {
        username: String,
        password: String,
        error: Option<String>,
        loading: bool,
    },
    /// Registration form
    Register {
        full_name: String,
        username: String,
        password: String,
        role: Role,
        error: Option<String>,
        loading: bool,
    },
}

impl Default for AuthState {
    fn default() -> Self {
        Self::login()
    }
}

impl AuthState {
    pub fn login() -> Self {
        AuthState::Login {
            username: String::new(),
            password: String::new(),
            error: None,
            loading: false,
        }
    }

    pub fn register() -> Self {
        AuthState::Register {
            full_name: String::new(),
            username: String::new(),
            password: String::new(),
            role: Role::Buyer,
            error: None,
            loading: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AuthState::Login { error, .. } | AuthState::Register { error, .. } => error.as_deref(),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            AuthState::Login { loading, .. } | AuthState::Register { loading, .. } => *loading,
        }
    }

    pub fn set_error(&mut self, message: Option<String>) {
        match self {
            AuthState::Login { error, .. } | AuthState::Register { error, .. } => *error = message,
        }
    }

    pub fn set_loading(&mut self, value: bool) {
        match self {
            AuthState::Login { loading, .. } | AuthState::Register { loading, .. } => *loading = value,
        }
    }
}

/// An authenticated session. Token and identity always travel together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub user: UserClaims,
}

/// Session store: in-memory session plus its persisted token.
#[derive(Debug, Clone)]
pub struct SessionStore {
    session: Option<Session>,
    token_store: Arc<dyn TokenStore>,
}

impl SessionStore {
    pub fn new(token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            session: None,
            token_store,
        }
    }

    /// Re-establish the session from the persisted token.
    ///
    /// A token that cannot be read or decoded is discarded. Returns whether a session
    /// is now active.
    pub fn restore(&mut self) -> bool {
        let token = match self.token_store.load() {
            Ok(Some(token)) => token,
            Ok(None) => return false,
            Err(e) => {
                tracing::warn!(error = %e, "Could not read persisted token, discarding it");
                self.discard_persisted();
                return false;
            }
        };

        match decode_claims(&token) {
            Ok(user) => {
                tracing::info!(user = %user.sub, "Session restored");
                self.session = Some(Session { token, user });
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted token is not decodable, discarding it");
                self.discard_persisted();
                false
            }
        }
    }

    /// Start a session from a freshly issued token.
    ///
    /// Nothing changes when the token cannot be decoded. A failure to persist the token
    /// is logged; the in-memory session still starts.
    pub fn login(&mut self, token: &str) -> Result<&Session> {
        let user = decode_claims(token)?;

        if let Err(e) = self.token_store.save(token) {
            tracing::warn!(error = %e, "Could not persist access token");
        }

        tracing::info!(user = %user.sub, role = ?user.role, "Logged in");
        Ok(self.session.insert(Session {
            token: token.to_string(),
            user,
        }))
    }

    /// Drop the session and the persisted token.
    pub fn logout(&mut self) {
        if self.session.take().is_some() {
            tracing::info!("Logged out");
        }
        self.discard_persisted();
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn user(&self) -> Option<&UserClaims> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Token for an authenticated call, or a session error.
    pub fn require_token(&self) -> Result<String> {
        self.token()
            .map(str::to_string)
            .ok_or_else(|| AppError::Session("Please log in to continue".to_string()))
    }

    fn discard_persisted(&self) {
        if let Err(e) = self.token_store.clear() {
            tracing::warn!(error = %e, "Could not clear persisted token");
        }
    }
}

/// A cart snapshot and the mode it was fetched for
#[derive(Debug, Clone, PartialEq)]
pub struct CartSnapshot {
    pub mode: PurchaseMode,
    pub cart: Cart,
}

/// Cart store
#[derive(Debug, Clone, Default)]
pub struct CartState {
    snapshot: Option<CartSnapshot>,
    /// Cart requests currently in flight
    in_flight: u32,
    /// Sequence number handed to the most recent request
    issued: u64,
    /// Sequence number of the request the stored snapshot came from
    stored: u64,
    /// Last error raised from the cart screen
    pub error: Option<String>,
}

impl CartState {
    /// Whether any cart request is still in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    /// Register a new request and return its sequence number.
    pub fn begin(&mut self) -> u64 {
        self.in_flight += 1;
        self.issued += 1;
        self.issued
    }

    /// A request finished, successfully or not.
    pub fn finish(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Store the snapshot answered to request `seq`, unless a later request already
    /// stored one. Returns whether it was stored.
    pub fn store(&mut self, seq: u64, mode: PurchaseMode, cart: Cart) -> bool {
        if seq < self.stored {
            tracing::debug!(seq, stored = self.stored, "Dropping out-of-order cart snapshot");
            return false;
        }
        self.stored = seq;
        self.replace(mode, cart);
        true
    }

    /// Forget the snapshot and the last error. Request bookkeeping survives so responses
    /// still in flight are counted and ordered.
    pub fn clear(&mut self) {
        self.snapshot = None;
        self.error = None;
    }

    /// The stored cart, only if it was fetched for `mode`.
    pub fn snapshot_for(&self, mode: PurchaseMode) -> Option<&Cart> {
        self.snapshot
            .as_ref()
            .filter(|snapshot| snapshot.mode == mode)
            .map(|snapshot| &snapshot.cart)
    }

    pub fn replace(&mut self, mode: PurchaseMode, cart: Cart) {
        tracing::info!(
            mode = %mode,
            total_items = cart.total_items,
            total_price = %cart.total_price,
            "Cart snapshot replaced"
        );
        self.snapshot = Some(CartSnapshot { mode, cart });
    }

    /// Forget the snapshot so it is re-fetched before display.
    pub fn invalidate(&mut self) {
        self.snapshot = None;
    }

    /// Header badge count for `mode`
    pub fn badge_count(&self, mode: PurchaseMode) -> u32 {
        self.snapshot_for(mode).map(|cart| cart.total_items).unwrap_or(0)
    }
}

/// Filter criteria as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogFilters {
    pub search: String,
    pub categories: BTreeSet<Category>,
    pub min_price: String,
    pub max_price: String,
}

/// What the product area of the store shows
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogView<'a> {
    Loading,
    Error(&'a str),
    NoResults,
    Products(&'a [Product]),
}

pub const NO_RESULTS_MESSAGE: &str = "No products found matching your filters.";

/// Catalog view state
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub filters: CatalogFilters,
    search_debounce: Debouncer<String>,
    /// Search text after the debounce settled
    applied_search: String,
    /// Most recently requested query; older responses are dropped
    requested: Option<ProductQuery>,
    pub loading: bool,
    pub products: Vec<Product>,
    pub error: Option<String>,
    /// Add-to-cart failures shown on individual cards
    pub card_errors: HashMap<ProductId, (String, Instant)>,
    /// Cards with an add in flight
    pub adding: HashSet<ProductId>,
}

impl CatalogState {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            filters: CatalogFilters::default(),
            search_debounce: Debouncer::new(search_debounce),
            applied_search: String::new(),
            requested: None,
            loading: false,
            products: Vec::new(),
            error: None,
            card_errors: HashMap::new(),
            adding: HashSet::new(),
        }
    }

    pub fn set_search(&mut self, text: String, now: Instant) {
        if text != self.filters.search {
            self.filters.search = text.clone();
            self.search_debounce.push(text, now);
        }
    }

    pub fn toggle_category(&mut self, category: Category) {
        if !self.filters.categories.remove(&category) {
            self.filters.categories.insert(category);
        }
    }

    /// Inline error for the min price field
    pub fn min_price_error(&self) -> Option<String> {
        parse_price_input(&self.filters.min_price).err()
    }

    pub fn max_price_error(&self) -> Option<String> {
        parse_price_input(&self.filters.max_price).err()
    }

    /// The query the current filters describe. Invalid price input is left out.
    pub fn current_query(&self) -> ProductQuery {
        let search = self.applied_search.trim();
        ProductQuery {
            search: (!search.is_empty()).then(|| search.to_string()),
            min_price: parse_price_input(&self.filters.min_price).ok().flatten(),
            max_price: parse_price_input(&self.filters.max_price).ok().flatten(),
            categories: self.filters.categories.iter().copied().collect(),
        }
    }

    /// Per-frame housekeeping. Returns a query when the products need fetching.
    pub fn tick(&mut self, now: Instant) -> Option<ProductQuery> {
        if let Some(search) = self.search_debounce.poll(now) {
            self.applied_search = search;
        }
        self.card_errors
            .retain(|_, (_, shown_at)| now.saturating_duration_since(*shown_at) < CARD_ERROR_TTL);

        let query = self.current_query();
        (self.requested.as_ref() != Some(&query)).then_some(query)
    }

    /// Time until the pending search settles, if one is pending
    pub fn debounce_remaining(&self, now: Instant) -> Option<Duration> {
        self.search_debounce.remaining(now)
    }

    pub fn mark_requested(&mut self, query: ProductQuery) {
        self.requested = Some(query);
        self.loading = true;
        self.error = None;
    }

    /// Force the next tick to fetch again.
    pub fn refresh(&mut self) {
        self.requested = None;
    }

    /// Store a product list response. Returns false when the response is stale.
    pub fn apply_results(&mut self, query: &ProductQuery, result: Result<Vec<Product>>) -> bool {
        if self.requested.as_ref() != Some(query) {
            tracing::debug!(?query, "Dropping stale product response");
            return false;
        }

        self.loading = false;
        match result {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(e) => {
                self.products.clear();
                self.error = Some(e.message().to_string());
            }
        }
        true
    }

    pub fn view(&self) -> CatalogView<'_> {
        if self.loading || self.requested.is_none() {
            return CatalogView::Loading;
        }
        if let Some(error) = &self.error {
            return CatalogView::Error(error);
        }
        if self.products.is_empty() {
            return CatalogView::NoResults;
        }
        CatalogView::Products(&self.products)
    }

    pub fn card_error(&self, id: &ProductId) -> Option<&str> {
        self.card_errors.get(id).map(|(message, _)| message.as_str())
    }

    pub fn set_card_error(&mut self, id: ProductId, message: String, now: Instant) {
        self.card_errors.insert(id, (message, now));
    }
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatAuthor {
    Assistant,
    User,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub from: ChatAuthor,
    pub text: String,
    pub sent_at: chrono::DateTime<chrono::Local>,
}

impl ChatMessage {
    fn new(from: ChatAuthor, text: impl Into<String>) -> Self {
        Self {
            from,
            text: text.into(),
            sent_at: chrono::Local::now(),
        }
    }
}

/// Negotiation screen state
#[derive(Debug, Clone, Default)]
pub struct NegotiationState {
    pub product_id: Option<ProductId>,
    pub product: Option<Product>,
    pub loading: bool,
    pub error: Option<String>,
    pub messages: Vec<ChatMessage>,
    pub draft: String,
}

impl NegotiationState {
    /// Fresh transcript for `product_id`, starting with the assistant greeting.
    pub fn open(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            product: None,
            loading: true,
            error: None,
            messages: vec![ChatMessage::new(ChatAuthor::Assistant, NEGOTIATION_GREETING)],
            draft: String::new(),
        }
    }

    /// Append the user's message. Blank messages are ignored and return false.
    pub fn push_user_message(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(ChatMessage::new(ChatAuthor::User, text.trim()));
        true
    }

    pub fn push_reply(&mut self) {
        self.messages.push(ChatMessage::new(ChatAuthor::Assistant, NEGOTIATION_REPLY));
    }

    pub fn is_for(&self, product_id: &ProductId) -> bool {
        self.product_id.as_ref() == Some(product_id)
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
}

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub mode: PurchaseMode,
    pub session: SessionStore,
    pub auth: AuthState,
    pub cart: CartState,
    pub catalog: CatalogState,
    pub negotiation: NegotiationState,
    pub api_client: Arc<dyn ApiService>,
    /// Toasts queued for the next frame
    pub pending_notifications: Vec<(NotificationLevel, String)>,
    pub config: ClientConfig,
}

impl AppState {
    pub fn new(config: ClientConfig, api_client: Arc<dyn ApiService>, token_store: Arc<dyn TokenStore>) -> Self {
        Self {
            current_screen: Screen::Welcome,
            mode: PurchaseMode::default(),
            session: SessionStore::new(token_store),
            auth: AuthState::default(),
            cart: CartState::default(),
            catalog: CatalogState::new(config.search_debounce),
            negotiation: NegotiationState::default(),
            api_client,
            pending_notifications: Vec::new(),
            config,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Screen the guard lets through for `requested`.
    pub fn guard(&self, requested: Screen) -> Screen {
        if requested.requires_auth() && !self.is_authenticated() {
            Screen::Login
        } else {
            requested
        }
    }

    /// Cart for the active mode, if it has been fetched
    pub fn current_cart(&self) -> Option<&Cart> {
        self.cart.snapshot_for(self.mode)
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.pending_notifications.push((level, message.into()));
    }

    /// Clear everything tied to the session
    pub fn reset_session_state(&mut self) {
        self.cart.clear();
        self.catalog = CatalogState::new(self.config.search_debounce);
        self.negotiation = NegotiationState::default();
        self.mode = PurchaseMode::default();
        self.auth = AuthState::login();
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("current_screen", &self.current_screen)
            .field("mode", &self.mode)
            .field("authenticated", &self.is_authenticated())
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}
