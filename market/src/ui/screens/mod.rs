//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one [`crate::app::Screen`].
//!
//! ## Rendering Pattern
//!
//! ```rust,ignore
//! pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
//!     // - Read from the state snapshot
//!     // - Handle user input
//!     // - Call app.handle_* methods for actions
//! }
//! ```
//!
//! Screens receive a **cloned state snapshot**, so no lock is held while rendering. User
//! actions go through `app.handle_*`, which lock internally.
//!
//! - **[`welcome`]**: Landing page with "Get Started"
//! - **[`auth`]**: Login and sign-up forms
//! - **[`mode_select`]**: Retail / wholesale choice
//! - **[`store`]**: Catalog with filters
//! - **[`cart`]**: Cart for the current mode
//! - **[`negotiation`]**: Scripted bargaining chat for one product

pub mod auth;
pub mod cart;
pub mod mode_select;
pub mod negotiation;
pub mod store;
pub mod welcome;
