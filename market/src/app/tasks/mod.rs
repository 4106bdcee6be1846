//! # Async Tasks
//!
//! Async work spawned on the Tokio runtime: API round-trips and the negotiation timer.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod negotiation;
