//! # Event Handlers
//!
//! User action handlers, organized by screen.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod navigation;
pub mod negotiation;
