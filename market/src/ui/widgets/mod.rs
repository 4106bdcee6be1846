//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod branding;
pub mod filter_sidebar;
pub mod forms;
pub mod header;
pub mod layouts;
pub mod notifications;
pub mod product_card;
