//! # Notifications Widget
//!
//! Toast notifications using egui-notify.

use egui_notify::Toasts;
use std::time::Duration;

use crate::app::NotificationLevel;

const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default().with_anchor(egui_notify::Anchor::BottomRight),
        }
    }
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&mut self, message: String) {
        self.toasts.success(message).duration(Some(TOAST_DURATION));
    }

    pub fn info(&mut self, message: String) {
        self.toasts.info(message).duration(Some(TOAST_DURATION));
    }

    /// Show a notification queued in application state
    pub fn push(&mut self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Success => self.success(message),
            NotificationLevel::Info => self.info(message),
        }
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
