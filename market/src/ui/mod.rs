//! # GUI Rendering
//!
//! Per-frame rendering: a header for signed-in users and the current screen below it.

pub mod screens;
pub mod theme;
pub mod widgets;

use egui;

use crate::app::{App, Screen};
use crate::ui::theme::Theme;

/// Main render function - called every frame by egui
pub fn render(ctx: &egui::Context, app: &mut App) {
    // Render from a snapshot so no lock is held while drawing
    let Some(state) = app.state.try_read().map(|guard| guard.clone()) else {
        // Lock is held by a task, skip this frame
        return;
    };
    let theme = Theme::default();

    // Render-time guard, in case the session ended while a guarded screen was open
    let screen = state.guard(state.current_screen);
    if screen != state.current_screen {
        app.handle_screen_change(screen);
    }

    if state.is_authenticated() && screen.requires_auth() {
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::new().fill(theme.surface).inner_margin(egui::Margin::symmetric(16, 10)))
            .show(ctx, |ui| widgets::header::render_header(ui, &state, app, &theme));
    }

    egui::CentralPanel::default().show(ctx, |ui| match screen {
        Screen::Welcome => screens::welcome::render(ui, &state, app),
        Screen::Login => screens::auth::render(ui, &state, app),
        Screen::ModeSelection => screens::mode_select::render(ui, &state, app),
        Screen::Store => screens::store::render(ui, &state, app),
        Screen::Cart => screens::cart::render(ui, &state, app),
        Screen::Negotiation => screens::negotiation::render(ui, &state, app),
    });
}
