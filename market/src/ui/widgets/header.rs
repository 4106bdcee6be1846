//! # Header Bar
//!
//! Brand mark, current mode pill, cart badge, user name and logout.

use egui::{self, RichText};

use crate::app::{App, AppState, Screen};
use crate::ui::theme::{Theme, BRAND_GREEN};

pub fn render_header(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.horizontal(|ui| {
        let brand = ui.add(
            egui::Button::new(RichText::new("B  BEP").size(22.0).strong().color(BRAND_GREEN)).frame(false),
        );
        if brand.on_hover_text("Choose mode").clicked() {
            app.handle_screen_change(Screen::ModeSelection);
        }

        if matches!(state.current_screen, Screen::Store | Screen::Cart | Screen::Negotiation) {
            ui.add_space(8.0);
            let pill = RichText::new(format!("{} Mode", state.mode.title()))
                .size(13.0)
                .color(egui::Color32::WHITE);
            ui.add(egui::Button::new(pill).fill(theme.mode_color(state.mode)).sense(egui::Sense::hover()));
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.link(RichText::new("(Logout)").color(theme.dim)).clicked() {
                app.handle_logout();
            }

            let name = state
                .session
                .user()
                .map(|user| user.display_name().to_string())
                .unwrap_or_else(|| "Loading...".to_string());
            ui.label(RichText::new(format!("👤 {}", name)).color(theme.dim));

            let count = state.cart.badge_count(state.mode);
            let cart_button = egui::Button::new(
                RichText::new(format!("🛒 {}", count)).color(egui::Color32::WHITE).strong(),
            )
            .fill(BRAND_GREEN);
            if ui.add(cart_button).on_hover_text("Cart").clicked() {
                app.handle_screen_change(Screen::Cart);
            }
        });
    });
}
