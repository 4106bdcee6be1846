//! # Product Card
//!
//! One catalog product priced for the active mode. Retail cards add to the cart; wholesale
//! cards add through "Contact Seller" and can open a negotiation.

use egui::{self, RichText};
use shared::utils::{format_price, format_unit_price};
use shared::{Product, PurchaseMode};

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::layouts;

pub const CARD_WIDTH: f32 = 260.0;

pub fn render_product_card(ui: &mut egui::Ui, product: &Product, state: &AppState, app: &mut App, theme: &Theme) {
    let mode = state.mode;
    let adding = state.catalog.adding.contains(&product.id);
    let accent = theme.mode_color(mode);

    layouts::render_card(ui, theme, |ui| {
        ui.set_width(CARD_WIDTH);

        ui.add(egui::Label::new(RichText::new(&product.name).size(18.0).strong()).truncate())
            .on_hover_text(&product.name);
        if let Some(category) = &product.category {
            ui.label(RichText::new(category).size(12.0).color(theme.dim));
        }
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_unit_price(product.price_for(mode), product.unit.as_deref()))
                    .size(20.0)
                    .strong(),
            );
            if mode == PurchaseMode::Wholesale {
                ui.label(RichText::new(format_price(product.price)).strikethrough().color(theme.dim));
            }
        });

        if let Some(description) = &product.description {
            ui.add_space(4.0);
            ui.label(RichText::new(description).size(13.0).color(theme.dim));
        }

        ui.separator();
        ui.horizontal(|ui| {
            ui.label(RichText::new("Sold by:").size(13.0).color(theme.dim));
            ui.label(RichText::new(&product.seller_name).size(13.0).strong());
        });
        ui.add_space(6.0);

        let label = match (adding, mode) {
            (true, _) => "Adding...",
            (false, PurchaseMode::Retail) => "🛒 Add to Cart",
            (false, PurchaseMode::Wholesale) => "Contact Seller",
        };
        let button = egui::Button::new(RichText::new(label).strong().color(egui::Color32::WHITE))
            .fill(accent)
            .min_size(egui::vec2(CARD_WIDTH, 36.0));
        if ui.add_enabled(!adding && !state.cart.is_busy(), button).clicked() {
            app.handle_add_to_cart(product.id.clone());
        }

        if mode == PurchaseMode::Wholesale && ui.button("💬 Negotiate").clicked() {
            app.handle_open_negotiation(product.id.clone());
        }

        if let Some(error) = state.catalog.card_error(&product.id) {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(error).size(13.0).color(theme.error));
            });
        }
    });
}
