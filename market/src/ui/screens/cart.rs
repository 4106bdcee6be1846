//! # Cart Screen
//!
//! Lines of the current-mode cart with a quantity stepper. Errors from actions taken here
//! are shown above the table.

use egui::{self, RichText};
use shared::utils::{format_price, format_unit_price};
use shared::Cart;

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let cart = state.current_cart();

    let Some(cart) = cart.filter(|cart| !cart.is_empty()) else {
        if cart.is_none() && state.cart.is_busy() {
            layouts::render_status_message(ui, "Loading cart...", theme.dim);
        } else {
            render_empty(ui, state, app, &theme);
        }
        return;
    };

    ui.vertical_centered(|ui| {
        ui.set_max_width(860.0);
        ui.label(RichText::new("Your Shopping Cart").size(28.0).strong());
        ui.add_space(12.0);

        if let Some(error) = &state.cart.error {
            forms::render_error(ui, error, &theme);
        }

        layouts::render_card(ui, &theme, |ui| {
            render_lines(ui, cart, state.cart.is_busy(), app, &theme);
            ui.separator();
            render_summary(ui, cart, &theme);
        });
    });
}

fn render_empty(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new("Your Cart is Empty").size(28.0).strong());
        ui.add_space(8.0);
        forms::render_hint(ui, "Looks like you haven't added anything to your cart yet.", theme);
        if let Some(error) = &state.cart.error {
            ui.add_space(8.0);
            forms::render_error(ui, error, theme);
        }
        ui.add_space(20.0);
        if forms::render_button(ui, "Start Shopping", None, Some(theme.selected), None, true).clicked() {
            app.handle_screen_change(Screen::Store);
        }
    });
}

fn render_lines(ui: &mut egui::Ui, cart: &Cart, busy: bool, app: &mut App, theme: &Theme) {
    egui::Grid::new("cart_lines")
        .num_columns(3)
        .striped(true)
        .spacing(egui::vec2(24.0, 12.0))
        .min_col_width(160.0)
        .show(ui, |ui| {
            ui.label(RichText::new("Product").strong().color(theme.dim));
            ui.label(RichText::new("Quantity").strong().color(theme.dim));
            ui.label(RichText::new("Total Price").strong().color(theme.dim));
            ui.end_row();

            for item in &cart.items {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&item.name).strong());
                    ui.label(RichText::new(&item.seller_name).size(12.0).color(theme.dim));
                    ui.label(RichText::new(format_unit_price(item.price, item.unit.as_deref())).size(13.0));
                });

                ui.horizontal(|ui| {
                    let quantity = i64::from(item.quantity);
                    if ui.add_enabled(!busy, egui::Button::new("-")).clicked() {
                        app.handle_quantity_change(item.product_id.clone(), quantity - 1);
                    }
                    ui.label(RichText::new(item.quantity.to_string()).size(16.0).strong());
                    if ui.add_enabled(!busy, egui::Button::new("+")).clicked() {
                        app.handle_quantity_change(item.product_id.clone(), quantity + 1);
                    }
                    ui.add_space(8.0);
                    let remove = egui::Button::new(RichText::new("Remove").color(theme.error)).frame(false);
                    if ui.add_enabled(!busy, remove).clicked() {
                        app.handle_remove_from_cart(item.product_id.clone());
                    }
                });

                ui.label(RichText::new(format_price(item.line_total())).size(16.0).strong());
                ui.end_row();
            }
        });
}

fn render_summary(ui: &mut egui::Ui, cart: &Cart, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Subtotal:").size(20.0).strong());
                ui.label(
                    RichText::new(format_price(cart.total_price))
                        .size(20.0)
                        .strong()
                        .color(theme.selected),
                );
            });
            forms::render_hint(ui, &format!("{} item(s)", cart.total_items), theme);
            forms::render_hint(ui, "Taxes and shipping calculated at checkout.", theme);
        });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Checkout is not part of the marketplace API yet
            forms::render_button(ui, "Proceed to Checkout", None, Some(theme.selected), None, false)
                .on_disabled_hover_text("Checkout is not available yet");
        });
    });
}
