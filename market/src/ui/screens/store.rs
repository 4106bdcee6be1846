//! # Store Screen
//!
//! Filter sidebar on the left, product grid on the right. The grid renders one of the
//! catalog view states: loading, error, no results, or the product cards.

use egui::{self, RichText};

use crate::app::{App, AppState, CatalogView, NO_RESULTS_MESSAGE};
use crate::ui::theme::Theme;
use crate::ui::widgets::{filter_sidebar, layouts, product_card};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    egui::SidePanel::left("store_filters")
        .resizable(false)
        .exact_width(250.0)
        .show_inside(ui, |ui| {
            ui.add_space(8.0);
            filter_sidebar::render_filter_sidebar(ui, state, app, &theme);
        });

    egui::CentralPanel::default().show_inside(ui, |ui| {
        ui.label(
            RichText::new(format!("{} Feed Store", state.mode.title()))
                .size(24.0)
                .strong()
                .color(theme.mode_color(state.mode)),
        );
        ui.add_space(8.0);

        match state.catalog.view() {
            CatalogView::Loading => layouts::render_status_message(ui, "Loading products...", theme.dim),
            CatalogView::Error(message) => {
                layouts::render_status_message(ui, &format!("Error: {}", message), theme.error)
            }
            CatalogView::NoResults => layouts::render_status_message(ui, NO_RESULTS_MESSAGE, theme.dim),
            CatalogView::Products(products) => {
                egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.spacing_mut().item_spacing = egui::vec2(16.0, 16.0);
                        for product in products {
                            ui.allocate_ui_with_layout(
                                egui::vec2(product_card::CARD_WIDTH + 32.0, 0.0),
                                egui::Layout::top_down(egui::Align::LEFT),
                                |ui| product_card::render_product_card(ui, product, state, app, &theme),
                            );
                        }
                    });
                });
            }
        }
    });
}
