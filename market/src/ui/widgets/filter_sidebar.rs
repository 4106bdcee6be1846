//! # Filter Sidebar
//!
//! Search box, feed-type checkboxes and price range for the catalog.

use egui::{self, RichText};
use shared::Category;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;

pub fn render_filter_sidebar(ui: &mut egui::Ui, state: &AppState, app: &mut App, theme: &Theme) {
    let filters = &state.catalog.filters;

    ui.label(RichText::new("Filters").size(20.0).strong());
    ui.add_space(12.0);

    ui.label(RichText::new("Search Products").strong());
    let mut search = filters.search.clone();
    let response = ui.add(
        egui::TextEdit::singleline(&mut search)
            .hint_text("Search cattle feed...")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        app.handle_search_change(search);
    }
    ui.add_space(16.0);

    ui.label(RichText::new("Feed Type").strong());
    for category in Category::all() {
        let mut checked = filters.categories.contains(category);
        if ui.checkbox(&mut checked, category.label()).changed() {
            app.handle_category_toggle(*category);
        }
    }
    ui.add_space(16.0);

    ui.label(RichText::new("Price Range (₹)").strong());
    let mut min_price = filters.min_price.clone();
    let mut max_price = filters.max_price.clone();
    let changed = ui
        .horizontal(|ui| {
            let min = ui.add(egui::TextEdit::singleline(&mut min_price).hint_text("Min").desired_width(70.0));
            ui.label("-");
            let max = ui.add(egui::TextEdit::singleline(&mut max_price).hint_text("Max").desired_width(70.0));
            min.changed() || max.changed()
        })
        .inner;
    if changed {
        app.handle_price_filter_change(min_price, max_price);
    }

    for error in [state.catalog.min_price_error(), state.catalog.max_price_error()].into_iter().flatten() {
        ui.label(RichText::new(error).size(12.0).color(theme.error));
    }
}
