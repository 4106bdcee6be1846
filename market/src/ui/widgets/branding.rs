//! # Branding Components
//!
//! Logo, tagline and footer shared by the welcome and auth screens.

use egui::{self, Color32, RichText};

use crate::ui::theme::BRAND_GREEN;

/// Render the "B BEP" mark
pub fn render_title(ui: &mut egui::Ui, size: f32) {
    ui.horizontal(|ui| {
        let mark = egui::Button::new(RichText::new("B").size(size * 0.8).strong().color(Color32::WHITE))
            .fill(BRAND_GREEN)
            .sense(egui::Sense::hover());
        ui.add(mark);
        ui.label(RichText::new("BEP").size(size).strong().color(BRAND_GREEN));
    });
}

pub fn render_subtitle(ui: &mut egui::Ui, text: &str, size: f32) {
    ui.label(RichText::new(text).size(size).color(Color32::from_rgb(75, 85, 99)));
}

/// Render the complete branding section (mark and tagline)
pub fn render_branding_section(ui: &mut egui::Ui, tagline: &str) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
        render_title(ui, 48.0);
        ui.add_space(8.0);
        render_subtitle(ui, tagline, 18.0);
    });
}

/// Render version info footer
pub fn render_footer(ui: &mut egui::Ui) {
    ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
        ui.add_space(10.0);
        ui.label(
            RichText::new(format!("BEP Marketplace v{}", env!("CARGO_PKG_VERSION")))
                .size(12.0)
                .color(Color32::from_rgba_unmultiplied(107, 114, 128, 200)),
        );
    });
}
