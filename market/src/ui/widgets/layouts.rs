//! # Layout Components
//!
//! Reusable layout patterns for consistent screen organization

use crate::ui::theme::Theme;
use egui;

/// Render a two-column split layout
pub fn render_split_layout<F1, F2>(ui: &mut egui::Ui, left_content: F1, right_content: F2)
where
    F1: FnOnce(&mut egui::Ui),
    F2: FnOnce(&mut egui::Ui),
{
    ui.columns(2, |columns| {
        left_content(&mut columns[0]);
        right_content(&mut columns[1]);
    });
}

/// Render vertically centered content
pub fn render_centered<F>(ui: &mut egui::Ui, top_space: f32, content: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.vertical_centered(|ui| {
        ui.add_space(top_space);
        content(ui);
    });
}

/// White card with a light border, the container for forms and products
pub fn render_card<R>(ui: &mut egui::Ui, theme: &Theme, content: impl FnOnce(&mut egui::Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .fill(theme.surface)
        .stroke(egui::Stroke::new(1.0, theme.border))
        .inner_margin(egui::Margin::same(16))
        .show(ui, content)
        .inner
}

/// Full-width message for loading, empty and error states
pub fn render_status_message(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(text).size(16.0).color(color));
    });
}
