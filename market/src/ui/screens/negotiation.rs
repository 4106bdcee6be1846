//! # Negotiation Screen
//!
//! Product details on the left and the scripted assistant chat on the right.

use egui::{self, RichText};
use shared::utils::{format_price, format_unit_price};
use shared::{Product, PurchaseMode};

use crate::app::{App, AppState, ChatAuthor, ChatMessage, Screen};
use crate::ui::theme::{Theme, BRAND_ORANGE};
use crate::ui::widgets::{forms, layouts};

const PAYMENT_OPTIONS: [&str; 3] = ["UPI", "3-Month Credit", "NEFT"];

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();
    let negotiation = &state.negotiation;

    if ui.link("← Back to Products").clicked() {
        app.handle_screen_change(Screen::Store);
        return;
    }
    ui.add_space(8.0);

    if negotiation.loading {
        layouts::render_status_message(ui, "Loading product details...", theme.dim);
        return;
    }
    if let Some(error) = &negotiation.error {
        layouts::render_status_message(ui, &format!("Error: {}", error), theme.error);
        return;
    }
    let Some(product) = &negotiation.product else {
        layouts::render_status_message(ui, "Product not found.", theme.dim);
        return;
    };

    egui::SidePanel::left("negotiation_product")
        .resizable(false)
        .exact_width(320.0)
        .show_inside(ui, |ui| render_product(ui, product, &theme));

    egui::CentralPanel::default().show_inside(ui, |ui| {
        render_chat(ui, &negotiation.messages, &negotiation.draft, app, &theme);
    });
}

fn render_product(ui: &mut egui::Ui, product: &Product, theme: &Theme) {
    layouts::render_card(ui, theme, |ui| {
        ui.label(RichText::new(&product.name).size(26.0).strong());
        ui.label(RichText::new(&product.seller_name).color(theme.dim));
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format_unit_price(
                    product.price_for(PurchaseMode::Wholesale),
                    product.unit.as_deref(),
                ))
                .size(22.0)
                .strong()
                .color(BRAND_ORANGE),
            );
            ui.label(RichText::new(format_price(product.price)).strikethrough().color(theme.dim));
        });

        if let Some(description) = &product.description {
            ui.add_space(8.0);
            ui.label(description);
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Payment Options").strong());
        ui.horizontal_wrapped(|ui| {
            for option in PAYMENT_OPTIONS {
                // Display only until payments exist server-side
                let _ = ui.button(option);
            }
        });
    });
}

fn render_chat(ui: &mut egui::Ui, messages: &[ChatMessage], draft: &str, app: &mut App, theme: &Theme) {
    ui.label(RichText::new("AI Negotiation Assistant").size(22.0).strong());
    ui.add_space(8.0);

    let input_height = 48.0;
    egui::ScrollArea::vertical()
        .max_height((ui.available_height() - input_height).max(120.0))
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                render_message(ui, message, theme);
                ui.add_space(6.0);
            }
        });

    ui.separator();
    let mut draft_input = draft.to_string();
    ui.horizontal(|ui| {
        let width = ui.available_width() - 80.0;
        let response = ui.add(
            egui::TextEdit::singleline(&mut draft_input)
                .hint_text("Type your offer...")
                .desired_width(width),
        );
        if response.changed() {
            app.handle_draft_change(draft_input.clone());
        }
        let send = ui.add(egui::Button::new(RichText::new("Send").strong().color(egui::Color32::WHITE)).fill(BRAND_ORANGE));
        if send.clicked() || forms::submitted(ui, &response) {
            app.handle_send_message();
            response.request_focus();
        }
    });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage, theme: &Theme) {
    let (align, fill, text_color) = match message.from {
        ChatAuthor::User => (egui::Align::Max, BRAND_ORANGE, egui::Color32::WHITE),
        ChatAuthor::Assistant => (egui::Align::Min, theme.border, theme.normal),
    };

    ui.with_layout(egui::Layout::top_down(align), |ui| {
        egui::Frame::new()
            .fill(fill)
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(12, 8))
            .show(ui, |ui| {
                ui.set_max_width(420.0);
                ui.label(RichText::new(&message.text).color(text_color));
            });
        ui.label(
            RichText::new(message.sent_at.format("%H:%M").to_string())
                .size(11.0)
                .color(theme.dim),
        );
    });
}
