//! # Mode Selection Screen
//!
//! Retail or wholesale. Choosing a mode refetches the cart for it and opens the store.

use egui::{self, RichText};
use shared::PurchaseMode;

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{forms, layouts};

struct ModeCard {
    mode: PurchaseMode,
    icon: &'static str,
    audience: &'static str,
    perks: [&'static str; 3],
}

const MODE_CARDS: [ModeCard; 2] = [
    ModeCard {
        mode: PurchaseMode::Retail,
        icon: "👤",
        audience: "Perfect for individual farmers and small livestock owners",
        perks: [
            "AI-powered feed recommendations",
            "Voice ordering support",
            "Doorstep delivery",
        ],
    },
    ModeCard {
        mode: PurchaseMode::Wholesale,
        icon: "🏪",
        audience: "For distributors, shops, and bulk buyers",
        perks: [
            "Bulk pricing and discounts",
            "AI-powered bargaining support",
            "3-month credit options",
        ],
    },
];

pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let theme = Theme::default();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new("Choose Your Mode").size(32.0).strong());
        ui.add_space(4.0);
        forms::render_hint(ui, "Select how you want to purchase cattle feed", &theme);
        ui.add_space(30.0);
    });

    let mut chosen = None;
    ui.columns(2, |columns| {
        for (column, card) in columns.iter_mut().zip(MODE_CARDS.iter()) {
            column.vertical_centered(|ui| {
                ui.set_max_width(380.0);
                if render_mode_card(ui, card, &theme) {
                    chosen = Some(card.mode);
                }
            });
        }
    });

    if let Some(mode) = chosen {
        app.handle_mode_select(mode);
    }
}

/// Returns true when the card's button was clicked
fn render_mode_card(ui: &mut egui::Ui, card: &ModeCard, theme: &Theme) -> bool {
    let accent = theme.mode_color(card.mode);

    layouts::render_card(ui, theme, |ui| {
        ui.label(RichText::new(card.icon).size(36.0).color(accent));
        ui.add_space(8.0);
        ui.label(RichText::new(format!("{} Mode", card.mode.title())).size(24.0).strong());
        ui.add_space(6.0);
        ui.label(RichText::new(card.audience).color(theme.dim));
        ui.add_space(10.0);
        for perk in card.perks {
            ui.label(format!("• {}", perk));
        }
        ui.add_space(14.0);

        let width = ui.available_width();
        forms::render_button(
            ui,
            &format!("Choose {}", card.mode.title()),
            None,
            Some(accent),
            Some(egui::vec2(width, 40.0)),
            true,
        )
        .clicked()
    })
}
