//! # Welcome Screen

use egui::{self, RichText};

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::{branding, forms, layouts};

pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    layouts::render_centered(ui, 120.0, |ui| {
        ui.set_max_width(460.0);
        layouts::render_card(ui, &theme, |ui| {
            ui.vertical_centered(|ui| {
                branding::render_title(ui, 40.0);
                ui.add_space(16.0);
                ui.label(RichText::new("Welcome to Cattle Feed Management").size(28.0).strong());
                ui.add_space(12.0);
                forms::render_hint(ui, "Your one-stop solution for managing cattle feed supply and demand", &theme);
                ui.add_space(24.0);

                let start = forms::render_button(
                    ui,
                    "Get Started",
                    None,
                    Some(theme.info),
                    Some(egui::vec2(320.0, 40.0)),
                    true,
                );
                let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                if start.clicked() || enter {
                    let next = if state.is_authenticated() {
                        Screen::ModeSelection
                    } else {
                        Screen::Login
                    };
                    app.handle_screen_change(next);
                }
            });
        });
    });

    branding::render_footer(ui);
}
