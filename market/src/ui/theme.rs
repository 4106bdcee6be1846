//! # GUI Theme
//!
//! Light marketplace theme built on the BEP brand colours: green for retail, orange for
//! wholesale.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, Stroke, Visuals};
use shared::PurchaseMode;

/// Brand green, used for retail and primary actions
pub const BRAND_GREEN: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
/// Brand orange, used for wholesale
pub const BRAND_ORANGE: Color32 = Color32::from_rgb(0xFF, 0x98, 0x00);

/// Application colour palette
#[derive(Debug, Clone)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Headings and primary buttons
    pub selected: Color32,
    pub border: Color32,
    /// Secondary text
    pub dim: Color32,
    pub success: Color32,
    pub error: Color32,
    pub warning: Color32,
    pub info: Color32,
    pub background: Color32,
    /// Card and panel fill
    pub surface: Color32,
    /// Cart badge fill
    pub badge: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            normal: Color32::from_rgb(31, 41, 55),
            selected: BRAND_GREEN,
            border: Color32::from_rgb(229, 231, 235),
            dim: Color32::from_rgb(107, 114, 128),
            success: BRAND_GREEN,
            error: Color32::from_rgb(239, 68, 68),
            warning: BRAND_ORANGE,
            info: Color32::from_rgb(37, 99, 235),
            background: Color32::from_rgb(243, 244, 246),
            surface: Color32::WHITE,
            badge: Color32::from_rgb(239, 68, 68),
        }
    }
}

impl Theme {
    /// Accent for the given purchasing mode
    pub fn mode_color(&self, mode: PurchaseMode) -> Color32 {
        match mode {
            PurchaseMode::Retail => BRAND_GREEN,
            PurchaseMode::Wholesale => BRAND_ORANGE,
        }
    }

    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::light();

        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.faint_bg_color = self.background;
        visuals.extreme_bg_color = self.surface;
        visuals.window_stroke = Stroke::new(1.0, self.border);

        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.5, self.selected);
        visuals.widgets.active.bg_stroke = Stroke::new(1.5, self.selected);

        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(0x4C, 0xAF, 0x50, 70);
        visuals.selection.stroke = Stroke::new(1.5, self.selected);
        visuals.hyperlink_color = self.info;

        visuals
    }

    /// Install the theme on an egui context
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();

        // style_mut_of rather than set_visuals: egui keeps one style per system theme
        for theme in [EguiTheme::Light, EguiTheme::Dark] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.window_margin = egui::Margin::same(8);
                style.spacing.interact_size = egui::Vec2::new(32.0, 28.0);
            });
        }
        ctx.set_theme(EguiTheme::Light);

        tracing::debug!("Applied marketplace theme");
    }
}
