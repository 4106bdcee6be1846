//! # Authentication Screen
//!
//! Login and sign-up forms. Field edits are written back into `AuthState` as they happen so
//! the form survives a frame without the lock.

use egui;
use shared::Role;

use crate::app::{App, AppState, AuthState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{branding, forms, layouts};

const FIELD_SIZE: [f32; 2] = [300.0, 32.0];

/// Sign-up form input values
struct RegisterFormInputs<'a> {
    full_name: &'a str,
    username: &'a str,
    password: &'a str,
    role: Role,
}

/// Render authentication screen (login/sign-up)
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let theme = Theme::default();

    layouts::render_split_layout(
        ui,
        |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(140.0);
                branding::render_branding_section(ui, "Cattle feed, retail and wholesale");
            });
        },
        |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                layouts::render_card(ui, &theme, |ui| {
                    ui.set_width(340.0);
                    match &state.auth {
                        AuthState::Login {
                            username,
                            password,
                            error,
                            loading,
                        } => render_login_form(ui, username, password, error.as_deref(), *loading, app, &theme),
                        AuthState::Register {
                            full_name,
                            username,
                            password,
                            role,
                            error,
                            loading,
                        } => render_register_form(
                            ui,
                            &RegisterFormInputs {
                                full_name,
                                username,
                                password,
                                role: *role,
                            },
                            error.as_deref(),
                            *loading,
                            app,
                            &theme,
                        ),
                    }
                });
            });
        },
    );

    branding::render_footer(ui);
}

fn render_login_form(
    ui: &mut egui::Ui,
    username: &str,
    password: &str,
    error: Option<&str>,
    loading: bool,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Login", theme);

    let mut username_input = username.to_string();
    let mut password_input = password.to_string();

    let username_response = forms::render_text_input(
        ui,
        "Email or Phone:",
        &mut username_input,
        "you@example.com or 98765 43210",
        false,
        FIELD_SIZE,
    );
    ui.add_space(8.0);
    let password_response =
        forms::render_text_input(ui, "Password:", &mut password_input, "Enter password", true, FIELD_SIZE);
    let submit = forms::submitted(ui, &password_response);

    if username_response.changed() || password_response.changed() {
        let mut state = app.state.write();
        if let AuthState::Login { username, password, .. } = &mut state.auth {
            *username = username_input.clone();
            *password = password_input.clone();
        }
    }

    ui.add_space(12.0);
    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    let label = if loading { "Logging in..." } else { "Login" };
    let clicked = forms::render_button(
        ui,
        label,
        None,
        Some(theme.selected),
        Some(egui::vec2(FIELD_SIZE[0], 36.0)),
        !loading,
    )
    .clicked();
    if (clicked || submit) && !loading {
        app.handle_login_click(username_input, password_input);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "Don't have an account?", theme);
        if ui.link("Sign up").clicked() {
            app.handle_switch_to_register();
        }
    });
}

fn render_register_form(
    ui: &mut egui::Ui,
    inputs: &RegisterFormInputs,
    error: Option<&str>,
    loading: bool,
    app: &mut App,
    theme: &Theme,
) {
    forms::render_form_heading(ui, "Create Account", theme);

    let mut full_name_input = inputs.full_name.to_string();
    let mut username_input = inputs.username.to_string();
    let mut password_input = inputs.password.to_string();
    let mut role_input = inputs.role;

    let full_name_response =
        forms::render_text_input(ui, "Full Name:", &mut full_name_input, "Your name", false, FIELD_SIZE);
    ui.add_space(8.0);
    let username_response = forms::render_text_input(
        ui,
        "Email or Phone:",
        &mut username_input,
        "you@example.com or 98765 43210",
        false,
        FIELD_SIZE,
    );
    ui.add_space(8.0);
    let password_response =
        forms::render_text_input(ui, "Password:", &mut password_input, "Choose a password", true, FIELD_SIZE);
    let submit = forms::submitted(ui, &password_response);
    ui.add_space(8.0);

    let role_changed = ui
        .horizontal(|ui| {
            ui.label("I am a:");
            let buyer = ui.radio_value(&mut role_input, Role::Buyer, Role::Buyer.label());
            let seller = ui.radio_value(&mut role_input, Role::Seller, Role::Seller.label());
            buyer.changed() || seller.changed()
        })
        .inner;

    if full_name_response.changed() || username_response.changed() || password_response.changed() || role_changed {
        let mut state = app.state.write();
        if let AuthState::Register {
            full_name,
            username,
            password,
            role,
            ..
        } = &mut state.auth
        {
            *full_name = full_name_input.clone();
            *username = username_input.clone();
            *password = password_input.clone();
            *role = role_input;
        }
    }

    ui.add_space(12.0);
    if let Some(err) = error {
        forms::render_error(ui, err, theme);
    }

    let label = if loading { "Signing up..." } else { "Sign Up" };
    let clicked = forms::render_button(
        ui,
        label,
        None,
        Some(theme.selected),
        Some(egui::vec2(FIELD_SIZE[0], 36.0)),
        !loading,
    )
    .clicked();
    if (clicked || submit) && !loading {
        app.handle_register_click(full_name_input, username_input, password_input, role_input);
    }

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        forms::render_hint(ui, "Already have an account?", theme);
        if ui.link("Log in").clicked() {
            app.handle_switch_to_login();
        }
    });
}
