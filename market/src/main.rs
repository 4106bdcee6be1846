use std::sync::Arc;
use std::time::Duration;

use bep_market::app::App;
use bep_market::config::ClientConfig;
use bep_market::debug;
use bep_market::services::{ApiClient, FileTokenStore};
use bep_market::ui;
use bep_market::ui::theme::Theme;
use bep_market::ui::widgets::notifications::NotificationManager;

/// eframe wrapper around the application orchestrator
struct MarketApp {
    app: App,
    notifications: NotificationManager,
}

impl MarketApp {
    fn new(cc: &eframe::CreationContext<'_>, app: App) -> Self {
        Theme::default().apply(&cc.egui_ctx);
        Self {
            app,
            notifications: NotificationManager::new(),
        }
    }
}

impl eframe::App for MarketApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.on_tick();

        ui::render(ctx, &mut self.app);

        let pending = std::mem::take(&mut self.app.state.write().pending_notifications);
        for (level, message) in pending {
            self.notifications.push(level, message);
        }
        self.notifications.show(ctx);

        ctx.request_repaint_after(self.app.repaint_hint());
    }
}

fn main() -> eframe::Result<()> {
    debug::init_logger();

    let config = ClientConfig::from_env();
    tracing::info!(api = %config.api_base_url, token_file = %config.token_path.display(), "Starting BEP Marketplace");

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start the async runtime");
            std::process::exit(1);
        }
    };
    // Tasks are spawned from the UI thread, so the runtime stays entered while eframe runs
    let guard = runtime.enter();

    let api_client = Arc::new(ApiClient::new(&config.api_base_url));
    let token_store = Arc::new(FileTokenStore::new(&config.token_path));
    let app = App::new(config, api_client, token_store);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("BEP Marketplace")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 640.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        "BEP Marketplace",
        native_options,
        Box::new(move |cc| Ok(Box::new(MarketApp::new(cc, app)) as Box<dyn eframe::App>)),
    );

    match &result {
        Ok(()) => tracing::info!("Application shut down cleanly"),
        Err(e) => tracing::error!(error = %e, "Application error"),
    }
    drop(guard);
    // Let in-flight requests finish their logging
    runtime.shutdown_timeout(Duration::from_secs(1));
    result
}
