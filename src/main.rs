//! mesinyer - an instant messaging client built with egui
//!
//! Architecture:
//! - Main thread: runs the egui UI
//! - Session thread: owns the roster and answers UI actions
//! - Communication via crossbeam channels

use eframe::egui;

use mesinyer::app::MesinyerApp;
use mesinyer::config::load_settings;
use mesinyer::logging::{LoggingContext, DEFAULT_LOG_CAPACITY};

type DynError = Box<dyn std::error::Error + Send + Sync>;

fn main() -> eframe::Result<()> {
    let settings = load_settings().unwrap_or_default();

    let mut logging = LoggingContext::new(settings.log_capacity)
        .or_else(|_| LoggingContext::new(DEFAULT_LOG_CAPACITY))
        .unwrap_or_else(|e| {
            eprintln!("Failed to set up logging: {}", e);
            std::process::exit(1);
        });
    if let Err(e) = logging.install() {
        eprintln!("Failed to install logging: {}", e);
    }
    tracing::info!(session = %settings.session, "starting mesinyer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 560.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    let queue = logging.queue().clone();
    let result = eframe::run_native(
        "mesinyer",
        options,
        Box::new(
            move |cc: &eframe::CreationContext<'_>| -> Result<Box<dyn eframe::App>, DynError> {
                Ok(Box::new(MesinyerApp::new(cc, settings, queue)?))
            },
        ),
    );

    if let Err(e) = &result {
        tracing::error!("UI exited with an error: {}", e);
    }
    logging.shutdown();
    result
}
