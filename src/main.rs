//! SOS GUI
//!
//! Play SOS against another player or the AI, or watch two AIs play.
//! `SOS_SEED` and `SOS_BOARD_SIZE` configure the match; `RUST_LOG` the logging.

use sos::ui::SosApp;
use sos::MatchSettings;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = MatchSettings::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("SOS"),
        ..Default::default()
    };

    eframe::run_native(
        "SOS",
        options,
        Box::new(move |cc| Ok(Box::new(SosApp::new(cc, settings)))),
    )
}
