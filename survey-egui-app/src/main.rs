//! Research survey GUI.
//!
//! Renders the investment research survey as a multi-page form, validates
//! at the review gate, and hands submissions to the email pipeline.

mod app;
mod surface;

use survey_engine::{ComponentRegistry, Engine};
use tracing_subscriber::EnvFilter;

use crate::app::SurveyorApp;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let spec = survey_catalog::investment_research();
    let title = spec.title().to_string();
    let engine = Engine::load(spec, &ComponentRegistry::builtin())?;
    let app = SurveyorApp::new(engine);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(title.clone())
            .with_inner_size([760.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(app) as Box<dyn eframe::App>)),
    )
    .map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}
