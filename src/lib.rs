//! Pan and zoom an image on a canvas with drag, wheel and pinch gestures.

pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
pub mod util;

use components::{App, AppProps};
use config::ViewportConfig;

/// Read the host page's config, set up logging and mount the app.
pub fn run() {
    console_error_panic_hook::set_once();
    let (config, problem) = match ViewportConfig::from_document() {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(e) => (ViewportConfig::default(), Some(e)),
    };
    util::init_logging(config.log_level);
    if let Some(e) = problem {
        log::warn!("using default configuration: {e}");
    }
    log::info!("mounting image viewport, src={:?}", config.src);
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
