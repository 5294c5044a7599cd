use log::{Level, debug, info, warn};
use std::rc::Rc;

mod ambient;
mod components;
mod config;
mod dom;
mod error;
mod frame_loop;
mod gate;
mod layout;
mod model;
mod particles;
mod rng;
mod surface;
mod tasks;
mod time_source;

use components::{App, AppProps};
use config::{CONFIG_ELEMENT_ID, CalendarConfig};
use error::ConfigError;

fn init_logging(level: Level) {
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
}

fn main() {
    let loaded = CalendarConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    init_logging(config.log_level());
    match loaded {
        Ok(_) => info!("calendar config loaded from #{}", CONFIG_ELEMENT_ID),
        Err(e @ ConfigError::Missing(_)) => debug!("{}, using defaults", e),
        Err(e) => warn!("{}, using defaults", e),
    }
    info!("advent calendar starting");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
