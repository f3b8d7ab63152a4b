mod components;
mod config;
mod layout;
mod model;
mod render;
mod state;
mod util;

use components::{App, AppProps};
use config::GameConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = GameConfig::load();
    util::clog(&format!("config: {:?}", config));
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
