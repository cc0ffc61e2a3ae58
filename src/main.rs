mod catalog;
mod components;
mod config;
mod error;
mod input;
mod model;
mod services;
mod state;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
