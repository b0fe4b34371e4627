mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::core::LocalStore;
use crate::core::theme::{apply_theme, load_theme};

fn main() {
    console_error_panic_hook::set_once();

    // Theme goes on <html> before the first render so the page never flashes
    apply_theme(load_theme(&LocalStore));

    let root = document()
        .get_element_by_id("app")
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
