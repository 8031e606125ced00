#![allow(warnings)]
//! Arogya Saathi Portal Entry Point

mod app;
mod components;
mod dismiss;
mod format;
mod models;
mod sample_data;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
