//! Browser front-end of the password confirmation dialog.

#[macro_use]
extern crate log;

mod bindings;
mod component;
mod config;
mod error;
mod json;
mod page;
mod utils;
mod web;

use crate::bindings::{Controller, init_bindings};
use crate::component::file_input::init_file_inputs;
use crate::component::form_guard::init_form_guards;
use crate::component::toast::init_server_toasts;
use crate::component::widgets::init_widgets;
use crate::config::read_page_config;
use crate::error::Error;
use crate::utils::{get_document, log_on_error};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[wasm_bindgen(start)]
fn run() {
    utils::set_panic_hook();
    wasm_logger::init(wasm_logger::Config::default());
    log_on_error(init_page());
}

fn init_page() -> Result<()> {
    let document = get_document()?;

    init_widgets(&document);
    log_on_error(init_server_toasts(&document));
    log_on_error(init_file_inputs(&document));
    log_on_error(init_form_guards(&document));

    let config = log_on_error(read_page_config()).unwrap_or_default();
    let controller = Rc::new(Controller::new(document.clone(), config));
    init_bindings(&document, &controller)
}
