/// Showcase Web - WASM bindings for the site widgets
///
/// Boots the hero animation and the research carousel once the DOM is ready.
/// Each widget checks for its own container and stays silent on pages that
/// don't have one. Pages with other element ids can call `startHero` /
/// `startCarousel` with a JSON override instead.

use showcase_core::{config, CarouselConfig, HeroConfig};
use wasm_bindgen::prelude::*;

pub mod carousel;
pub mod dom;
pub mod hero;

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Start the hero animation; resolves to `false` when its container is absent
#[wasm_bindgen(js_name = startHero)]
pub fn start_hero(config_json: Option<String>) -> Result<bool, JsValue> {
    let config: HeroConfig = config::from_json(config_json.as_deref()).map_err(js_error)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;
    hero::start(&window, &document, config)
}

/// Start loading the carousel; the fetch continues in the background
#[wasm_bindgen(js_name = startCarousel)]
pub fn start_carousel(config_json: Option<String>) -> Result<(), JsValue> {
    let config: CarouselConfig = config::from_json(config_json.as_deref()).map_err(js_error)?;
    let window = dom::window()?;
    let document = dom::document(&window)?;
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(err) = carousel::run(window, document, config).await {
            log::error!("carousel failed to start: {:?}", err);
        }
    });
    Ok(())
}

fn boot() {
    if let Err(err) = start_hero(None) {
        log::error!("hero failed to start: {:?}", err);
    }
    if let Err(err) = start_carousel(None) {
        log::error!("carousel failed to start: {:?}", err);
    }
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let window = dom::window()?;
    let document = dom::document(&window)?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_| boot())?;
    } else {
        boot();
    }
    Ok(())
}
