/// Research carousel bound to the page DOM
use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::carousel::layout::parse_css_px;
use showcase_core::carousel::markup::{CARD_CLASS, DOT_CLASS};
use showcase_core::carousel::post::decode_posts;
use showcase_core::carousel::{Layout, Measure, Post};
use showcase_core::{Carousel, CarouselConfig, LoadError, TrackContent};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Response, TouchEvent, Window};

use crate::dom;

/// Card width and gap as currently rendered
struct DomMeasure<'a> {
    window: &'a Window,
    track: &'a HtmlElement,
}

impl Measure for DomMeasure<'_> {
    fn card_width(&self) -> f64 {
        self.track
            .query_selector(&format!(".{}", CARD_CLASS))
            .ok()
            .flatten()
            .and_then(|card| card.dyn_into::<HtmlElement>().ok())
            .map_or(0.0, |card| f64::from(card.offset_width()))
    }

    fn gap(&self) -> f64 {
        self.window
            .get_computed_style(self.track)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("gap").ok())
            .map_or(0.0, |gap| parse_css_px(&gap))
    }
}

struct CarouselWidget {
    window: Window,
    track: HtmlElement,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
    indicators: Option<HtmlElement>,
    carousel: RefCell<Carousel>,
}

impl CarouselWidget {
    /// Re-measure and move the track to the current slide
    fn update(&self) {
        let measure = DomMeasure {
            window: &self.window,
            track: &self.track,
        };
        let Some(layout) = self.carousel.borrow().layout(&measure) else {
            return;
        };
        if let Err(err) = self.apply_layout(&layout) {
            log::error!("carousel layout failed: {:?}", err);
        }
    }

    fn apply_layout(&self, layout: &Layout) -> Result<(), JsValue> {
        self.track
            .style()
            .set_property("transform", &layout.transform())?;

        for (index, dot) in self.dots()?.iter().enumerate() {
            dot.class_list()
                .toggle_with_force("active", layout.is_active(index))?;
        }

        if let Some(prev) = &self.prev {
            prev.set_disabled(layout.prev_disabled);
        }
        if let Some(next) = &self.next {
            next.set_disabled(layout.next_disabled);
        }
        Ok(())
    }

    fn dots(&self) -> Result<Vec<Element>, JsValue> {
        let Some(indicators) = &self.indicators else {
            return Ok(Vec::new());
        };
        let nodes = indicators.query_selector_all(&format!(".{}", DOT_CLASS))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    /// Navigate, then redraw if the slide changed
    fn navigate(&self, step: impl FnOnce(&mut Carousel) -> bool) {
        let moved = step(&mut *self.carousel.borrow_mut());
        if moved {
            self.update();
        }
    }
}

/// Buttons and touch gestures; wired before the load, like the page expects
fn attach_controls(widget: &Rc<CarouselWidget>) -> Result<(), JsValue> {
    if let Some(prev) = &widget.prev {
        let widget = Rc::clone(widget);
        dom::listen(prev, "click", move |_| widget.navigate(Carousel::prev))?;
    }
    if let Some(next) = &widget.next {
        let widget = Rc::clone(widget);
        dom::listen(next, "click", move |_| widget.navigate(Carousel::next))?;
    }

    {
        let widget = Rc::clone(widget);
        dom::listen(&widget.track.clone(), "touchstart", move |event| {
            if let Some(x) = first_touch_x(&event) {
                widget.carousel.borrow_mut().touch_start(x);
            }
        })?;
    }
    {
        let widget = Rc::clone(widget);
        dom::listen(&widget.track.clone(), "touchmove", move |event| {
            if let Some(x) = first_touch_x(&event) {
                widget.navigate(|carousel| carousel.touch_move(x));
            }
        })?;
    }
    {
        let widget = Rc::clone(widget);
        dom::listen(&widget.track.clone(), "touchend", move |_| {
            widget.carousel.borrow_mut().touch_end();
        })?;
    }
    Ok(())
}

fn first_touch_x(event: &web_sys::Event) -> Option<f64> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(f64::from(touch.client_x()))
}

/// Put the loaded content on the page and hook up the indicator dots
fn show(widget: &Rc<CarouselWidget>, content: TrackContent) -> Result<(), JsValue> {
    match content {
        TrackContent::Cards {
            cards_html,
            indicators_html,
            ..
        } => {
            widget.track.set_inner_html(&cards_html);
            if let Some(indicators) = &widget.indicators {
                indicators.set_inner_html(&indicators_html);
            }
            for dot in widget.dots()? {
                let Some(index) = dot
                    .get_attribute("data-index")
                    .and_then(|value| value.parse::<usize>().ok())
                else {
                    continue;
                };
                let widget = Rc::clone(widget);
                dom::listen(&dot, "click", move |_| {
                    widget.navigate(|carousel| carousel.jump(index));
                })?;
            }
            widget.update();
        }
        TrackContent::Placeholder(html) => widget.track.set_inner_html(&html),
        TrackContent::Empty => {}
    }
    Ok(())
}

async fn fetch_posts(window: &Window, url: &str, limit: usize) -> Result<Vec<Post>, LoadError> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(network_error)?;
    let response: Response = response.dyn_into().map_err(network_error)?;
    if !response.ok() {
        return Err(LoadError::Status(response.status()));
    }

    let body = JsFuture::from(response.text().map_err(network_error)?)
        .await
        .map_err(network_error)?
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".to_string()))?;
    decode_posts(&body, limit)
}

fn network_error(err: JsValue) -> LoadError {
    LoadError::Network(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

/// Load the posts and bring the carousel to life.
///
/// A page without the track element is left alone.
pub async fn run(window: Window, document: Document, config: CarouselConfig) -> Result<(), JsValue> {
    let Some(track) = dom::element_by_id::<HtmlElement>(&document, &config.track_id) else {
        log::debug!("no #{} on this page, carousel disabled", config.track_id);
        return Ok(());
    };

    let prev = dom::element_by_id::<HtmlButtonElement>(&document, &config.prev_id);
    let next = dom::element_by_id::<HtmlButtonElement>(&document, &config.next_id);
    let indicators = dom::element_by_id::<HtmlElement>(&document, &config.indicators_id);
    for (id, present) in [
        (&config.prev_id, prev.is_some()),
        (&config.next_id, next.is_some()),
        (&config.indicators_id, indicators.is_some()),
    ] {
        if !present {
            log::warn!("carousel control #{} missing", id);
        }
    }

    let widget = Rc::new(CarouselWidget {
        window,
        track,
        prev,
        next,
        indicators,
        carousel: RefCell::new(Carousel::new(config)),
    });
    attach_controls(&widget)?;

    let (url, limit) = {
        let carousel = widget.carousel.borrow();
        (carousel.config().data_url.clone(), carousel.config().max_posts)
    };
    let outcome = fetch_posts(&widget.window, &url, limit).await;
    let loaded = outcome.is_ok();
    let content = widget.carousel.borrow_mut().finish_loading(outcome);
    show(&widget, content)?;

    if loaded {
        let widget = Rc::clone(&widget);
        dom::listen(&widget.window.clone(), "resize", move |_| widget.update())?;
    }
    Ok(())
}
