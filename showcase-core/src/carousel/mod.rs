//! Research carousel: load once, then slide between cards.
//!
//! [`Carousel`] owns everything except the DOM. Hosts feed it the load
//! outcome and input events, and apply the [`TrackContent`] and [`Layout`]
//! values it hands back.

pub mod card;
pub mod layout;
pub mod markup;
pub mod post;
pub mod state;
pub mod swipe;

pub use card::{ActionLabel, Card};
pub use layout::{FixedMeasure, Layout, Measure};
pub use post::Post;
pub use state::CarouselState;
pub use swipe::{SwipeDirection, SwipeTracker};

use crate::config::CarouselConfig;
use crate::error::LoadError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready(CarouselState),
    /// Terminal: the load failed and the placeholder is showing
    Failed,
}

/// What the track and indicator container should contain after loading
#[derive(Debug, Clone, PartialEq)]
pub enum TrackContent {
    Cards {
        cards_html: String,
        indicators_html: String,
        count: usize,
    },
    /// Loaded an empty list; the page is left as it was
    Empty,
    Placeholder(String),
}

pub struct Carousel {
    config: CarouselConfig,
    phase: Phase,
    cards: Vec<Card>,
    swipe: SwipeTracker,
}

impl Carousel {
    pub fn new(config: CarouselConfig) -> Self {
        let swipe = SwipeTracker::new(config.swipe_threshold);
        Self {
            config,
            phase: Phase::Loading,
            cards: Vec::new(),
            swipe,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Leave `Loading` with the result of the fetch.
    ///
    /// Only the first call has any effect.
    pub fn finish_loading(&mut self, outcome: Result<Vec<Post>, LoadError>) -> TrackContent {
        if self.phase != Phase::Loading {
            log::warn!("carousel already loaded, ignoring second result");
            return TrackContent::Empty;
        }

        match outcome {
            Ok(mut posts) => {
                posts.truncate(self.config.max_posts);
                self.cards = posts.iter().map(Card::from_post).collect();
                self.phase = Phase::Ready(CarouselState::new(self.cards.len()));
                log::debug!("carousel ready with {} cards", self.cards.len());

                if self.cards.is_empty() {
                    return TrackContent::Empty;
                }
                TrackContent::Cards {
                    cards_html: markup::cards_html(&self.cards, &self.config.detail_page),
                    indicators_html: markup::indicators_html(self.cards.len()),
                    count: self.cards.len(),
                }
            }
            Err(err) => {
                log::error!("Error loading research posts: {}", err);
                self.phase = Phase::Failed;
                TrackContent::Placeholder(markup::placeholder_html(&self.config.placeholder))
            }
        }
    }

    /// Apply a transition when ready; reports whether the index moved
    fn transition(&mut self, step: impl FnOnce(CarouselState) -> CarouselState) -> bool {
        match self.phase {
            Phase::Ready(state) => {
                let next = step(state);
                self.phase = Phase::Ready(next);
                next != state
            }
            Phase::Loading | Phase::Failed => false,
        }
    }

    pub fn next(&mut self) -> bool {
        self.transition(CarouselState::next)
    }

    pub fn prev(&mut self) -> bool {
        self.transition(CarouselState::prev)
    }

    pub fn jump(&mut self, index: usize) -> bool {
        self.transition(|state| state.jump(index))
    }

    pub fn touch_start(&mut self, x: f64) {
        self.swipe.touch_start(x);
    }

    /// Feed a touch position; reports whether the index moved
    pub fn touch_move(&mut self, x: f64) -> bool {
        match self.swipe.touch_move(x) {
            Some(SwipeDirection::Next) => self.next(),
            Some(SwipeDirection::Prev) => self.prev(),
            None => false,
        }
    }

    pub fn touch_end(&mut self) {
        self.swipe.touch_end();
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::Ready(state) => Some(state.current_index()),
            Phase::Loading | Phase::Failed => None,
        }
    }

    /// Layout for the current slide; `None` unless ready with at least one card
    pub fn layout(&self, measure: &impl Measure) -> Option<Layout> {
        match self.phase {
            Phase::Ready(state) => Layout::compute(state, measure),
            Phase::Loading | Phase::Failed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| Post {
                title: format!("Post {i}"),
                slug: format!("post-{i}"),
                date: "2024-03-05".to_string(),
                image: String::new(),
                tags: Vec::new(),
                author: None,
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_navigation_ignored_while_loading() {
        let mut carousel = Carousel::new(CarouselConfig::default());
        assert!(!carousel.next());
        assert!(!carousel.touch_move(0.0));
        assert_eq!(carousel.current_index(), None);
    }

    #[test]
    fn test_second_load_result_is_ignored() {
        let mut carousel = Carousel::new(CarouselConfig::default());
        carousel.finish_loading(Ok(posts(3)));
        carousel.next();

        let content = carousel.finish_loading(Err(LoadError::Status(500)));
        assert_eq!(content, TrackContent::Empty);
        assert_eq!(carousel.phase(), Phase::Ready(CarouselState::new(3).next()));
    }

    #[test]
    fn test_empty_list_is_ready_without_layout() {
        let mut carousel = Carousel::new(CarouselConfig::default());
        assert_eq!(carousel.finish_loading(Ok(Vec::new())), TrackContent::Empty);
        assert_eq!(carousel.phase(), Phase::Ready(CarouselState::new(0)));

        let measure = FixedMeasure {
            card_width: 300.0,
            gap: 0.0,
        };
        assert_eq!(carousel.layout(&measure), None);
    }
}
