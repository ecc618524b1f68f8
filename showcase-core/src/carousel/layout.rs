/// Track offset and control states derived from the slide index
use nom::{
    character::complete::{char, digit1, multispace0},
    combinator::{opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

use super::state::CarouselState;

/// Rendered geometry of the carousel, in CSS pixels
pub trait Measure {
    /// Width of one card
    fn card_width(&self) -> f64;
    /// Space between neighbouring cards
    fn gap(&self) -> f64;
}

/// Fixed measurements, for hosts without a layout engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMeasure {
    pub card_width: f64,
    pub gap: f64,
}

impl Measure for FixedMeasure {
    fn card_width(&self) -> f64 {
        self.card_width
    }

    fn gap(&self) -> f64 {
        self.gap
    }
}

/// Everything the DOM needs to show the current slide
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub offset_px: f64,
    pub active_dot: usize,
    pub dot_count: usize,
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

impl Layout {
    /// `None` for an empty carousel, which has nothing to lay out
    pub fn compute(state: CarouselState, measure: &impl Measure) -> Option<Self> {
        if state.post_count() == 0 {
            return None;
        }
        let stride = measure.card_width() + measure.gap();
        Some(Self {
            offset_px: state.current_index() as f64 * stride,
            active_dot: state.current_index(),
            dot_count: state.post_count(),
            prev_disabled: state.is_first(),
            next_disabled: state.is_last(),
        })
    }

    /// Value for the track's `transform` style
    pub fn transform(&self) -> String {
        format!("translateX(-{}px)", self.offset_px)
    }

    pub fn is_active(&self, dot: usize) -> bool {
        dot == self.active_dot
    }
}

/// Read a computed CSS length such as `"24px"` the way `parseInt` does:
/// the leading integer counts, anything unreadable is zero.
pub fn parse_css_px(value: &str) -> f64 {
    fn leading_integer(input: &str) -> IResult<&str, &str> {
        preceded(multispace0, recognize(pair(opt(char('-')), digit1)))(input)
    }

    leading_integer(value)
        .ok()
        .and_then(|(_, digits)| digits.parse::<i64>().ok())
        .map_or(0.0, |n| n as f64)
}
