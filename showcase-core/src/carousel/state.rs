/// Slide index state machine.
///
/// `CarouselState` is a small value: every transition takes a state and
/// returns the next one, leaving the caller to decide what to redraw.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    current_index: usize,
    post_count: usize,
}

impl CarouselState {
    pub fn new(post_count: usize) -> Self {
        Self {
            current_index: 0,
            post_count,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn post_count(&self) -> usize {
        self.post_count
    }

    fn last_index(&self) -> usize {
        self.post_count.saturating_sub(1)
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index == self.last_index()
    }

    /// One slide forward; a no-op on the last slide
    pub fn next(self) -> Self {
        if self.is_last() {
            return self;
        }
        Self {
            current_index: self.current_index + 1,
            ..self
        }
    }

    /// One slide back; a no-op on the first slide
    pub fn prev(self) -> Self {
        Self {
            current_index: self.current_index.saturating_sub(1),
            ..self
        }
    }

    /// Go straight to `index`, clamped to the last slide
    pub fn jump(self, index: usize) -> Self {
        if index > self.last_index() {
            log::debug!(
                "slide {} out of range for {} posts, clamping",
                index,
                self.post_count
            );
        }
        Self {
            current_index: index.min(self.last_index()),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last() {
        let state = CarouselState::new(3).next().next();
        assert_eq!(state.current_index(), 2);
        assert!(state.is_last());
        assert_eq!(state.next(), state);
    }

    #[test]
    fn test_prev_stops_at_first() {
        let state = CarouselState::new(3);
        assert!(state.is_first());
        assert_eq!(state.prev(), state);
        assert_eq!(state.next().prev(), state);
    }

    #[test]
    fn test_jump() {
        let state = CarouselState::new(6).jump(4);
        assert_eq!(state.current_index(), 4);
        assert_eq!(state.jump(0).current_index(), 0);
        assert_eq!(state.jump(17).current_index(), 5);
    }

    #[test]
    fn test_empty_carousel_never_moves() {
        let state = CarouselState::new(0);
        assert_eq!(state.next().current_index(), 0);
        assert_eq!(state.prev().current_index(), 0);
        assert_eq!(state.jump(3).current_index(), 0);
    }
}
