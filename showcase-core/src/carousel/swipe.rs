/// Touch swipe detection, one slide change per gesture

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger travelled left: show the next slide
    Next,
    /// Finger travelled right: show the previous slide
    Prev,
}

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: f64,
    armed: bool,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: 0.0,
            armed: false,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = x;
        self.armed = true;
    }

    /// Report a direction once travel exceeds the threshold, then stay quiet
    /// until the next `touch_start`.
    pub fn touch_move(&mut self, x: f64) -> Option<SwipeDirection> {
        if !self.armed {
            return None;
        }
        let travel = self.start_x - x;
        if travel.abs() <= self.threshold {
            return None;
        }
        self.armed = false;
        Some(if travel > 0.0 {
            SwipeDirection::Next
        } else {
            SwipeDirection::Prev
        })
    }

    pub fn touch_end(&mut self) {
        self.armed = false;
    }
}
