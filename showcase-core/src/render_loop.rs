/// Self-rescheduling animation loop over a pluggable frame scheduler
use std::cell::RefCell;
use std::rc::Rc;

use crate::scene::HeroScene;

/// Something that can run a callback before the next repaint.
///
/// The browser implementation wraps `requestAnimationFrame`; tests drive
/// frames by hand.
pub trait FrameScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>);
}

/// Draws one frame of the scene
pub trait ScenePainter {
    fn paint(&mut self, scene: &HeroScene);
}

/// Run one frame now and keep the loop going for the life of the page.
///
/// Each frame first asks for the next one, then spins the scene and paints.
pub fn start<S, P>(scene: Rc<RefCell<HeroScene>>, scheduler: Rc<S>, painter: Rc<RefCell<P>>)
where
    S: FrameScheduler + 'static,
    P: ScenePainter + 'static,
{
    let next = {
        let scene = Rc::clone(&scene);
        let scheduler = Rc::clone(&scheduler);
        let painter = Rc::clone(&painter);
        Box::new(move || start(scene, scheduler, painter))
    };
    scheduler.request_frame(next);

    scene.borrow_mut().tick();
    painter.borrow_mut().paint(&scene.borrow());
}
