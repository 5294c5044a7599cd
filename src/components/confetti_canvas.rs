use crate::dom::{ResizeListener, viewport};
use crate::frame_loop::FrameLoop;
use crate::layout::Viewport;
use crate::particles::ConfettiField;
use crate::rng::Rng;
use crate::surface::{CanvasSurface, Surface};
use log::{debug, warn};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

/// Where to fire a burst. `seq` distinguishes repeated bursts at the same spot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BurstRequest {
    pub x: f64,
    pub y: f64,
    pub seq: u32,
}

struct ConfettiScene<S: Surface> {
    surface: S,
    field: ConfettiField,
    rng: Rng,
    pending: Option<Viewport>,
}

impl<S: Surface> ConfettiScene<S> {
    fn new(mut surface: S, vp: Viewport, rng: Rng) -> Self {
        surface.resize(vp.width, vp.height);
        Self {
            surface,
            field: ConfettiField::default(),
            rng,
            pending: None,
        }
    }

    fn spawn(&mut self, x: f64, y: f64) -> usize {
        self.field.spawn(x, y, &mut self.rng);
        self.field.burst_count()
    }

    fn frame(&mut self) -> bool {
        if let Some(vp) = self.pending.take() {
            self.surface.resize(vp.width, vp.height);
        }
        self.field.frame(&mut self.surface)
    }
}

struct ConfettiRunner {
    scene: Rc<RefCell<ConfettiScene<CanvasSurface>>>,
    frames: FrameLoop,
    _resize: Option<ResizeListener>,
}

impl ConfettiRunner {
    fn start(canvas_ref: &NodeRef) -> Option<Self> {
        let surface = CanvasSurface::new(canvas_ref.cast::<HtmlCanvasElement>()?)?;
        let scene = Rc::new(RefCell::new(ConfettiScene::new(
            surface,
            viewport(),
            Rng::from_entropy(),
        )));
        let frames = {
            let scene = scene.clone();
            FrameLoop::new(move |_| scene.borrow_mut().frame())
        };
        let resize = {
            let scene = scene.clone();
            ResizeListener::new(move || scene.borrow_mut().pending = Some(viewport()))
        };
        Some(Self {
            scene,
            frames,
            _resize: resize,
        })
    }

    fn burst(&self, x: f64, y: f64) {
        let active = self.scene.borrow_mut().spawn(x, y);
        debug!("confetti burst at ({:.0}, {:.0}), {} active", x, y, active);
        self.frames.start();
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiCanvasProps {
    pub request: Option<BurstRequest>,
}

#[function_component(ConfettiCanvas)]
pub fn confetti_canvas(props: &ConfettiCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let runner = use_mut_ref(|| None::<ConfettiRunner>);
    {
        let canvas_ref = canvas_ref.clone();
        let runner = runner.clone();
        use_effect_with((), move |_| {
            *runner.borrow_mut() = ConfettiRunner::start(&canvas_ref);
            if runner.borrow().is_none() {
                warn!("confetti canvas unavailable");
            }
            move || {
                runner.borrow_mut().take();
            }
        });
    }
    {
        let runner = runner.clone();
        use_effect_with(props.request, move |request| {
            if let (Some(req), Some(r)) = (request, runner.borrow().as_ref()) {
                r.burst(req.x, req.y);
            }
            || ()
        });
    }
    html! { <canvas id="confetti-canvas" ref={canvas_ref}></canvas> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::recording::{Call, RecordingSurface};

    fn scene() -> ConfettiScene<RecordingSurface> {
        ConfettiScene::new(RecordingSurface::default(), Viewport::new(800.0, 600.0), Rng::new(6))
    }

    #[test]
    fn resize_lands_in_the_same_frame() {
        let mut scene = scene();
        assert_eq!(scene.surface.size(), (800.0, 600.0));
        scene.spawn(100.0, 100.0);
        scene.pending = Some(Viewport::new(400.0, 300.0));
        assert!(scene.frame());
        assert_eq!(scene.surface.size(), (400.0, 300.0));
        assert!(scene.pending.is_none());
    }

    #[test]
    fn idle_scene_stops_with_a_clear_canvas() {
        let mut scene = scene();
        assert!(!scene.frame());
        assert_eq!(scene.surface.calls, vec![Call::Clear]);
    }

    #[test]
    fn overlapping_bursts_share_the_field() {
        let mut scene = scene();
        assert_eq!(scene.spawn(10.0, 10.0), 1);
        scene.frame();
        assert_eq!(scene.spawn(200.0, 50.0), 2);
        while scene.frame() {}
        assert_eq!(scene.field.burst_count(), 0);
    }
}
