use crate::dom::{ResizeListener, viewport};
use crate::frame_loop::FrameLoop;
use crate::layout::Viewport;
use crate::particles::{SnowField, StarField};
use crate::rng::Rng;
use crate::surface::{CanvasSurface, Surface};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

struct SkyScene<S: Surface> {
    stars_surface: S,
    snow_surface: S,
    stars: StarField,
    snow: SnowField,
    rng: Rng,
    /// Set by the resize listener, applied at the start of the next frame.
    pending: Option<Viewport>,
}

impl<S: Surface> SkyScene<S> {
    fn new(mut stars_surface: S, mut snow_surface: S, vp: Viewport, mut rng: Rng) -> Self {
        stars_surface.resize(vp.width, vp.height);
        snow_surface.resize(vp.width, vp.height);
        let stars = StarField::new(vp.width, vp.height, &mut rng);
        let snow = SnowField::new(vp.width, vp.height, rng.fork());
        Self {
            stars_surface,
            snow_surface,
            stars,
            snow,
            rng,
            pending: None,
        }
    }

    fn rebuild(&mut self, vp: Viewport) {
        self.stars_surface.resize(vp.width, vp.height);
        self.snow_surface.resize(vp.width, vp.height);
        self.stars = StarField::new(vp.width, vp.height, &mut self.rng);
        self.snow = SnowField::new(vp.width, vp.height, self.rng.fork());
    }

    fn frame(&mut self, timestamp_ms: f64) {
        if let Some(vp) = self.pending.take() {
            self.rebuild(vp);
        }
        self.stars.draw(&mut self.stars_surface, timestamp_ms);
        self.snow.draw(&mut self.snow_surface);
    }
}

struct SkyRunner {
    _frames: FrameLoop,
    _resize: Option<ResizeListener>,
}

fn start_sky(stars_ref: &NodeRef, snow_ref: &NodeRef) -> Option<SkyRunner> {
    let stars_surface = CanvasSurface::new(stars_ref.cast::<HtmlCanvasElement>()?)?;
    let snow_surface = CanvasSurface::new(snow_ref.cast::<HtmlCanvasElement>()?)?;
    let scene = Rc::new(RefCell::new(SkyScene::new(
        stars_surface,
        snow_surface,
        viewport(),
        Rng::from_entropy(),
    )));

    let frames = {
        let scene = scene.clone();
        FrameLoop::new(move |ts| {
            scene.borrow_mut().frame(ts);
            true
        })
    };
    frames.start();

    let resize = {
        let scene = scene.clone();
        ResizeListener::new(move || scene.borrow_mut().pending = Some(viewport()))
    };
    Some(SkyRunner {
        _frames: frames,
        _resize: resize,
    })
}

/// Star and snow canvases behind everything else.
#[function_component(Backdrop)]
pub fn backdrop() -> Html {
    let stars_ref = use_node_ref();
    let snow_ref = use_node_ref();
    {
        let stars_ref = stars_ref.clone();
        let snow_ref = snow_ref.clone();
        use_effect_with((), move |_| {
            let runner = start_sky(&stars_ref, &snow_ref);
            if runner.is_none() {
                warn!("sky canvases unavailable, background animation disabled");
            }
            move || drop(runner)
        });
    }
    html! {
        <>
            <canvas id="stars-canvas" ref={stars_ref}></canvas>
            <canvas id="snow-canvas" ref={snow_ref}></canvas>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::snow::SNOW_COUNT;
    use crate::particles::stars::STAR_COUNT;
    use crate::surface::recording::{Call, RecordingSurface};

    fn scene() -> SkyScene<RecordingSurface> {
        SkyScene::new(
            RecordingSurface::default(),
            RecordingSurface::default(),
            Viewport::new(1280.0, 900.0),
            Rng::new(17),
        )
    }

    #[test]
    fn surfaces_take_initial_viewport() {
        let scene = scene();
        assert_eq!(scene.stars_surface.size(), (1280.0, 900.0));
        assert_eq!(scene.snow_surface.size(), (1280.0, 900.0));
    }

    #[test]
    fn pending_resize_applies_before_drawing() {
        let mut scene = scene();
        scene.pending = Some(Viewport::new(320.0, 200.0));
        scene.frame(16.0);

        assert!(scene.pending.is_none());
        assert_eq!(scene.stars_surface.size(), (320.0, 200.0));
        assert_eq!(scene.snow_surface.size(), (320.0, 200.0));

        assert_eq!(scene.stars.stars.len(), STAR_COUNT);
        for call in &scene.stars_surface.calls {
            if let Call::Circle { x, y, .. } = call {
                assert!((0.0..320.0).contains(x));
                assert!((0.0..120.0).contains(y));
            }
        }
        assert_eq!(scene.stars_surface.drawn(), STAR_COUNT);

        assert_eq!(scene.snow.flakes.len(), SNOW_COUNT);
        for call in &scene.snow_surface.calls {
            if let Call::Circle { x, y, .. } = call {
                assert!((0.0..320.0).contains(x));
                assert!((0.0..200.0).contains(y));
            }
        }
        assert_eq!(scene.snow_surface.drawn(), SNOW_COUNT);
    }

    #[test]
    fn frame_without_resize_keeps_populations() {
        let mut scene = scene();
        let first_star = scene.stars.stars[0].x;
        scene.frame(16.0);
        scene.frame(32.0);
        assert_eq!(scene.stars.stars[0].x, first_star);
        assert_eq!(scene.stars_surface.size(), (1280.0, 900.0));
    }
}
