//! Frame scheduling: coalesces scroll and resize signals into at most one
//! outstanding frame request.

use tracing::{debug, trace};

use crate::host::{FrameScheduler, PresentationSink, ProgressSource, TextMeasure};
use crate::scene::{FrameInputs, Scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// No frame requested
    Idle,
    /// A frame has been requested and not yet run
    FramePending,
    /// Reduced motion: the settled pose is shown and nothing is scheduled
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Scroll,
    Resize,
}

pub struct RenderCoordinator {
    scene: Scene,
    state: FrameState,
    frames_rendered: u64,
}

impl RenderCoordinator {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            state: FrameState::Idle,
            frames_rendered: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> FrameState {
        self.state
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Present the first frame. With reduced motion the settled pose is shown
    /// and later signals are ignored.
    pub fn start<S, M, P>(&mut self, reduced_motion: bool, source: &S, measure: &M, sink: &mut P)
    where
        S: ProgressSource + ?Sized,
        M: TextMeasure + ?Sized,
        P: PresentationSink + ?Sized,
    {
        if reduced_motion {
            debug!("reduced motion, presenting settled pose");
            self.state = FrameState::Static;
            self.present_settled(source, measure, sink);
        } else {
            self.state = FrameState::Idle;
            self.present(source, measure, sink);
        }
    }

    /// Note a scroll or resize. Returns true when a new frame was requested.
    pub fn signal<F: FrameScheduler + ?Sized>(&mut self, signal: Signal, scheduler: &mut F) -> bool {
        match self.state {
            FrameState::Idle => {
                self.state = FrameState::FramePending;
                scheduler.request_frame();
                trace!(?signal, "frame requested");
                true
            }
            FrameState::FramePending => {
                trace!(?signal, "frame already pending");
                false
            }
            FrameState::Static => false,
        }
    }

    /// Run the scheduled frame: sample, render, present.
    pub fn on_frame<S, M, P>(&mut self, source: &S, measure: &M, sink: &mut P)
    where
        S: ProgressSource + ?Sized,
        M: TextMeasure + ?Sized,
        P: PresentationSink + ?Sized,
    {
        match self.state {
            FrameState::FramePending => {
                self.state = FrameState::Idle;
                self.present(source, measure, sink);
            }
            FrameState::Idle => {
                debug!("frame callback without a pending request");
                self.present(source, measure, sink);
            }
            FrameState::Static => self.present_settled(source, measure, sink),
        }
    }

    fn present<S, M, P>(&mut self, source: &S, measure: &M, sink: &mut P)
    where
        S: ProgressSource + ?Sized,
        M: TextMeasure + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let inputs = FrameInputs::sample(source);
        let frame = self.scene.render(&inputs, measure);
        sink.present(&frame);
        self.frames_rendered += 1;
    }

    fn present_settled<S, M, P>(&mut self, source: &S, measure: &M, sink: &mut P)
    where
        S: ProgressSource + ?Sized,
        M: TextMeasure + ?Sized,
        P: PresentationSink + ?Sized,
    {
        let frame = self.scene.settled(source.viewport(), measure);
        sink.present(&frame);
        self.frames_rendered += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::host::FixedAdvanceMeasure;
    use crate::sampler::{RegionBox, Viewport};
    use crate::scene::SceneFrame;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Page {
        scroll: f64,
    }

    impl ProgressSource for Page {
        fn viewport(&self) -> Viewport {
            Viewport::new(1200.0, 800.0)
        }

        fn hero_region(&self) -> RegionBox {
            RegionBox::new(-self.scroll, 4000.0)
        }

        fn movement_region(&self) -> RegionBox {
            RegionBox::new(4000.0 - self.scroll, 2400.0)
        }
    }

    #[derive(Default)]
    struct Requests(usize);

    impl FrameScheduler for Requests {
        fn request_frame(&mut self) {
            self.0 += 1;
        }
    }

    #[derive(Default)]
    struct Frames(Vec<SceneFrame>);

    impl PresentationSink for Frames {
        fn present(&mut self, frame: &SceneFrame) {
            self.0.push(frame.clone());
        }
    }

    fn coordinator() -> RenderCoordinator {
        let scene =
            Scene::from_config_with_rng(&AppConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
        RenderCoordinator::new(scene)
    }

    #[test]
    fn test_signals_coalesce_into_one_request() {
        let mut coordinator = coordinator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let mut page = Page { scroll: 0.0 };
        let mut frames = Frames::default();
        let mut requests = Requests::default();

        coordinator.start(false, &page, &measure, &mut frames);
        assert_eq!(frames.0.len(), 1);

        assert!(coordinator.signal(Signal::Scroll, &mut requests));
        assert!(!coordinator.signal(Signal::Scroll, &mut requests));
        assert!(!coordinator.signal(Signal::Resize, &mut requests));
        assert_eq!(requests.0, 1);
        assert_eq!(coordinator.state(), FrameState::FramePending);

        // The frame reads whatever the page looks like when it runs
        page.scroll = 1600.0;
        coordinator.on_frame(&page, &measure, &mut frames);
        assert_eq!(coordinator.state(), FrameState::Idle);
        assert_eq!(frames.0.len(), 2);
        assert!((frames.0[1].hero.progress - 0.5).abs() < 1e-12);

        assert!(coordinator.signal(Signal::Scroll, &mut requests));
        assert_eq!(requests.0, 2);
    }

    #[test]
    fn test_reduced_motion_never_schedules() {
        let mut coordinator = coordinator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let page = Page { scroll: 0.0 };
        let mut frames = Frames::default();
        let mut requests = Requests::default();

        coordinator.start(true, &page, &measure, &mut frames);
        assert_eq!(coordinator.state(), FrameState::Static);
        assert_eq!(frames.0.len(), 1);
        assert!(frames.0[0].hero.is_final_style());

        for _ in 0..5 {
            assert!(!coordinator.signal(Signal::Scroll, &mut requests));
        }
        assert_eq!(requests.0, 0);
    }

    #[test]
    fn test_unrequested_frame_is_tolerated() {
        let mut coordinator = coordinator();
        let measure = FixedAdvanceMeasure::new(160.0);
        let page = Page { scroll: 200.0 };
        let mut frames = Frames::default();

        coordinator.on_frame(&page, &measure, &mut frames);
        assert_eq!(coordinator.state(), FrameState::Idle);
        assert_eq!(frames.0.len(), 1);
        assert_eq!(coordinator.frames_rendered(), 1);
    }
}
