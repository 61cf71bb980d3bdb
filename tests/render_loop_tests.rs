// Host-side tests for the render loop state machine using fake collaborators.

use parallax_backdrop::config::BackdropConfig;
use parallax_backdrop::core::{
    shared_pointer, Camera, Color, ColorSource, DisplaySurface, FrameScheduler, LoopState,
    PointerState, RenderBackend, RenderError, RenderLoop, Scene, SharedPointer,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct FakeCanvas {
    css: Rc<Cell<(u32, u32)>>,
    buffer: (u32, u32),
}

impl DisplaySurface for FakeCanvas {
    fn display_size(&self) -> (u32, u32) {
        self.css.get()
    }
    fn buffer_size(&self) -> (u32, u32) {
        self.buffer
    }
    fn set_buffer_size(&mut self, width: u32, height: u32) {
        self.buffer = (width, height);
    }
}

#[derive(Default)]
struct Recorder {
    resizes: Vec<(u32, u32)>,
    frames: Vec<Frame>,
    fail_next: bool,
}

#[derive(Clone, Debug)]
struct Frame {
    background: Option<Color>,
    fog_density: Option<f32>,
    yaw: f32,
    first_spin: f32,
    aspect: f32,
}

struct FakeBackend(Rc<RefCell<Recorder>>);

impl RenderBackend for FakeBackend {
    fn resize(&mut self, width: u32, height: u32) {
        self.0.borrow_mut().resizes.push((width, height));
    }
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        let mut rec = self.0.borrow_mut();
        rec.frames.push(Frame {
            background: scene.background,
            fog_density: scene.fog.map(|f| f.density),
            yaw: scene.orientation.y,
            first_spin: scene.particles.particles[0].rotation.y,
            aspect: camera.aspect,
        });
        if rec.fail_next {
            rec.fail_next = false;
            return Err(RenderError::Surface("lost".into()));
        }
        Ok(())
    }
}

#[derive(Default)]
struct CountingScheduler {
    scheduled: usize,
}

impl FrameScheduler for CountingScheduler {
    fn schedule_next(&mut self) {
        self.scheduled += 1;
    }
}

struct Harness {
    rl: RenderLoop<FakeCanvas, FakeBackend>,
    css: Rc<Cell<(u32, u32)>>,
    rec: Rc<RefCell<Recorder>>,
    pointer: SharedPointer,
    color_calls: Rc<Cell<usize>>,
}

fn harness(css: (u32, u32), buffer: (u32, u32)) -> Harness {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(42);
    let scene = config.build_scene(&mut rng);
    let css_cell = Rc::new(Cell::new(css));
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let pointer = shared_pointer();
    let color_calls = Rc::new(Cell::new(0usize));
    let calls = color_calls.clone();
    // Cycles through two colors so staleness would be visible
    let source: Box<dyn ColorSource> = Box::new(move || {
        calls.set(calls.get() + 1);
        if calls.get() % 2 == 1 {
            Some(Color::from_hex(0x112233))
        } else {
            Some(Color::from_hex(0x445566))
        }
    });
    let rl = RenderLoop::new(
        FakeCanvas {
            css: css_cell.clone(),
            buffer,
        },
        FakeBackend(rec.clone()),
        scene,
        config.camera.clone(),
        pointer.clone(),
        source,
        config.environment(),
        config.loop_params(),
    );
    Harness {
        rl,
        css: css_cell,
        rec,
        pointer,
        color_calls,
    }
}

#[test]
fn starts_idle_and_start_schedules_once() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    assert_eq!(h.rl.state(), LoopState::Idle);
    h.rl.start(&mut s);
    assert_eq!(h.rl.state(), LoopState::Running);
    assert_eq!(s.scheduled, 1);
    h.rl.start(&mut s);
    assert_eq!(s.scheduled, 1, "second start must not double-schedule");
}

#[test]
fn tick_before_start_does_nothing() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    assert_eq!(h.rl.tick(&mut s), LoopState::Idle);
    assert_eq!(s.scheduled, 0);
    assert!(h.rec.borrow().frames.is_empty());
}

#[test]
fn each_tick_renders_and_reschedules() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    for _ in 0..5 {
        assert_eq!(h.rl.tick(&mut s), LoopState::Running);
    }
    assert_eq!(s.scheduled, 6);
    assert_eq!(h.rl.frames(), 5);
    assert_eq!(h.rl.backend().0.borrow().frames.len(), 5);
}

#[test]
fn resize_updates_aspect_before_render() {
    let mut h = harness((1200, 600), (300, 300));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    h.rl.tick(&mut s);
    {
        let rec = h.rec.borrow();
        assert_eq!(rec.resizes, vec![(1200, 600)]);
        assert_eq!(rec.frames[0].aspect, 2.0);
    }
    h.css.set((900, 900));
    h.rl.tick(&mut s);
    let rec = h.rec.borrow();
    assert_eq!(rec.resizes, vec![(1200, 600), (900, 900)]);
    assert_eq!(rec.frames[1].aspect, 1.0);
}

#[test]
fn unchanged_canvas_leaves_aspect_untouched() {
    let mut h = harness((640, 480), (640, 480));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    h.rl.tick(&mut s);
    h.rl.tick(&mut s);
    let rec = h.rec.borrow();
    assert!(rec.resizes.is_empty());
    assert!(rec.frames.iter().all(|f| f.aspect == 2.0));
}

#[test]
fn color_source_is_queried_once_per_frame_and_never_cached() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    h.rl.tick(&mut s);
    h.rl.tick(&mut s);
    assert_eq!(h.color_calls.get(), 2);
    let rec = h.rec.borrow();
    assert_eq!(rec.frames[0].background, Some(Color::from_hex(0x112233)));
    assert_eq!(rec.frames[1].background, Some(Color::from_hex(0x445566)));
    assert_eq!(rec.frames[1].fog_density, Some(0.15));
}

#[test]
fn pointer_steers_scene_and_particles_spin() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    let spin0 = h.rl.scene.particles.particles[0].rotation.y;
    *h.pointer.borrow_mut() = PointerState { x: 1.0, y: 0.0 };
    h.rl.tick(&mut s);
    h.rl.tick(&mut s);
    let rec = h.rec.borrow();
    assert!(rec.frames[0].yaw < 0.0);
    assert!(rec.frames[1].yaw < rec.frames[0].yaw);
    assert!((rec.frames[0].first_spin - (spin0 + 0.005)).abs() < 1e-5);
    assert!((rec.frames[1].first_spin - (spin0 + 0.010)).abs() < 1e-5);
}

#[test]
fn cancel_stops_before_next_reschedule() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    h.rl.tick(&mut s);
    let token = h.rl.cancel_token();
    token.cancel();
    assert_eq!(h.rl.tick(&mut s), LoopState::Stopped);
    assert_eq!(s.scheduled, 2, "no reschedule after cancel");
    assert_eq!(h.rec.borrow().frames.len(), 1, "no render after cancel");
    assert_eq!(h.rl.tick(&mut s), LoopState::Stopped);
}

#[test]
fn cancel_before_start_never_runs() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.cancel_token().cancel();
    h.rl.start(&mut s);
    assert_eq!(h.rl.state(), LoopState::Stopped);
    assert_eq!(s.scheduled, 0);
}

#[test]
fn render_error_does_not_stop_the_loop() {
    let mut h = harness((300, 150), (300, 150));
    let mut s = CountingScheduler::default();
    h.rl.start(&mut s);
    h.rec.borrow_mut().fail_next = true;
    assert_eq!(h.rl.tick(&mut s), LoopState::Running);
    assert_eq!(h.rl.tick(&mut s), LoopState::Running);
    assert_eq!(s.scheduled, 3);
}

#[test]
fn unusable_color_falls_back() {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let rec = Rc::new(RefCell::new(Recorder::default()));
    let mut rl = RenderLoop::new(
        FakeCanvas {
            css: Rc::new(Cell::new((10, 10))),
            buffer: (10, 10),
        },
        FakeBackend(rec.clone()),
        config.build_scene(&mut rng),
        config.camera.clone(),
        shared_pointer(),
        Box::new(|| -> Option<Color> { None }),
        config.environment(),
        config.loop_params(),
    );
    let mut s = CountingScheduler::default();
    rl.start(&mut s);
    rl.tick(&mut s);
    assert_eq!(rec.borrow().frames[0].background, Some(config.fallback_color));
}
