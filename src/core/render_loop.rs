//! Per-frame driver.
//!
//! The loop owns the scene, camera and environment; the surface, renderer and
//! frame scheduler are injected so the whole tick can run on the host.

use crate::core::environment::{ColorSource, Environment};
use crate::core::orientation::OrientationParams;
use crate::core::pointer::SharedPointer;
use crate::core::scene::Scene;
use crate::core::viewport::{sync_size, Camera, DisplaySurface};
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface unavailable: {0}")]
    Surface(String),
}

/// The engine that actually puts pixels on screen.
pub trait RenderBackend {
    /// Called after the backing buffer changed size.
    fn resize(&mut self, width: u32, height: u32);
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError>;
}

/// Host frame scheduler (requestAnimationFrame in the browser).
pub trait FrameScheduler {
    fn schedule_next(&mut self);
}

/// Shared stop flag; cloning yields another handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Running,
    Stopped,
}

/// Per-frame tuning that isn't owned by a sub-component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopParams {
    pub orientation: OrientationParams,
    pub particle_spin: f32,
}

pub struct RenderLoop<S, B> {
    state: LoopState,
    surface: S,
    backend: B,
    pub scene: Scene,
    pub camera: Camera,
    pointer: SharedPointer,
    color_source: Box<dyn ColorSource>,
    environment: Environment,
    params: LoopParams,
    cancel: CancelToken,
    frames: u64,
}

impl<S: DisplaySurface, B: RenderBackend> RenderLoop<S, B> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        surface: S,
        backend: B,
        scene: Scene,
        camera: Camera,
        pointer: SharedPointer,
        color_source: Box<dyn ColorSource>,
        environment: Environment,
        params: LoopParams,
    ) -> Self {
        Self {
            state: LoopState::Idle,
            surface,
            backend,
            scene,
            camera,
            pointer,
            color_source,
            environment,
            params,
            cancel: CancelToken::new(),
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Idle -> Running: request the first frame. No-op in any other state.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.state != LoopState::Idle {
            return;
        }
        if self.cancel.is_cancelled() {
            self.state = LoopState::Stopped;
            return;
        }
        self.state = LoopState::Running;
        log::info!("[frame] render loop started");
        scheduler.schedule_next();
    }

    /// Run one frame and reschedule. Returns the state after the tick.
    pub fn tick(&mut self, scheduler: &mut dyn FrameScheduler) -> LoopState {
        if self.state != LoopState::Running {
            return self.state;
        }
        if self.cancel.is_cancelled() {
            self.stop();
            return self.state;
        }

        if sync_size(&mut self.surface) {
            let (w, h) = self.surface.display_size();
            if self.camera.set_aspect_from(w, h) {
                log::debug!("[frame] resized to {}x{}", w, h);
            }
            self.backend.resize(w, h);
        }

        self.environment
            .apply(&mut self.scene, self.color_source.as_mut());

        let pointer = *self.pointer.borrow();
        self.scene
            .orientation
            .update(pointer, self.camera.rotation, &self.params.orientation);

        self.scene.particles.spin(self.params.particle_spin);

        if let Err(e) = self.backend.render(&self.scene, &self.camera) {
            log::error!("render error: {}", e);
        }
        self.frames += 1;

        if self.cancel.is_cancelled() {
            self.stop();
        } else {
            scheduler.schedule_next();
        }
        self.state
    }

    fn stop(&mut self) {
        self.state = LoopState::Stopped;
        log::info!("[frame] render loop stopped after {} frames", self.frames);
    }
}
