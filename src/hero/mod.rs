//! # Hero scene
//!
//! Per-mount context for the 3D hero: the scene shown behind the hero
//! section, the background model load and the per-frame motion.
//!
//! A [`HeroScene`] is created by [`HeroScene::mount`], driven by the
//! application once per frame through [`HeroScene::poll_load`] and
//! [`HeroScene::tick`], and ended by [`HeroScene::teardown`]. Nothing in it
//! requires a GPU; the render engine attaches buffers to its surfaces lazily.
//!
//! ```
//! use std::time::Instant;
//! use vitrine::hero::{HeroConfig, HeroScene};
//!
//! let mut hero = HeroScene::mount(HeroConfig::default(), 16.0 / 9.0);
//! hero.tick(Instant::now());
//! assert!(hero.scene().group.shows_fallback());
//! assert!(hero.teardown());
//! ```

pub mod bootstrap;
pub mod config;
pub mod fade;
pub mod lifecycle;
pub mod loader;
pub mod motion;
pub mod normalize;
pub mod pointer;

pub use config::HeroConfig;
pub use lifecycle::MountToken;
pub use loader::{LoadPoll, PendingLoad};

use std::time::Instant;

use cgmath::{Vector2, Vector3, Zero};

use crate::{error::Result, gfx::scene::{group::GroupContent, node::Node, scene::Scene}};
use fade::FadeIn;
use lifecycle::Lifecycle;
use motion::MotionState;
use pointer::PointerState;

/// What happened to a finished model load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The model replaced the fallback and started fading in
    Attached,
    /// The load failed; the fallback stays
    KeptFallback,
    /// The hero was torn down first; nothing was touched
    Discarded,
}

/// State of one hero mount
#[derive(Debug)]
pub struct HeroScene {
    config: HeroConfig,
    scene: Scene,
    pointer: PointerState,
    motion: MotionState,
    camera_offset: Vector2<f32>,
    fade: Option<FadeIn>,
    token: MountToken,
    lifecycle: Lifecycle,
    pending: Option<PendingLoad>,
    load_started: bool,
}

impl HeroScene {
    /// Builds the initial scene with the fallback subject on screen
    pub fn mount(config: HeroConfig, aspect: f32) -> Self {
        let scene = bootstrap::build_scene(aspect);
        let motion = MotionState::new(config.rotation_speed, config.float_amplitude);
        log::info!("Hero mounted, model path {}", config.model_path.display());

        Self {
            config,
            scene,
            pointer: PointerState::default(),
            motion,
            camera_offset: Vector2::zero(),
            fade: None,
            token: MountToken::new(),
            lifecycle: Lifecycle::mounted(),
            pending: None,
            load_started: false,
        }
    }

    pub fn config(&self) -> &HeroConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn token(&self) -> MountToken {
        self.token.clone()
    }

    pub fn is_mounted(&self) -> bool {
        !self.lifecycle.disposed
    }

    /// True while the frame callback is registered
    pub fn wants_frame(&self) -> bool {
        self.lifecycle.frame_scheduled
    }

    pub fn camera_offset(&self) -> Vector2<f32> {
        self.camera_offset
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Starts the background load of the configured model, once per mount
    pub fn start_load(&mut self) {
        if self.load_started || self.lifecycle.disposed {
            return;
        }
        match loader::spawn_gltf_load(self.config.model_path.clone(), self.token()) {
            Ok(pending) => {
                self.begin_load(pending);
            }
            Err(err) => {
                self.load_started = true;
                log::info!("Could not start model load, keeping fallback: {}", err);
            }
        }
    }

    /// Adopts an already started load; refused if one was started before
    pub fn begin_load(&mut self, pending: PendingLoad) -> bool {
        if self.load_started || self.lifecycle.disposed {
            return false;
        }
        log::debug!("Loading {}", pending.path().display());
        self.load_started = true;
        self.pending = Some(pending);
        true
    }

    /// Checks the pending load and applies its result if it arrived
    pub fn poll_load(&mut self, now: Instant) -> Option<LoadOutcome> {
        let pending = self.pending.as_mut()?;
        match pending.poll() {
            LoadPoll::Pending => None,
            LoadPoll::Ready(result) => {
                self.pending = None;
                Some(self.complete_load(result, now))
            }
        }
    }

    /// Applies a finished load to the scene
    pub fn complete_load(&mut self, result: Result<Node>, now: Instant) -> LoadOutcome {
        if !self.token.is_live() || self.lifecycle.disposed {
            log::debug!("Discarding model load completed after teardown");
            return LoadOutcome::Discarded;
        }

        let mut model = match result {
            Ok(model) => model,
            Err(err) => {
                log::info!("Model unavailable, keeping fallback: {}", err);
                return LoadOutcome::KeptFallback;
            }
        };

        if normalize::normalize_model(&mut model, self.config.target_size).is_none() {
            log::info!("Model '{}' has no geometry, keeping fallback", model.name);
            return LoadOutcome::KeptFallback;
        }
        normalize::prepare_for_fade(&mut model);

        let mut previous = self.scene.group.swap_in_model(model);
        previous.node_mut().release_gpu_resources();
        self.fade = Some(FadeIn::start(now, self.config.fade_duration));

        log::info!("Model attached to hero scene");
        LoadOutcome::Attached
    }

    /// Records a pointer move in window pixels
    pub fn on_pointer_move(&mut self, x: f64, y: f64, width: f64, height: f64) {
        if self.lifecycle.pointer_listener {
            self.pointer.update(x, y, width, height);
        }
    }

    /// Follows a change of the drawing surface size
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if self.lifecycle.resize_listener {
            self.scene.camera.resize_projection(width, height);
        }
    }

    /// Advances one frame of motion and fade; does nothing after teardown
    pub fn tick(&mut self, now: Instant) {
        if !self.lifecycle.frame_scheduled {
            return;
        }

        let pose = self.motion.advance();
        let group = &mut self.scene.group;
        group.transform.set_pitch_yaw(pose.pitch, pose.yaw);
        group.transform.translation.y = pose.bob;

        self.camera_offset = motion::parallax_step(
            self.camera_offset,
            self.pointer.as_vector(),
            self.config.parallax,
            self.config.camera_smoothing,
        );
        let camera = &mut self.scene.camera;
        camera.eye.x = self.camera_offset.x;
        camera.eye.y = self.camera_offset.y;
        camera.look_at(Vector3::zero());

        if let Some(fade) = self.fade {
            if let GroupContent::Model(model) = self.scene.group.content_mut() {
                normalize::set_model_opacity(model, fade.opacity(now));
            }
            if fade.is_finished(now) {
                self.fade = None;
            }
        }

        self.scene.update();
    }

    /// Number of frames ticked since mount
    pub fn ticks(&self) -> u64 {
        self.motion.ticks()
    }

    /// Unregisters everything, cancels the load and frees scene buffers.
    /// Returns false when already torn down.
    pub fn teardown(&mut self) -> bool {
        if !self.lifecycle.teardown() {
            return false;
        }
        self.token.cancel();
        self.pending = None;
        self.fade = None;
        self.scene.release_gpu_resources();
        log::info!("Hero torn down after {} frames", self.motion.ticks());
        true
    }
}

impl Drop for HeroScene {
    fn drop(&mut self) {
        self.teardown();
    }
}
