use tracing::{debug, info, warn};

use crate::content::{AssetKind, ImageAsset};

use super::motion::{resolve_motion, MotionOutcome, MotionResolution};
use super::readiness::{AssetReadiness, ReadinessEvent, ReadinessState};
use super::{CameraController, CollisionMask, ControllerConfig, InputIntent, Size, Vec2, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Actor {
    pub position: Vec2,
    /// Sprite dimensions; unknown until the sprite has decoded.
    pub size: Option<Size>,
    pub speed: u32,
}

/// Repaint request. Starts set so the first frame is always drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirtyFlag(bool);

impl Default for DirtyFlag {
    fn default() -> Self {
        Self(true)
    }
}

impl DirtyFlag {
    pub fn mark(&mut self) {
        self.0 = true;
    }

    pub fn is_set(&self) -> bool {
        self.0
    }

    pub fn take(&mut self) -> bool {
        std::mem::replace(&mut self.0, false)
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    actor: Actor,
    camera: Vec2,
    intent: InputIntent,
    dirty: DirtyFlag,
    viewport: Viewport,
    map_size: Option<Size>,
}

impl GameState {
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn camera(&self) -> Vec2 {
        self.camera
    }

    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.is_set()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn map_size(&self) -> Option<Size> {
        self.map_size
    }
}

/// Owns all controller state and runs the per-tick
/// intent → motion → camera pipeline.
#[derive(Debug)]
pub struct FrameStepper {
    state: GameState,
    camera_controller: CameraController,
    mask: Option<CollisionMask>,
    readiness: AssetReadiness,
    warned_bounds_mismatch: bool,
}

impl FrameStepper {
    pub fn new(config: &ControllerConfig, viewport: Viewport) -> Self {
        let config = config.normalized();
        Self {
            state: GameState {
                actor: Actor {
                    position: config.spawn,
                    size: None,
                    speed: config.speed,
                },
                camera: Vec2::default(),
                intent: InputIntent::NONE,
                dirty: DirtyFlag::default(),
                viewport,
                map_size: None,
            },
            camera_controller: CameraController::new(config.zoom, config.dead_zone_factor),
            mask: None,
            readiness: AssetReadiness::default(),
            warned_bounds_mismatch: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn actor(&self) -> &Actor {
        &self.state.actor
    }

    pub fn camera(&self) -> Vec2 {
        self.state.camera
    }

    pub fn zoom(&self) -> f32 {
        self.camera_controller.zoom()
    }

    pub fn readiness(&self) -> ReadinessState {
        self.readiness.state()
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_all_ready()
    }

    pub fn collision_mask(&self) -> Option<&CollisionMask> {
        self.mask.as_ref()
    }

    /// Feeds one decoded (or failed) asset into the state. Assets that are
    /// not ready are skipped and leave readiness untouched.
    pub fn on_asset_ready(&mut self, kind: AssetKind, asset: &ImageAsset) -> ReadinessState {
        let accepted = match kind {
            AssetKind::Map => asset.dimensions(kind).map(|size| {
                self.state.map_size = Some(size);
            }),
            AssetKind::Collision => CollisionMask::build(asset).map(|mask| {
                info!(
                    width = mask.width(),
                    height = mask.height(),
                    blocked_pixels = mask.blocked_count(),
                    "collision_mask_built"
                );
                self.mask = Some(mask);
            }),
            AssetKind::Sprite => asset.dimensions(kind).map(|size| {
                self.state.actor.size = Some(size);
            }),
        };
        if let Err(error) = accepted {
            warn!(asset = kind.as_str(), error = %error, "asset_skipped");
            return self.readiness.state();
        }

        self.warn_on_bounds_mismatch();
        let mut state = self.readiness.apply(ReadinessEvent::Decoded(kind));
        if state == ReadinessState::SpriteReady {
            self.state.actor.position = self.clamp_to_movement_bounds(self.state.actor.position);
            self.refresh_camera();
            self.state.dirty.mark();
            state = self.readiness.apply(ReadinessEvent::Initialized);
            info!(
                actor_x = self.state.actor.position.x,
                actor_y = self.state.actor.position.y,
                camera_x = self.state.camera.x,
                camera_y = self.state.camera.y,
                "controller_ready"
            );
        }
        state
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
        self.refresh_camera();
        self.state.dirty.mark();
    }

    pub fn mark_dirty(&mut self) {
        self.state.dirty.mark();
    }

    pub fn take_dirty(&mut self) -> bool {
        self.state.dirty.take()
    }

    /// Runs one tick and returns how the attempted move was resolved.
    /// Every tick requests a repaint, whether or not anything moved.
    pub fn tick(&mut self, intent: InputIntent) -> MotionOutcome {
        self.state.intent = intent;
        let old = self.state.actor.position;
        let attempted = self.clamp_to_movement_bounds(compose_attempted(
            old,
            intent,
            self.state.actor.speed,
        ));

        let resolution = match (
            self.readiness.is_all_ready(),
            self.mask.as_ref(),
            self.state.actor.size,
        ) {
            (true, Some(mask), Some(size)) => resolve_motion(old, attempted, size, mask),
            _ => MotionResolution::pass_through(old, attempted),
        };
        if !matches!(
            resolution.outcome,
            MotionOutcome::Stationary | MotionOutcome::Moved
        ) {
            debug!(
                outcome = ?resolution.outcome,
                from_x = old.x,
                from_y = old.y,
                to_x = resolution.position.x,
                to_y = resolution.position.y,
                "motion_collided"
            );
        }

        self.state.actor.position = self.clamp_to_movement_bounds(resolution.position);
        self.refresh_camera();
        self.state.dirty.mark();
        resolution.outcome
    }

    /// Map bounds, narrowed to the collision mask when both are known so the
    /// actor never leaves the area the mask can answer for.
    fn movement_bounds(&self) -> Option<Size> {
        let map_size = self.state.map_size?;
        Some(match &self.mask {
            Some(mask) => map_size.intersect(mask.size()),
            None => map_size,
        })
    }

    /// Pins `position` to the origin on any axis where the sprite is larger
    /// than the bounds.
    fn clamp_to_movement_bounds(&self, position: Vec2) -> Vec2 {
        let (Some(bounds), Some(size)) = (self.movement_bounds(), self.state.actor.size) else {
            return position;
        };
        let max_x = bounds.width as f32 - size.width as f32;
        let max_y = bounds.height as f32 - size.height as f32;
        Vec2 {
            x: position.x.min(max_x).max(0.0),
            y: position.y.min(max_y).max(0.0),
        }
    }

    fn refresh_camera(&mut self) {
        let (Some(map_size), Some(actor_size)) = (self.state.map_size, self.state.actor.size)
        else {
            return;
        };
        self.state.camera = self.camera_controller.update(
            self.state.actor.position,
            actor_size,
            self.state.viewport,
            map_size,
            self.state.camera,
        );
    }

    fn warn_on_bounds_mismatch(&mut self) {
        if self.warned_bounds_mismatch {
            return;
        }
        let (Some(map_size), Some(mask)) = (self.state.map_size, &self.mask) else {
            return;
        };
        if map_size != mask.size() {
            self.warned_bounds_mismatch = true;
            warn!(
                map_width = map_size.width,
                map_height = map_size.height,
                mask_width = mask.width(),
                mask_height = mask.height(),
                "collision_mask_size_mismatch"
            );
        }
    }
}

fn compose_attempted(old: Vec2, intent: InputIntent, speed: u32) -> Vec2 {
    let (step_x, step_y) = intent.axis_steps();
    let speed = speed as f32;
    Vec2 {
        x: old.x + step_x as f32 * speed,
        y: old.y + step_y as f32 * speed,
    }
}
