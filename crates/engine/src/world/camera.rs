use super::{Size, Vec2, Viewport};

pub const DEFAULT_ZOOM: f32 = 4.0;
pub const DEFAULT_DEAD_ZONE_FACTOR: f32 = 0.25;

/// Screen-space rectangle the actor may move within without scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Dead-zone follow camera. Offsets are in scaled (rendered) pixels:
/// an actor at world `p` appears on screen at `p * zoom - camera`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraController {
    zoom: f32,
    dead_zone_factor: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(DEFAULT_ZOOM, DEFAULT_DEAD_ZONE_FACTOR)
    }
}

impl CameraController {
    pub fn new(zoom: f32, dead_zone_factor: f32) -> Self {
        Self {
            zoom,
            dead_zone_factor,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn dead_zone(&self, viewport: Viewport) -> DeadZone {
        let width = viewport.width as f32;
        let height = viewport.height as f32;
        DeadZone {
            left: width * self.dead_zone_factor,
            right: width * (1.0 - self.dead_zone_factor),
            top: height * self.dead_zone_factor,
            bottom: height * (1.0 - self.dead_zone_factor),
        }
    }

    pub fn max_offset(&self, viewport: Viewport, map_size: Size) -> Vec2 {
        Vec2 {
            x: (map_size.width as f32 * self.zoom - viewport.width as f32).max(0.0),
            y: (map_size.height as f32 * self.zoom - viewport.height as f32).max(0.0),
        }
    }

    /// Returns the camera offset for this frame. Each axis is corrected
    /// independently, then clamped to the scaled map; the clamp wins over
    /// the dead zone.
    pub fn update(
        &self,
        actor_position: Vec2,
        actor_size: Size,
        viewport: Viewport,
        map_size: Size,
        camera: Vec2,
    ) -> Vec2 {
        let zone = self.dead_zone(viewport);
        let max_offset = self.max_offset(viewport, map_size);
        let followed_x = follow_axis(
            actor_position.x * self.zoom,
            actor_size.width as f32 * self.zoom,
            camera.x,
            zone.left,
            zone.right,
        );
        let followed_y = follow_axis(
            actor_position.y * self.zoom,
            actor_size.height as f32 * self.zoom,
            camera.y,
            zone.top,
            zone.bottom,
        );
        Vec2 {
            x: clamp_offset(followed_x, max_offset.x),
            y: clamp_offset(followed_y, max_offset.y),
        }
    }
}

fn follow_axis(
    actor_start: f32,
    actor_extent: f32,
    camera: f32,
    zone_start: f32,
    zone_end: f32,
) -> f32 {
    let screen_start = actor_start - camera;
    let screen_end = screen_start + actor_extent;
    if screen_start < zone_start {
        actor_start - zone_start
    } else if screen_end > zone_end {
        actor_start + actor_extent - zone_end
    } else {
        camera
    }
}

fn clamp_offset(offset: f32, max_offset: f32) -> f32 {
    offset.min(max_offset).max(0.0)
}
