use super::camera::{DEFAULT_DEAD_ZONE_FACTOR, DEFAULT_ZOOM};
use super::Vec2;

pub const DEFAULT_SPAWN: Vec2 = Vec2 { x: 200.0, y: 300.0 };
pub const DEFAULT_SPEED: u32 = 1;
pub const MAX_DEAD_ZONE_FACTOR: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// World-pixel position of the actor's top-left corner at startup.
    pub spawn: Vec2,
    /// Pixels moved per active direction per tick.
    pub speed: u32,
    pub zoom: f32,
    pub dead_zone_factor: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            spawn: DEFAULT_SPAWN,
            speed: DEFAULT_SPEED,
            zoom: DEFAULT_ZOOM,
            dead_zone_factor: DEFAULT_DEAD_ZONE_FACTOR,
        }
    }
}

impl ControllerConfig {
    pub fn normalized(self) -> Self {
        let zoom = if self.zoom.is_finite() && self.zoom > 0.0 {
            self.zoom
        } else {
            DEFAULT_ZOOM
        };
        let dead_zone_factor = if self.dead_zone_factor.is_finite() {
            self.dead_zone_factor.clamp(0.0, MAX_DEAD_ZONE_FACTOR)
        } else {
            DEFAULT_DEAD_ZONE_FACTOR
        };
        let spawn = if self.spawn.x.is_finite() && self.spawn.y.is_finite() {
            self.spawn
        } else {
            DEFAULT_SPAWN
        };
        Self {
            spawn,
            speed: self.speed.max(1),
            zoom,
            dead_zone_factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_controller() {
        let config = ControllerConfig::default();
        assert_eq!(config.spawn, Vec2::new(200.0, 300.0));
        assert_eq!(config.speed, 1);
        assert_eq!(config.zoom, 4.0);
        assert_eq!(config.dead_zone_factor, 0.25);
        assert_eq!(config.normalized(), config);
    }

    #[test]
    fn normalized_repairs_out_of_range_values() {
        let config = ControllerConfig {
            spawn: Vec2::new(f32::NAN, 0.0),
            speed: 0,
            zoom: -2.0,
            dead_zone_factor: 0.9,
        }
        .normalized();

        assert_eq!(config.spawn, DEFAULT_SPAWN);
        assert_eq!(config.speed, 1);
        assert_eq!(config.zoom, DEFAULT_ZOOM);
        assert_eq!(config.dead_zone_factor, MAX_DEAD_ZONE_FACTOR);
    }
}
