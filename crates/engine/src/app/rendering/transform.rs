use crate::world::Vec2;

/// Screen position of a world-pixel point, given the scaled camera offset.
pub fn world_to_screen(world: Vec2, camera: Vec2, zoom: f32) -> Vec2 {
    Vec2 {
        x: world.x * zoom - camera.x,
        y: world.y * zoom - camera.y,
    }
}

pub fn world_to_screen_px(world: Vec2, camera: Vec2, zoom: f32) -> (i32, i32) {
    let screen = world_to_screen(world, camera, zoom);
    (screen.x.round() as i32, screen.y.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_negated_camera() {
        let (x, y) = world_to_screen_px(Vec2::new(0.0, 0.0), Vec2::new(12.0, 30.0), 4.0);
        assert_eq!((x, y), (-12, -30));
    }

    #[test]
    fn zoom_scales_world_before_camera_offset() {
        let (x, y) = world_to_screen_px(Vec2::new(200.0, 300.0), Vec2::new(264.0, 814.0), 4.0);
        assert_eq!((x, y), (536, 386));
    }

    #[test]
    fn fractional_positions_round_to_nearest_pixel() {
        let screen = world_to_screen(Vec2::new(10.4, 2.6), Vec2::new(1.0, 0.5), 2.0);
        assert!((screen.x - 19.8).abs() < 0.0001);
        assert!((screen.y - 4.7).abs() < 0.0001);
        assert_eq!(
            world_to_screen_px(Vec2::new(10.4, 2.6), Vec2::new(1.0, 0.5), 2.0),
            (20, 5)
        );
    }
}
